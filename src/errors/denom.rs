// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for decoding Gravity denominations.

use super::AddressError;

/// Errors that can occur when decoding a denomination back into a contract address.
///
/// # Examples
///
/// ```
/// use gravity_denom::{denom_to_erc20, DenomError};
///
/// match denom_to_erc20("uatom") {
///     Err(DenomError::PrefixMismatch { expected, .. }) => assert_eq!(expected, "gravity"),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DenomError {
    /// The denomination does not start with the codec's prefix and separator.
    #[error("denom prefix({denom}) not equal to expected({expected})")]
    PrefixMismatch {
        /// The rejected denomination
        denom: String,
        /// The prefix and separator the codec requires
        expected: String,
    },

    /// The segment after the prefix is not a valid contract address.
    #[error("error({0}) validating ethereum contract address")]
    InvalidAddress(#[source] AddressError),

    /// The denomination has a valid address segment but the wrong total length.
    #[error("len(denom)({actual}) not equal to denom length({expected})")]
    LengthMismatch {
        /// Length of the rejected denomination
        actual: usize,
        /// Length every denomination of this codec has
        expected: usize,
    },
}

impl DenomError {
    /// Create a `PrefixMismatch` error.
    pub fn prefix_mismatch(denom: impl Into<String>, expected: impl Into<String>) -> Self {
        DenomError::PrefixMismatch {
            denom: denom.into(),
            expected: expected.into(),
        }
    }
}

impl From<AddressError> for DenomError {
    fn from(err: AddressError) -> Self {
        DenomError::InvalidAddress(err)
    }
}
