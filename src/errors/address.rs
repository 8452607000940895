// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for Ethereum contract address validation.

/// Errors returned by [`validate_ethereum_address`](crate::validate_ethereum_address).
///
/// Checks run in a fixed order: emptiness, then the `0x` + 40 hex digit
/// pattern, then the total length. The first failing check decides the variant.
///
/// # Examples
///
/// ```
/// use gravity_denom::{validate_ethereum_address, AddressError};
///
/// assert!(matches!(validate_ethereum_address(""), Err(AddressError::Empty)));
/// assert!(matches!(
///     validate_ethereum_address("0xZZ"),
///     Err(AddressError::Malformed { .. })
/// ));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    /// The address string was empty.
    #[error("empty")]
    Empty,

    /// The address does not match `0x` followed by exactly 40 hex digits.
    #[error("address({address}) doesn't match the 0x-prefixed hex pattern")]
    Malformed {
        /// The rejected input
        address: String,
    },

    /// The address has the wrong total length.
    #[error("address({address}) of the wrong length exp({expected}) actual({actual})")]
    WrongLength {
        /// The rejected input
        address: String,
        /// Required length, including the `0x` prefix
        expected: usize,
        /// Length of the rejected input
        actual: usize,
    },
}

impl AddressError {
    /// Create a `Malformed` error for the given input.
    pub fn malformed(address: impl Into<String>) -> Self {
        AddressError::Malformed {
            address: address.into(),
        }
    }

    /// Create a `WrongLength` error for the given input.
    pub fn wrong_length(address: impl Into<String>, expected: usize) -> Self {
        let address = address.into();
        AddressError::WrongLength {
            actual: address.len(),
            address,
            expected,
        }
    }
}
