// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for ERC-20 token values.

use alloy_primitives::U256;

use super::AddressError;
use crate::types::ContractAddress;

/// Errors returned by [`Erc20Token`](crate::Erc20Token) validation and arithmetic.
///
/// Addition across different contracts and sums past `u64::MAX` are reported
/// here rather than aborting, so callers decide how to react.
///
/// # Examples
///
/// ```
/// use gravity_denom::{ContractAddress, Erc20Token, TokenError};
///
/// let a = Erc20Token::new(1, ContractAddress::new("0x0000000000000000000000000000000000000001"));
/// let b = Erc20Token::new(1, ContractAddress::new("0x0000000000000000000000000000000000000002"));
///
/// assert!(matches!(a.checked_add(&b), Err(TokenError::ContractMismatch { .. })));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// The token's contract address failed validation.
    #[error("ethereum address: {0}")]
    InvalidContract(#[source] AddressError),

    /// Two tokens with different contracts were combined.
    #[error("invalid contract address: cannot add {right} to {left}")]
    ContractMismatch {
        /// Contract of the receiver
        left: ContractAddress,
        /// Contract of the argument
        right: ContractAddress,
    },

    /// The amount does not fit in 64 bits.
    #[error("invalid amount: {amount} exceeds u64::MAX")]
    AmountOverflow {
        /// The out-of-range amount
        amount: U256,
    },
}

impl TokenError {
    /// Create a `ContractMismatch` error.
    pub fn contract_mismatch(left: &ContractAddress, right: &ContractAddress) -> Self {
        TokenError::ContractMismatch {
            left: left.clone(),
            right: right.clone(),
        }
    }
}
