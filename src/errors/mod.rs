// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the gravity-denom library.
//!
//! Each module reports its own error type:
//! - [`AddressError`] - Contract address validation
//! - [`DenomError`] - Decoding denominations back to contract addresses
//! - [`TokenError`] - Token validation and same-contract addition
//!
//! [`GravityDenomError`] wraps all of them for callers that only need `?`.
//!
//! ```
//! use gravity_denom::{Coin, Erc20Token, GravityDenomError};
//! use alloy_primitives::U256;
//!
//! fn redeem(coin: &Coin) -> Result<u64, GravityDenomError> {
//!     let token = Erc20Token::from_coin(coin)?;
//!     token.validate_basic()?;
//!     Ok(token.amount_u64().unwrap_or_default())
//! }
//!
//! let coin = Coin::new("gravity0x000000000000000000000000000000000000002A", U256::from(7u64));
//! assert_eq!(redeem(&coin).unwrap(), 7);
//! ```

mod address;
mod denom;
mod token;

pub use address::AddressError;
pub use denom::DenomError;
pub use token::TokenError;

/// Unified error type for all gravity-denom operations.
///
/// All module-specific error types convert into it via `From`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GravityDenomError {
    /// Error from address validation.
    #[error("Address error: {0}")]
    Address(#[from] AddressError),

    /// Error from denomination decoding.
    #[error("Denom error: {0}")]
    Denom(#[from] DenomError),

    /// Error from token validation or arithmetic.
    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}
