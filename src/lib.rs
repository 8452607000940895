// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Identity codec for ERC-20 tokens bridged through the Gravity module.
//!
//! Maps an Ethereum token reference (contract address plus amount) onto a
//! home-chain coin (denomination plus amount) and back, and validates the
//! contract addresses involved.
//!
//! # Quick start
//!
//! ```
//! use alloy_primitives::U256;
//! use gravity_denom::{Coin, ContractAddress, Erc20Token};
//!
//! let contract: ContractAddress = "0xdAC17F958D2ee523a2206206994597C13D831ec7".parse()?;
//! let token = Erc20Token::new(1_000_000, contract);
//! token.validate_basic()?;
//!
//! // Credit on the home chain
//! let coin = token.gravity_coin();
//! assert_eq!(coin.denom, "gravity0xdAC17F958D2ee523a2206206994597C13D831ec7");
//!
//! // Redeem back to Ethereum
//! let redeemed = Erc20Token::from_coin(&Coin::new(coin.denom, U256::from(500u64)))?;
//! assert_eq!(redeemed.amount_u64(), Some(500));
//! # Ok::<(), gravity_denom::GravityDenomError>(())
//! ```
//!
//! All operations are pure. Nothing here touches the network, storage, or
//! global state.

mod address;
pub mod config;
mod denom;
mod errors;
mod spans;
pub mod types;

pub use address::{eth_addr_less_than, validate_ethereum_address};
pub use config::constants::{
    ETH_CONTRACT_ADDRESS_LEN, GRAVITY_DENOM_LEN, GRAVITY_DENOM_PREFIX, GRAVITY_DENOM_SEPARATOR,
};
pub use config::DenomConfig;
pub use denom::{denom_to_erc20, erc20_to_denom, DenomCodec};
pub use errors::{AddressError, DenomError, GravityDenomError, TokenError};
pub use types::{Coin, ContractAddress, Erc20Token};
