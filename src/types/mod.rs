// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for the two sides of the bridge.
//!
//! ```text
//! Erc20Token (amount, ContractAddress)      foreign chain
//!     |                       ↑
//!     | gravity_coin()        | from_coin()
//!     ↓                       |
//! Coin (amount, denom)                      home chain
//! ```

mod address;
mod coin;
mod token;

pub use address::ContractAddress;
pub use coin::Coin;
pub use token::Erc20Token;
