// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Home-chain coin type

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

/// A balance on the home ledger: an amount of a denomination
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use gravity_denom::Coin;
///
/// let coin = Coin::new("uatom", U256::from(250u64));
/// assert_eq!(coin.to_string(), "250uatom");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin {
    /// Denomination string
    pub denom: String,
    /// Amount in the denomination's base unit
    pub amount: U256,
}

impl Coin {
    /// Create a new coin
    pub fn new(denom: impl Into<String>, amount: U256) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl std::fmt::Display for Coin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}
