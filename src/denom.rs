// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Mapping between ERC-20 contract addresses and home-chain denominations
//!
//! A denomination is `<prefix><separator><contract address>`. With the
//! default [`DenomConfig::GRAVITY`] layout that is `gravity0x...`, 49 bytes.

use serde::{Deserialize, Serialize};

use crate::address::validate_ethereum_address;
use crate::config::DenomConfig;
use crate::errors::DenomError;
use crate::spans;
use crate::types::{Coin, ContractAddress, Erc20Token};

/// Encoder and decoder for denominations of one [`DenomConfig`]
///
/// # Examples
///
/// ```
/// use gravity_denom::{ContractAddress, DenomCodec};
///
/// let codec = DenomCodec::GRAVITY;
/// let contract = ContractAddress::new("0x000000000000000000000000000000000000002A");
///
/// let denom = codec.encode(&contract);
/// assert_eq!(denom, "gravity0x000000000000000000000000000000000000002A");
/// assert_eq!(codec.decode(&denom).unwrap(), contract);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DenomCodec {
    config: DenomConfig,
}

impl DenomCodec {
    /// Codec for the Gravity module layout
    pub const GRAVITY: Self = Self::new(DenomConfig::GRAVITY);

    /// Create a codec for the given layout
    pub const fn new(config: DenomConfig) -> Self {
        Self { config }
    }

    /// The layout this codec encodes with
    pub fn config(&self) -> &DenomConfig {
        &self.config
    }

    /// Build the denomination for a contract
    ///
    /// Does not validate the contract; validate it first if it came from
    /// untrusted input.
    pub fn encode(&self, contract: &ContractAddress) -> String {
        let mut denom = String::with_capacity(self.config.denom_len());
        denom.push_str(&self.config.prefix);
        denom.push_str(&self.config.separator);
        denom.push_str(contract.as_str());
        denom
    }

    /// Recover the contract address from a denomination
    ///
    /// The total length is checked after the address itself, so a valid
    /// address under a mismatched layout is still rejected.
    pub fn decode(&self, denom: &str) -> Result<ContractAddress, DenomError> {
        let span = spans::decode_denom(denom);
        let _guard = span.enter();

        let full_prefix = self.config.full_prefix();
        let Some(contract) = denom.strip_prefix(full_prefix.as_str()) else {
            tracing::debug!(denom, expected = %full_prefix, "Denom prefix mismatch");
            return Err(DenomError::prefix_mismatch(denom, full_prefix));
        };

        if let Err(err) = validate_ethereum_address(contract) {
            tracing::debug!(denom, error = %err, "Denom carries an invalid contract address");
            return Err(DenomError::InvalidAddress(err));
        }

        let expected = self.config.denom_len();
        if denom.len() != expected {
            tracing::debug!(denom, actual = denom.len(), expected, "Denom length mismatch");
            return Err(DenomError::LengthMismatch {
                actual: denom.len(),
                expected,
            });
        }

        Ok(ContractAddress::new(contract))
    }

    /// Project a token value onto a home-chain coin
    pub fn to_coin(&self, token: &Erc20Token) -> Coin {
        Coin::new(self.encode(&token.contract), token.amount)
    }

    /// Rebuild a token value from a home-chain coin
    pub fn token_from_coin(&self, coin: &Coin) -> Result<Erc20Token, DenomError> {
        let contract = self.decode(&coin.denom)?;
        Ok(Erc20Token::from_wide(coin.amount, contract))
    }
}

/// Gravity denomination for a contract address
pub fn erc20_to_denom(contract: &ContractAddress) -> String {
    DenomCodec::GRAVITY.encode(contract)
}

/// Contract address carried by a Gravity denomination
///
/// # Examples
///
/// ```
/// use gravity_denom::{denom_to_erc20, DenomError};
///
/// let contract = denom_to_erc20("gravity0x000000000000000000000000000000000000002A").unwrap();
/// assert_eq!(contract.as_str(), "0x000000000000000000000000000000000000002A");
///
/// assert!(matches!(
///     denom_to_erc20("gravity0x2A"),
///     Err(DenomError::InvalidAddress(_))
/// ));
/// ```
pub fn denom_to_erc20(denom: &str) -> Result<ContractAddress, DenomError> {
    DenomCodec::GRAVITY.decode(denom)
}
