// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! ERC-20 token value type

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use super::{Coin, ContractAddress};
use crate::denom::DenomCodec;
use crate::errors::{DenomError, TokenError};
use crate::spans;

/// An amount of an ERC-20 token, identified by its contract address
///
/// The amount is held as a [`U256`] so values coming from the home ledger's
/// wide integers are kept as-is. [`validate_basic`](Self::validate_basic)
/// enforces the 64-bit bound used everywhere on the bridge boundary.
///
/// # Examples
///
/// ```
/// use gravity_denom::{ContractAddress, Erc20Token};
///
/// let contract = ContractAddress::new("0x000000000000000000000000000000000000002A");
/// let token = Erc20Token::new(100, contract);
/// assert!(token.validate_basic().is_ok());
///
/// let coin = token.gravity_coin();
/// assert_eq!(coin.denom, "gravity0x000000000000000000000000000000000000002A");
/// assert_eq!(Erc20Token::from_coin(&coin).unwrap(), token);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Erc20Token {
    /// Token contract on the foreign chain
    pub contract: ContractAddress,
    /// Amount in the token's smallest unit
    pub amount: U256,
}

impl Erc20Token {
    /// Create a token value from a 64-bit amount. Does not validate.
    pub fn new(amount: u64, contract: ContractAddress) -> Self {
        Self {
            contract,
            amount: U256::from(amount),
        }
    }

    /// Create a token value from a wide amount without narrowing it
    pub fn from_wide(amount: U256, contract: ContractAddress) -> Self {
        Self { contract, amount }
    }

    /// Create a token value from a parsed address, stored in checksummed form
    pub fn from_wide_address(amount: U256, contract: Address) -> Self {
        Self::from_wide(amount, ContractAddress::from_address(contract))
    }

    /// The amount as `u64`, or `None` if it does not fit
    pub fn amount_u64(&self) -> Option<u64> {
        u64::try_from(self.amount).ok()
    }

    /// The home-chain coin backed by this token, under the Gravity denomination
    pub fn gravity_coin(&self) -> Coin {
        DenomCodec::GRAVITY.to_coin(self)
    }

    /// Rebuild a token value from a Gravity coin
    ///
    /// Fails if the denomination is not a Gravity denomination.
    pub fn from_coin(coin: &Coin) -> Result<Self, DenomError> {
        DenomCodec::GRAVITY.token_from_coin(coin)
    }

    /// Stateless validation of the contract address and amount bound
    pub fn validate_basic(&self) -> Result<(), TokenError> {
        let span = spans::validate_basic(&self.contract, self.amount);
        let _guard = span.enter();

        self.contract.validate().map_err(|err| {
            tracing::debug!(contract = %self.contract, error = %err, "Rejected token contract");
            TokenError::InvalidContract(err)
        })?;

        if self.amount_u64().is_none() {
            tracing::debug!(amount = %self.amount, "Rejected token amount");
            return Err(TokenError::AmountOverflow {
                amount: self.amount,
            });
        }

        Ok(())
    }

    /// Add another amount of the same token
    ///
    /// Returns [`TokenError::ContractMismatch`] if the contracts differ and
    /// [`TokenError::AmountOverflow`] if the sum does not fit in 64 bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use gravity_denom::{ContractAddress, Erc20Token, TokenError};
    ///
    /// let contract = ContractAddress::new("0x000000000000000000000000000000000000002A");
    /// let a = Erc20Token::new(2, contract.clone());
    /// let b = Erc20Token::new(3, contract);
    /// assert_eq!(a.checked_add(&b).unwrap().amount_u64(), Some(5));
    ///
    /// let max = Erc20Token::new(u64::MAX, a.contract.clone());
    /// assert!(matches!(max.checked_add(&a), Err(TokenError::AmountOverflow { .. })));
    /// ```
    pub fn checked_add(&self, other: &Self) -> Result<Self, TokenError> {
        if self.contract != other.contract {
            return Err(TokenError::contract_mismatch(&self.contract, &other.contract));
        }

        let sum = self.amount.saturating_add(other.amount);
        let amount = u64::try_from(sum).map_err(|_| TokenError::AmountOverflow { amount: sum })?;

        Ok(Self::new(amount, self.contract.clone()))
    }
}

impl std::fmt::Display for Erc20Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.contract)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AddressError;
    use alloy_primitives::address;

    fn contract(n: u8) -> ContractAddress {
        ContractAddress::from_address(Address::with_last_byte(n))
    }

    #[test]
    fn test_new_widens_amount() {
        let token = Erc20Token::new(u64::MAX, contract(1));
        assert_eq!(token.amount, U256::from(u64::MAX));
        assert_eq!(token.amount_u64(), Some(u64::MAX));
    }

    #[test]
    fn test_from_wide_keeps_amount() {
        let wide = U256::from(u64::MAX) + U256::from(1u64);
        let token = Erc20Token::from_wide(wide, contract(1));
        assert_eq!(token.amount, wide);
        assert_eq!(token.amount_u64(), None);
    }

    #[test]
    fn test_from_wide_address_checksums() {
        let token = Erc20Token::from_wide_address(
            U256::from(5u64),
            address!("dac17f958d2ee523a2206206994597c13d831ec7"),
        );
        assert_eq!(
            token.contract.as_str(),
            "0xdAC17F958D2ee523a2206206994597C13D831ec7"
        );
    }

    #[test]
    fn test_validate_basic_rejects_bad_contract() {
        let token = Erc20Token::new(1, ContractAddress::new(""));
        assert_eq!(
            token.validate_basic(),
            Err(TokenError::InvalidContract(AddressError::Empty))
        );
    }

    #[test]
    fn test_validate_basic_rejects_wide_amount() {
        let amount = U256::from(u64::MAX) + U256::from(1u64);
        let token = Erc20Token::from_wide(amount, contract(1));
        assert_eq!(
            token.validate_basic(),
            Err(TokenError::AmountOverflow { amount })
        );
    }

    #[test]
    fn test_checked_add() {
        let sum = Erc20Token::new(40, contract(7))
            .checked_add(&Erc20Token::new(2, contract(7)))
            .unwrap();
        assert_eq!(sum, Erc20Token::new(42, contract(7)));
    }

    #[test]
    fn test_checked_add_contract_mismatch() {
        let err = Erc20Token::new(1, contract(1))
            .checked_add(&Erc20Token::new(1, contract(2)))
            .unwrap_err();
        assert_eq!(err, TokenError::contract_mismatch(&contract(1), &contract(2)));
    }

    #[test]
    fn test_checked_add_case_sensitive_contracts() {
        let lower = ContractAddress::new("0xdac17f958d2ee523a2206206994597c13d831ec7");
        let mixed = ContractAddress::new("0xdAC17F958D2ee523a2206206994597C13D831ec7");
        let result = Erc20Token::new(1, lower).checked_add(&Erc20Token::new(1, mixed));
        assert!(matches!(result, Err(TokenError::ContractMismatch { .. })));
    }

    #[test]
    fn test_checked_add_overflow() {
        let err = Erc20Token::new(u64::MAX, contract(1))
            .checked_add(&Erc20Token::new(1, contract(1)))
            .unwrap_err();
        assert_eq!(
            err,
            TokenError::AmountOverflow {
                amount: U256::from(u64::MAX) + U256::from(1u64)
            }
        );
    }

    #[test]
    fn test_checked_add_saturates_wide_inputs() {
        let max = Erc20Token::from_wide(U256::MAX, contract(1));
        let err = max.checked_add(&max).unwrap_err();
        assert_eq!(err, TokenError::AmountOverflow { amount: U256::MAX });
    }

    #[test]
    fn test_gravity_coin_round_trip() {
        let token = Erc20Token::new(1_000, contract(42));
        let coin = token.gravity_coin();
        assert_eq!(coin.amount, U256::from(1_000u64));
        assert_eq!(coin.denom, format!("gravity{}", token.contract));
        assert_eq!(Erc20Token::from_coin(&coin).unwrap(), token);
    }

    #[test]
    fn test_from_coin_rejects_foreign_denom() {
        let coin = Coin::new("uatom", U256::from(1u64));
        assert!(matches!(
            Erc20Token::from_coin(&coin),
            Err(DenomError::PrefixMismatch { .. })
        ));
    }

    #[test]
    fn test_serialization() {
        let token = Erc20Token::new(12345, contract(9));
        let json = serde_json::to_string(&token).unwrap();
        let deserialized: Erc20Token = serde_json::from_str(&json).unwrap();
        assert_eq!(token, deserialized);
    }
}
