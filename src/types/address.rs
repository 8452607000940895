// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Contract address type

use std::str::FromStr;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::address::validate_ethereum_address;
use crate::errors::AddressError;

/// Textual Ethereum contract address of an ERC-20 token
///
/// Keeps the exact string it was built from, including letter case, so a
/// denomination decodes back to the same bytes it was encoded from.
/// [`new`](Self::new) does not validate. Use [`validate`](Self::validate),
/// or parse with [`FromStr`] to get a checked value.
///
/// Ordering is byte-wise over the string, the same as
/// [`eth_addr_less_than`](crate::eth_addr_less_than).
///
/// # Examples
///
/// ```
/// use gravity_denom::ContractAddress;
///
/// let usdc: ContractAddress = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48".parse().unwrap();
/// assert_eq!(usdc.as_str(), "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
///
/// assert!("0x1234".parse::<ContractAddress>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractAddress(String);

impl ContractAddress {
    /// Wrap an address string without validating it
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Render a parsed address in EIP-55 checksummed `0x` form
    ///
    /// # Examples
    ///
    /// ```
    /// use alloy_primitives::address;
    /// use gravity_denom::ContractAddress;
    ///
    /// let contract = ContractAddress::from_address(address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"));
    /// assert_eq!(contract.as_str(), "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
    /// ```
    pub fn from_address(address: Address) -> Self {
        Self(address.to_checksum(None))
    }

    /// Get the address string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check that the address is `0x` followed by 40 hex digits
    pub fn validate(&self) -> Result<(), AddressError> {
        validate_ethereum_address(&self.0)
    }

    /// Parse into a 20-byte address, validating first
    pub fn to_address(&self) -> Result<Address, AddressError> {
        self.validate()?;
        Address::from_str(&self.0).map_err(|_| AddressError::malformed(self.0.as_str()))
    }

    /// Consume and return the address string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for ContractAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_ethereum_address(s)?;
        Ok(Self(s.to_owned()))
    }
}

impl From<Address> for ContractAddress {
    fn from(address: Address) -> Self {
        Self::from_address(address)
    }
}

impl AsRef<str> for ContractAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContractAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_new_skips_validation() {
        let contract = ContractAddress::new("not an address");
        assert_eq!(contract.as_str(), "not an address");
        assert!(matches!(
            contract.validate(),
            Err(AddressError::Malformed { .. })
        ));
    }

    #[test]
    fn test_parse_preserves_case() {
        let input = "0xdAC17F958D2ee523a2206206994597C13D831ec7";
        let contract: ContractAddress = input.parse().unwrap();
        assert_eq!(contract.to_string(), input);
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!("".parse::<ContractAddress>(), Err(AddressError::Empty));
    }

    #[test]
    fn test_to_address_ignores_case() {
        let lower = ContractAddress::new("0xdac17f958d2ee523a2206206994597c13d831ec7");
        let mixed = ContractAddress::new("0xdAC17F958D2ee523a2206206994597C13D831ec7");
        assert_eq!(lower.to_address().unwrap(), mixed.to_address().unwrap());
        assert_eq!(
            lower.to_address().unwrap(),
            address!("dac17f958d2ee523a2206206994597c13d831ec7")
        );
    }

    #[test]
    fn test_from_address_round_trip() {
        let raw = address!("8ac76a51cc950d9822d68b83fe1ad97b32cd580d");
        let contract = ContractAddress::from(raw);
        assert!(contract.validate().is_ok());
        assert_eq!(contract.to_address().unwrap(), raw);
    }

    #[test]
    fn test_ordering_is_bytewise() {
        let a = ContractAddress::new("0x0000000000000000000000000000000000000001");
        let b = ContractAddress::new("0x0000000000000000000000000000000000000002");
        assert!(a < b);
        assert_eq!(
            a < b,
            crate::eth_addr_less_than(a.as_str(), b.as_str())
        );
    }

    #[test]
    fn test_serialization() {
        let contract = ContractAddress::new("0x000000000000000000000000000000000000002A");
        let json = serde_json::to_string(&contract).unwrap();
        assert_eq!(json, r#""0x000000000000000000000000000000000000002A""#);
        let deserialized: ContractAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(contract, deserialized);
    }
}
