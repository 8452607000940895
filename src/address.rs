// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Ethereum contract address validation

use crate::config::constants::{
    ETH_ADDRESS_HEX_DIGITS, ETH_ADDRESS_HEX_PREFIX, ETH_CONTRACT_ADDRESS_LEN,
};
use crate::errors::AddressError;

/// Validate an Ethereum address string
///
/// Accepts `0x` followed by exactly 40 hex digits in any case. Checksums are
/// not verified. The length is checked on its own after the pattern, so a
/// looser pattern could never let a wrong-length string through.
///
/// # Examples
///
/// ```
/// use gravity_denom::{validate_ethereum_address, AddressError};
///
/// assert!(validate_ethereum_address("0x000000000000000000000000000000000000002A").is_ok());
/// assert_eq!(validate_ethereum_address(""), Err(AddressError::Empty));
/// ```
pub fn validate_ethereum_address(address: &str) -> Result<(), AddressError> {
    if address.is_empty() {
        return Err(AddressError::Empty);
    }
    if !matches_hex_pattern(address) {
        return Err(AddressError::malformed(address));
    }
    if address.len() != ETH_CONTRACT_ADDRESS_LEN {
        return Err(AddressError::wrong_length(address, ETH_CONTRACT_ADDRESS_LEN));
    }
    Ok(())
}

/// Byte-wise ordering of two address strings
///
/// Gives a deterministic order over contract addresses without parsing them.
pub fn eth_addr_less_than(a: &str, b: &str) -> bool {
    a.as_bytes() < b.as_bytes()
}

fn matches_hex_pattern(address: &str) -> bool {
    address
        .strip_prefix(ETH_ADDRESS_HEX_PREFIX)
        .is_some_and(|digits| {
            digits.len() == ETH_ADDRESS_HEX_DIGITS
                && digits.bytes().all(|b| b.is_ascii_hexdigit())
        })
}
