// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Published denomination constants
//!
//! Components that build Gravity denominations by hand must use these values
//! to stay consistent with [`DenomCodec`](crate::DenomCodec).

/// Prefix for all assets minted by the Gravity module
pub const GRAVITY_DENOM_PREFIX: &str = "gravity";

/// Separator between the prefix and the contract address
pub const GRAVITY_DENOM_SEPARATOR: &str = "";

/// Prefix marking hexadecimal notation in Ethereum addresses
pub const ETH_ADDRESS_HEX_PREFIX: &str = "0x";

/// Number of hex digits in an Ethereum address
pub const ETH_ADDRESS_HEX_DIGITS: usize = 40;

/// Length of contract address strings, `0x` included
pub const ETH_CONTRACT_ADDRESS_LEN: usize = ETH_ADDRESS_HEX_PREFIX.len() + ETH_ADDRESS_HEX_DIGITS;

/// Length of the denoms generated by the Gravity module
pub const GRAVITY_DENOM_LEN: usize =
    GRAVITY_DENOM_PREFIX.len() + GRAVITY_DENOM_SEPARATOR.len() + ETH_CONTRACT_ADDRESS_LEN;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_len() {
        assert_eq!(ETH_CONTRACT_ADDRESS_LEN, 42);
    }

    #[test]
    fn test_denom_len() {
        assert_eq!(GRAVITY_DENOM_LEN, 49);
    }
}
