// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for denomination encoding
//!
//! The denomination layout is fixed at compile time by the values in
//! [`constants`]. [`DenomConfig::GRAVITY`] bundles them. Other networks
//! can build their own immutable config with [`DenomConfig::new`].
//!
//! # Example: Using defaults
//!
//! ```rust
//! use gravity_denom::DenomConfig;
//!
//! let config = DenomConfig::default();
//! assert_eq!(config.full_prefix(), "gravity");
//! assert_eq!(config.denom_len(), 49);
//! ```
//!
//! # Example: Custom prefix
//!
//! ```rust
//! use gravity_denom::DenomConfig;
//!
//! let config = DenomConfig::new("testgravity", "/");
//! assert_eq!(config.full_prefix(), "testgravity/");
//! assert_eq!(config.denom_len(), 12 + 42);
//! ```

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

pub mod constants;

use constants::{ETH_CONTRACT_ADDRESS_LEN, GRAVITY_DENOM_PREFIX, GRAVITY_DENOM_SEPARATOR};

/// Prefix and separator used to build denominations
///
/// Immutable once built. Deserializable so a host service can load it
/// from its own configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DenomConfig {
    /// Module prefix placed at the start of every denomination
    pub prefix: Cow<'static, str>,

    /// Separator between the prefix and the contract address (may be empty)
    #[serde(default)]
    pub separator: Cow<'static, str>,
}

impl Default for DenomConfig {
    fn default() -> Self {
        Self::GRAVITY
    }
}

impl DenomConfig {
    /// The Gravity module layout: `gravity` prefix, no separator
    pub const GRAVITY: Self = Self {
        prefix: Cow::Borrowed(GRAVITY_DENOM_PREFIX),
        separator: Cow::Borrowed(GRAVITY_DENOM_SEPARATOR),
    };

    /// Create a config with a custom prefix and separator
    pub fn new(
        prefix: impl Into<Cow<'static, str>>,
        separator: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            separator: separator.into(),
        }
    }

    /// Prefix and separator joined, the part stripped when decoding
    pub fn full_prefix(&self) -> String {
        [self.prefix.as_ref(), self.separator.as_ref()].concat()
    }

    /// Length of every denomination produced with this config
    pub fn denom_len(&self) -> usize {
        self.prefix.len() + self.separator.len() + ETH_CONTRACT_ADDRESS_LEN
    }
}

#[cfg(test)]
mod tests {
    use super::constants::GRAVITY_DENOM_LEN;
    use super::*;

    #[test]
    fn test_default_is_gravity() {
        assert_eq!(DenomConfig::default(), DenomConfig::GRAVITY);
        assert_eq!(DenomConfig::GRAVITY.denom_len(), GRAVITY_DENOM_LEN);
    }

    #[test]
    fn test_custom_config() {
        let config = DenomConfig::new("peggy", "/");
        assert_eq!(config.full_prefix(), "peggy/");
        assert_eq!(config.denom_len(), 48);
    }

    #[test]
    fn test_deserialize_without_separator() {
        let config: DenomConfig = serde_json::from_str(r#"{"prefix":"gravity"}"#).unwrap();
        assert_eq!(config, DenomConfig::GRAVITY);
    }

    #[test]
    fn test_serialization() {
        let config = DenomConfig::new("peggy", "/");
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: DenomConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
