// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for gravity-denom operations.
//!
//! Telemetry is kept out of business logic: each instrumented operation
//! calls the matching helper here and enters the returned span.
//!
//! ```rust,ignore
//! let span = spans::decode_denom(denom);
//! let _guard = span.enter();
//! ```

use alloy_primitives::U256;
use tracing::Span;

use crate::types::ContractAddress;

/// Create span for decoding a denomination into a contract address.
///
/// Parent: caller's span
/// Children: none
#[inline]
pub(crate) fn decode_denom(denom: &str) -> Span {
    tracing::trace_span!("gravity_denom.decode", denom = %denom)
}

/// Create span for stateless validation of a token value.
///
/// Parent: caller's span
/// Children: none
#[inline]
pub(crate) fn validate_basic(contract: &ContractAddress, amount: U256) -> Span {
    tracing::trace_span!(
        "gravity_denom.validate_basic",
        contract = %contract,
        amount = %amount,
    )
}
