// SPDX-FileCopyrightText: 2025 Easy Crypto Payments
//
// SPDX-License-Identifier: Apache-2.0

//! Generic blockchain explorer client trait and error types
//!
//! This crate provides the common abstraction implemented by every blockchain
//! explorer integration in the workspace.
//!
//! # Core Abstractions
//!
//! - **`BlockchainApi` Trait**: the uniform funds-received query contract,
//!   with the variant-support gate every implementation must declare
//! - **Error Handling**: one `ApiError` taxonomy shared by all explorers,
//!   so the caller sees a single failure signal regardless of which
//!   third-party service misbehaved
//! - **Satoshi Decoding**: the explicit numeric-check step every explorer
//!   response passes through before a value reaches the caller
//!
//! # Design
//!
//! Explorer outages, timeouts, and garbage payloads are normal operating
//! conditions for this system. Nothing here panics on them: every such
//! condition resolves to an `Err`, which the caller is free to treat as the
//! single signal "this provider could not answer". A result of `Ok(0)` means
//! the address has genuinely received nothing yet and is never conflated
//! with failure.

use shared_types::{PaymentAddress, Variant};
use thiserror::Error;

pub mod sats;

pub use sats::{Satoshis, satoshis_from_json, satoshis_from_text};

/// Generic trait for blockchain explorer clients
///
/// An implementation is constructed with the variant it should query and a
/// request timeout, holds no other state, and performs exactly one outbound
/// HTTP request per [`get_funds_received`](Self::get_funds_received) call.
pub trait BlockchainApi: Send + Sync {
    /// The fixed set of variants this explorer understands
    ///
    /// Pure, no I/O, never empty.
    fn supported_variants(&self) -> &'static [Variant];

    /// The variant this instance was configured with
    fn variant(&self) -> Variant;

    /// Whether the configured variant is in [`supported_variants`](Self::supported_variants)
    fn is_variant_supported(&self) -> bool {
        self.supported_variants().contains(&self.variant())
    }

    /// Whether this explorer can currently serve queries
    ///
    /// The default is the variant-support check. An explorer requiring
    /// credentials would additionally check credential availability here;
    /// none of the bundled explorers do.
    fn is_active(&self) -> bool {
        self.is_variant_supported()
    }

    /// Query the total funds ever received by `address`, in satoshis
    ///
    /// Issues exactly one network request. Transport and parse problems
    /// surface as `Err`, never as a panic; `Ok(0)` is a legitimate answer
    /// for an address with no history.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, times out, or the response
    /// body cannot be decoded into a satoshi count
    fn get_funds_received(
        &self,
        address: &PaymentAddress,
    ) -> impl Future<Output = Result<Satoshis, ApiError>> + Send;

    /// Get the name/identifier of this explorer client
    fn name(&self) -> &'static str;
}

/// Common errors that can occur when querying explorer clients
///
/// The caller-facing contract collapses all of these to "this provider could
/// not answer"; the variants exist so logs and tests can tell a timeout from
/// a garbage payload.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {message}")]
    Http { message: String },

    /// Network timeout
    #[error("Request timeout after {timeout_seconds} seconds")]
    Timeout { timeout_seconds: u64 },

    /// Unexpected HTTP status
    #[error("Unexpected HTTP status {status}")]
    Status { status: u16 },

    /// Invalid response format
    #[error("Invalid response format: {message}")]
    InvalidResponse { message: String },

    /// A field the response contract requires was absent
    #[error("Response missing required field: {field}")]
    MissingField { field: &'static str },

    /// The explorer reported an error code of its own
    #[error("Explorer reported error code {code}")]
    Service { code: i64 },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Client independent error
    #[error(transparent)]
    Custom { error: anyhow::Error },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display() {
        let error = ApiError::Timeout { timeout_seconds: 10 };
        assert_eq!(error.to_string(), "Request timeout after 10 seconds");

        let error = ApiError::Status { status: 502 };
        assert_eq!(error.to_string(), "Unexpected HTTP status 502");

        let error = ApiError::MissingField {
            field: "totalReceivedSat",
        };
        assert_eq!(
            error.to_string(),
            "Response missing required field: totalReceivedSat"
        );

        let error = ApiError::Service { code: 1 };
        assert_eq!(error.to_string(), "Explorer reported error code 1");
    }

    #[test]
    fn api_error_custom_is_transparent() {
        let error = ApiError::Custom {
            error: anyhow::Error::msg("explorer quirk"),
        };
        assert_eq!(error.to_string(), "explorer quirk");
    }
}
