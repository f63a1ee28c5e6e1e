// SPDX-FileCopyrightText: 2025 Easy Crypto Payments
//
// SPDX-License-Identifier: Apache-2.0

//! Blockdozer explorer integration
//!
//! This module provides an implementation of the `BlockchainApi` trait for
//! the Blockdozer Insight instance. Blockdozer serves Bitcoin Cash data and
//! returns the total received for an address as a bare numeric body.

use std::time::Duration;

use api_client::{ApiError, BlockchainApi, Satoshis, satoshis_from_text};
use reqwest::{Client, StatusCode};
use shared_types::{PaymentAddress, Variant};
use tokio::time::timeout;
use tracing::{debug, warn};
use url::Url;

// Blockdozer API constants
const DEFAULT_BLOCKDOZER_BASE_URL: &str = "http://blockdozer.com";
const DEFAULT_BLOCKDOZER_TIMEOUT_SECONDS: u64 = 10;

/// Configuration for the Blockdozer client
#[derive(Debug, Clone)]
pub struct BlockdozerConfig {
    /// Base URL for the Blockdozer Insight API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for BlockdozerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BLOCKDOZER_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_BLOCKDOZER_TIMEOUT_SECONDS,
        }
    }
}

impl BlockdozerConfig {
    /// Production endpoint with an externally configured timeout
    pub fn with_timeout(timeout_seconds: u64) -> Self {
        Self {
            timeout_seconds,
            ..Self::default()
        }
    }
}

/// Blockdozer explorer client implementation
#[derive(Debug)]
pub struct BlockdozerClient {
    client: Client,
    config: BlockdozerConfig,
    variant: Variant,
}

impl BlockdozerClient {
    /// Create a new Blockdozer client
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not a valid URL or the HTTP
    /// client cannot be created
    pub fn new(variant: Variant, config: BlockdozerConfig) -> Result<Self, ApiError> {
        Url::parse(&config.base_url).map_err(|e| ApiError::Configuration {
            message: format!("invalid Blockdozer base URL {:?}: {e}", config.base_url),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("funds-api/0.1.0")
            .build()
            .map_err(|e| ApiError::Http {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            config,
            variant,
        })
    }

    async fn fetch_total_received(&self, address: &str) -> Result<Satoshis, ApiError> {
        if address.trim().is_empty() {
            return Err(ApiError::Configuration {
                message: "address cannot be empty".to_string(),
            });
        }

        let url = format!(
            "{}/insight-api/addr/{}/totalReceived",
            self.config.base_url.trim_end_matches('/'),
            address
        );

        debug!(url, "fetching total received from Blockdozer");

        let response = timeout(
            Duration::from_secs(self.config.timeout_seconds),
            self.client.get(&url).send(),
        )
        .await
        .map_err(|_| ApiError::Timeout {
            timeout_seconds: self.config.timeout_seconds,
        })?
        .map_err(|e| ApiError::Http {
            message: e.to_string(),
        })?;

        match response.status() {
            StatusCode::OK => {
                let body = response.text().await.map_err(|e| ApiError::Http {
                    message: e.to_string(),
                })?;
                satoshis_from_text(&body).ok_or_else(|| {
                    warn!(body = body.trim(), "Blockdozer returned a non-numeric body");
                    ApiError::InvalidResponse {
                        message: format!("expected a numeric body, got {:?}", body.trim()),
                    }
                })
            }
            status => {
                warn!(status = status.as_u16(), "Blockdozer API error");
                Err(ApiError::Status {
                    status: status.as_u16(),
                })
            }
        }
    }
}

impl BlockchainApi for BlockdozerClient {
    fn supported_variants(&self) -> &'static [Variant] {
        &[Variant::Bch]
    }

    fn variant(&self) -> Variant {
        self.variant
    }

    async fn get_funds_received(&self, address: &PaymentAddress) -> Result<Satoshis, ApiError> {
        self.fetch_total_received(&address.btc_address).await
    }

    fn name(&self) -> &'static str {
        "blockdozer"
    }
}
