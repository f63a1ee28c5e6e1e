// SPDX-FileCopyrightText: 2025 Easy Crypto Payments
//
// SPDX-License-Identifier: Apache-2.0

//! BlockExplorer integration
//!
//! Same contract as [`crate::blockdozer`] against the Bitcoin Cash instance
//! of blockexplorer.com: one GET, a bare numeric body, anything else is a
//! failed query.

use std::time::Duration;

use api_client::{ApiError, BlockchainApi, Satoshis, satoshis_from_text};
use reqwest::{Client, StatusCode};
use shared_types::{PaymentAddress, Variant};
use tokio::time::timeout;
use tracing::{debug, warn};
use url::Url;

const DEFAULT_BLOCK_EXPLORER_BASE_URL: &str = "https://bitcoincash.blockexplorer.com";
const DEFAULT_BLOCK_EXPLORER_TIMEOUT_SECONDS: u64 = 10;

/// Configuration for the BlockExplorer client
#[derive(Debug, Clone)]
pub struct BlockExplorerConfig {
    /// Base URL for the BlockExplorer API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for BlockExplorerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BLOCK_EXPLORER_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_BLOCK_EXPLORER_TIMEOUT_SECONDS,
        }
    }
}

impl BlockExplorerConfig {
    /// Production endpoint with an externally configured timeout
    pub fn with_timeout(timeout_seconds: u64) -> Self {
        Self {
            timeout_seconds,
            ..Self::default()
        }
    }
}

/// BlockExplorer client implementation
#[derive(Debug)]
pub struct BlockExplorerClient {
    client: Client,
    config: BlockExplorerConfig,
    variant: Variant,
}

impl BlockExplorerClient {
    /// Create a new BlockExplorer client
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not a valid URL or the HTTP
    /// client cannot be created
    pub fn new(variant: Variant, config: BlockExplorerConfig) -> Result<Self, ApiError> {
        Url::parse(&config.base_url).map_err(|e| ApiError::Configuration {
            message: format!("invalid BlockExplorer base URL {:?}: {e}", config.base_url),
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
            "{}/api/addr/{}/totalReceived",
            self.config.base_url.trim_end_matches('/'),
            address
        );

        debug!(url, "fetching total received from BlockExplorer");

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
                    warn!(
                        body = body.trim(),
                        "BlockExplorer returned a non-numeric body"
                    );
                    ApiError::InvalidResponse {
                        message: format!("expected a numeric body, got {:?}", body.trim()),
                    }
                })
            }
            status => {
                warn!(status = status.as_u16(), "BlockExplorer API error");
                Err(ApiError::Status {
                    status: status.as_u16(),
                })
            }
        }
    }
}

impl BlockchainApi for BlockExplorerClient {
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
        "blockexplorer"
    }
}
