// SPDX-FileCopyrightText: 2025 Easy Crypto Payments
//
// SPDX-License-Identifier: Apache-2.0

//! TokenView explorer integration
//!
//! This module provides an implementation of the `BlockchainApi` trait for
//! the TokenView multi-chain search endpoint. TokenView covers both Bitcoin
//! Cash and Bitcoin SV; the response is a list of per-network records from
//! which the entry for the configured network and queried address must be
//! selected.

use std::time::Duration;

use api_client::{ApiError, BlockchainApi, Satoshis, satoshis_from_json};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use shared_types::{PaymentAddress, Variant};
use tokio::time::timeout;
use tracing::{debug, warn};
use url::Url;

// TokenView API constants
const DEFAULT_TOKENVIEW_BASE_URL: &str = "http://www.tokenview.com:8088";
const DEFAULT_TOKENVIEW_TIMEOUT_SECONDS: u64 = 10;

/// Configuration for the TokenView client
#[derive(Debug, Clone)]
pub struct TokenViewConfig {
    /// Base URL for the TokenView search API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for TokenViewConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_TOKENVIEW_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TOKENVIEW_TIMEOUT_SECONDS,
        }
    }
}

impl TokenViewConfig {
    /// Production endpoint with an externally configured timeout
    pub fn with_timeout(timeout_seconds: u64) -> Self {
        Self {
            timeout_seconds,
            ..Self::default()
        }
    }
}

/// TokenView explorer client implementation
#[derive(Debug)]
pub struct TokenViewClient {
    client: Client,
    config: TokenViewConfig,
    variant: Variant,
}

/// Response structure for the TokenView search endpoint
#[derive(Debug, Deserialize)]
struct SearchResponse {
    code: Option<i64>,
    data: Option<Vec<SearchEntry>>,
}

/// One record in the TokenView search response
#[derive(Debug, Deserialize)]
struct SearchEntry {
    #[serde(rename = "type")]
    kind: Option<String>,
    network: Option<String>,
    hash: Option<String>,
    receive: Option<Value>,
}

/// TokenView's own code for the network a variant selects
fn network_code(variant: Variant) -> &'static str {
    match variant {
        Variant::Bch => "BCH",
        Variant::Bsv => "BCHSV",
    }
}

impl TokenViewClient {
    /// Create a new TokenView client
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not a valid URL or the HTTP
    /// client cannot be created
    pub fn new(variant: Variant, config: TokenViewConfig) -> Result<Self, ApiError> {
        Url::parse(&config.base_url).map_err(|e| ApiError::Configuration {
            message: format!("invalid TokenView base URL {:?}: {e}", config.base_url),
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

    /// Select the funds-received amount out of a decoded search response
    fn extract_funds_received(
        &self,
        response: SearchResponse,
        address: &str,
    ) -> Result<Satoshis, ApiError> {
        // 404 is not-found. Addresses are generated by the caller and known
        // valid, so a not-found address has zero transactions.
        if response.code == Some(404) {
            return Ok(0);
        }

        let entries = match response.data {
            Some(entries) if !entries.is_empty() => entries,
            _ => return Err(ApiError::MissingField { field: "data" }),
        };

        let network = network_code(self.variant);
        for entry in &entries {
            if entry.kind.as_deref() != Some("address")
                || entry.network.as_deref() != Some(network)
                || entry.hash.as_deref() != Some(address)
            {
                continue;
            }
            let receive = entry
                .receive
                .as_ref()
                .ok_or(ApiError::MissingField { field: "receive" })?;
            return satoshis_from_json(receive).ok_or_else(|| ApiError::InvalidResponse {
                message: format!("non-numeric receive value: {receive}"),
            });
        }

        // The address doesn't show up for the selected network
        Ok(0)
    }

    async fn search(&self, address: &str) -> Result<Satoshis, ApiError> {
        if address.trim().is_empty() {
            return Err(ApiError::Configuration {
                message: "address cannot be empty".to_string(),
            });
        }

        let url = format!(
            "{}/search/{}",
            self.config.base_url.trim_end_matches('/'),
            address
        );

        debug!(url, network = network_code(self.variant), "searching TokenView");

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
                let decoded: SearchResponse =
                    serde_json::from_str(body.trim()).map_err(|e| {
                        warn!(error = %e, "TokenView returned an undecodable body");
                        ApiError::InvalidResponse {
                            message: e.to_string(),
                        }
                    })?;
                self.extract_funds_received(decoded, address)
            }
            status => {
                warn!(status = status.as_u16(), "TokenView API error");
                Err(ApiError::Status {
                    status: status.as_u16(),
                })
            }
        }
    }
}

impl BlockchainApi for TokenViewClient {
    fn supported_variants(&self) -> &'static [Variant] {
        &[Variant::Bch, Variant::Bsv]
    }

    fn variant(&self) -> Variant {
        self.variant
    }

    async fn get_funds_received(&self, address: &PaymentAddress) -> Result<Satoshis, ApiError> {
        self.search(&address.btc_address).await
    }

    fn name(&self) -> &'static str {
        "tokenview"
    }
}
