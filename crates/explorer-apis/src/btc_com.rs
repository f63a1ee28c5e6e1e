// SPDX-FileCopyrightText: 2025 Easy Crypto Payments
//
// SPDX-License-Identifier: Apache-2.0

//! BTC.com explorer integration
//!
//! This module provides an implementation of the `BlockchainApi` trait for
//! the BTC.com v3 address endpoint. BTC.com runs one host per chain, so the
//! configured variant is embedded in the hostname
//! (`https://bch-chain.api.btc.com`, `https://bsv-chain.api.btc.com`).

use std::time::Duration;

use api_client::{ApiError, BlockchainApi, Satoshis, satoshis_from_json};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use shared_types::{PaymentAddress, Variant};
use tokio::time::timeout;
use tracing::{debug, warn};
use url::Url;

const DEFAULT_BTC_COM_TIMEOUT_SECONDS: u64 = 10;

/// Configuration for the BTC.com client
#[derive(Debug, Clone)]
pub struct BtcComConfig {
    /// Explicit endpoint override; when unset the host is derived from the
    /// configured variant
    pub base_url: Option<String>,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for BtcComConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_seconds: DEFAULT_BTC_COM_TIMEOUT_SECONDS,
        }
    }
}

impl BtcComConfig {
    /// Variant-derived endpoint with an externally configured timeout
    pub fn with_timeout(timeout_seconds: u64) -> Self {
        Self {
            timeout_seconds,
            ..Self::default()
        }
    }
}

/// BTC.com explorer client implementation
#[derive(Debug)]
pub struct BtcComClient {
    client: Client,
    config: BtcComConfig,
    variant: Variant,
}

/// Response structure for the BTC.com address endpoint
#[derive(Debug, Deserialize)]
struct AddressResponse {
    err_no: Option<i64>,
    // Loose on purpose: the service sends an object, null, or nothing at
    // all depending on the address history
    data: Option<Value>,
}

/// Select the funds-received amount out of a decoded address response
fn extract_funds_received(response: AddressResponse) -> Result<Satoshis, ApiError> {
    if let Some(code) = response.err_no {
        if code != 0 {
            return Err(ApiError::Service { code });
        }
    }

    let data = match response.data {
        Some(Value::Object(data)) => data,
        // No usable data object means the address has no history yet
        _ => return Ok(0),
    };

    match data.get("received") {
        None | Some(Value::Null) => Ok(0),
        Some(value) => satoshis_from_json(value).ok_or_else(|| ApiError::InvalidResponse {
            message: format!("non-numeric received value: {value}"),
        }),
    }
}

impl BtcComClient {
    /// Create a new BTC.com client
    ///
    /// # Errors
    ///
    /// Returns an error if a configured base URL override is not a valid
    /// URL or the HTTP client cannot be created
    pub fn new(variant: Variant, config: BtcComConfig) -> Result<Self, ApiError> {
        if let Some(base_url) = &config.base_url {
            Url::parse(base_url).map_err(|e| ApiError::Configuration {
                message: format!("invalid BTC.com base URL {base_url:?}: {e}"),
            })?;
        }

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

    /// The endpoint queried for `address`
    fn endpoint(&self, address: &str) -> String {
        let base = match &self.config.base_url {
            Some(base_url) => base_url.trim_end_matches('/').to_string(),
            None => format!("https://{}-chain.api.btc.com", self.variant.code()),
        };
        format!("{base}/v3/address/{address}")
    }

    async fn fetch_address(&self, address: &str) -> Result<Satoshis, ApiError> {
        if address.trim().is_empty() {
            return Err(ApiError::Configuration {
                message: "address cannot be empty".to_string(),
            });
        }

        let url = self.endpoint(address);

        debug!(url, "fetching address summary from BTC.com");

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
                let decoded: AddressResponse =
                    serde_json::from_str(body.trim()).map_err(|e| {
                        warn!(error = %e, "BTC.com returned an undecodable body");
                        ApiError::InvalidResponse {
                            message: e.to_string(),
                        }
                    })?;
                extract_funds_received(decoded)
            }
            status => {
                warn!(status = status.as_u16(), "BTC.com API error");
                Err(ApiError::Status {
                    status: status.as_u16(),
                })
            }
        }
    }
}

impl BlockchainApi for BtcComClient {
    fn supported_variants(&self) -> &'static [Variant] {
        &[Variant::Bch, Variant::Bsv]
    }

    fn variant(&self) -> Variant {
        self.variant
    }

    async fn get_funds_received(&self, address: &PaymentAddress) -> Result<Satoshis, ApiError> {
        self.fetch_address(&address.btc_address).await
    }

    fn name(&self) -> &'static str {
        "btc.com"
    }
}
