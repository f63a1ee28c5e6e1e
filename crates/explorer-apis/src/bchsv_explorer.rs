// SPDX-FileCopyrightText: 2025 Easy Crypto Payments
//
// SPDX-License-Identifier: Apache-2.0

//! BCHSVExplorer integration
//!
//! This module provides an implementation of the `BlockchainApi` trait for
//! bchsvexplorer.com, a Bitcoin SV Insight instance whose address endpoint
//! returns a JSON summary carrying `totalReceivedSat`.

use std::time::Duration;

use api_client::{ApiError, BlockchainApi, Satoshis, satoshis_from_json};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use shared_types::{PaymentAddress, Variant};
use tokio::time::timeout;
use tracing::{debug, warn};
use url::Url;

const DEFAULT_BCHSV_EXPLORER_BASE_URL: &str = "https://bchsvexplorer.com";
const DEFAULT_BCHSV_EXPLORER_TIMEOUT_SECONDS: u64 = 10;

/// Configuration for the BCHSVExplorer client
#[derive(Debug, Clone)]
pub struct BchsvExplorerConfig {
    /// Base URL for the BCHSVExplorer API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for BchsvExplorerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BCHSV_EXPLORER_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_BCHSV_EXPLORER_TIMEOUT_SECONDS,
        }
    }
}

impl BchsvExplorerConfig {
    /// Production endpoint with an externally configured timeout
    pub fn with_timeout(timeout_seconds: u64) -> Self {
        Self {
            timeout_seconds,
            ..Self::default()
        }
    }
}

/// BCHSVExplorer client implementation
#[derive(Debug)]
pub struct BchsvExplorerClient {
    client: Client,
    config: BchsvExplorerConfig,
    variant: Variant,
}

/// Response structure for the BCHSVExplorer address endpoint
#[derive(Debug, Deserialize)]
struct AddressResponse {
    // The amount is the one field this integration needs; a summary without
    // it does not answer the query
    #[serde(rename = "totalReceivedSat")]
    total_received_sat: Option<Value>,
}

/// Select the funds-received amount out of a decoded address summary
fn extract_funds_received(response: AddressResponse) -> Result<Satoshis, ApiError> {
    let value = response.total_received_sat.ok_or(ApiError::MissingField {
        field: "totalReceivedSat",
    })?;
    satoshis_from_json(&value).ok_or_else(|| ApiError::InvalidResponse {
        message: format!("non-numeric totalReceivedSat value: {value}"),
    })
}

impl BchsvExplorerClient {
    /// Create a new BCHSVExplorer client
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not a valid URL or the HTTP
    /// client cannot be created
    pub fn new(variant: Variant, config: BchsvExplorerConfig) -> Result<Self, ApiError> {
        Url::parse(&config.base_url).map_err(|e| ApiError::Configuration {
            message: format!("invalid BCHSVExplorer base URL {:?}: {e}", config.base_url),
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

    async fn fetch_address(&self, address: &str) -> Result<Satoshis, ApiError> {
        if address.trim().is_empty() {
            return Err(ApiError::Configuration {
                message: "address cannot be empty".to_string(),
            });
        }

        let url = format!(
            "{}/api/addr/{}",
            self.config.base_url.trim_end_matches('/'),
            address
        );

        debug!(url, "fetching address summary from BCHSVExplorer");

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
                        warn!(error = %e, "BCHSVExplorer returned an undecodable body");
                        ApiError::InvalidResponse {
                            message: e.to_string(),
                        }
                    })?;
                extract_funds_received(decoded)
            }
            status => {
                warn!(status = status.as_u16(), "BCHSVExplorer API error");
                Err(ApiError::Status {
                    status: status.as_u16(),
                })
            }
        }
    }
}

impl BlockchainApi for BchsvExplorerClient {
    fn supported_variants(&self) -> &'static [Variant] {
        &[Variant::Bsv]
    }

    fn variant(&self) -> Variant {
        self.variant
    }

    async fn get_funds_received(&self, address: &PaymentAddress) -> Result<Satoshis, ApiError> {
        self.fetch_address(&address.btc_address).await
    }

    fn name(&self) -> &'static str {
        "bchsvexplorer"
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    use super::*;

    const TEST_ADDRESS: &str = "15urYnyeJe3gwbGJ74wcX89Tz7ZtsFDVew";

    fn create_test_config(base_url: &str) -> BchsvExplorerConfig {
        BchsvExplorerConfig {
            base_url: base_url.to_string(),
            timeout_seconds: 5,
        }
    }

    fn decode(value: serde_json::Value) -> AddressResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn extract_total_received() {
        let response = decode(json!({"totalReceivedSat": 42}));
        assert_eq!(extract_funds_received(response).unwrap(), 42);
    }

    #[test]
    fn extract_missing_field_is_failure() {
        let response = decode(json!({"balanceSat": 10}));
        assert!(matches!(
            extract_funds_received(response),
            Err(ApiError::MissingField {
                field: "totalReceivedSat"
            })
        ));
    }

    #[test]
    fn extract_non_numeric_field_is_failure() {
        let response = decode(json!({"totalReceivedSat": {"sat": 42}}));
        assert!(matches!(
            extract_funds_received(response),
            Err(ApiError::InvalidResponse { .. })
        ));
    }

    #[test]
    fn variant_support_gates_activity() {
        let bsv =
            BchsvExplorerClient::new(Variant::Bsv, BchsvExplorerConfig::default()).unwrap();
        assert!(bsv.is_active());

        let bch =
            BchsvExplorerClient::new(Variant::Bch, BchsvExplorerConfig::default()).unwrap();
        assert!(!bch.is_active());
    }

    #[tokio::test]
    async fn get_funds_received_success() {
        let mock_server = MockServer::start().await;
        let config = create_test_config(&mock_server.uri());
        let client = BchsvExplorerClient::new(Variant::Bsv, config).unwrap();

        Mock::given(method("GET"))
            .and(path(format!("/api/addr/{TEST_ADDRESS}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "addrStr": TEST_ADDRESS,
                "balanceSat": 0,
                "totalReceivedSat": 42
            })))
            .mount(&mock_server)
            .await;

        let result = client
            .get_funds_received(&PaymentAddress::new(TEST_ADDRESS))
            .await;
        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test]
    async fn get_funds_received_empty_body() {
        let mock_server = MockServer::start().await;
        let config = create_test_config(&mock_server.uri());
        let client = BchsvExplorerClient::new(Variant::Bsv, config).unwrap();

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(""))
            .mount(&mock_server)
            .await;

        let result = client
            .get_funds_received(&PaymentAddress::new(TEST_ADDRESS))
            .await;
        assert!(matches!(
            result.unwrap_err(),
            ApiError::InvalidResponse { .. }
        ));
    }

    #[tokio::test]
    async fn client_name() {
        let client =
            BchsvExplorerClient::new(Variant::Bsv, BchsvExplorerConfig::default()).unwrap();
        assert_eq!(client.name(), "bchsvexplorer");
    }
}
