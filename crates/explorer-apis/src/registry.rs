// SPDX-FileCopyrightText: 2025 Easy Crypto Payments
//
// SPDX-License-Identifier: Apache-2.0

//! Explorer registry
//!
//! This module provides the closed list of explorer clients available to a
//! caller. Which explorer to trust, in what order to try them, and how to
//! fall back between them stays with the caller; the registry only
//! constructs and enumerates.

use api_client::{ApiError, BlockchainApi, Satoshis};
use shared_types::{PaymentAddress, Variant};

use crate::{
    BchsvExplorerClient, BchsvExplorerConfig, BlockExplorerClient, BlockExplorerConfig,
    BlockdozerClient, BlockdozerConfig, BtcComClient, BtcComConfig, TokenViewClient,
    TokenViewConfig,
};

/// One of the bundled explorer clients
///
/// A closed set: adding an explorer means adding a variant here and a
/// constructor call in [`ExplorerRegistry::for_variant`], nothing else.
#[derive(Debug)]
pub enum Explorer {
    /// Blockdozer Insight instance (bch)
    Blockdozer(BlockdozerClient),
    /// blockexplorer.com Bitcoin Cash instance (bch)
    BlockExplorer(BlockExplorerClient),
    /// TokenView multi-chain search (bch, bsv)
    TokenView(TokenViewClient),
    /// BTC.com v3 address API (bch, bsv)
    BtcCom(BtcComClient),
    /// bchsvexplorer.com Insight instance (bsv)
    BchsvExplorer(BchsvExplorerClient),
}

impl BlockchainApi for Explorer {
    fn supported_variants(&self) -> &'static [Variant] {
        match self {
            Self::Blockdozer(client) => client.supported_variants(),
            Self::BlockExplorer(client) => client.supported_variants(),
            Self::TokenView(client) => client.supported_variants(),
            Self::BtcCom(client) => client.supported_variants(),
            Self::BchsvExplorer(client) => client.supported_variants(),
        }
    }

    fn variant(&self) -> Variant {
        match self {
            Self::Blockdozer(client) => client.variant(),
            Self::BlockExplorer(client) => client.variant(),
            Self::TokenView(client) => client.variant(),
            Self::BtcCom(client) => client.variant(),
            Self::BchsvExplorer(client) => client.variant(),
        }
    }

    async fn get_funds_received(&self, address: &PaymentAddress) -> Result<Satoshis, ApiError> {
        match self {
            Self::Blockdozer(client) => client.get_funds_received(address).await,
            Self::BlockExplorer(client) => client.get_funds_received(address).await,
            Self::TokenView(client) => client.get_funds_received(address).await,
            Self::BtcCom(client) => client.get_funds_received(address).await,
            Self::BchsvExplorer(client) => client.get_funds_received(address).await,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Blockdozer(client) => client.name(),
            Self::BlockExplorer(client) => client.name(),
            Self::TokenView(client) => client.name(),
            Self::BtcCom(client) => client.name(),
            Self::BchsvExplorer(client) => client.name(),
        }
    }
}

/// Registry of all bundled explorer clients for one configured variant
#[derive(Debug)]
pub struct ExplorerRegistry {
    explorers: Vec<Explorer>,
}

impl ExplorerRegistry {
    /// Construct every bundled explorer for `variant` with the given
    /// request timeout
    ///
    /// All explorers are constructed, including those that do not support
    /// `variant`; [`active`](Self::active) filters to the ones that do.
    ///
    /// # Errors
    ///
    /// Returns an error if any client's HTTP client cannot be created
    pub fn for_variant(variant: Variant, timeout_seconds: u64) -> Result<Self, ApiError> {
        let explorers = vec![
            Explorer::Blockdozer(BlockdozerClient::new(
                variant,
                BlockdozerConfig::with_timeout(timeout_seconds),
            )?),
            Explorer::BlockExplorer(BlockExplorerClient::new(
                variant,
                BlockExplorerConfig::with_timeout(timeout_seconds),
            )?),
            Explorer::TokenView(TokenViewClient::new(
                variant,
                TokenViewConfig::with_timeout(timeout_seconds),
            )?),
            Explorer::BtcCom(BtcComClient::new(
                variant,
                BtcComConfig::with_timeout(timeout_seconds),
            )?),
            Explorer::BchsvExplorer(BchsvExplorerClient::new(
                variant,
                BchsvExplorerConfig::with_timeout(timeout_seconds),
            )?),
        ];

        Ok(Self { explorers })
    }

    /// Iterate over every registered explorer
    pub fn iter(&self) -> impl Iterator<Item = &Explorer> {
        self.explorers.iter()
    }

    /// Iterate over the explorers whose support gate passes for the
    /// configured variant
    pub fn active(&self) -> impl Iterator<Item = &Explorer> {
        self.explorers.iter().filter(|e| e.is_active())
    }

    /// Get the names of all registered explorers
    pub fn names(&self) -> Vec<&'static str> {
        self.explorers.iter().map(Explorer::name).collect()
    }

    /// Get the names of the explorers active for the configured variant
    pub fn active_names(&self) -> Vec<&'static str> {
        self.active().map(Explorer::name).collect()
    }

    /// Get the number of registered explorers
    pub fn len(&self) -> usize {
        self.explorers.len()
    }

    /// Whether the registry holds no explorers
    pub fn is_empty(&self) -> bool {
        self.explorers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_holds_all_explorers() {
        let registry = ExplorerRegistry::for_variant(Variant::Bch, 10).unwrap();
        assert_eq!(registry.len(), 5);
        assert!(!registry.is_empty());
        assert_eq!(
            registry.names(),
            vec![
                "blockdozer",
                "blockexplorer",
                "tokenview",
                "btc.com",
                "bchsvexplorer"
            ]
        );
    }

    #[test]
    fn active_explorers_for_bch() {
        let registry = ExplorerRegistry::for_variant(Variant::Bch, 10).unwrap();
        assert_eq!(
            registry.active_names(),
            vec!["blockdozer", "blockexplorer", "tokenview", "btc.com"]
        );
    }

    #[test]
    fn active_explorers_for_bsv() {
        let registry = ExplorerRegistry::for_variant(Variant::Bsv, 10).unwrap();
        assert_eq!(
            registry.active_names(),
            vec!["tokenview", "btc.com", "bchsvexplorer"]
        );
    }

    #[test]
    fn explorers_carry_the_configured_variant() {
        let registry = ExplorerRegistry::for_variant(Variant::Bsv, 10).unwrap();
        for explorer in registry.iter() {
            assert_eq!(explorer.variant(), Variant::Bsv);
            assert!(!explorer.supported_variants().is_empty());
        }
    }

    #[test]
    fn active_is_exactly_the_support_gate() {
        for &variant in Variant::all() {
            let registry = ExplorerRegistry::for_variant(variant, 10).unwrap();
            for explorer in registry.iter() {
                assert_eq!(
                    explorer.is_active(),
                    explorer.supported_variants().contains(&variant),
                    "activity mismatch for {} with {variant}",
                    explorer.name()
                );
            }
        }
    }
}
