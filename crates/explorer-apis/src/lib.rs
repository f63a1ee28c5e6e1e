// SPDX-FileCopyrightText: 2025 Easy Crypto Payments
//
// SPDX-License-Identifier: Apache-2.0

//! Blockchain explorer integrations for funds-received queries
//!
//! This crate provides implementations of the `BlockchainApi` trait for the
//! public blockchain explorers used to confirm incoming payments, along with
//! an explicit registry that enumerates them per address variant.
//!
//! # Architecture
//!
//! - **Client Implementations**: [`blockdozer`], [`block_explorer`],
//!   [`tokenview`], [`btc_com`], [`bchsv_explorer`] - one adapter per
//!   third-party service
//! - **Registry Pattern**: [`registry::ExplorerRegistry`] - the closed list
//!   of explorers available for a configured variant
//!
//! # Behavior
//!
//! Every client answers the same question - how many satoshis has this
//! address received in total - by issuing a single HTTP GET against its
//! service and decoding that service's own response shape. Explorer
//! flakiness is a normal operating condition: transport and parse problems
//! come back as errors, while a confirmed-empty address comes back as zero.
//! The two are never conflated.

pub mod bchsv_explorer;
pub mod block_explorer;
pub mod blockdozer;
pub mod btc_com;
pub mod registry;
pub mod tokenview;

pub use bchsv_explorer::*;
pub use block_explorer::*;
pub use blockdozer::*;
pub use btc_com::*;
pub use registry::*;
pub use tokenview::*;
