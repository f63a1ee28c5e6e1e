// SPDX-FileCopyrightText: 2025 Easy Crypto Payments
//
// SPDX-License-Identifier: Apache-2.0

//! Shared types for the funds API workspace
//!
//! This crate provides common types that are shared across multiple crates
//! in the funds API workspace, avoiding circular dependencies.

pub mod address;
pub mod variant;

pub use address::PaymentAddress;
pub use variant::{Variant, VariantParseError};
