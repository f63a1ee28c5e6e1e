// SPDX-FileCopyrightText: 2025 Easy Crypto Payments
//
// SPDX-License-Identifier: Apache-2.0

//! Payment address records

use serde::{Deserialize, Serialize};

/// An address record owned by the payment-processing caller
///
/// Explorer queries only read [`btc_address`](Self::btc_address); the
/// remaining fields travel with the record for the caller's bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentAddress {
    /// The address string. The field name is historical; it is reused
    /// unchanged for bch and bsv addresses.
    pub btc_address: String,
    /// Optional caller-side label for the address
    pub label: Option<String>,
}

impl PaymentAddress {
    /// Create an address record with no label
    pub fn new(btc_address: impl Into<String>) -> Self {
        Self {
            btc_address: btc_address.into(),
            label: None,
        }
    }

    /// Attach a caller-side label
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}
