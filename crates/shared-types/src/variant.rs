// SPDX-FileCopyrightText: 2025 Easy Crypto Payments
//
// SPDX-License-Identifier: Apache-2.0

//! Address-variant types and identifiers
//!
//! This module provides type-safe variant codes for the supported address
//! encodings. A variant selects which chain an address belongs to and is
//! compared against each explorer's declared support list.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Supported address-encoding variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Bitcoin Cash
    Bch,
    /// Bitcoin SV
    Bsv,
}

impl Variant {
    /// Returns the fixed lowercase code for this variant
    pub const fn code(self) -> &'static str {
        match self {
            Self::Bch => "bch",
            Self::Bsv => "bsv",
        }
    }

    /// Returns the human-readable name of the variant
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bch => "Bitcoin Cash",
            Self::Bsv => "Bitcoin SV",
        }
    }

    /// Returns all supported variants
    pub const fn all() -> &'static [Self] {
        &[Self::Bch, Self::Bsv]
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Variant {
    type Err = VariantParseError;

    // Codes arrive from user-facing settings in whatever case the operator
    // typed; normalization happens here, once.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bch" => Ok(Self::Bch),
            "bsv" => Ok(Self::Bsv),
            _ => Err(VariantParseError::UnknownCode(s.to_string())),
        }
    }
}

impl Serialize for Variant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.code().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Variant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Self::from_str(&code).map_err(|_| {
            serde::de::Error::invalid_value(
                serde::de::Unexpected::Str(&code),
                &"a supported variant code (bch, bsv)",
            )
        })
    }
}

/// Error type for variant code parsing
#[derive(Debug, thiserror::Error)]
pub enum VariantParseError {
    /// Unknown variant code
    #[error("unsupported variant code: {0}. Supported codes are: bch, bsv")]
    UnknownCode(String),
}
