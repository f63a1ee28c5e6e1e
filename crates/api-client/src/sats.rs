// SPDX-FileCopyrightText: 2025 Easy Crypto Payments
//
// SPDX-License-Identifier: Apache-2.0

//! Satoshi amounts and the numeric checks applied to explorer responses
//!
//! Every explorer response ends in the same step: the extracted value must be
//! a non-negative whole number of satoshis, or the query counts as failed.
//! These helpers are that step, shared so each client does not grow its own
//! slightly different notion of "numeric".

use serde_json::Value;

/// A satoshi amount, the smallest unit of the queried currency
pub type Satoshis = u64;

/// Decode a bare response body into a satoshi count
///
/// Accepts an optionally whitespace-padded integer, or a float with no
/// fractional part (some explorers serialize whole numbers that way).
/// Anything else — an empty body, an HTML error page, a negative or
/// fractional number — is `None`.
pub fn satoshis_from_text(body: &str) -> Option<Satoshis> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(value) = trimmed.parse::<u64>() {
        return Some(value);
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 && value.fract() == 0.0 => {
            Some(value as u64)
        }
        _ => None,
    }
}

/// Decode a JSON value into a satoshi count
///
/// Explorers disagree on whether amounts arrive as JSON numbers or as
/// numeric strings; both are accepted. Null, objects, arrays, booleans and
/// non-numeric strings are `None`.
pub fn satoshis_from_json(value: &Value) -> Option<Satoshis> {
    match value {
        Value::Number(number) => {
            if let Some(n) = number.as_u64() {
                return Some(n);
            }
            match number.as_f64() {
                Some(n) if n.is_finite() && n >= 0.0 && n.fract() == 0.0 => Some(n as u64),
                _ => None,
            }
        }
        Value::String(text) => satoshis_from_text(text),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn text_plain_integer() {
        assert_eq!(satoshis_from_text("1500"), Some(1500));
        assert_eq!(satoshis_from_text("0"), Some(0));
        assert_eq!(satoshis_from_text("  2500\n"), Some(2500));
    }

    #[test]
    fn text_integral_float() {
        assert_eq!(satoshis_from_text("1500.0"), Some(1500));
    }

    #[test]
    fn text_rejects_garbage() {
        assert_eq!(satoshis_from_text(""), None);
        assert_eq!(satoshis_from_text("   "), None);
        assert_eq!(satoshis_from_text("<html>error</html>"), None);
        assert_eq!(satoshis_from_text("-5"), None);
        assert_eq!(satoshis_from_text("12.5"), None);
        assert_eq!(satoshis_from_text("NaN"), None);
        assert_eq!(satoshis_from_text("inf"), None);
    }

    #[test]
    fn json_numbers() {
        assert_eq!(satoshis_from_json(&json!(999)), Some(999));
        assert_eq!(satoshis_from_json(&json!(0)), Some(0));
        assert_eq!(satoshis_from_json(&json!(42.0)), Some(42));
        assert_eq!(satoshis_from_json(&json!(-1)), None);
        assert_eq!(satoshis_from_json(&json!(0.5)), None);
    }

    #[test]
    fn json_numeric_strings() {
        assert_eq!(satoshis_from_json(&json!("2500")), Some(2500));
        assert_eq!(satoshis_from_json(&json!("not a number")), None);
        assert_eq!(satoshis_from_json(&json!("")), None);
    }

    #[test]
    fn json_non_numeric_shapes() {
        assert_eq!(satoshis_from_json(&json!(null)), None);
        assert_eq!(satoshis_from_json(&json!(true)), None);
        assert_eq!(satoshis_from_json(&json!({"receive": 1})), None);
        assert_eq!(satoshis_from_json(&json!([1500])), None);
    }

    #[test]
    fn large_amounts_fit() {
        // 21 million coins in satoshis
        assert_eq!(
            satoshis_from_text("2100000000000000"),
            Some(2_100_000_000_000_000)
        );
    }
}
