//! Parse-once conversion of loosely typed form values.
//!
//! The editing layer sends numbers either as JSON numbers or as their string
//! form, and partially typed values ("", "12.", "abc") while the user is still
//! editing. This is the only place such values are interpreted; everything past
//! this module works on strict `Decimal`s.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;

/// Parses a raw form value into a decimal, `None` when it is not numeric
pub fn parse_decimal(raw: &Value) -> Option<Decimal> {
    match raw {
        Value::Number(number) => parse_text(&number.to_string()),
        Value::String(text) => parse_text(text),
        _ => None,
    }
}

fn parse_text(text: &str) -> Option<Decimal> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    // "12." is a normal intermediate state while typing
    let cleaned = cleaned.strip_suffix('.').unwrap_or(&cleaned);

    Decimal::from_str(cleaned)
        .or_else(|_| Decimal::from_scientific(cleaned))
        .ok()
}

/// Quantity: missing, non-numeric or negative input counts as one unit
pub fn quantity(raw: &Value) -> Decimal {
    match parse_decimal(raw) {
        Some(value) if value >= Decimal::ZERO => value,
        _ => Decimal::ONE,
    }
}

/// Unit rate: missing, non-numeric or negative input counts as zero
pub fn rate(raw: &Value) -> Decimal {
    non_negative_or_zero(raw)
}

/// Discount value: missing, non-numeric or negative input counts as zero
pub fn discount_value(raw: &Value) -> Decimal {
    non_negative_or_zero(raw)
}

/// Charge amount: taken literally when numeric, zero otherwise
pub fn amount(raw: &Value) -> Decimal {
    parse_decimal(raw).unwrap_or(Decimal::ZERO)
}

fn non_negative_or_zero(raw: &Value) -> Decimal {
    match parse_decimal(raw) {
        Some(value) if value >= Decimal::ZERO => value,
        _ => Decimal::ZERO,
    }
}

/// Free text: trims and turns blank into `None`
pub fn text(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
