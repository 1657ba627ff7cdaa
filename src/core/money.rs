//! Fixed-point money helpers.
//!
//! Every amount the engine produces is rounded to [`MONEY_SCALE`] places with
//! midpoint-away-from-zero, and crosses the persistence boundary as a string
//! with exactly that many decimals ("180.00"), never as a binary float.
//!
//! Engine arithmetic goes through the saturating helpers here: inputs are only
//! bounded by what `Decimal` can represent, and an overflow pins the result to
//! `Decimal::MAX`/`Decimal::MIN` instead of panicking.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept for every monetary value
pub const MONEY_SCALE: u32 = 2;

/// Rounds an amount to the money scale
pub fn round(amount: Decimal) -> Decimal {
    let rounded = amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        // avoid "-0.00" once a tiny negative rounds away
        Decimal::ZERO
    } else {
        rounded
    }
}

/// Computes `percent`% of `amount` without rounding
pub fn percent_of(amount: Decimal, percent: Decimal) -> Decimal {
    amount.saturating_mul(percent) / Decimal::ONE_HUNDRED
}

/// `a × b`, saturating at the representable range
pub fn mul(a: Decimal, b: Decimal) -> Decimal {
    a.saturating_mul(b)
}

/// Saturating sum of amounts
pub fn sum<I>(amounts: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    amounts
        .into_iter()
        .fold(Decimal::ZERO, |acc, amount| acc.saturating_add(amount))
}

/// Formats an amount as a fixed-point string with exactly two decimals
pub fn format_fixed(amount: Decimal) -> String {
    let mut value = round(amount);
    value.rescale(MONEY_SCALE);
    value.to_string()
}

/// Formats an amount with Indian digit grouping, e.g. `2,72,580.00`
///
/// The last three integer digits form one group, every group above that has two.
pub fn format_indian(amount: Decimal) -> String {
    let fixed = format_fixed(amount);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let grouped = if integer.len() <= 3 {
        integer.to_string()
    } else {
        let (upper, last_three) = integer.split_at(integer.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut end = upper.len();
        while end > 0 {
            let start = end.saturating_sub(2);
            groups.push(&upper[start..end]);
            end = start;
        }
        groups.reverse();
        format!("{},{}", groups.join(","), last_three)
    };

    format!("{}{}.{}", sign, grouped, fraction)
}

/// Serde adapter: fixed-point string out, string or number in.
///
/// Use with `#[serde(with = "crate::core::money::fixed_point")]`.
pub mod fixed_point {
    use std::fmt;
    use std::str::FromStr;

    use rust_decimal::Decimal;
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_fixed(*amount))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FixedPointVisitor)
    }

    struct FixedPointVisitor;

    impl<'de> Visitor<'de> for FixedPointVisitor {
        type Value = Decimal;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a fixed-point decimal string")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Decimal, E> {
            Decimal::from_str(value.trim())
                .map_err(|e| E::custom(format!("invalid amount {:?}: {}", value, e)))
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Decimal, E> {
            Ok(Decimal::from(value))
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Decimal, E> {
            Ok(Decimal::from(value))
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<Decimal, E> {
            Decimal::try_from(value).map_err(|e| E::custom(e.to_string()))
        }
    }
}
