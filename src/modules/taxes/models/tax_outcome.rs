use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money;

/// Which tax branch applies to a counterparty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaxRegime {
    /// Counterparty in another country, no tax under this regime
    CrossBorder,
    /// Same region as the company: two equal halves of the composite rate
    Split,
    /// Same country, different region: the full composite rate as one component
    Unified,
    /// Counterparty region not known yet, zero tax until it is
    Pending,
}

impl std::fmt::Display for TaxRegime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaxRegime::CrossBorder => write!(f, "cross_border"),
            TaxRegime::Split => write!(f, "split"),
            TaxRegime::Unified => write!(f, "unified"),
            TaxRegime::Pending => write!(f, "pending"),
        }
    }
}

/// Tax on one base, per item or summed over a document
///
/// Either the split pair or the unified component is non-zero, never both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxOutcome {
    #[serde(with = "crate::core::money::fixed_point")]
    pub split_tax_a: Decimal,
    #[serde(with = "crate::core::money::fixed_point")]
    pub split_tax_b: Decimal,
    #[serde(with = "crate::core::money::fixed_point")]
    pub unified_tax: Decimal,
}

impl TaxOutcome {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn split(half: Decimal) -> Self {
        Self {
            split_tax_a: half,
            split_tax_b: half,
            unified_tax: Decimal::ZERO,
        }
    }

    pub fn unified(amount: Decimal) -> Self {
        Self {
            split_tax_a: Decimal::ZERO,
            split_tax_b: Decimal::ZERO,
            unified_tax: amount,
        }
    }

    pub fn total(&self) -> Decimal {
        money::sum([self.split_tax_a, self.split_tax_b, self.unified_tax])
    }

    pub fn is_zero(&self) -> bool {
        self.split_tax_a.is_zero() && self.split_tax_b.is_zero() && self.unified_tax.is_zero()
    }
}

impl std::ops::Add for TaxOutcome {
    type Output = TaxOutcome;

    fn add(self, other: TaxOutcome) -> TaxOutcome {
        TaxOutcome {
            split_tax_a: self.split_tax_a.saturating_add(other.split_tax_a),
            split_tax_b: self.split_tax_b.saturating_add(other.split_tax_b),
            unified_tax: self.unified_tax.saturating_add(other.unified_tax),
        }
    }
}

impl std::iter::Sum for TaxOutcome {
    fn sum<I: Iterator<Item = TaxOutcome>>(iter: I) -> Self {
        iter.fold(TaxOutcome::zero(), |acc, outcome| acc + outcome)
    }
}
