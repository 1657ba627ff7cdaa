use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{lenient, money};

/// A document-level entry: an extra charge (added) or a discount (subtracted)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentCharge {
    pub description: String,
    #[serde(with = "crate::core::money::fixed_point")]
    pub amount: Decimal,
}

impl DocumentCharge {
    pub fn new(description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            description: description.into(),
            amount: money::round(amount),
        }
    }
}

/// Charge or discount entry as sent by the editing layer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChargeInput {
    pub description: Option<String>,
    pub amount: Value,
}

impl ChargeInput {
    pub fn normalize(&self) -> DocumentCharge {
        DocumentCharge::new(
            lenient::text(self.description.as_deref()).unwrap_or_default(),
            lenient::amount(&self.amount),
        )
    }
}

/// Sum of the amounts of a list of entries
pub fn sum_amounts(entries: &[DocumentCharge]) -> Decimal {
    money::sum(entries.iter().map(|entry| entry.amount))
}
