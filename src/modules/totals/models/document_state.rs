use serde::{Deserialize, Serialize};

use super::document_charge::{ChargeInput, DocumentCharge};
use crate::modules::line_items::{Discount, DiscountInput, LineItem, LineItemInput};
use crate::modules::taxes::Jurisdiction;

/// Everything the totals depend on, in strict form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentState {
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub extra_charges: Vec<DocumentCharge>,
    #[serde(default)]
    pub discounts: Vec<DocumentCharge>,
    #[serde(default)]
    pub document_discount: Option<Discount>,
    #[serde(default)]
    pub counterparty: Jurisdiction,
}

/// Document as sent by the editing layer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentInput {
    pub items: Vec<LineItemInput>,
    pub extra_charges: Vec<ChargeInput>,
    pub discounts: Vec<ChargeInput>,
    pub document_discount: Option<DiscountInput>,
    pub counterparty: Jurisdiction,
}

impl DocumentInput {
    /// The single boundary conversion into strict types
    pub fn normalize(&self) -> DocumentState {
        DocumentState {
            items: self.items.iter().map(LineItemInput::normalize).collect(),
            extra_charges: self.extra_charges.iter().map(ChargeInput::normalize).collect(),
            discounts: self.discounts.iter().map(ChargeInput::normalize).collect(),
            document_discount: self
                .document_discount
                .as_ref()
                .and_then(DiscountInput::normalize),
            counterparty: self.counterparty.clone(),
        }
    }
}
