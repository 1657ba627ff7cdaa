use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money;
use crate::modules::line_items::{LineAmounts, LineItem};
use crate::modules::taxes::{TaxOutcome, TaxRegime};

/// Reconciled totals of one document
///
/// Always a pure function of the document's items, charges, discounts and
/// counterparty; never edited on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsBreakdown {
    /// Sum of discounted line bases
    #[serde(with = "crate::core::money::fixed_point")]
    pub taxable_subtotal: Decimal,
    #[serde(with = "crate::core::money::fixed_point")]
    pub split_tax_a_total: Decimal,
    #[serde(with = "crate::core::money::fixed_point")]
    pub split_tax_b_total: Decimal,
    #[serde(with = "crate::core::money::fixed_point")]
    pub unified_tax_total: Decimal,
    #[serde(with = "crate::core::money::fixed_point")]
    pub extra_charges_total: Decimal,
    /// Sum of the document-level discount entries
    #[serde(with = "crate::core::money::fixed_point")]
    pub discounts_total: Decimal,
    /// Amount taken off by the single document discount
    #[serde(with = "crate::core::money::fixed_point")]
    pub document_discount_amount: Decimal,
    /// Final payable amount, clamped at zero
    #[serde(with = "crate::core::money::fixed_point")]
    pub grand_total: Decimal,
}

impl TotalsBreakdown {
    pub fn tax_total(&self) -> Decimal {
        money::sum([self.split_tax_a_total, self.split_tax_b_total, self.unified_tax_total])
    }

    /// Subtotal plus taxes plus extra charges, the base a percentage document discount applies to
    pub fn pre_discount_total(&self) -> Decimal {
        money::sum([self.taxable_subtotal, self.tax_total(), self.extra_charges_total])
    }

    /// The grand total before clamping; may be negative
    pub fn unclamped_total(&self) -> Decimal {
        self.pre_discount_total()
            .saturating_sub(self.discounts_total)
            .saturating_sub(self.document_discount_amount)
    }

    /// True when any document-level discount takes something off
    pub fn has_document_discount(&self) -> bool {
        !self.discounts_total.is_zero() || !self.document_discount_amount.is_zero()
    }
}

/// One line item together with everything derived from it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedLine {
    pub item: LineItem,
    #[serde(flatten)]
    pub amounts: LineAmounts,
    pub tax: TaxOutcome,
    /// Discounted base plus tax
    #[serde(with = "crate::core::money::fixed_point")]
    pub line_total: Decimal,
}

/// Result of one aggregation: per-line figures and document totals from the same pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentComputation {
    pub regime: TaxRegime,
    pub lines: Vec<PricedLine>,
    pub totals: TotalsBreakdown,
}

impl DocumentComputation {
    /// True when any item or document-level discount is non-zero
    pub fn has_any_discount(&self) -> bool {
        self.totals.has_document_discount()
            || self.lines.iter().any(|line| !line.amounts.discount_amount.is_zero())
    }
}
