use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money;
use crate::modules::line_items::models::LineItem;

/// Amounts derived from one line item before tax
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineAmounts {
    /// quantity × unit rate
    #[serde(with = "crate::core::money::fixed_point")]
    pub base: Decimal,

    /// What the item discount actually took off (never more than `base`)
    #[serde(with = "crate::core::money::fixed_point")]
    pub discount_amount: Decimal,

    /// Taxable base after the item discount, never negative
    #[serde(with = "crate::core::money::fixed_point")]
    pub discounted_base: Decimal,
}

/// LineItemCalculator derives the taxable base of a single item
///
/// The item discount is applied to `quantity × unit_rate` only: never after
/// tax and never combined with the document-level discount.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineItemCalculator;

impl LineItemCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn compute(&self, item: &LineItem) -> LineAmounts {
        let base = money::round(money::mul(item.quantity, item.unit_rate));

        let requested_off = item
            .item_discount
            .map(|discount| money::round(discount.amount_off(base)))
            .unwrap_or(Decimal::ZERO);

        // a discount larger than the base zeroes the line instead of going negative
        let discounted_base = base.saturating_sub(requested_off).max(Decimal::ZERO);

        LineAmounts {
            base,
            discount_amount: base - discounted_base,
            discounted_base,
        }
    }
}
