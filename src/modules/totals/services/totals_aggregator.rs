use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::BusinessConfig;
use crate::core::money;
use crate::modules::line_items::{Discount, DiscountKind, LineItem, LineItemCalculator};
use crate::modules::taxes::{Jurisdiction, TaxOutcome, TaxRegime, TaxRuleResolver};
use crate::modules::totals::models::{
    sum_amounts, DocumentCharge, DocumentComputation, DocumentState, PricedLine, TotalsBreakdown,
};

/// TotalsAggregator is the single source of truth for document totals
///
/// Pure and stateless beyond its configuration: the same inputs always give
/// the same breakdown, so it is recomputed from scratch on every edit and once
/// more at submission instead of patching a stored total.
#[derive(Debug, Clone)]
pub struct TotalsAggregator {
    calculator: LineItemCalculator,
    resolver: TaxRuleResolver,
}

impl TotalsAggregator {
    pub fn new(resolver: TaxRuleResolver) -> Self {
        Self {
            calculator: LineItemCalculator::new(),
            resolver,
        }
    }

    pub fn from_config(config: &BusinessConfig) -> Self {
        Self::new(TaxRuleResolver::from_config(config))
    }

    pub fn resolver(&self) -> &TaxRuleResolver {
        &self.resolver
    }

    /// Price a single item for a counterparty, as done for interactive edits
    pub fn price_line(&self, item: &LineItem, counterparty: &Jurisdiction) -> PricedLine {
        self.price_line_under(self.resolver.regime(counterparty), item)
    }

    fn price_line_under(&self, regime: TaxRegime, item: &LineItem) -> PricedLine {
        let amounts = self.calculator.compute(item);
        let tax = self.resolver.apply(regime, amounts.discounted_base);
        PricedLine {
            item: item.clone(),
            amounts,
            tax,
            line_total: amounts.discounted_base.saturating_add(tax.total()),
        }
    }

    /// Totals only
    pub fn aggregate(
        &self,
        items: &[LineItem],
        charges: &[DocumentCharge],
        discounts: &[DocumentCharge],
        document_discount: Option<Discount>,
        counterparty: &Jurisdiction,
    ) -> TotalsBreakdown {
        self.evaluate(items, charges, discounts, document_discount, counterparty)
            .totals
    }

    /// Per-line figures and totals from one pass
    pub fn evaluate(
        &self,
        items: &[LineItem],
        charges: &[DocumentCharge],
        discounts: &[DocumentCharge],
        document_discount: Option<Discount>,
        counterparty: &Jurisdiction,
    ) -> DocumentComputation {
        let regime = self.resolver.regime(counterparty);

        let lines: Vec<PricedLine> = items
            .iter()
            .map(|item| self.price_line_under(regime, item))
            .collect();

        let taxable_subtotal = money::sum(lines.iter().map(|line| line.amounts.discounted_base));
        let taxes: TaxOutcome = lines.iter().map(|line| line.tax).sum();
        let extra_charges_total = sum_amounts(charges);
        let discounts_total = sum_amounts(discounts);

        // a percentage document discount applies to subtotal + taxes + extra charges
        let pre_discount_total = money::sum([taxable_subtotal, taxes.total(), extra_charges_total]);
        let document_discount_amount = document_discount
            .map(|discount| document_discount_amount(discount, pre_discount_total))
            .unwrap_or(Decimal::ZERO);

        let unclamped = pre_discount_total
            .saturating_sub(discounts_total)
            .saturating_sub(document_discount_amount);
        if unclamped < Decimal::ZERO {
            warn!(
                unclamped_total = %unclamped,
                discounts_total = %discounts_total,
                document_discount = %document_discount_amount,
                "Discounts exceed document total, clamping grand total to zero"
            );
        }

        let totals = TotalsBreakdown {
            taxable_subtotal,
            split_tax_a_total: taxes.split_tax_a,
            split_tax_b_total: taxes.split_tax_b,
            unified_tax_total: taxes.unified_tax,
            extra_charges_total,
            discounts_total,
            document_discount_amount,
            grand_total: unclamped.max(Decimal::ZERO),
        };

        debug!(
            items = lines.len(),
            regime = %regime,
            grand_total = %totals.grand_total,
            "Aggregated document totals"
        );

        DocumentComputation {
            regime,
            lines,
            totals,
        }
    }

    pub fn evaluate_state(&self, state: &DocumentState) -> DocumentComputation {
        self.evaluate(
            &state.items,
            &state.extra_charges,
            &state.discounts,
            state.document_discount,
            &state.counterparty,
        )
    }
}

impl Default for TotalsAggregator {
    fn default() -> Self {
        Self::new(TaxRuleResolver::default())
    }
}

fn document_discount_amount(discount: Discount, pre_discount_total: Decimal) -> Decimal {
    match discount.kind {
        DiscountKind::Percentage => money::round(money::percent_of(pre_discount_total, discount.value)),
        DiscountKind::Amount => money::round(discount.value),
    }
}
