use tracing::debug;

use crate::core::{AppError, Result};
use crate::modules::documents::models::SubmittedDocument;
use crate::modules::documents::services::amount_in_words::amount_in_words;
use crate::modules::line_items::{DiscountInput, LineItem, LineItemInput};
use crate::modules::taxes::Jurisdiction;
use crate::modules::totals::{
    ChargeInput, DocumentComputation, DocumentState, PricedLine, TotalsAggregator, TotalsBreakdown,
};

/// DraftSession keeps an editable document and its totals in sync
///
/// Every mutation normalizes its input and re-runs the full aggregation over the
/// whole document. Totals can only be read; there is no way to set them.
#[derive(Debug, Clone)]
pub struct DraftSession {
    aggregator: TotalsAggregator,
    state: DocumentState,
    computation: DocumentComputation,
}

impl DraftSession {
    pub fn new(aggregator: TotalsAggregator) -> Self {
        Self::with_state(aggregator, DocumentState::default())
    }

    /// Resume editing an existing document
    pub fn with_state(aggregator: TotalsAggregator, state: DocumentState) -> Self {
        let computation = aggregator.evaluate_state(&state);
        Self {
            aggregator,
            state,
            computation,
        }
    }

    pub fn state(&self) -> &DocumentState {
        &self.state
    }

    pub fn computation(&self) -> &DocumentComputation {
        &self.computation
    }

    pub fn totals(&self) -> &TotalsBreakdown {
        &self.computation.totals
    }

    pub fn lines(&self) -> &[PricedLine] {
        &self.computation.lines
    }

    pub fn add_item(&mut self, input: &LineItemInput) -> &TotalsBreakdown {
        self.state.items.push(input.normalize());
        self.recompute()
    }

    pub fn update_item(&mut self, index: usize, input: &LineItemInput) -> Result<&TotalsBreakdown> {
        let item = self.item_mut(index)?;
        *item = input.normalize();
        Ok(self.recompute())
    }

    pub fn remove_item(&mut self, index: usize) -> Result<LineItem> {
        self.item_mut(index)?;
        let removed = self.state.items.remove(index);
        self.recompute();
        Ok(removed)
    }

    pub fn set_charges(&mut self, charges: &[ChargeInput]) -> &TotalsBreakdown {
        self.state.extra_charges = charges.iter().map(ChargeInput::normalize).collect();
        self.recompute()
    }

    pub fn set_discounts(&mut self, discounts: &[ChargeInput]) -> &TotalsBreakdown {
        self.state.discounts = discounts.iter().map(ChargeInput::normalize).collect();
        self.recompute()
    }

    pub fn set_document_discount(&mut self, discount: Option<&DiscountInput>) -> &TotalsBreakdown {
        self.state.document_discount = discount.and_then(DiscountInput::normalize);
        self.recompute()
    }

    pub fn set_counterparty(&mut self, counterparty: Jurisdiction) -> &TotalsBreakdown {
        self.state.counterparty = counterparty;
        self.recompute()
    }

    /// Recompute one final time and hand back the record to persist
    pub fn submit(&self) -> Result<SubmittedDocument> {
        let computation = self.aggregator.evaluate_state(&self.state);
        let amount_in_words = amount_in_words(computation.totals.grand_total)?;

        Ok(SubmittedDocument {
            state: self.state.clone(),
            computation,
            amount_in_words,
            totals_matched_client: None,
        })
    }

    fn item_mut(&mut self, index: usize) -> Result<&mut LineItem> {
        let len = self.state.items.len();
        self.state.items.get_mut(index).ok_or_else(|| {
            AppError::validation(format!(
                "Line item index {} out of range ({} items)",
                index, len
            ))
        })
    }

    fn recompute(&mut self) -> &TotalsBreakdown {
        self.computation = self.aggregator.evaluate_state(&self.state);
        debug!(
            items = self.state.items.len(),
            grand_total = %self.computation.totals.grand_total,
            "Draft recomputed"
        );
        &self.computation.totals
    }
}

impl Default for DraftSession {
    fn default() -> Self {
        Self::new(TotalsAggregator::default())
    }
}
