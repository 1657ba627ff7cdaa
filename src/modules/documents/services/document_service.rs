use tracing::{info, warn};

use crate::config::BusinessConfig;
use crate::core::Result;
use crate::modules::documents::models::{
    ComputedDocument, DocumentKind, DocumentMeta, PartyInfo, RenderOptions, SubmittedDocument,
};
use crate::modules::documents::services::amount_in_words::amount_in_words;
use crate::modules::documents::services::document_renderer::DocumentRenderer;
use crate::modules::totals::{DocumentComputation, DocumentInput, TotalsAggregator, TotalsBreakdown};

/// Service hosting the computation engine behind the HTTP surface
///
/// Every operation normalizes its input once and runs exactly one aggregation;
/// whatever the client computed is only ever compared, never stored.
#[derive(Debug, Clone)]
pub struct DocumentService {
    aggregator: TotalsAggregator,
    renderer: DocumentRenderer,
}

impl DocumentService {
    pub fn new(config: BusinessConfig) -> Self {
        Self {
            aggregator: TotalsAggregator::from_config(&config),
            renderer: DocumentRenderer::new(config),
        }
    }

    pub fn aggregator(&self) -> &TotalsAggregator {
        &self.aggregator
    }

    pub fn renderer(&self) -> &DocumentRenderer {
        &self.renderer
    }

    /// Interactive recomputation
    pub fn compute(&self, input: &DocumentInput) -> Result<ComputedDocument> {
        let computation = self.aggregator.evaluate_state(&input.normalize());
        let amount_in_words = amount_in_words(computation.totals.grand_total)?;

        Ok(ComputedDocument {
            computation,
            amount_in_words,
        })
    }

    /// Authoritative recomputation right before persistence
    pub fn submit(
        &self,
        input: &DocumentInput,
        claimed: Option<&TotalsBreakdown>,
    ) -> Result<SubmittedDocument> {
        let state = input.normalize();
        let computation = self.aggregator.evaluate_state(&state);
        let amount_in_words = amount_in_words(computation.totals.grand_total)?;

        let totals_matched_client = claimed.map(|claimed| *claimed == computation.totals);
        if totals_matched_client == Some(false) {
            warn!(
                claimed_grand_total = ?claimed.map(|c| c.grand_total),
                grand_total = %computation.totals.grand_total,
                "Client totals differ from authoritative recomputation, using recomputed totals"
            );
        }

        info!(
            items = state.items.len(),
            regime = %computation.regime,
            grand_total = %computation.totals.grand_total,
            "Document submitted"
        );

        Ok(SubmittedDocument {
            state,
            computation,
            amount_in_words,
            totals_matched_client,
        })
    }

    /// Evaluate and render in one pass so the markup matches the figures exactly
    pub fn render(
        &self,
        kind: DocumentKind,
        input: &DocumentInput,
        party: &PartyInfo,
        meta: &DocumentMeta,
        options: &RenderOptions,
    ) -> Result<String> {
        let computation: DocumentComputation = self.aggregator.evaluate_state(&input.normalize());
        self.renderer.render(kind, &computation, party, meta, options)
    }
}

impl Default for DocumentService {
    fn default() -> Self {
        Self::new(BusinessConfig::default())
    }
}
