use serde::{Deserialize, Serialize};

use super::{DocumentMeta, PartyInfo, RenderOptions};
use crate::modules::totals::{DocumentComputation, DocumentInput, DocumentState, TotalsBreakdown};

/// Interactive recomputation result returned to the editing layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedDocument {
    #[serde(flatten)]
    pub computation: DocumentComputation,
    pub amount_in_words: String,
}

/// Request body for POST /documents/submit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    #[serde(flatten)]
    pub document: DocumentInput,
    /// Totals the client last displayed; only compared, never trusted
    #[serde(default)]
    pub claimed_totals: Option<TotalsBreakdown>,
}

/// The authoritative record handed to persistence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedDocument {
    pub state: DocumentState,
    pub computation: DocumentComputation,
    pub amount_in_words: String,
    /// `None` when the client did not send its totals
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub totals_matched_client: Option<bool>,
}

impl SubmittedDocument {
    pub fn totals(&self) -> &TotalsBreakdown {
        &self.computation.totals
    }
}

/// Request body for POST /documents/{kind}/render
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderRequest {
    pub document: DocumentInput,
    pub party: PartyInfo,
    pub meta: DocumentMeta,
    pub options: RenderOptions,
}
