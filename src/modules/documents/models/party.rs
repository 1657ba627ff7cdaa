use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::modules::taxes::Jurisdiction;

/// Counterparty (customer or vendor) as resolved by the directory lookup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartyInfo {
    pub name: String,
    pub address: String,
    pub jurisdiction: Jurisdiction,
    /// Tax registration number (GSTIN)
    pub gstin: Option<String>,
    pub pan: Option<String>,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Identification and free text printed on a document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentMeta {
    pub number: String,
    pub date: Option<NaiveDate>,
    /// Validity, due or delivery date depending on the kind
    pub valid_until: Option<NaiveDate>,
    /// Customer reference, enquiry number, etc.
    pub reference: Option<String>,
    pub terms: Vec<String>,
    pub notes: Option<String>,
}
