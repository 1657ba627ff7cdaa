use serde::{Deserialize, Serialize};

/// Optional sections of a rendered document
///
/// Each flag only adds or removes a markup block; none of them touch the numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    pub show_header: bool,
    pub show_bank_details: bool,
    pub show_digital_signature: bool,
    /// Company GSTIN in the header
    pub show_gst_number: bool,
    pub show_party_gstin: bool,
    pub show_hsn_sac: bool,
    /// Discount column; still hidden when nothing is discounted
    pub show_discount_column: bool,
    pub show_footer_disclaimer: bool,
    pub show_amount_in_words: bool,
    pub show_terms: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_header: true,
            show_bank_details: true,
            show_digital_signature: true,
            show_gst_number: true,
            show_party_gstin: true,
            show_hsn_sac: true,
            show_discount_column: true,
            show_footer_disclaimer: true,
            show_amount_in_words: true,
            show_terms: true,
        }
    }
}

impl RenderOptions {
    /// Everything off; useful as a base for plain layouts
    pub fn minimal() -> Self {
        Self {
            show_header: false,
            show_bank_details: false,
            show_digital_signature: false,
            show_gst_number: false,
            show_party_gstin: false,
            show_hsn_sac: false,
            show_discount_column: false,
            show_footer_disclaimer: false,
            show_amount_in_words: false,
            show_terms: false,
        }
    }
}
