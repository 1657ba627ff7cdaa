use serde::{Deserialize, Serialize};

/// The three printable document kinds sharing one layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    #[serde(rename = "quotation")]
    Quotation,
    #[serde(rename = "proforma")]
    ProformaInvoice,
    #[serde(rename = "purchaseOrder")]
    PurchaseOrder,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 3] = [
        DocumentKind::Quotation,
        DocumentKind::ProformaInvoice,
        DocumentKind::PurchaseOrder,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            DocumentKind::Quotation => "Quotation",
            DocumentKind::ProformaInvoice => "Proforma Invoice",
            DocumentKind::PurchaseOrder => "Purchase Order",
        }
    }

    pub fn number_label(&self) -> &'static str {
        match self {
            DocumentKind::Quotation => "Quotation No.",
            DocumentKind::ProformaInvoice => "Proforma No.",
            DocumentKind::PurchaseOrder => "PO No.",
        }
    }

    /// Heading above the counterparty block
    pub fn party_heading(&self) -> &'static str {
        match self {
            DocumentKind::Quotation => "Quotation For",
            DocumentKind::ProformaInvoice => "Bill To",
            DocumentKind::PurchaseOrder => "Vendor",
        }
    }

    /// Label of the secondary date
    pub fn validity_label(&self) -> &'static str {
        match self {
            DocumentKind::Quotation => "Valid Until",
            DocumentKind::ProformaInvoice => "Due Date",
            DocumentKind::PurchaseOrder => "Delivery By",
        }
    }

    pub fn default_disclaimer(&self) -> &'static str {
        match self {
            DocumentKind::Quotation => {
                "This is a computer generated quotation. Prices are subject to change after the validity date."
            }
            DocumentKind::ProformaInvoice => {
                "This is a proforma invoice and not a demand for payment under tax law."
            }
            DocumentKind::PurchaseOrder => {
                "Please quote the PO number on all invoices, delivery challans and correspondence."
            }
        }
    }

    /// Stable slug used in URLs and CSS classes
    pub fn slug(&self) -> &'static str {
        match self {
            DocumentKind::Quotation => "quotation",
            DocumentKind::ProformaInvoice => "proforma",
            DocumentKind::PurchaseOrder => "purchaseOrder",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl std::str::FromStr for DocumentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "quotation" | "quote" => Ok(DocumentKind::Quotation),
            "proforma" | "proformainvoice" => Ok(DocumentKind::ProformaInvoice),
            "purchaseorder" | "po" => Ok(DocumentKind::PurchaseOrder),
            _ => Err(format!("Invalid document kind: {}", s)),
        }
    }
}
