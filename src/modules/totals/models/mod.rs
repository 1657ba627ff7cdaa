mod document_charge;
mod document_state;
mod totals_breakdown;

pub use document_charge::{sum_amounts, ChargeInput, DocumentCharge};
pub use document_state::{DocumentInput, DocumentState};
pub use totals_breakdown::{DocumentComputation, PricedLine, TotalsBreakdown};
