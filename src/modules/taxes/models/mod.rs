mod jurisdiction;
mod tax_outcome;

pub use jurisdiction::Jurisdiction;
pub use tax_outcome::{TaxOutcome, TaxRegime};
