pub mod models;
pub mod services;

pub use models::{Jurisdiction, TaxOutcome, TaxRegime};
pub use services::TaxRuleResolver;
