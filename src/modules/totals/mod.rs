pub mod models;
pub mod services;

pub use models::{
    ChargeInput, DocumentCharge, DocumentComputation, DocumentInput, DocumentState, PricedLine,
    TotalsBreakdown,
};
pub use services::TotalsAggregator;
