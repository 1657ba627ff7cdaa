//! Quoteflow document computation and rendering engine
//!
//! Turns priced line items, charges, discounts and a counterparty jurisdiction
//! into reconciled totals, and binds those totals into printable quotations,
//! proforma invoices and purchase orders.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::documents;
pub use modules::line_items;
pub use modules::taxes;
pub use modules::totals;
