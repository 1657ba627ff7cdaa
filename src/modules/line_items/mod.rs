pub mod models;
pub mod services;

pub use models::{Discount, DiscountInput, DiscountKind, LineItem, LineItemInput};
pub use services::{LineAmounts, LineItemCalculator};
