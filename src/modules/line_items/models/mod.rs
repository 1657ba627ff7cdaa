mod line_item;

pub use line_item::{Discount, DiscountInput, DiscountKind, LineItem, LineItemInput};
