pub mod documents;
pub mod health;
pub mod line_items;
pub mod taxes;
pub mod totals;
