pub mod error;
pub mod lenient;
pub mod money;

pub use error::{AppError, Result};
