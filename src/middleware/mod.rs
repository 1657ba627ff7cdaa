pub mod error_handler;

pub use error_handler::{json_config, json_error_handler};
