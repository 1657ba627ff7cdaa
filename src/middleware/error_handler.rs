use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::core::error::AppError;

/// Turn body decoding failures into the standard error envelope
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::warn!(path = %req.path(), error = %err, "Rejected request body");
    AppError::validation(format!("Invalid request body: {}", err)).into()
}

/// JSON extractor configuration shared by every route
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(1024 * 1024)
        .error_handler(json_error_handler)
}
