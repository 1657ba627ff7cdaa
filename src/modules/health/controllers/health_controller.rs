use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::modules::documents::DocumentService;

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub service: String,
    pub version: String,
}

/// Readiness probe response structure
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessResponse {
    pub ready: bool,
    pub home_jurisdiction: String,
    pub composite_tax_rate: String,
}

/// GET /health - Liveness probe
pub async fn health_check() -> impl Responder {
    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    HttpResponse::Ok().json(response)
}

/// GET /ready - Readiness probe
/// Reports the tax configuration the engine is running with
pub async fn readiness_check(service: web::Data<DocumentService>) -> impl Responder {
    let resolver = service.aggregator().resolver();
    let response = ReadinessResponse {
        ready: true,
        home_jurisdiction: resolver.home().to_string(),
        composite_tax_rate: resolver.composite_rate().normalize().to_string(),
    };

    HttpResponse::Ok().json(response)
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check));
}
