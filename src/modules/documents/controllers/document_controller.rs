use actix_web::{http::header::ContentType, web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::documents::models::{DocumentKind, RenderRequest, SubmitRequest};
use crate::modules::documents::services::DocumentService;
use crate::modules::totals::DocumentInput;

/// Recompute totals for the current editing state
/// POST /documents/totals
pub async fn compute_totals(
    service: web::Data<DocumentService>,
    request: web::Json<DocumentInput>,
) -> Result<HttpResponse, AppError> {
    let computed = service.compute(&request)?;

    Ok(HttpResponse::Ok().json(computed))
}

/// Authoritative recomputation before the document is persisted
/// POST /documents/submit
pub async fn submit_document(
    service: web::Data<DocumentService>,
    request: web::Json<SubmitRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let submitted = service.submit(&request.document, request.claimed_totals.as_ref())?;

    Ok(HttpResponse::Ok().json(submitted))
}

/// Render printable markup
/// POST /documents/{kind}/render
pub async fn render_document(
    service: web::Data<DocumentService>,
    path: web::Path<String>,
    request: web::Json<RenderRequest>,
) -> Result<HttpResponse, AppError> {
    let kind: DocumentKind = path.into_inner().parse().map_err(AppError::Validation)?;
    let request = request.into_inner();

    let markup = service.render(
        kind,
        &request.document,
        &request.party,
        &request.meta,
        &request.options,
    )?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(markup))
}

/// Configure document routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/documents")
            .route("/totals", web::post().to(compute_totals))
            .route("/submit", web::post().to(submit_document))
            .route("/{kind}/render", web::post().to(render_document)),
    );
}
