use actix_web::{patch, web, Responder};
use serde::Deserialize;

use crate::certificate::application::use_cases::reorder_certificates::ReorderCertificatesError;
use crate::session::adapter::incoming::web::extractors::AdminSession;
use crate::shared::api::ApiResponse;
use crate::shared::ordering::OrderUpdate;
use crate::AppState;

#[derive(Debug, Deserialize)]
struct ReorderCertificatesRequest {
    certificates: Vec<OrderUpdate>,
}

#[patch("/api/certificates")]
pub async fn reorder_certificates_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    payload: web::Json<ReorderCertificatesRequest>,
) -> impl Responder {
    match data
        .reorder_certificates_use_case
        .execute(payload.into_inner().certificates)
        .await
    {
        Ok(()) => ApiResponse::message("Certificates reordered successfully"),
        Err(ReorderCertificatesError::RepositoryError(msg)) => {
            tracing::error!("failed to reorder certificates: {msg}");
            ApiResponse::internal_error("Failed to reorder certificates")
        }
    }
}
