use actix_web::{delete, web, Responder};
use serde::Deserialize;

use crate::certificate::application::use_cases::delete_certificate::DeleteCertificateError;
use crate::session::adapter::incoming::web::extractors::AdminSession;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
struct DeleteCertificateQuery {
    id: Option<String>,
}

#[delete("/api/certificates")]
pub async fn delete_certificate_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    query: web::Query<DeleteCertificateQuery>,
) -> impl Responder {
    let Some(id) = query.id.as_deref().filter(|id| !id.is_empty()) else {
        return ApiResponse::bad_request("Certificate ID is required");
    };

    match data.delete_certificate_use_case.execute(id).await {
        Ok(()) => ApiResponse::message("Certificate deleted successfully"),
        Err(DeleteCertificateError::NotFound) => ApiResponse::not_found("Certificate not found"),
        Err(DeleteCertificateError::RepositoryError(msg)) => {
            tracing::error!("failed to delete certificate: {msg}");
            ApiResponse::internal_error("Failed to delete certificate")
        }
    }
}
