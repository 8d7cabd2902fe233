use actix_web::{get, web, Responder};

use crate::certificate::application::use_cases::fetch_certificates::FetchCertificatesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

// Public read: the site renders certificates without a session.
#[get("/api/certificates")]
pub async fn get_certificates_handler(data: web::Data<AppState>) -> impl Responder {
    match data.fetch_certificates_use_case.execute().await {
        Ok(certificates) => ApiResponse::success(certificates),
        Err(FetchCertificatesError::RepositoryError(msg)) => {
            tracing::error!("failed to fetch certificates: {msg}");
            ApiResponse::internal_error("Failed to fetch certificates")
        }
    }
}
