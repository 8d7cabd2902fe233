use actix_web::{post, web, Responder};
use serde::Deserialize;

use crate::certificate::application::ports::outgoing::CertificateData;
use crate::certificate::application::use_cases::create_certificate::CreateCertificateError;
use crate::session::adapter::incoming::web::extractors::AdminSession;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateCertificateRequest {
    // Blank and absent are both "missing" to validation.
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub issue_date: String,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
    pub image: Option<String>,
}

#[post("/api/certificates")]
pub async fn create_certificate_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    payload: web::Json<CreateCertificateRequest>,
) -> impl Responder {
    let payload = payload.into_inner();
    let certificate = CertificateData {
        title: payload.title,
        issuer: payload.issuer,
        issue_date: payload.issue_date,
        credential_id: payload.credential_id,
        credential_url: payload.credential_url,
        image: payload.image,
    };

    match data.create_certificate_use_case.execute(certificate).await {
        Ok(created) => ApiResponse::created(created),
        Err(CreateCertificateError::Validation(msg)) => ApiResponse::bad_request(&msg),
        Err(CreateCertificateError::RepositoryError(msg)) => {
            tracing::error!("failed to create certificate: {msg}");
            ApiResponse::internal_error("Failed to create certificate")
        }
    }
}
