use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};

use crate::certificate::application::ports::outgoing::CertificateData;
use crate::certificate::application::use_cases::update_certificate::UpdateCertificateError;
use crate::session::adapter::incoming::web::extractors::AdminSession;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateCertificateRequest {
    #[serde(default)]
    pub id: String,
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

#[put("/api/certificates")]
pub async fn update_certificate_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    payload: web::Json<UpdateCertificateRequest>,
) -> impl Responder {
    let payload = payload.into_inner();
    let certificate = CertificateData {
        title: payload.title.clone(),
        issuer: payload.issuer.clone(),
        issue_date: payload.issue_date.clone(),
        credential_id: payload.credential_id.clone(),
        credential_url: payload.credential_url.clone(),
        image: payload.image.clone(),
    };

    match data
        .update_certificate_use_case
        .execute(&payload.id, certificate)
        .await
    {
        // Echo the submitted fields, matching the create contract.
        Ok(()) => ApiResponse::success(payload),
        Err(UpdateCertificateError::Validation(msg)) => ApiResponse::bad_request(&msg),
        Err(UpdateCertificateError::NotFound) => ApiResponse::not_found("Certificate not found"),
        Err(UpdateCertificateError::RepositoryError(msg)) => {
            tracing::error!("failed to update certificate: {msg}");
            ApiResponse::internal_error("Failed to update certificate")
        }
    }
}
