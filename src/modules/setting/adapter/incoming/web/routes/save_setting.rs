use actix_web::{post, web, Responder};
use serde::Deserialize;

use crate::session::adapter::incoming::web::extractors::AdminSession;
use crate::setting::application::use_cases::save_setting::SaveSettingError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
struct SaveSettingRequest {
    #[serde(default)]
    key: String,
    #[serde(default)]
    value: String,
}

#[post("/api/settings")]
pub async fn save_setting_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    payload: web::Json<SaveSettingRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    match data
        .save_setting_use_case
        .execute(&payload.key, &payload.value)
        .await
    {
        Ok(saved) => ApiResponse::success(saved),
        Err(SaveSettingError::Validation(msg)) => ApiResponse::bad_request(&msg),
        Err(SaveSettingError::RepositoryError(msg)) => {
            tracing::error!("failed to save setting: {msg}");
            ApiResponse::internal_error("Failed to save setting")
        }
    }
}
