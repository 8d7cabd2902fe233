use actix_web::{put, web, Responder};
use serde::Deserialize;

use crate::session::adapter::incoming::web::extractors::AdminSession;
use crate::shared::api::ApiResponse;
use crate::timeline::application::use_cases::update_timeline_entry::UpdateTimelineEntryError;
use crate::AppState;

use super::create_timeline_entry::TimelineEntryRequest;

#[derive(Debug, Deserialize)]
struct UpdateTimelineEntryRequest {
    #[serde(default)]
    id: String,
    #[serde(flatten)]
    entry: TimelineEntryRequest,
}

#[put("/api/timelines")]
pub async fn update_timeline_entry_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    payload: web::Json<UpdateTimelineEntryRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    match data
        .update_timeline_entry_use_case
        .execute(&payload.id, payload.entry.into_draft())
        .await
    {
        Ok(()) => ApiResponse::message("Timeline entry updated successfully"),
        Err(UpdateTimelineEntryError::Validation(msg)) => ApiResponse::bad_request(&msg),
        Err(UpdateTimelineEntryError::NotFound) => {
            ApiResponse::not_found("Timeline entry not found")
        }
        Err(UpdateTimelineEntryError::RepositoryError(msg)) => {
            tracing::error!("failed to update timeline entry: {msg}");
            ApiResponse::internal_error("Failed to update timeline entry")
        }
    }
}
