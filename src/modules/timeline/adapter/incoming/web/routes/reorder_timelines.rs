use actix_web::{patch, web, Responder};
use serde::Deserialize;

use crate::session::adapter::incoming::web::extractors::AdminSession;
use crate::shared::api::ApiResponse;
use crate::shared::ordering::OrderUpdate;
use crate::timeline::application::use_cases::reorder_timeline::ReorderTimelineError;
use crate::AppState;

#[derive(Debug, Deserialize)]
struct ReorderTimelinesRequest {
    timelines: Vec<OrderUpdate>,
}

#[patch("/api/timelines")]
pub async fn reorder_timelines_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    payload: web::Json<ReorderTimelinesRequest>,
) -> impl Responder {
    match data
        .reorder_timeline_use_case
        .execute(payload.into_inner().timelines)
        .await
    {
        Ok(()) => ApiResponse::message("Timelines reordered successfully"),
        Err(ReorderTimelineError::RepositoryError(msg)) => {
            tracing::error!("failed to reorder timelines: {msg}");
            ApiResponse::internal_error("Failed to reorder timelines")
        }
    }
}
