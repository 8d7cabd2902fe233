use actix_web::{delete, web, Responder};
use serde::Deserialize;

use crate::session::adapter::incoming::web::extractors::AdminSession;
use crate::shared::api::ApiResponse;
use crate::timeline::application::use_cases::delete_timeline_entry::DeleteTimelineEntryError;
use crate::AppState;

#[derive(Debug, Deserialize)]
struct DeleteTimelineQuery {
    id: Option<String>,
    #[serde(rename = "type")]
    entry_type: Option<String>,
}

#[delete("/api/timelines")]
pub async fn delete_timeline_entry_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    query: web::Query<DeleteTimelineQuery>,
) -> impl Responder {
    let Some(id) = query.id.as_deref().filter(|id| !id.is_empty()) else {
        return ApiResponse::bad_request("Timeline ID is required");
    };

    match data
        .delete_timeline_entry_use_case
        .execute(id, query.entry_type.as_deref())
        .await
    {
        Ok(()) => ApiResponse::message("Timeline entry deleted successfully"),
        Err(DeleteTimelineEntryError::NotFound) => {
            ApiResponse::not_found("Timeline entry not found")
        }
        Err(DeleteTimelineEntryError::RepositoryError(msg)) => {
            tracing::error!("failed to delete timeline entry: {msg}");
            ApiResponse::internal_error("Failed to delete timeline entry")
        }
    }
}
