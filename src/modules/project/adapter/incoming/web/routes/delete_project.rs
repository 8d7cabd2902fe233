use actix_web::{delete, web, Responder};
use serde::Deserialize;

use crate::project::application::use_cases::delete_project::DeleteProjectError;
use crate::session::adapter::incoming::web::extractors::AdminSession;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
struct DeleteProjectQuery {
    id: Option<String>,
}

#[delete("/api/projects")]
pub async fn delete_project_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    query: web::Query<DeleteProjectQuery>,
) -> impl Responder {
    let Some(id) = query.id.as_deref().filter(|id| !id.is_empty()) else {
        return ApiResponse::bad_request("Project ID is required");
    };

    match data.delete_project_use_case.execute(id).await {
        Ok(()) => ApiResponse::message("Project deleted successfully"),
        Err(DeleteProjectError::NotFound) => ApiResponse::not_found("Project not found"),
        Err(DeleteProjectError::RepositoryError(msg)) => {
            tracing::error!("failed to delete project: {msg}");
            ApiResponse::internal_error("Failed to delete project")
        }
    }
}
