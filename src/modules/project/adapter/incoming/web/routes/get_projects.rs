use actix_web::{get, web, Responder};

use crate::project::application::use_cases::fetch_projects::FetchProjectsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

// Public read: the site renders projects without a session.
#[get("/api/projects")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.fetch_projects_use_case.execute().await {
        Ok(projects) => ApiResponse::success(projects),
        Err(FetchProjectsError::RepositoryError(msg)) => {
            tracing::error!("failed to fetch projects: {msg}");
            ApiResponse::internal_error("Failed to fetch projects")
        }
    }
}
