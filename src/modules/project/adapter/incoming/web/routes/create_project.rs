use actix_web::{post, web, Responder};
use serde::Deserialize;

use crate::project::application::ports::outgoing::ProjectData;
use crate::project::application::use_cases::create_project::CreateProjectError;
use crate::session::adapter::incoming::web::extractors::AdminSession;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateProjectRequest {
    // Blank and absent are both "missing" to validation.
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub objectives: Option<Vec<String>>,
    pub key_challenges: Option<Vec<String>>,
    #[serde(default)]
    pub featured: bool,
}

#[post("/api/projects")]
pub async fn create_project_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    payload: web::Json<CreateProjectRequest>,
) -> impl Responder {
    let payload = payload.into_inner();
    let project = ProjectData {
        title: payload.title,
        description: payload.description,
        image: payload.image,
        technologies: payload.technologies,
        github_url: payload.github_url,
        live_url: payload.live_url,
        objectives: payload.objectives,
        key_challenges: payload.key_challenges,
        featured: payload.featured,
    };

    match data.create_project_use_case.execute(project).await {
        Ok(created) => ApiResponse::created(created),
        Err(CreateProjectError::Validation(msg)) => ApiResponse::bad_request(&msg),
        Err(CreateProjectError::RepositoryError(msg)) => {
            tracing::error!("failed to create project: {msg}");
            ApiResponse::internal_error("Failed to create project")
        }
    }
}
