use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};

use crate::project::application::ports::outgoing::ProjectData;
use crate::project::application::use_cases::update_project::UpdateProjectError;
use crate::session::adapter::incoming::web::extractors::AdminSession;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateProjectRequest {
    #[serde(default)]
    pub id: String,
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

#[put("/api/projects")]
pub async fn update_project_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    payload: web::Json<UpdateProjectRequest>,
) -> impl Responder {
    let payload = payload.into_inner();
    let project = ProjectData {
        title: payload.title.clone(),
        description: payload.description.clone(),
        image: payload.image.clone(),
        technologies: payload.technologies.clone(),
        github_url: payload.github_url.clone(),
        live_url: payload.live_url.clone(),
        objectives: payload.objectives.clone(),
        key_challenges: payload.key_challenges.clone(),
        featured: payload.featured,
    };

    match data
        .update_project_use_case
        .execute(&payload.id, project)
        .await
    {
        // Echo the submitted fields, matching the create contract.
        Ok(()) => ApiResponse::success(payload),
        Err(UpdateProjectError::Validation(msg)) => ApiResponse::bad_request(&msg),
        Err(UpdateProjectError::NotFound) => ApiResponse::not_found("Project not found"),
        Err(UpdateProjectError::RepositoryError(msg)) => {
            tracing::error!("failed to update project: {msg}");
            ApiResponse::internal_error("Failed to update project")
        }
    }
}
