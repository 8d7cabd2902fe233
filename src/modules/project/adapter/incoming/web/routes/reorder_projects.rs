use actix_web::{patch, web, Responder};
use serde::Deserialize;

use crate::project::application::use_cases::reorder_projects::ReorderProjectsError;
use crate::session::adapter::incoming::web::extractors::AdminSession;
use crate::shared::api::ApiResponse;
use crate::shared::ordering::OrderUpdate;
use crate::AppState;

#[derive(Debug, Deserialize)]
struct ReorderProjectsRequest {
    projects: Vec<OrderUpdate>,
}

#[patch("/api/projects")]
pub async fn reorder_projects_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    payload: web::Json<ReorderProjectsRequest>,
) -> impl Responder {
    match data
        .reorder_projects_use_case
        .execute(payload.into_inner().projects)
        .await
    {
        Ok(()) => ApiResponse::message("Projects reordered successfully"),
        Err(ReorderProjectsError::RepositoryError(msg)) => {
            tracing::error!("failed to reorder projects: {msg}");
            ApiResponse::internal_error("Failed to reorder projects")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestBackend;
    use crate::tests::support::in_memory::project_fixture;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_reorder_persists_the_full_permutation() {
        let backend = TestBackend::new();
        backend.projects.seed(vec![
            project_fixture("project_a", "A", 0),
            project_fixture("project_b", "B", 1),
        ]);

        let app = test::init_service(
            App::new()
                .app_data(backend.app_state())
                .app_data(backend.session_gate())
                .service(reorder_projects_handler),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri("/api/projects")
            .insert_header(("Authorization", "Bearer valid-session"))
            .set_json(serde_json::json!({
                "projects": [
                    {"id": "project_a", "order": 1},
                    {"id": "project_b", "order": 0},
                ]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);

        let mut rows = backend.projects.rows();
        rows.sort_by_key(|p| p.order);
        assert_eq!(rows[0].id, "project_b");
        assert_eq!(rows[1].id, "project_a");
    }
}
