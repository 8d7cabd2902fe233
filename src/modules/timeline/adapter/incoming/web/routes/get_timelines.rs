use actix_web::{get, web, Responder};

use crate::shared::api::ApiResponse;
use crate::timeline::application::use_cases::fetch_timeline::FetchTimelineError;
use crate::AppState;

// Public read: the site renders the timeline without a session.
#[get("/api/timelines")]
pub async fn get_timelines_handler(data: web::Data<AppState>) -> impl Responder {
    match data.fetch_timeline_use_case.execute().await {
        Ok(entries) => ApiResponse::success(entries),
        Err(FetchTimelineError::RepositoryError(msg)) => {
            tracing::error!("failed to fetch timeline: {msg}");
            ApiResponse::internal_error("Failed to fetch timelines")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestBackend;
    use crate::tests::support::in_memory::{education_fixture, experience_fixture};
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_work_entries_are_listed_before_education() {
        let backend = TestBackend::new();
        backend
            .work
            .seed(vec![experience_fixture("work_1", "Engineer", 0)]);
        backend
            .education
            .seed(vec![education_fixture("education_1", "MIT", 0)]);

        let app = test::init_service(
            App::new()
                .app_data(backend.app_state())
                .service(get_timelines_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/timelines").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"][0]["type"], "work");
        assert_eq!(body["data"][0]["title"], "Engineer");
        assert_eq!(body["data"][1]["type"], "education");
        // Education rows share the work entries' wire keys.
        assert_eq!(body["data"][1]["company"], "MIT");
    }
}
