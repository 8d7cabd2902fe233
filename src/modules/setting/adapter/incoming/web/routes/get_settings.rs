use actix_web::{get, web, Responder};
use serde::Deserialize;

use crate::setting::application::use_cases::fetch_setting::FetchSettingError;
use crate::setting::application::use_cases::fetch_settings::FetchSettingsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
struct GetSettingsQuery {
    key: Option<String>,
}

// Public read. With `?key=` the response is the single value (or JSON
// null); without it, the entire key → value map.
#[get("/api/settings")]
pub async fn get_settings_handler(
    data: web::Data<AppState>,
    query: web::Query<GetSettingsQuery>,
) -> impl Responder {
    if let Some(key) = query.key.as_deref() {
        return match data.fetch_setting_use_case.execute(key).await {
            Ok(value) => ApiResponse::success(value),
            Err(FetchSettingError::RepositoryError(msg)) => {
                tracing::error!("failed to fetch setting '{key}': {msg}");
                ApiResponse::internal_error("Failed to fetch settings")
            }
        };
    }

    match data.fetch_settings_use_case.execute().await {
        Ok(map) => ApiResponse::success(map),
        Err(FetchSettingsError::RepositoryError(msg)) => {
            tracing::error!("failed to fetch settings: {msg}");
            ApiResponse::internal_error("Failed to fetch settings")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestBackend;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_without_key_the_whole_map_is_returned() {
        let backend = TestBackend::new();
        backend.settings.set("residence", "Berlin").await;
        backend.settings.set("available", "true").await;

        let app = test::init_service(
            App::new()
                .app_data(backend.app_state())
                .service(get_settings_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/settings").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["residence"], "Berlin");
        assert_eq!(body["data"]["available"], "true");
    }

    #[actix_web::test]
    async fn test_with_key_a_single_value_is_returned() {
        let backend = TestBackend::new();
        backend.settings.set("residence", "Berlin").await;

        let app = test::init_service(
            App::new()
                .app_data(backend.app_state())
                .service(get_settings_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/settings?key=residence")
            .to_request();
        let body: serde_json::Value =
            test::read_body_json(test::call_service(&app, req).await).await;

        assert_eq!(body["data"], "Berlin");
    }

    #[actix_web::test]
    async fn test_unknown_key_yields_null_data() {
        let backend = TestBackend::new();
        let app = test::init_service(
            App::new()
                .app_data(backend.app_state())
                .service(get_settings_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/settings?key=missing")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert!(body["data"].is_null());
    }
}
