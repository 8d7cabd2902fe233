pub mod modules;
pub use modules::certificate;
pub use modules::media;
pub use modules::project;
pub use modules::session;
pub use modules::setting;
pub use modules::timeline;
pub mod health;
pub mod shared;

use crate::certificate::adapter::outgoing::CertificateRepositoryPostgres;
use crate::certificate::application::use_cases::{
    create_certificate::{CreateCertificateUseCase, ICreateCertificateUseCase},
    delete_certificate::{DeleteCertificateUseCase, IDeleteCertificateUseCase},
    fetch_certificates::{FetchCertificatesUseCase, IFetchCertificatesUseCase},
    reorder_certificates::{IReorderCertificatesUseCase, ReorderCertificatesUseCase},
    update_certificate::{IUpdateCertificateUseCase, UpdateCertificateUseCase},
};

use crate::media::adapter::outgoing::{AssetStoreConfig, AssetStoreHttp};
use crate::media::application::ports::outgoing::AssetStore;
use crate::media::application::use_cases::upload_asset::{IUploadAssetUseCase, UploadAssetUseCase};

use crate::project::adapter::outgoing::ProjectRepositoryPostgres;
use crate::project::application::use_cases::{
    create_project::{CreateProjectUseCase, ICreateProjectUseCase},
    delete_project::{DeleteProjectUseCase, IDeleteProjectUseCase},
    fetch_projects::{FetchProjectsUseCase, IFetchProjectsUseCase},
    reorder_projects::{IReorderProjectsUseCase, ReorderProjectsUseCase},
    update_project::{IUpdateProjectUseCase, UpdateProjectUseCase},
};

use crate::session::adapter::outgoing::SessionGatePostgres;
use crate::session::application::ports::outgoing::SessionGate;

use crate::setting::adapter::outgoing::SettingRepositoryPostgres;
use crate::setting::application::use_cases::{
    fetch_setting::{FetchSettingUseCase, IFetchSettingUseCase},
    fetch_settings::{FetchSettingsUseCase, IFetchSettingsUseCase},
    save_setting::{ISaveSettingUseCase, SaveSettingUseCase},
};

use crate::timeline::adapter::outgoing::{
    EducationRepositoryPostgres, ExperienceRepositoryPostgres,
};
use crate::timeline::application::use_cases::{
    create_timeline_entry::{CreateTimelineEntryUseCase, ICreateTimelineEntryUseCase},
    delete_timeline_entry::{DeleteTimelineEntryUseCase, IDeleteTimelineEntryUseCase},
    fetch_timeline::{FetchTimelineUseCase, IFetchTimelineUseCase},
    reorder_timeline::{IReorderTimelineUseCase, ReorderTimelineUseCase},
    update_timeline_entry::{IUpdateTimelineEntryUseCase, UpdateTimelineEntryUseCase},
};

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub fetch_projects_use_case: Arc<dyn IFetchProjectsUseCase + Send + Sync>,
    pub create_project_use_case: Arc<dyn ICreateProjectUseCase + Send + Sync>,
    pub update_project_use_case: Arc<dyn IUpdateProjectUseCase + Send + Sync>,
    pub delete_project_use_case: Arc<dyn IDeleteProjectUseCase + Send + Sync>,
    pub reorder_projects_use_case: Arc<dyn IReorderProjectsUseCase + Send + Sync>,

    pub fetch_certificates_use_case: Arc<dyn IFetchCertificatesUseCase + Send + Sync>,
    pub create_certificate_use_case: Arc<dyn ICreateCertificateUseCase + Send + Sync>,
    pub update_certificate_use_case: Arc<dyn IUpdateCertificateUseCase + Send + Sync>,
    pub delete_certificate_use_case: Arc<dyn IDeleteCertificateUseCase + Send + Sync>,
    pub reorder_certificates_use_case: Arc<dyn IReorderCertificatesUseCase + Send + Sync>,

    pub fetch_timeline_use_case: Arc<dyn IFetchTimelineUseCase + Send + Sync>,
    pub create_timeline_entry_use_case: Arc<dyn ICreateTimelineEntryUseCase + Send + Sync>,
    pub update_timeline_entry_use_case: Arc<dyn IUpdateTimelineEntryUseCase + Send + Sync>,
    pub delete_timeline_entry_use_case: Arc<dyn IDeleteTimelineEntryUseCase + Send + Sync>,
    pub reorder_timeline_use_case: Arc<dyn IReorderTimelineUseCase + Send + Sync>,

    pub fetch_settings_use_case: Arc<dyn IFetchSettingsUseCase + Send + Sync>,
    pub fetch_setting_use_case: Arc<dyn IFetchSettingUseCase + Send + Sync>,
    pub save_setting_use_case: Arc<dyn ISaveSettingUseCase + Send + Sync>,

    pub upload_asset_use_case: Arc<dyn IUploadAssetUseCase + Send + Sync>,
}

#[actix_web::main]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", environment);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let asset_store_config = AssetStoreConfig::from_env();

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Outgoing adapters
    let asset_store: Arc<dyn AssetStore> = Arc::new(AssetStoreHttp::new(asset_store_config));
    let session_gate: Arc<dyn SessionGate> =
        Arc::new(SessionGatePostgres::new(Arc::clone(&db_arc)));

    let project_repo = ProjectRepositoryPostgres::new(Arc::clone(&db_arc));
    let certificate_repo = CertificateRepositoryPostgres::new(Arc::clone(&db_arc));
    let experience_repo = ExperienceRepositoryPostgres::new(Arc::clone(&db_arc));
    let education_repo = EducationRepositoryPostgres::new(Arc::clone(&db_arc));
    let setting_repo = SettingRepositoryPostgres::new(Arc::clone(&db_arc));

    let state = AppState {
        fetch_projects_use_case: Arc::new(FetchProjectsUseCase::new(project_repo.clone())),
        create_project_use_case: Arc::new(CreateProjectUseCase::new(project_repo.clone())),
        update_project_use_case: Arc::new(UpdateProjectUseCase::new(project_repo.clone())),
        delete_project_use_case: Arc::new(DeleteProjectUseCase::new(
            project_repo.clone(),
            Arc::clone(&asset_store),
        )),
        reorder_projects_use_case: Arc::new(ReorderProjectsUseCase::new(project_repo)),

        fetch_certificates_use_case: Arc::new(FetchCertificatesUseCase::new(
            certificate_repo.clone(),
        )),
        create_certificate_use_case: Arc::new(CreateCertificateUseCase::new(
            certificate_repo.clone(),
        )),
        update_certificate_use_case: Arc::new(UpdateCertificateUseCase::new(
            certificate_repo.clone(),
        )),
        delete_certificate_use_case: Arc::new(DeleteCertificateUseCase::new(
            certificate_repo.clone(),
            Arc::clone(&asset_store),
        )),
        reorder_certificates_use_case: Arc::new(ReorderCertificatesUseCase::new(
            certificate_repo,
        )),

        fetch_timeline_use_case: Arc::new(FetchTimelineUseCase::new(
            experience_repo.clone(),
            education_repo.clone(),
        )),
        create_timeline_entry_use_case: Arc::new(CreateTimelineEntryUseCase::new(
            experience_repo.clone(),
            education_repo.clone(),
        )),
        update_timeline_entry_use_case: Arc::new(UpdateTimelineEntryUseCase::new(
            experience_repo.clone(),
            education_repo.clone(),
        )),
        delete_timeline_entry_use_case: Arc::new(DeleteTimelineEntryUseCase::new(
            experience_repo.clone(),
            education_repo.clone(),
        )),
        reorder_timeline_use_case: Arc::new(ReorderTimelineUseCase::new(
            experience_repo,
            education_repo,
        )),

        fetch_settings_use_case: Arc::new(FetchSettingsUseCase::new(setting_repo.clone())),
        fetch_setting_use_case: Arc::new(FetchSettingUseCase::new(setting_repo.clone())),
        save_setting_use_case: Arc::new(SaveSettingUseCase::new(setting_repo)),

        upload_asset_use_case: Arc::new(UploadAssetUseCase::new(asset_store)),
    };

    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&session_gate)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(crate::shared::api::custom_json_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Projects
    cfg.service(crate::project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::update_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::reorder_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::delete_project_handler);
    // Certificates
    cfg.service(crate::certificate::adapter::incoming::web::routes::get_certificates_handler);
    cfg.service(crate::certificate::adapter::incoming::web::routes::create_certificate_handler);
    cfg.service(crate::certificate::adapter::incoming::web::routes::update_certificate_handler);
    cfg.service(crate::certificate::adapter::incoming::web::routes::reorder_certificates_handler);
    cfg.service(crate::certificate::adapter::incoming::web::routes::delete_certificate_handler);
    // Timelines
    cfg.service(crate::timeline::adapter::incoming::web::routes::get_timelines_handler);
    cfg.service(crate::timeline::adapter::incoming::web::routes::create_timeline_entry_handler);
    cfg.service(crate::timeline::adapter::incoming::web::routes::update_timeline_entry_handler);
    cfg.service(crate::timeline::adapter::incoming::web::routes::reorder_timelines_handler);
    cfg.service(crate::timeline::adapter::incoming::web::routes::delete_timeline_entry_handler);
    // Settings
    cfg.service(crate::setting::adapter::incoming::web::routes::get_settings_handler);
    cfg.service(crate::setting::adapter::incoming::web::routes::save_setting_handler);
    // Upload
    cfg.service(crate::media::adapter::incoming::web::routes::upload_asset_handler);
}

fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
