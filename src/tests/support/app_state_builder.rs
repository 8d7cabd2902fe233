//! Builds a fully wired `AppState` on top of the in-memory doubles, so
//! route tests exercise the real handlers and use cases end to end.

use actix_web::web;
use async_trait::async_trait;
use std::sync::Arc;

use crate::certificate::application::use_cases::create_certificate::CreateCertificateUseCase;
use crate::certificate::application::use_cases::delete_certificate::DeleteCertificateUseCase;
use crate::certificate::application::use_cases::fetch_certificates::FetchCertificatesUseCase;
use crate::certificate::application::use_cases::reorder_certificates::ReorderCertificatesUseCase;
use crate::certificate::application::use_cases::update_certificate::UpdateCertificateUseCase;
use crate::media::application::ports::outgoing::AssetStore;
use crate::media::application::use_cases::upload_asset::UploadAssetUseCase;
use crate::project::application::use_cases::create_project::CreateProjectUseCase;
use crate::project::application::use_cases::delete_project::DeleteProjectUseCase;
use crate::project::application::use_cases::fetch_projects::FetchProjectsUseCase;
use crate::project::application::use_cases::reorder_projects::ReorderProjectsUseCase;
use crate::project::application::use_cases::update_project::UpdateProjectUseCase;
use crate::session::application::ports::outgoing::{SessionGate, SessionGateError, SessionUser};
use crate::setting::application::use_cases::fetch_setting::FetchSettingUseCase;
use crate::setting::application::use_cases::fetch_settings::FetchSettingsUseCase;
use crate::setting::application::use_cases::save_setting::SaveSettingUseCase;
use crate::timeline::application::use_cases::create_timeline_entry::CreateTimelineEntryUseCase;
use crate::timeline::application::use_cases::delete_timeline_entry::DeleteTimelineEntryUseCase;
use crate::timeline::application::use_cases::fetch_timeline::FetchTimelineUseCase;
use crate::timeline::application::use_cases::reorder_timeline::ReorderTimelineUseCase;
use crate::timeline::application::use_cases::update_timeline_entry::UpdateTimelineEntryUseCase;
use crate::AppState;

use super::in_memory::{
    InMemoryCertificateRepository, InMemoryEducationRepository, InMemoryExperienceRepository,
    InMemoryProjectRepository, InMemorySettingRepository, RecordingAssetStore,
};

/// The one token [`TestBackend::session_gate`] accepts.
pub const TEST_SESSION_TOKEN: &str = "valid-session";

struct SingleTokenGate;

#[async_trait]
impl SessionGate for SingleTokenGate {
    async fn current_session(
        &self,
        token: &str,
    ) -> Result<Option<SessionUser>, SessionGateError> {
        if token == TEST_SESSION_TOKEN {
            Ok(Some(SessionUser {
                name: "Admin".to_string(),
                email: "admin@example.com".to_string(),
            }))
        } else {
            Ok(None)
        }
    }
}

pub struct TestBackend {
    pub certificates: InMemoryCertificateRepository,
    pub projects: InMemoryProjectRepository,
    pub work: InMemoryExperienceRepository,
    pub education: InMemoryEducationRepository,
    pub settings: InMemorySettingRepository,
    pub asset_store: Arc<RecordingAssetStore>,
}

impl TestBackend {
    pub fn new() -> Self {
        Self {
            certificates: InMemoryCertificateRepository::default(),
            projects: InMemoryProjectRepository::default(),
            work: InMemoryExperienceRepository::default(),
            education: InMemoryEducationRepository::default(),
            settings: InMemorySettingRepository::default(),
            asset_store: Arc::new(RecordingAssetStore::default()),
        }
    }

    pub fn app_state(&self) -> web::Data<AppState> {
        let asset_store: Arc<dyn AssetStore> = self.asset_store.clone();

        web::Data::new(AppState {
            fetch_projects_use_case: Arc::new(FetchProjectsUseCase::new(self.projects.clone())),
            create_project_use_case: Arc::new(CreateProjectUseCase::new(self.projects.clone())),
            update_project_use_case: Arc::new(UpdateProjectUseCase::new(self.projects.clone())),
            delete_project_use_case: Arc::new(DeleteProjectUseCase::new(
                self.projects.clone(),
                asset_store.clone(),
            )),
            reorder_projects_use_case: Arc::new(ReorderProjectsUseCase::new(
                self.projects.clone(),
            )),

            fetch_certificates_use_case: Arc::new(FetchCertificatesUseCase::new(
                self.certificates.clone(),
            )),
            create_certificate_use_case: Arc::new(CreateCertificateUseCase::new(
                self.certificates.clone(),
            )),
            update_certificate_use_case: Arc::new(UpdateCertificateUseCase::new(
                self.certificates.clone(),
            )),
            delete_certificate_use_case: Arc::new(DeleteCertificateUseCase::new(
                self.certificates.clone(),
                asset_store.clone(),
            )),
            reorder_certificates_use_case: Arc::new(ReorderCertificatesUseCase::new(
                self.certificates.clone(),
            )),

            fetch_timeline_use_case: Arc::new(FetchTimelineUseCase::new(
                self.work.clone(),
                self.education.clone(),
            )),
            create_timeline_entry_use_case: Arc::new(CreateTimelineEntryUseCase::new(
                self.work.clone(),
                self.education.clone(),
            )),
            update_timeline_entry_use_case: Arc::new(UpdateTimelineEntryUseCase::new(
                self.work.clone(),
                self.education.clone(),
            )),
            delete_timeline_entry_use_case: Arc::new(DeleteTimelineEntryUseCase::new(
                self.work.clone(),
                self.education.clone(),
            )),
            reorder_timeline_use_case: Arc::new(ReorderTimelineUseCase::new(
                self.work.clone(),
                self.education.clone(),
            )),

            fetch_settings_use_case: Arc::new(FetchSettingsUseCase::new(self.settings.clone())),
            fetch_setting_use_case: Arc::new(FetchSettingUseCase::new(self.settings.clone())),
            save_setting_use_case: Arc::new(SaveSettingUseCase::new(self.settings.clone())),

            upload_asset_use_case: Arc::new(UploadAssetUseCase::new(asset_store)),
        })
    }

    /// A gate that accepts `Bearer valid-session` and nothing else.
    pub fn session_gate(&self) -> web::Data<Arc<dyn SessionGate>> {
        let gate: Arc<dyn SessionGate> = Arc::new(SingleTokenGate);
        web::Data::new(gate)
    }
}
