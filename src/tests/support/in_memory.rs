//! Functional in-memory doubles for the outgoing ports. Each repository
//! shares its state across clones so a test can hand one to a use case
//! and keep a handle for assertions.

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::certificate::application::ports::outgoing::{
    CertificateData, CertificateRepository, CertificateRepositoryError,
};
use crate::certificate::domain::Certificate;
use crate::media::application::ports::outgoing::{AssetStore, AssetStoreError};
use crate::project::application::ports::outgoing::{
    ProjectData, ProjectRepository, ProjectRepositoryError,
};
use crate::project::domain::Project;
use crate::setting::application::ports::outgoing::{SettingRepository, SettingRepositoryError};
use crate::setting::domain::Setting;
use crate::shared::ordering::OrderUpdate;
use crate::timeline::application::ports::outgoing::{
    EducationData, EducationRepository, EducationRepositoryError, ExperienceData,
    ExperienceRepository, ExperienceRepositoryError,
};
use crate::timeline::domain::{Education, Experience};

/// A timestamp safely in the past, so `updated_at > before.updated_at`
/// assertions hold after a mutation.
fn past_timestamp() -> DateTime<FixedOffset> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0)
        .unwrap()
        .fixed_offset()
}

pub fn certificate_fixture(id: &str, title: &str, order: i32) -> Certificate {
    let at = past_timestamp();
    Certificate {
        id: id.to_string(),
        title: title.to_string(),
        issuer: "AWS".to_string(),
        issue_date: "2024-01-01".to_string(),
        credential_id: None,
        credential_url: None,
        image: None,
        order,
        created_at: at,
        updated_at: at,
    }
}

pub fn project_fixture(id: &str, title: &str, order: i32) -> Project {
    let at = past_timestamp();
    Project {
        id: id.to_string(),
        title: title.to_string(),
        description: None,
        image: None,
        technologies: None,
        github_url: None,
        live_url: None,
        objectives: None,
        key_challenges: None,
        featured: false,
        order,
        created_at: at,
        updated_at: at,
    }
}

pub fn experience_fixture(id: &str, title: &str, order: i32) -> Experience {
    let at = past_timestamp();
    Experience {
        id: id.to_string(),
        title: title.to_string(),
        company: "Acme".to_string(),
        location: None,
        period: None,
        description: None,
        key_achievements: None,
        tech_stacks: None,
        role: None,
        order,
        created_at: at,
        updated_at: at,
    }
}

pub fn education_fixture(id: &str, institution: &str, order: i32) -> Education {
    let at = past_timestamp();
    Education {
        id: id.to_string(),
        title: None,
        institution: institution.to_string(),
        location: None,
        period: None,
        description: None,
        order,
        created_at: at,
        updated_at: at,
    }
}

struct Store<T> {
    rows: Vec<T>,
    fail: Option<String>,
}

impl<T> Default for Store<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            fail: None,
        }
    }
}

impl<T: Clone> Store<T> {
    fn take_fail(&mut self) -> Option<String> {
        self.fail.take()
    }
}

macro_rules! shared_store_impl {
    ($repo:ident, $row:ty) => {
        #[derive(Clone, Default)]
        pub struct $repo {
            state: Arc<Mutex<Store<$row>>>,
        }

        impl $repo {
            pub fn seed(&self, rows: Vec<$row>) {
                self.state.lock().unwrap().rows = rows;
            }

            pub fn rows(&self) -> Vec<$row> {
                self.state.lock().unwrap().rows.clone()
            }

            /// Makes the next repository call fail with a database error.
            pub fn fail_next(&self, msg: &str) {
                self.state.lock().unwrap().fail = Some(msg.to_string());
            }
        }
    };
}

shared_store_impl!(InMemoryCertificateRepository, Certificate);
shared_store_impl!(InMemoryProjectRepository, Project);
shared_store_impl!(InMemoryExperienceRepository, Experience);
shared_store_impl!(InMemoryEducationRepository, Education);

#[async_trait]
impl CertificateRepository for InMemoryCertificateRepository {
    async fn fetch_all(&self) -> Result<Vec<Certificate>, CertificateRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(msg) = state.take_fail() {
            return Err(CertificateRepositoryError::DatabaseError(msg));
        }
        let mut rows = state.rows.clone();
        rows.sort_by_key(|c| c.order);
        Ok(rows)
    }

    async fn find_by_id(
        &self,
        id: &str,
    ) -> Result<Option<Certificate>, CertificateRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(msg) = state.take_fail() {
            return Err(CertificateRepositoryError::DatabaseError(msg));
        }
        Ok(state.rows.iter().find(|c| c.id == id).cloned())
    }

    async fn count(&self) -> Result<u64, CertificateRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(msg) = state.take_fail() {
            return Err(CertificateRepositoryError::DatabaseError(msg));
        }
        Ok(state.rows.len() as u64)
    }

    async fn insert(&self, certificate: Certificate) -> Result<(), CertificateRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(msg) = state.take_fail() {
            return Err(CertificateRepositoryError::DatabaseError(msg));
        }
        state.rows.push(certificate);
        Ok(())
    }

    async fn update(
        &self,
        id: &str,
        data: CertificateData,
        updated_at: DateTime<FixedOffset>,
    ) -> Result<(), CertificateRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(msg) = state.take_fail() {
            return Err(CertificateRepositoryError::DatabaseError(msg));
        }
        let row = state
            .rows
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(CertificateRepositoryError::NotFound)?;
        row.title = data.title;
        row.issuer = data.issuer;
        row.issue_date = data.issue_date;
        row.credential_id = data.credential_id;
        row.credential_url = data.credential_url;
        row.image = data.image;
        row.updated_at = updated_at;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), CertificateRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(msg) = state.take_fail() {
            return Err(CertificateRepositoryError::DatabaseError(msg));
        }
        let before = state.rows.len();
        state.rows.retain(|c| c.id != id);
        if state.rows.len() == before {
            return Err(CertificateRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn apply_display_order(
        &self,
        updates: &[OrderUpdate],
    ) -> Result<(), CertificateRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(msg) = state.take_fail() {
            return Err(CertificateRepositoryError::DatabaseError(msg));
        }
        let now = Utc::now().fixed_offset();
        for update in updates {
            if let Some(row) = state.rows.iter_mut().find(|c| c.id == update.id) {
                row.order = update.order;
                row.updated_at = now;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn fetch_all(&self) -> Result<Vec<Project>, ProjectRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(msg) = state.take_fail() {
            return Err(ProjectRepositoryError::DatabaseError(msg));
        }
        let mut rows = state.rows.clone();
        rows.sort_by_key(|p| p.order);
        Ok(rows)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Project>, ProjectRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(msg) = state.take_fail() {
            return Err(ProjectRepositoryError::DatabaseError(msg));
        }
        Ok(state.rows.iter().find(|p| p.id == id).cloned())
    }

    async fn count(&self) -> Result<u64, ProjectRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(msg) = state.take_fail() {
            return Err(ProjectRepositoryError::DatabaseError(msg));
        }
        Ok(state.rows.len() as u64)
    }

    async fn insert(&self, project: Project) -> Result<(), ProjectRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(msg) = state.take_fail() {
            return Err(ProjectRepositoryError::DatabaseError(msg));
        }
        state.rows.push(project);
        Ok(())
    }

    async fn update(
        &self,
        id: &str,
        data: ProjectData,
        updated_at: DateTime<FixedOffset>,
    ) -> Result<(), ProjectRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(msg) = state.take_fail() {
            return Err(ProjectRepositoryError::DatabaseError(msg));
        }
        let row = state
            .rows
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ProjectRepositoryError::NotFound)?;
        row.title = data.title;
        row.description = data.description;
        row.image = data.image;
        row.technologies = data.technologies;
        row.github_url = data.github_url;
        row.live_url = data.live_url;
        row.objectives = data.objectives;
        row.key_challenges = data.key_challenges;
        row.featured = data.featured;
        row.updated_at = updated_at;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), ProjectRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(msg) = state.take_fail() {
            return Err(ProjectRepositoryError::DatabaseError(msg));
        }
        let before = state.rows.len();
        state.rows.retain(|p| p.id != id);
        if state.rows.len() == before {
            return Err(ProjectRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn apply_display_order(
        &self,
        updates: &[OrderUpdate],
    ) -> Result<(), ProjectRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(msg) = state.take_fail() {
            return Err(ProjectRepositoryError::DatabaseError(msg));
        }
        let now = Utc::now().fixed_offset();
        for update in updates {
            if let Some(row) = state.rows.iter_mut().find(|p| p.id == update.id) {
                row.order = update.order;
                row.updated_at = now;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ExperienceRepository for InMemoryExperienceRepository {
    async fn fetch_all(&self) -> Result<Vec<Experience>, ExperienceRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(msg) = state.take_fail() {
            return Err(ExperienceRepositoryError::DatabaseError(msg));
        }
        let mut rows = state.rows.clone();
        rows.sort_by_key(|e| e.order);
        Ok(rows)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Experience>, ExperienceRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(msg) = state.take_fail() {
            return Err(ExperienceRepositoryError::DatabaseError(msg));
        }
        Ok(state.rows.iter().find(|e| e.id == id).cloned())
    }

    async fn count(&self) -> Result<u64, ExperienceRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(msg) = state.take_fail() {
            return Err(ExperienceRepositoryError::DatabaseError(msg));
        }
        Ok(state.rows.len() as u64)
    }

    async fn insert(&self, experience: Experience) -> Result<(), ExperienceRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(msg) = state.take_fail() {
            return Err(ExperienceRepositoryError::DatabaseError(msg));
        }
        state.rows.push(experience);
        Ok(())
    }

    async fn update(
        &self,
        id: &str,
        data: ExperienceData,
        updated_at: DateTime<FixedOffset>,
    ) -> Result<(), ExperienceRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(msg) = state.take_fail() {
            return Err(ExperienceRepositoryError::DatabaseError(msg));
        }
        let row = state
            .rows
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(ExperienceRepositoryError::NotFound)?;
        row.title = data.title;
        row.company = data.company;
        row.location = data.location;
        row.period = data.period;
        row.description = data.description;
        row.key_achievements = data.key_achievements;
        row.tech_stacks = data.tech_stacks;
        row.role = data.role;
        row.updated_at = updated_at;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), ExperienceRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(msg) = state.take_fail() {
            return Err(ExperienceRepositoryError::DatabaseError(msg));
        }
        let before = state.rows.len();
        state.rows.retain(|e| e.id != id);
        if state.rows.len() == before {
            return Err(ExperienceRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn apply_display_order(
        &self,
        updates: &[OrderUpdate],
    ) -> Result<(), ExperienceRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(msg) = state.take_fail() {
            return Err(ExperienceRepositoryError::DatabaseError(msg));
        }
        let now = Utc::now().fixed_offset();
        for update in updates {
            if let Some(row) = state.rows.iter_mut().find(|e| e.id == update.id) {
                row.order = update.order;
                row.updated_at = now;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl EducationRepository for InMemoryEducationRepository {
    async fn fetch_all(&self) -> Result<Vec<Education>, EducationRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(msg) = state.take_fail() {
            return Err(EducationRepositoryError::DatabaseError(msg));
        }
        let mut rows = state.rows.clone();
        rows.sort_by_key(|e| e.order);
        Ok(rows)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Education>, EducationRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(msg) = state.take_fail() {
            return Err(EducationRepositoryError::DatabaseError(msg));
        }
        Ok(state.rows.iter().find(|e| e.id == id).cloned())
    }

    async fn count(&self) -> Result<u64, EducationRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(msg) = state.take_fail() {
            return Err(EducationRepositoryError::DatabaseError(msg));
        }
        Ok(state.rows.len() as u64)
    }

    async fn insert(&self, education: Education) -> Result<(), EducationRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(msg) = state.take_fail() {
            return Err(EducationRepositoryError::DatabaseError(msg));
        }
        state.rows.push(education);
        Ok(())
    }

    async fn update(
        &self,
        id: &str,
        data: EducationData,
        updated_at: DateTime<FixedOffset>,
    ) -> Result<(), EducationRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(msg) = state.take_fail() {
            return Err(EducationRepositoryError::DatabaseError(msg));
        }
        let row = state
            .rows
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(EducationRepositoryError::NotFound)?;
        row.title = data.title;
        row.institution = data.institution;
        row.location = data.location;
        row.period = data.period;
        row.description = data.description;
        row.updated_at = updated_at;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), EducationRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(msg) = state.take_fail() {
            return Err(EducationRepositoryError::DatabaseError(msg));
        }
        let before = state.rows.len();
        state.rows.retain(|e| e.id != id);
        if state.rows.len() == before {
            return Err(EducationRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn apply_display_order(
        &self,
        updates: &[OrderUpdate],
    ) -> Result<(), EducationRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(msg) = state.take_fail() {
            return Err(EducationRepositoryError::DatabaseError(msg));
        }
        let now = Utc::now().fixed_offset();
        for update in updates {
            if let Some(row) = state.rows.iter_mut().find(|e| e.id == update.id) {
                row.order = update.order;
                row.updated_at = now;
            }
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemorySettingRepository {
    state: Arc<Mutex<Store<Setting>>>,
}

impl InMemorySettingRepository {
    pub fn rows(&self) -> Vec<Setting> {
        self.state.lock().unwrap().rows.clone()
    }

    pub fn fail_next(&self, msg: &str) {
        self.state.lock().unwrap().fail = Some(msg.to_string());
    }

    /// Convenience seed that goes through the upsert path.
    pub async fn set(&self, key: &str, value: &str) {
        self.upsert(key, value).await.unwrap();
    }
}

#[async_trait]
impl SettingRepository for InMemorySettingRepository {
    async fn fetch_all(&self) -> Result<Vec<Setting>, SettingRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(msg) = state.take_fail() {
            return Err(SettingRepositoryError::DatabaseError(msg));
        }
        Ok(state.rows.clone())
    }

    async fn find_by_key(&self, key: &str) -> Result<Option<Setting>, SettingRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(msg) = state.take_fail() {
            return Err(SettingRepositoryError::DatabaseError(msg));
        }
        Ok(state.rows.iter().find(|s| s.key == key).cloned())
    }

    async fn upsert(&self, key: &str, value: &str) -> Result<Setting, SettingRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(msg) = state.take_fail() {
            return Err(SettingRepositoryError::DatabaseError(msg));
        }
        let now = Utc::now().fixed_offset();
        if let Some(row) = state.rows.iter_mut().find(|s| s.key == key) {
            row.value = value.to_string();
            row.updated_at = now;
            return Ok(row.clone());
        }
        let setting = Setting {
            id: format!("setting_{}", Uuid::new_v4()),
            key: key.to_string(),
            value: value.to_string(),
            updated_at: now,
        };
        state.rows.push(setting.clone());
        Ok(setting)
    }
}

/// Asset store double that records calls instead of talking to a host.
#[derive(Default)]
pub struct RecordingAssetStore {
    deleted: Mutex<Vec<String>>,
    uploaded: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingAssetStore {
    /// A store whose every call errors, for the best-effort paths.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn deleted(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }

    pub fn uploaded(&self) -> Vec<String> {
        self.uploaded.lock().unwrap().clone()
    }
}

#[async_trait]
impl AssetStore for RecordingAssetStore {
    async fn upload(
        &self,
        _bytes: Vec<u8>,
        filename: &str,
        folder: &str,
    ) -> Result<String, AssetStoreError> {
        if self.fail {
            return Err(AssetStoreError::UploadFailed("host unavailable".into()));
        }
        self.uploaded
            .lock()
            .unwrap()
            .push(format!("{folder}/{filename}"));
        Ok(format!(
            "https://media.example.com/upload/v1/{folder}/{filename}"
        ))
    }

    async fn delete(&self, public_id: &str) -> Result<(), AssetStoreError> {
        if self.fail {
            return Err(AssetStoreError::DeleteFailed("host unavailable".into()));
        }
        self.deleted.lock().unwrap().push(public_id.to_string());
        Ok(())
    }
}
