use crate::project::domain::Project;
use crate::shared::ordering::OrderUpdate;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};

#[derive(Debug, Clone)]
pub enum ProjectRepositoryError {
    NotFound,
    DatabaseError(String),
}

/// Editable fields of a project, as carried by create and update
/// payloads. Identity, order and timestamps are managed elsewhere.
#[derive(Debug, Clone)]
pub struct ProjectData {
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub objectives: Option<Vec<String>>,
    pub key_challenges: Option<Vec<String>>,
    pub featured: bool,
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// All projects, ascending by display order.
    async fn fetch_all(&self) -> Result<Vec<Project>, ProjectRepositoryError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Project>, ProjectRepositoryError>;

    async fn count(&self) -> Result<u64, ProjectRepositoryError>;

    async fn insert(&self, project: Project) -> Result<(), ProjectRepositoryError>;

    /// Overwrites the editable fields of an existing row.
    /// `NotFound` when `id` matches nothing.
    async fn update(
        &self,
        id: &str,
        data: ProjectData,
        updated_at: DateTime<FixedOffset>,
    ) -> Result<(), ProjectRepositoryError>;

    /// `NotFound` when `id` matches nothing.
    async fn delete(&self, id: &str) -> Result<(), ProjectRepositoryError>;

    /// Rewrites the `order` column for every listed row, atomically.
    async fn apply_display_order(
        &self,
        updates: &[OrderUpdate],
    ) -> Result<(), ProjectRepositoryError>;
}
