use crate::shared::ordering::OrderUpdate;
use crate::timeline::domain::{Experience, WorkRole};
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};

#[derive(Debug, Clone)]
pub enum ExperienceRepositoryError {
    NotFound,
    DatabaseError(String),
}

/// Editable fields of a work experience entry.
#[derive(Debug, Clone)]
pub struct ExperienceData {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub period: Option<String>,
    pub description: Option<String>,
    pub key_achievements: Option<Vec<String>>,
    pub tech_stacks: Option<Vec<String>>,
    pub role: Option<WorkRole>,
}

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    /// All work entries, ascending by display order.
    async fn fetch_all(&self) -> Result<Vec<Experience>, ExperienceRepositoryError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Experience>, ExperienceRepositoryError>;

    async fn count(&self) -> Result<u64, ExperienceRepositoryError>;

    async fn insert(&self, experience: Experience) -> Result<(), ExperienceRepositoryError>;

    /// `NotFound` when `id` matches nothing.
    async fn update(
        &self,
        id: &str,
        data: ExperienceData,
        updated_at: DateTime<FixedOffset>,
    ) -> Result<(), ExperienceRepositoryError>;

    /// `NotFound` when `id` matches nothing.
    async fn delete(&self, id: &str) -> Result<(), ExperienceRepositoryError>;

    /// Rewrites the `order` column for every listed row, atomically.
    async fn apply_display_order(
        &self,
        updates: &[OrderUpdate],
    ) -> Result<(), ExperienceRepositoryError>;
}
