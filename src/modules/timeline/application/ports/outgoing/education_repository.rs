use crate::shared::ordering::OrderUpdate;
use crate::timeline::domain::Education;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};

#[derive(Debug, Clone)]
pub enum EducationRepositoryError {
    NotFound,
    DatabaseError(String),
}

/// Editable fields of an education entry.
#[derive(Debug, Clone)]
pub struct EducationData {
    pub title: Option<String>,
    pub institution: String,
    pub location: Option<String>,
    pub period: Option<String>,
    pub description: Option<String>,
}

#[async_trait]
pub trait EducationRepository: Send + Sync {
    /// All education entries, ascending by display order.
    async fn fetch_all(&self) -> Result<Vec<Education>, EducationRepositoryError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Education>, EducationRepositoryError>;

    async fn count(&self) -> Result<u64, EducationRepositoryError>;

    async fn insert(&self, education: Education) -> Result<(), EducationRepositoryError>;

    /// `NotFound` when `id` matches nothing.
    async fn update(
        &self,
        id: &str,
        data: EducationData,
        updated_at: DateTime<FixedOffset>,
    ) -> Result<(), EducationRepositoryError>;

    /// `NotFound` when `id` matches nothing.
    async fn delete(&self, id: &str) -> Result<(), EducationRepositoryError>;

    /// Rewrites the `order` column for every listed row, atomically.
    async fn apply_display_order(
        &self,
        updates: &[OrderUpdate],
    ) -> Result<(), EducationRepositoryError>;
}
