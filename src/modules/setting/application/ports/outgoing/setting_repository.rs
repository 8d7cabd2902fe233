use crate::setting::domain::Setting;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub enum SettingRepositoryError {
    DatabaseError(String),
}

#[async_trait]
pub trait SettingRepository: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Setting>, SettingRepositoryError>;

    async fn find_by_key(&self, key: &str) -> Result<Option<Setting>, SettingRepositoryError>;

    /// Inserts the key with a fresh id, or overwrites the value and
    /// `updated_at` of the existing row.
    async fn upsert(&self, key: &str, value: &str) -> Result<Setting, SettingRepositoryError>;
}
