use crate::setting::application::ports::outgoing::{SettingRepository, SettingRepositoryError};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub enum FetchSettingError {
    RepositoryError(String),
}

/// An interface for the fetch single setting use case
#[async_trait]
pub trait IFetchSettingUseCase: Send + Sync {
    /// The value for `key`, or `None` when the key has never been set.
    async fn execute(&self, key: &str) -> Result<Option<String>, FetchSettingError>;
}

pub struct FetchSettingUseCase<R>
where
    R: SettingRepository,
{
    repository: R,
}

impl<R> FetchSettingUseCase<R>
where
    R: SettingRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IFetchSettingUseCase for FetchSettingUseCase<R>
where
    R: SettingRepository + Send + Sync,
{
    async fn execute(&self, key: &str) -> Result<Option<String>, FetchSettingError> {
        let setting = self.repository.find_by_key(key).await.map_err(|e| match e {
            SettingRepositoryError::DatabaseError(msg) => FetchSettingError::RepositoryError(msg),
        })?;

        Ok(setting.map(|s| s.value))
    }
}
