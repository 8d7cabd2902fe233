use crate::setting::application::ports::outgoing::{SettingRepository, SettingRepositoryError};
use async_trait::async_trait;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub enum FetchSettingsError {
    RepositoryError(String),
}

/// An interface for the fetch settings use case
#[async_trait]
pub trait IFetchSettingsUseCase: Send + Sync {
    /// The whole key → value map.
    async fn execute(&self) -> Result<BTreeMap<String, String>, FetchSettingsError>;
}

pub struct FetchSettingsUseCase<R>
where
    R: SettingRepository,
{
    repository: R,
}

impl<R> FetchSettingsUseCase<R>
where
    R: SettingRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IFetchSettingsUseCase for FetchSettingsUseCase<R>
where
    R: SettingRepository + Send + Sync,
{
    async fn execute(&self) -> Result<BTreeMap<String, String>, FetchSettingsError> {
        let rows = self.repository.fetch_all().await.map_err(|e| match e {
            SettingRepositoryError::DatabaseError(msg) => {
                FetchSettingsError::RepositoryError(msg)
            }
        })?;

        Ok(rows.into_iter().map(|s| (s.key, s.value)).collect())
    }
}
