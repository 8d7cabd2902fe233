use crate::setting::application::ports::outgoing::{SettingRepository, SettingRepositoryError};
use crate::setting::domain::Setting;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub enum SaveSettingError {
    Validation(String),
    RepositoryError(String),
}

/// An interface for the save setting use case
#[async_trait]
pub trait ISaveSettingUseCase: Send + Sync {
    async fn execute(&self, key: &str, value: &str) -> Result<Setting, SaveSettingError>;
}

pub struct SaveSettingUseCase<R>
where
    R: SettingRepository,
{
    repository: R,
}

impl<R> SaveSettingUseCase<R>
where
    R: SettingRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ISaveSettingUseCase for SaveSettingUseCase<R>
where
    R: SettingRepository + Send + Sync,
{
    async fn execute(&self, key: &str, value: &str) -> Result<Setting, SaveSettingError> {
        if key.trim().is_empty() || value.trim().is_empty() {
            return Err(SaveSettingError::Validation(
                "Key and value are required".to_string(),
            ));
        }

        self.repository.upsert(key, value).await.map_err(|e| match e {
            SettingRepositoryError::DatabaseError(msg) => SaveSettingError::RepositoryError(msg),
        })
    }
}
