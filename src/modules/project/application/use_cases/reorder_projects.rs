use crate::project::application::ports::outgoing::{ProjectRepository, ProjectRepositoryError};
use crate::shared::ordering::OrderUpdate;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub enum ReorderProjectsError {
    RepositoryError(String),
}

/// An interface for the reorder projects use case
#[async_trait]
pub trait IReorderProjectsUseCase: Send + Sync {
    async fn execute(&self, updates: Vec<OrderUpdate>) -> Result<(), ReorderProjectsError>;
}

pub struct ReorderProjectsUseCase<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> ReorderProjectsUseCase<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IReorderProjectsUseCase for ReorderProjectsUseCase<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, updates: Vec<OrderUpdate>) -> Result<(), ReorderProjectsError> {
        if updates.is_empty() {
            return Ok(());
        }

        self.repository
            .apply_display_order(&updates)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::DatabaseError(msg) => {
                    ReorderProjectsError::RepositoryError(msg)
                }
                ProjectRepositoryError::NotFound => {
                    ReorderProjectsError::RepositoryError("unexpected not-found".to_string())
                }
            })
    }
}
