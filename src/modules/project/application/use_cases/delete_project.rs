use crate::media::application::ports::outgoing::{public_id_from_url, AssetStore};
use crate::project::application::ports::outgoing::{ProjectRepository, ProjectRepositoryError};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

#[derive(Debug, Clone)]
pub enum DeleteProjectError {
    NotFound,
    RepositoryError(String),
}

/// An interface for the delete project use case
#[async_trait]
pub trait IDeleteProjectUseCase: Send + Sync {
    async fn execute(&self, id: &str) -> Result<(), DeleteProjectError>;
}

pub struct DeleteProjectUseCase<R>
where
    R: ProjectRepository,
{
    repository: R,
    asset_store: Arc<dyn AssetStore>,
}

impl<R> DeleteProjectUseCase<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R, asset_store: Arc<dyn AssetStore>) -> Self {
        Self {
            repository,
            asset_store,
        }
    }
}

#[async_trait]
impl<R> IDeleteProjectUseCase for DeleteProjectUseCase<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, id: &str) -> Result<(), DeleteProjectError> {
        let project = self
            .repository
            .find_by_id(id)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::DatabaseError(msg) => {
                    DeleteProjectError::RepositoryError(msg)
                }
                ProjectRepositoryError::NotFound => DeleteProjectError::NotFound,
            })?
            .ok_or(DeleteProjectError::NotFound)?;

        // Best-effort cleanup of the hosted image; the row goes away
        // regardless of whether the media host cooperates.
        if let Some(public_id) = project.image.as_deref().and_then(public_id_from_url) {
            if let Err(e) = self.asset_store.delete(&public_id).await {
                warn!("failed to delete asset '{public_id}' for {id}: {e}");
            }
        }

        self.repository.delete(id).await.map_err(|e| match e {
            ProjectRepositoryError::NotFound => DeleteProjectError::NotFound,
            ProjectRepositoryError::DatabaseError(msg) => DeleteProjectError::RepositoryError(msg),
        })
    }
}
