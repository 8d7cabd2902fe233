use crate::project::application::ports::outgoing::{ProjectRepository, ProjectRepositoryError};
use crate::project::domain::Project;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub enum FetchProjectsError {
    RepositoryError(String),
}

/// An interface for the fetch projects use case
#[async_trait]
pub trait IFetchProjectsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Project>, FetchProjectsError>;
}

pub struct FetchProjectsUseCase<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> FetchProjectsUseCase<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IFetchProjectsUseCase for FetchProjectsUseCase<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Project>, FetchProjectsError> {
        self.repository.fetch_all().await.map_err(|e| match e {
            ProjectRepositoryError::DatabaseError(msg) => FetchProjectsError::RepositoryError(msg),
            ProjectRepositoryError::NotFound => {
                FetchProjectsError::RepositoryError("unexpected not-found".to_string())
            }
        })
    }
}
