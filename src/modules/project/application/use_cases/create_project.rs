use crate::project::application::ports::outgoing::{
    ProjectData, ProjectRepository, ProjectRepositoryError,
};
use crate::project::domain::Project;
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum CreateProjectError {
    Validation(String),
    RepositoryError(String),
}

/// An interface for the create project use case
#[async_trait]
pub trait ICreateProjectUseCase: Send + Sync {
    async fn execute(&self, data: ProjectData) -> Result<Project, CreateProjectError>;
}

pub struct CreateProjectUseCase<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> CreateProjectUseCase<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_repo_error(e: ProjectRepositoryError) -> CreateProjectError {
    match e {
        ProjectRepositoryError::DatabaseError(msg) => CreateProjectError::RepositoryError(msg),
        ProjectRepositoryError::NotFound => {
            CreateProjectError::RepositoryError("unexpected not-found".to_string())
        }
    }
}

#[async_trait]
impl<R> ICreateProjectUseCase for CreateProjectUseCase<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, data: ProjectData) -> Result<Project, CreateProjectError> {
        if data.title.trim().is_empty() {
            return Err(CreateProjectError::Validation(
                "Title is required".to_string(),
            ));
        }

        // New rows are appended to the end of the list; an empty list
        // yields order 0.
        let order = self.repository.count().await.map_err(map_repo_error)? as i32;

        let now = Utc::now().fixed_offset();
        let project = Project {
            id: format!("project_{}", Uuid::new_v4()),
            title: data.title,
            description: data.description,
            image: data.image,
            technologies: data.technologies,
            github_url: data.github_url,
            live_url: data.live_url,
            objectives: data.objectives,
            key_challenges: data.key_challenges,
            featured: data.featured,
            order,
            created_at: now,
            updated_at: now,
        };

        self.repository
            .insert(project.clone())
            .await
            .map_err(map_repo_error)?;

        Ok(project)
    }
}
