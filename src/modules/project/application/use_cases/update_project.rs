use crate::project::application::ports::outgoing::{
    ProjectData, ProjectRepository, ProjectRepositoryError,
};
use async_trait::async_trait;
use chrono::Utc;

#[derive(Debug, Clone)]
pub enum UpdateProjectError {
    Validation(String),
    NotFound,
    RepositoryError(String),
}

/// An interface for the update project use case
#[async_trait]
pub trait IUpdateProjectUseCase: Send + Sync {
    async fn execute(&self, id: &str, data: ProjectData) -> Result<(), UpdateProjectError>;
}

pub struct UpdateProjectUseCase<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> UpdateProjectUseCase<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IUpdateProjectUseCase for UpdateProjectUseCase<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, id: &str, data: ProjectData) -> Result<(), UpdateProjectError> {
        if id.trim().is_empty() || data.title.trim().is_empty() {
            return Err(UpdateProjectError::Validation(
                "ID and title are required".to_string(),
            ));
        }

        self.repository
            .update(id, data, Utc::now().fixed_offset())
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::NotFound => UpdateProjectError::NotFound,
                ProjectRepositoryError::DatabaseError(msg) => {
                    UpdateProjectError::RepositoryError(msg)
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::in_memory::{project_fixture, InMemoryProjectRepository};

    fn new_data(title: &str) -> ProjectData {
        ProjectData {
            title: title.to_string(),
            description: Some("Updated".to_string()),
            image: None,
            technologies: Some(vec!["Rust".to_string()]),
            github_url: Some("https://github.com/example/site".to_string()),
            live_url: None,
            objectives: None,
            key_challenges: None,
            featured: true,
        }
    }

    #[tokio::test]
    async fn test_update_overwrites_fields_but_not_order() {
        let repo = InMemoryProjectRepository::default();
        repo.seed(vec![project_fixture("project_1", "Old", 4)]);
        let before = repo.rows()[0].clone();

        let use_case = UpdateProjectUseCase::new(repo.clone());
        use_case.execute("project_1", new_data("New")).await.unwrap();

        let after = repo.rows()[0].clone();
        assert_eq!(after.title, "New");
        assert!(after.featured);
        assert_eq!(after.order, 4);
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at > before.updated_at);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let repo = InMemoryProjectRepository::default();
        let use_case = UpdateProjectUseCase::new(repo);

        let result = use_case.execute("project_missing", new_data("T")).await;

        assert!(matches!(result, Err(UpdateProjectError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_with_blank_title_is_rejected() {
        let repo = InMemoryProjectRepository::default();
        repo.seed(vec![project_fixture("project_1", "Old", 0)]);
        let use_case = UpdateProjectUseCase::new(repo.clone());

        let result = use_case.execute("project_1", new_data("")).await;

        assert!(matches!(result, Err(UpdateProjectError::Validation(_))));
        assert_eq!(repo.rows()[0].title, "Old");
    }
}
