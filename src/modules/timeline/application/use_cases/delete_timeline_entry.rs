use crate::timeline::application::ports::outgoing::{
    EducationRepository, EducationRepositoryError, ExperienceRepository,
    ExperienceRepositoryError,
};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub enum DeleteTimelineEntryError {
    NotFound,
    RepositoryError(String),
}

/// An interface for the delete timeline entry use case
#[async_trait]
pub trait IDeleteTimelineEntryUseCase: Send + Sync {
    async fn execute(
        &self,
        id: &str,
        entry_type: Option<&str>,
    ) -> Result<(), DeleteTimelineEntryError>;
}

pub struct DeleteTimelineEntryUseCase<W, E>
where
    W: ExperienceRepository,
    E: EducationRepository,
{
    work: W,
    education: E,
}

impl<W, E> DeleteTimelineEntryUseCase<W, E>
where
    W: ExperienceRepository,
    E: EducationRepository,
{
    pub fn new(work: W, education: E) -> Self {
        Self { work, education }
    }
}

/// Routing precedence: an explicit discriminant wins, then the id
/// prefix convention, then the work table as the default.
fn routes_to_education(id: &str, entry_type: Option<&str>) -> bool {
    match entry_type {
        Some("education") => true,
        Some(_) => false,
        None => id.starts_with("education_"),
    }
}

#[async_trait]
impl<W, E> IDeleteTimelineEntryUseCase for DeleteTimelineEntryUseCase<W, E>
where
    W: ExperienceRepository + Send + Sync,
    E: EducationRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: &str,
        entry_type: Option<&str>,
    ) -> Result<(), DeleteTimelineEntryError> {
        if routes_to_education(id, entry_type) {
            self.education
                .find_by_id(id)
                .await
                .map_err(|e| match e {
                    EducationRepositoryError::DatabaseError(msg) => {
                        DeleteTimelineEntryError::RepositoryError(msg)
                    }
                    EducationRepositoryError::NotFound => DeleteTimelineEntryError::NotFound,
                })?
                .ok_or(DeleteTimelineEntryError::NotFound)?;

            return self.education.delete(id).await.map_err(|e| match e {
                EducationRepositoryError::NotFound => DeleteTimelineEntryError::NotFound,
                EducationRepositoryError::DatabaseError(msg) => {
                    DeleteTimelineEntryError::RepositoryError(msg)
                }
            });
        }

        self.work
            .find_by_id(id)
            .await
            .map_err(|e| match e {
                ExperienceRepositoryError::DatabaseError(msg) => {
                    DeleteTimelineEntryError::RepositoryError(msg)
                }
                ExperienceRepositoryError::NotFound => DeleteTimelineEntryError::NotFound,
            })?
            .ok_or(DeleteTimelineEntryError::NotFound)?;

        self.work.delete(id).await.map_err(|e| match e {
            ExperienceRepositoryError::NotFound => DeleteTimelineEntryError::NotFound,
            ExperienceRepositoryError::DatabaseError(msg) => {
                DeleteTimelineEntryError::RepositoryError(msg)
            }
        })
    }
}
