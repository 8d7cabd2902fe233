use crate::shared::ordering::OrderUpdate;
use crate::timeline::application::ports::outgoing::{
    EducationRepository, EducationRepositoryError, ExperienceRepository,
    ExperienceRepositoryError,
};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub enum ReorderTimelineError {
    RepositoryError(String),
}

/// An interface for the reorder timeline use case
#[async_trait]
pub trait IReorderTimelineUseCase: Send + Sync {
    async fn execute(&self, updates: Vec<OrderUpdate>) -> Result<(), ReorderTimelineError>;
}

pub struct ReorderTimelineUseCase<W, E>
where
    W: ExperienceRepository,
    E: EducationRepository,
{
    work: W,
    education: E,
}

impl<W, E> ReorderTimelineUseCase<W, E>
where
    W: ExperienceRepository,
    E: EducationRepository,
{
    pub fn new(work: W, education: E) -> Self {
        Self { work, education }
    }
}

#[async_trait]
impl<W, E> IReorderTimelineUseCase for ReorderTimelineUseCase<W, E>
where
    W: ExperienceRepository + Send + Sync,
    E: EducationRepository + Send + Sync,
{
    async fn execute(&self, updates: Vec<OrderUpdate>) -> Result<(), ReorderTimelineError> {
        // The two tables keep independent order spaces; split the batch
        // by the id prefix convention and apply each side on its own.
        let (education, work): (Vec<OrderUpdate>, Vec<OrderUpdate>) = updates
            .into_iter()
            .partition(|u| u.id.starts_with("education_"));

        if !work.is_empty() {
            self.work
                .apply_display_order(&work)
                .await
                .map_err(|e| match e {
                    ExperienceRepositoryError::DatabaseError(msg) => {
                        ReorderTimelineError::RepositoryError(msg)
                    }
                    ExperienceRepositoryError::NotFound => {
                        ReorderTimelineError::RepositoryError("unexpected not-found".to_string())
                    }
                })?;
        }

        if !education.is_empty() {
            self.education
                .apply_display_order(&education)
                .await
                .map_err(|e| match e {
                    EducationRepositoryError::DatabaseError(msg) => {
                        ReorderTimelineError::RepositoryError(msg)
                    }
                    EducationRepositoryError::NotFound => {
                        ReorderTimelineError::RepositoryError("unexpected not-found".to_string())
                    }
                })?;
        }

        Ok(())
    }
}
