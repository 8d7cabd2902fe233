use crate::timeline::application::ports::outgoing::{
    EducationData, EducationRepository, EducationRepositoryError, ExperienceData,
    ExperienceRepository, ExperienceRepositoryError,
};
use crate::timeline::application::use_cases::TimelineDraft;
use async_trait::async_trait;
use chrono::Utc;

#[derive(Debug, Clone)]
pub enum UpdateTimelineEntryError {
    Validation(String),
    NotFound,
    RepositoryError(String),
}

/// An interface for the update timeline entry use case
#[async_trait]
pub trait IUpdateTimelineEntryUseCase: Send + Sync {
    async fn execute(&self, id: &str, draft: TimelineDraft)
        -> Result<(), UpdateTimelineEntryError>;
}

pub struct UpdateTimelineEntryUseCase<W, E>
where
    W: ExperienceRepository,
    E: EducationRepository,
{
    work: W,
    education: E,
}

impl<W, E> UpdateTimelineEntryUseCase<W, E>
where
    W: ExperienceRepository,
    E: EducationRepository,
{
    pub fn new(work: W, education: E) -> Self {
        Self { work, education }
    }
}

#[async_trait]
impl<W, E> IUpdateTimelineEntryUseCase for UpdateTimelineEntryUseCase<W, E>
where
    W: ExperienceRepository + Send + Sync,
    E: EducationRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: &str,
        draft: TimelineDraft,
    ) -> Result<(), UpdateTimelineEntryError> {
        if id.trim().is_empty()
            || (!draft.is_work() && !draft.is_education())
            || draft.company.trim().is_empty()
        {
            return Err(UpdateTimelineEntryError::Validation(
                "ID, company/institution, and type are required".to_string(),
            ));
        }

        let now = Utc::now().fixed_offset();

        // Routed by the payload's own discriminant, not by the row the
        // id happens to live in.
        if draft.is_education() {
            let data = EducationData {
                title: Some(draft.title).filter(|t| !t.trim().is_empty()),
                institution: draft.company,
                location: draft.location,
                period: draft.period,
                description: draft.description,
            };
            return self
                .education
                .update(id, data, now)
                .await
                .map_err(|e| match e {
                    EducationRepositoryError::NotFound => UpdateTimelineEntryError::NotFound,
                    EducationRepositoryError::DatabaseError(msg) => {
                        UpdateTimelineEntryError::RepositoryError(msg)
                    }
                });
        }

        if draft.title.trim().is_empty() {
            return Err(UpdateTimelineEntryError::Validation(
                "Title is required for work experience".to_string(),
            ));
        }

        let data = ExperienceData {
            title: draft.title,
            company: draft.company,
            location: draft.location,
            period: draft.period,
            description: draft.description,
            key_achievements: draft.key_achievements,
            tech_stacks: draft.tech_stacks,
            role: draft.role,
        };
        self.work.update(id, data, now).await.map_err(|e| match e {
            ExperienceRepositoryError::NotFound => UpdateTimelineEntryError::NotFound,
            ExperienceRepositoryError::DatabaseError(msg) => {
                UpdateTimelineEntryError::RepositoryError(msg)
            }
        })
    }
}
