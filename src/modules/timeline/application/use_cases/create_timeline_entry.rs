use crate::timeline::application::ports::outgoing::{
    EducationRepository, EducationRepositoryError, ExperienceRepository,
    ExperienceRepositoryError,
};
use crate::timeline::application::use_cases::TimelineDraft;
use crate::timeline::domain::{Education, Experience, TimelineEntry};
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum CreateTimelineEntryError {
    Validation(String),
    RepositoryError(String),
}

/// An interface for the create timeline entry use case
#[async_trait]
pub trait ICreateTimelineEntryUseCase: Send + Sync {
    async fn execute(&self, draft: TimelineDraft)
        -> Result<TimelineEntry, CreateTimelineEntryError>;
}

pub struct CreateTimelineEntryUseCase<W, E>
where
    W: ExperienceRepository,
    E: EducationRepository,
{
    work: W,
    education: E,
}

impl<W, E> CreateTimelineEntryUseCase<W, E>
where
    W: ExperienceRepository,
    E: EducationRepository,
{
    pub fn new(work: W, education: E) -> Self {
        Self { work, education }
    }
}

fn work_err(e: ExperienceRepositoryError) -> CreateTimelineEntryError {
    match e {
        ExperienceRepositoryError::DatabaseError(msg) => {
            CreateTimelineEntryError::RepositoryError(msg)
        }
        ExperienceRepositoryError::NotFound => {
            CreateTimelineEntryError::RepositoryError("unexpected not-found".to_string())
        }
    }
}

fn education_err(e: EducationRepositoryError) -> CreateTimelineEntryError {
    match e {
        EducationRepositoryError::DatabaseError(msg) => {
            CreateTimelineEntryError::RepositoryError(msg)
        }
        EducationRepositoryError::NotFound => {
            CreateTimelineEntryError::RepositoryError("unexpected not-found".to_string())
        }
    }
}

#[async_trait]
impl<W, E> ICreateTimelineEntryUseCase for CreateTimelineEntryUseCase<W, E>
where
    W: ExperienceRepository + Send + Sync,
    E: EducationRepository + Send + Sync,
{
    async fn execute(
        &self,
        draft: TimelineDraft,
    ) -> Result<TimelineEntry, CreateTimelineEntryError> {
        if (!draft.is_work() && !draft.is_education()) || draft.company.trim().is_empty() {
            return Err(CreateTimelineEntryError::Validation(
                "Company/Institution and type are required".to_string(),
            ));
        }

        let now = Utc::now().fixed_offset();

        if draft.is_education() {
            let order = self.education.count().await.map_err(education_err)? as i32;
            let title = Some(draft.title).filter(|t| !t.trim().is_empty());
            let education = Education {
                id: format!("education_{}", Uuid::new_v4()),
                title,
                institution: draft.company,
                location: draft.location,
                period: draft.period,
                description: draft.description,
                order,
                created_at: now,
                updated_at: now,
            };
            self.education
                .insert(education.clone())
                .await
                .map_err(education_err)?;
            return Ok(TimelineEntry::Education(education));
        }

        if draft.title.trim().is_empty() {
            return Err(CreateTimelineEntryError::Validation(
                "Title is required for work experience".to_string(),
            ));
        }

        let order = self.work.count().await.map_err(work_err)? as i32;
        let experience = Experience {
            id: format!("work_{}", Uuid::new_v4()),
            title: draft.title,
            company: draft.company,
            location: draft.location,
            period: draft.period,
            description: draft.description,
            key_achievements: draft.key_achievements,
            tech_stacks: draft.tech_stacks,
            role: draft.role,
            order,
            created_at: now,
            updated_at: now,
        };
        self.work
            .insert(experience.clone())
            .await
            .map_err(work_err)?;
        Ok(TimelineEntry::Work(experience))
    }
}
