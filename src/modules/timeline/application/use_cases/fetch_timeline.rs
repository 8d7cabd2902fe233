use crate::timeline::application::ports::outgoing::{
    EducationRepository, EducationRepositoryError, ExperienceRepository,
    ExperienceRepositoryError,
};
use crate::timeline::domain::TimelineEntry;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub enum FetchTimelineError {
    RepositoryError(String),
}

/// An interface for the fetch timeline use case
#[async_trait]
pub trait IFetchTimelineUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<TimelineEntry>, FetchTimelineError>;
}

pub struct FetchTimelineUseCase<W, E>
where
    W: ExperienceRepository,
    E: EducationRepository,
{
    work: W,
    education: E,
}

impl<W, E> FetchTimelineUseCase<W, E>
where
    W: ExperienceRepository,
    E: EducationRepository,
{
    pub fn new(work: W, education: E) -> Self {
        Self { work, education }
    }
}

#[async_trait]
impl<W, E> IFetchTimelineUseCase for FetchTimelineUseCase<W, E>
where
    W: ExperienceRepository + Send + Sync,
    E: EducationRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<TimelineEntry>, FetchTimelineError> {
        // Work entries first, then education; the two sub-lists keep
        // their own order spaces and are never interleaved.
        let work = self.work.fetch_all().await.map_err(|e| match e {
            ExperienceRepositoryError::DatabaseError(msg) => {
                FetchTimelineError::RepositoryError(msg)
            }
            ExperienceRepositoryError::NotFound => {
                FetchTimelineError::RepositoryError("unexpected not-found".to_string())
            }
        })?;

        let education = self.education.fetch_all().await.map_err(|e| match e {
            EducationRepositoryError::DatabaseError(msg) => {
                FetchTimelineError::RepositoryError(msg)
            }
            EducationRepositoryError::NotFound => {
                FetchTimelineError::RepositoryError("unexpected not-found".to_string())
            }
        })?;

        let mut entries: Vec<TimelineEntry> =
            work.into_iter().map(TimelineEntry::Work).collect();
        entries.extend(education.into_iter().map(TimelineEntry::Education));

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::in_memory::{
        education_fixture, experience_fixture, InMemoryEducationRepository,
        InMemoryExperienceRepository,
    };

    #[tokio::test]
    async fn test_work_entries_precede_education_entries() {
        let work = InMemoryExperienceRepository::default();
        work.seed(vec![
            experience_fixture("work_b", "Engineer II", 1),
            experience_fixture("work_a", "Engineer I", 0),
        ]);
        let education = InMemoryEducationRepository::default();
        education.seed(vec![education_fixture("education_a", "MIT", 0)]);

        let use_case = FetchTimelineUseCase::new(work, education);
        let entries = use_case.execute().await.unwrap();

        let ids: Vec<&str> = entries.iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec!["work_a", "work_b", "education_a"]);
        assert!(matches!(entries[2], TimelineEntry::Education(_)));
    }

    #[tokio::test]
    async fn test_empty_tables_yield_an_empty_timeline() {
        let use_case = FetchTimelineUseCase::new(
            InMemoryExperienceRepository::default(),
            InMemoryEducationRepository::default(),
        );

        assert!(use_case.execute().await.unwrap().is_empty());
    }
}
