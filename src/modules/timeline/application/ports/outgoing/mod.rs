mod education_repository;
mod experience_repository;

pub use education_repository::{EducationData, EducationRepository, EducationRepositoryError};
pub use experience_repository::{ExperienceData, ExperienceRepository, ExperienceRepositoryError};
