use crate::certificate::application::ports::outgoing::{
    CertificateData, CertificateRepository, CertificateRepositoryError,
};
use async_trait::async_trait;
use chrono::Utc;

#[derive(Debug, Clone)]
pub enum UpdateCertificateError {
    Validation(String),
    NotFound,
    RepositoryError(String),
}

/// An interface for the update certificate use case
#[async_trait]
pub trait IUpdateCertificateUseCase: Send + Sync {
    async fn execute(&self, id: &str, data: CertificateData)
        -> Result<(), UpdateCertificateError>;
}

pub struct UpdateCertificateUseCase<R>
where
    R: CertificateRepository,
{
    repository: R,
}

impl<R> UpdateCertificateUseCase<R>
where
    R: CertificateRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IUpdateCertificateUseCase for UpdateCertificateUseCase<R>
where
    R: CertificateRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: &str,
        data: CertificateData,
    ) -> Result<(), UpdateCertificateError> {
        if id.trim().is_empty()
            || data.title.trim().is_empty()
            || data.issuer.trim().is_empty()
            || data.issue_date.trim().is_empty()
        {
            return Err(UpdateCertificateError::Validation(
                "ID, title, issuer, and issue date are required".to_string(),
            ));
        }

        self.repository
            .update(id, data, Utc::now().fixed_offset())
            .await
            .map_err(|e| match e {
                CertificateRepositoryError::NotFound => UpdateCertificateError::NotFound,
                CertificateRepositoryError::DatabaseError(msg) => {
                    UpdateCertificateError::RepositoryError(msg)
                }
            })
    }
}
