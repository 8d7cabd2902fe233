use crate::certificate::application::ports::outgoing::{
    CertificateData, CertificateRepository, CertificateRepositoryError,
};
use crate::certificate::domain::Certificate;
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum CreateCertificateError {
    Validation(String),
    RepositoryError(String),
}

/// An interface for the create certificate use case
#[async_trait]
pub trait ICreateCertificateUseCase: Send + Sync {
    async fn execute(&self, data: CertificateData) -> Result<Certificate, CreateCertificateError>;
}

pub struct CreateCertificateUseCase<R>
where
    R: CertificateRepository,
{
    repository: R,
}

impl<R> CreateCertificateUseCase<R>
where
    R: CertificateRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_repo_error(e: CertificateRepositoryError) -> CreateCertificateError {
    match e {
        CertificateRepositoryError::DatabaseError(msg) => {
            CreateCertificateError::RepositoryError(msg)
        }
        CertificateRepositoryError::NotFound => {
            CreateCertificateError::RepositoryError("unexpected not-found".to_string())
        }
    }
}

#[async_trait]
impl<R> ICreateCertificateUseCase for CreateCertificateUseCase<R>
where
    R: CertificateRepository + Send + Sync,
{
    async fn execute(&self, data: CertificateData) -> Result<Certificate, CreateCertificateError> {
        if data.title.trim().is_empty()
            || data.issuer.trim().is_empty()
            || data.issue_date.trim().is_empty()
        {
            return Err(CreateCertificateError::Validation(
                "Title, issuer, and issue date are required".to_string(),
            ));
        }

        // New rows are appended to the end of the list; an empty list
        // yields order 0.
        let order = self.repository.count().await.map_err(map_repo_error)? as i32;

        let now = Utc::now().fixed_offset();
        let certificate = Certificate {
            id: format!("certificate_{}", Uuid::new_v4()),
            title: data.title,
            issuer: data.issuer,
            issue_date: data.issue_date,
            credential_id: data.credential_id,
            credential_url: data.credential_url,
            image: data.image,
            order,
            created_at: now,
            updated_at: now,
        };

        self.repository
            .insert(certificate.clone())
            .await
            .map_err(map_repo_error)?;

        Ok(certificate)
    }
}
