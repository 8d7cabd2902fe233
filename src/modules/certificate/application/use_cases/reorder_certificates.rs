use crate::certificate::application::ports::outgoing::{
    CertificateRepository, CertificateRepositoryError,
};
use crate::shared::ordering::OrderUpdate;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub enum ReorderCertificatesError {
    RepositoryError(String),
}

/// An interface for the reorder certificates use case
#[async_trait]
pub trait IReorderCertificatesUseCase: Send + Sync {
    async fn execute(&self, updates: Vec<OrderUpdate>) -> Result<(), ReorderCertificatesError>;
}

pub struct ReorderCertificatesUseCase<R>
where
    R: CertificateRepository,
{
    repository: R,
}

impl<R> ReorderCertificatesUseCase<R>
where
    R: CertificateRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IReorderCertificatesUseCase for ReorderCertificatesUseCase<R>
where
    R: CertificateRepository + Send + Sync,
{
    async fn execute(&self, updates: Vec<OrderUpdate>) -> Result<(), ReorderCertificatesError> {
        // The caller computes the full permutation; nothing to do for a
        // trivially empty one.
        if updates.is_empty() {
            return Ok(());
        }

        self.repository
            .apply_display_order(&updates)
            .await
            .map_err(|e| match e {
                CertificateRepositoryError::DatabaseError(msg) => {
                    ReorderCertificatesError::RepositoryError(msg)
                }
                CertificateRepositoryError::NotFound => {
                    ReorderCertificatesError::RepositoryError("unexpected not-found".to_string())
                }
            })
    }
}
