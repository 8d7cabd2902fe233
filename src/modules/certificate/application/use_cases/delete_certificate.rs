use crate::certificate::application::ports::outgoing::{
    CertificateRepository, CertificateRepositoryError,
};
use crate::media::application::ports::outgoing::{public_id_from_url, AssetStore};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

#[derive(Debug, Clone)]
pub enum DeleteCertificateError {
    NotFound,
    RepositoryError(String),
}

/// An interface for the delete certificate use case
#[async_trait]
pub trait IDeleteCertificateUseCase: Send + Sync {
    async fn execute(&self, id: &str) -> Result<(), DeleteCertificateError>;
}

pub struct DeleteCertificateUseCase<R>
where
    R: CertificateRepository,
{
    repository: R,
    asset_store: Arc<dyn AssetStore>,
}

impl<R> DeleteCertificateUseCase<R>
where
    R: CertificateRepository,
{
    pub fn new(repository: R, asset_store: Arc<dyn AssetStore>) -> Self {
        Self {
            repository,
            asset_store,
        }
    }
}

#[async_trait]
impl<R> IDeleteCertificateUseCase for DeleteCertificateUseCase<R>
where
    R: CertificateRepository + Send + Sync,
{
    async fn execute(&self, id: &str) -> Result<(), DeleteCertificateError> {
        let certificate = self
            .repository
            .find_by_id(id)
            .await
            .map_err(|e| match e {
                CertificateRepositoryError::DatabaseError(msg) => {
                    DeleteCertificateError::RepositoryError(msg)
                }
                CertificateRepositoryError::NotFound => DeleteCertificateError::NotFound,
            })?
            .ok_or(DeleteCertificateError::NotFound)?;

        // Best-effort cleanup of the hosted image; the row goes away
        // regardless of whether the media host cooperates.
        if let Some(public_id) = certificate.image.as_deref().and_then(public_id_from_url) {
            if let Err(e) = self.asset_store.delete(&public_id).await {
                warn!("failed to delete asset '{public_id}' for {id}: {e}");
            }
        }

        self.repository.delete(id).await.map_err(|e| match e {
            CertificateRepositoryError::NotFound => DeleteCertificateError::NotFound,
            CertificateRepositoryError::DatabaseError(msg) => {
                DeleteCertificateError::RepositoryError(msg)
            }
        })
    }
}
