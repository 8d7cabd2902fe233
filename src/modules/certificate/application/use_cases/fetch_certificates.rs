use crate::certificate::application::ports::outgoing::{
    CertificateRepository, CertificateRepositoryError,
};
use crate::certificate::domain::Certificate;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub enum FetchCertificatesError {
    RepositoryError(String),
}

/// An interface for the fetch certificates use case
#[async_trait]
pub trait IFetchCertificatesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Certificate>, FetchCertificatesError>;
}

pub struct FetchCertificatesUseCase<R>
where
    R: CertificateRepository,
{
    repository: R,
}

impl<R> FetchCertificatesUseCase<R>
where
    R: CertificateRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IFetchCertificatesUseCase for FetchCertificatesUseCase<R>
where
    R: CertificateRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Certificate>, FetchCertificatesError> {
        self.repository.fetch_all().await.map_err(|e| match e {
            CertificateRepositoryError::DatabaseError(msg) => {
                FetchCertificatesError::RepositoryError(msg)
            }
            CertificateRepositoryError::NotFound => {
                FetchCertificatesError::RepositoryError("unexpected not-found".to_string())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::in_memory::{certificate_fixture, InMemoryCertificateRepository};

    #[tokio::test]
    async fn test_fetch_on_empty_store_returns_empty_list() {
        let repo = InMemoryCertificateRepository::default();
        let use_case = FetchCertificatesUseCase::new(repo);

        let result = use_case.execute().await.unwrap();

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_returns_rows_sorted_by_display_order() {
        let repo = InMemoryCertificateRepository::default();
        repo.seed(vec![
            certificate_fixture("certificate_b", "B", 2),
            certificate_fixture("certificate_a", "A", 0),
            certificate_fixture("certificate_c", "C", 1),
        ]);

        let use_case = FetchCertificatesUseCase::new(repo);
        let result = use_case.execute().await.unwrap();

        let ids: Vec<&str> = result.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["certificate_a", "certificate_c", "certificate_b"]);
    }
}
