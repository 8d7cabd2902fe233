use crate::certificate::domain::Certificate;
use crate::shared::ordering::OrderUpdate;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};

#[derive(Debug, Clone)]
pub enum CertificateRepositoryError {
    NotFound,
    DatabaseError(String),
}

/// Editable fields of a certificate, as carried by create and update
/// payloads. Identity, order and timestamps are managed elsewhere.
#[derive(Debug, Clone)]
pub struct CertificateData {
    pub title: String,
    pub issuer: String,
    pub issue_date: String,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
    pub image: Option<String>,
}

#[async_trait]
pub trait CertificateRepository: Send + Sync {
    /// All certificates, ascending by display order.
    async fn fetch_all(&self) -> Result<Vec<Certificate>, CertificateRepositoryError>;

    async fn find_by_id(
        &self,
        id: &str,
    ) -> Result<Option<Certificate>, CertificateRepositoryError>;

    async fn count(&self) -> Result<u64, CertificateRepositoryError>;

    async fn insert(&self, certificate: Certificate) -> Result<(), CertificateRepositoryError>;

    /// Overwrites the editable fields of an existing row.
    /// `NotFound` when `id` matches nothing.
    async fn update(
        &self,
        id: &str,
        data: CertificateData,
        updated_at: DateTime<FixedOffset>,
    ) -> Result<(), CertificateRepositoryError>;

    /// `NotFound` when `id` matches nothing.
    async fn delete(&self, id: &str) -> Result<(), CertificateRepositoryError>;

    /// Rewrites the `order` column for every listed row, atomically.
    async fn apply_display_order(
        &self,
        updates: &[OrderUpdate],
    ) -> Result<(), CertificateRepositoryError>;
}
