use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use std::sync::Arc;

use crate::certificate::application::ports::outgoing::{
    CertificateData, CertificateRepository, CertificateRepositoryError,
};
use crate::certificate::domain::Certificate;
use crate::shared::ordering::OrderUpdate;

use super::sea_orm_entity::{active_model_from_entity, ActiveModel, Column, Entity};

#[derive(Debug, Clone)]
pub struct CertificateRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CertificateRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_err(e: sea_orm::DbErr) -> CertificateRepositoryError {
    CertificateRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl CertificateRepository for CertificateRepositoryPostgres {
    async fn fetch_all(&self) -> Result<Vec<Certificate>, CertificateRepositoryError> {
        let rows = Entity::find()
            .order_by_asc(Column::Order)
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(rows.into_iter().map(|m| m.into_entity()).collect())
    }

    async fn find_by_id(
        &self,
        id: &str,
    ) -> Result<Option<Certificate>, CertificateRepositoryError> {
        let row = Entity::find_by_id(id).one(&*self.db).await.map_err(db_err)?;
        Ok(row.map(|m| m.into_entity()))
    }

    async fn count(&self) -> Result<u64, CertificateRepositoryError> {
        Entity::find().count(&*self.db).await.map_err(db_err)
    }

    async fn insert(&self, certificate: Certificate) -> Result<(), CertificateRepositoryError> {
        active_model_from_entity(certificate)
            .insert(&*self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn update(
        &self,
        id: &str,
        data: CertificateData,
        updated_at: DateTime<FixedOffset>,
    ) -> Result<(), CertificateRepositoryError> {
        let result = Entity::update_many()
            .set(ActiveModel {
                title: Set(data.title),
                issuer: Set(data.issuer),
                issue_date: Set(data.issue_date),
                credential_id: Set(data.credential_id),
                credential_url: Set(data.credential_url),
                image: Set(data.image),
                updated_at: Set(updated_at),
                ..Default::default()
            })
            .filter(Column::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(CertificateRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), CertificateRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(CertificateRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn apply_display_order(
        &self,
        updates: &[OrderUpdate],
    ) -> Result<(), CertificateRepositoryError> {
        let now = chrono::Utc::now().fixed_offset();

        // All-or-nothing: a half-applied permutation is worse than a
        // rejected one.
        let txn = self.db.begin().await.map_err(db_err)?;
        for update in updates {
            Entity::update_many()
                .set(ActiveModel {
                    order: Set(update.order),
                    updated_at: Set(now),
                    ..Default::default()
                })
                .filter(Column::Id.eq(&update.id))
                .exec(&txn)
                .await
                .map_err(db_err)?;
        }
        txn.commit().await.map_err(db_err)?;

        Ok(())
    }
}
