use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use std::sync::Arc;

use crate::shared::ordering::OrderUpdate;
use crate::timeline::application::ports::outgoing::{
    EducationData, EducationRepository, EducationRepositoryError,
};
use crate::timeline::domain::Education;

use super::sea_orm_entity::education::{active_model_from_entity, ActiveModel, Column, Entity};

#[derive(Debug, Clone)]
pub struct EducationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EducationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_err(e: sea_orm::DbErr) -> EducationRepositoryError {
    EducationRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl EducationRepository for EducationRepositoryPostgres {
    async fn fetch_all(&self) -> Result<Vec<Education>, EducationRepositoryError> {
        let rows = Entity::find()
            .order_by_asc(Column::Order)
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(rows.into_iter().map(|m| m.into_entity()).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Education>, EducationRepositoryError> {
        let row = Entity::find_by_id(id).one(&*self.db).await.map_err(db_err)?;
        Ok(row.map(|m| m.into_entity()))
    }

    async fn count(&self) -> Result<u64, EducationRepositoryError> {
        Entity::find().count(&*self.db).await.map_err(db_err)
    }

    async fn insert(&self, education: Education) -> Result<(), EducationRepositoryError> {
        active_model_from_entity(education)
            .insert(&*self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn update(
        &self,
        id: &str,
        data: EducationData,
        updated_at: DateTime<FixedOffset>,
    ) -> Result<(), EducationRepositoryError> {
        let result = Entity::update_many()
            .set(ActiveModel {
                title: Set(data.title),
                institution: Set(data.institution),
                location: Set(data.location),
                period: Set(data.period),
                description: Set(data.description),
                updated_at: Set(updated_at),
                ..Default::default()
            })
            .filter(Column::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(EducationRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), EducationRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(EducationRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn apply_display_order(
        &self,
        updates: &[OrderUpdate],
    ) -> Result<(), EducationRepositoryError> {
        let now = chrono::Utc::now().fixed_offset();

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
