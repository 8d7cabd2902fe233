use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use std::sync::Arc;

use crate::shared::ordering::OrderUpdate;
use crate::timeline::application::ports::outgoing::{
    ExperienceData, ExperienceRepository, ExperienceRepositoryError,
};
use crate::timeline::domain::Experience;

use super::sea_orm_entity::encode_array_field;
use super::sea_orm_entity::work::{active_model_from_entity, ActiveModel, Column, Entity};

#[derive(Debug, Clone)]
pub struct ExperienceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_err(e: sea_orm::DbErr) -> ExperienceRepositoryError {
    ExperienceRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl ExperienceRepository for ExperienceRepositoryPostgres {
    async fn fetch_all(&self) -> Result<Vec<Experience>, ExperienceRepositoryError> {
        let rows = Entity::find()
            .order_by_asc(Column::Order)
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(rows.into_iter().map(|m| m.into_entity()).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Experience>, ExperienceRepositoryError> {
        let row = Entity::find_by_id(id).one(&*self.db).await.map_err(db_err)?;
        Ok(row.map(|m| m.into_entity()))
    }

    async fn count(&self) -> Result<u64, ExperienceRepositoryError> {
        Entity::find().count(&*self.db).await.map_err(db_err)
    }

    async fn insert(&self, experience: Experience) -> Result<(), ExperienceRepositoryError> {
        active_model_from_entity(experience)
            .insert(&*self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn update(
        &self,
        id: &str,
        data: ExperienceData,
        updated_at: DateTime<FixedOffset>,
    ) -> Result<(), ExperienceRepositoryError> {
        let result = Entity::update_many()
            .set(ActiveModel {
                title: Set(data.title),
                company: Set(data.company),
                location: Set(data.location),
                period: Set(data.period),
                description: Set(data.description),
                key_achievements: Set(encode_array_field(&data.key_achievements)),
                tech_stacks: Set(encode_array_field(&data.tech_stacks)),
                role: Set(data.role.map(|r| r.as_str().to_string())),
                updated_at: Set(updated_at),
                ..Default::default()
            })
            .filter(Column::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(ExperienceRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), ExperienceRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(ExperienceRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn apply_display_order(
        &self,
        updates: &[OrderUpdate],
    ) -> Result<(), ExperienceRepositoryError> {
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
