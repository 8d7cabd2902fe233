use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::setting::application::ports::outgoing::{SettingRepository, SettingRepositoryError};
use crate::setting::domain::Setting;

use super::sea_orm_entity::{ActiveModel, Column, Entity};

#[derive(Debug, Clone)]
pub struct SettingRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SettingRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_err(e: sea_orm::DbErr) -> SettingRepositoryError {
    SettingRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl SettingRepository for SettingRepositoryPostgres {
    async fn fetch_all(&self) -> Result<Vec<Setting>, SettingRepositoryError> {
        let rows = Entity::find().all(&*self.db).await.map_err(db_err)?;
        Ok(rows.into_iter().map(|m| m.into_entity()).collect())
    }

    async fn find_by_key(&self, key: &str) -> Result<Option<Setting>, SettingRepositoryError> {
        let row = Entity::find()
            .filter(Column::Key.eq(key))
            .one(&*self.db)
            .await
            .map_err(db_err)?;
        Ok(row.map(|m| m.into_entity()))
    }

    async fn upsert(&self, key: &str, value: &str) -> Result<Setting, SettingRepositoryError> {
        let now = Utc::now().fixed_offset();

        if let Some(existing) = self.find_by_key(key).await? {
            let model = ActiveModel {
                id: Set(existing.id),
                value: Set(value.to_string()),
                updated_at: Set(now),
                ..Default::default()
            };
            let updated = model.update(&*self.db).await.map_err(db_err)?;
            return Ok(updated.into_entity());
        }

        let model = ActiveModel {
            id: Set(format!("setting_{}", Uuid::new_v4())),
            key: Set(key.to_string()),
            value: Set(value.to_string()),
            updated_at: Set(now),
        };
        let inserted = model.insert(&*self.db).await.map_err(db_err)?;
        Ok(inserted.into_entity())
    }
}
