use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use std::sync::Arc;

use crate::project::application::ports::outgoing::{
    ProjectData, ProjectRepository, ProjectRepositoryError,
};
use crate::project::domain::Project;
use crate::shared::ordering::OrderUpdate;

use super::sea_orm_entity::{
    active_model_from_entity, encode_array_field, ActiveModel, Column, Entity,
};

#[derive(Debug, Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_err(e: sea_orm::DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn fetch_all(&self) -> Result<Vec<Project>, ProjectRepositoryError> {
        let rows = Entity::find()
            .order_by_asc(Column::Order)
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(rows.into_iter().map(|m| m.into_entity()).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Project>, ProjectRepositoryError> {
        let row = Entity::find_by_id(id).one(&*self.db).await.map_err(db_err)?;
        Ok(row.map(|m| m.into_entity()))
    }

    async fn count(&self) -> Result<u64, ProjectRepositoryError> {
        Entity::find().count(&*self.db).await.map_err(db_err)
    }

    async fn insert(&self, project: Project) -> Result<(), ProjectRepositoryError> {
        active_model_from_entity(project)
            .insert(&*self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn update(
        &self,
        id: &str,
        data: ProjectData,
        updated_at: DateTime<FixedOffset>,
    ) -> Result<(), ProjectRepositoryError> {
        let result = Entity::update_many()
            .set(ActiveModel {
                title: Set(data.title),
                description: Set(data.description),
                image: Set(data.image),
                technologies: Set(encode_array_field(&data.technologies)),
                github_url: Set(data.github_url),
                live_url: Set(data.live_url),
                objectives: Set(encode_array_field(&data.objectives)),
                key_challenges: Set(encode_array_field(&data.key_challenges)),
                featured: Set(data.featured),
                updated_at: Set(updated_at),
                ..Default::default()
            })
            .filter(Column::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(ProjectRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), ProjectRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(ProjectRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn apply_display_order(
        &self,
        updates: &[OrderUpdate],
    ) -> Result<(), ProjectRepositoryError> {
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
