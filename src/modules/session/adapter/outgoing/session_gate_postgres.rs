use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

use crate::session::application::ports::outgoing::{SessionGate, SessionGateError, SessionUser};

use super::sea_orm_entity::{session, user};

/// Resolves session tokens against the auth collaborator's `session` and
/// `user` tables.
#[derive(Debug, Clone)]
pub struct SessionGatePostgres {
    db: Arc<DatabaseConnection>,
}

impl SessionGatePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SessionGate for SessionGatePostgres {
    async fn current_session(&self, token: &str) -> Result<Option<SessionUser>, SessionGateError> {
        let now = Utc::now().fixed_offset();

        let row = session::Entity::find()
            .filter(session::Column::Token.eq(token))
            .filter(session::Column::ExpiresAt.gt(now))
            .one(&*self.db)
            .await
            .map_err(|e| SessionGateError::StoreError(e.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let owner = user::Entity::find_by_id(&row.user_id)
            .one(&*self.db)
            .await
            .map_err(|e| SessionGateError::StoreError(e.to_string()))?;

        Ok(owner.map(|u| SessionUser {
            name: u.name,
            email: u.email,
        }))
    }
}
