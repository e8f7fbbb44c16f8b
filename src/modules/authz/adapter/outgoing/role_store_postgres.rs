use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::authz::application::ports::outgoing::RoleStore;
use crate::shared::store::StoreError;

use super::sea_orm_entity::{
    ActiveModel as RoleActiveModel, Column as RoleColumn, Entity as RoleEntity,
    Model as RoleModel,
};

#[derive(Debug, Clone)]
pub struct RoleStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl RoleStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RoleStore for RoleStorePostgres {
    async fn has_role(&self, user: UserId, role: &str) -> Result<bool, StoreError> {
        let row: Option<RoleModel> = RoleEntity::find()
            .filter(RoleColumn::UserId.eq(user.value()))
            .filter(RoleColumn::Role.eq(role))
            .one(&*self.db)
            .await
            .map_err(StoreError::from_db_err)?;

        Ok(row.is_some())
    }

    async fn assign_role(&self, user: UserId, role: &str) -> Result<(), StoreError> {
        let active = RoleActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user.value()),
            role: Set(role.to_string()),
            ..Default::default()
        };

        active
            .insert(&*self.db)
            .await
            .map_err(StoreError::from_db_err)?;

        Ok(())
    }
}
