use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::user_repository::{
    NewUser, UserRecord, UserRepository,
};
use crate::shared::store::StoreError;

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity, Model as UserModel,
};

#[derive(Debug, Clone)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        let model: Option<UserModel> = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(StoreError::from_db_err)?;

        Ok(model.map(|m| m.to_record()))
    }

    async fn create(&self, user: NewUser) -> Result<UserRecord, StoreError> {
        let active = UserActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            ..Default::default()
        };

        let inserted: UserModel = active
            .insert(&*self.db)
            .await
            .map_err(StoreError::from_db_err)?;

        Ok(inserted.to_record())
    }

    async fn update_email(&self, id: UserId, email: &str) -> Result<(), StoreError> {
        let active = UserActiveModel {
            id: Set(id.value()),
            email: Set(email.to_string()),
            ..Default::default()
        };

        active
            .update(&*self.db)
            .await
            .map_err(StoreError::from_db_err)?;

        Ok(())
    }

    async fn update_password_hash(&self, id: UserId, hash: &str) -> Result<(), StoreError> {
        let active = UserActiveModel {
            id: Set(id.value()),
            password_hash: Set(hash.to_string()),
            ..Default::default()
        };

        active
            .update(&*self.db)
            .await
            .map_err(StoreError::from_db_err)?;

        Ok(())
    }
}
