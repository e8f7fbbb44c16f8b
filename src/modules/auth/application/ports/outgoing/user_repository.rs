use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::shared::store::StoreError;

/// Persisted account row. The hash never leaves the auth module.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: UserId,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// `None` when no account carries the email; only genuine backend
    /// failures surface as errors.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError>;

    async fn create(&self, user: NewUser) -> Result<UserRecord, StoreError>;

    async fn update_email(&self, id: UserId, email: &str) -> Result<(), StoreError>;

    async fn update_password_hash(&self, id: UserId, hash: &str) -> Result<(), StoreError>;
}
