use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::shared::store::StoreError;

pub const ADMIN_ROLE: &str = "admin";

#[async_trait]
pub trait RoleStore: Send + Sync {
    /// True iff a row (user, role) exists. Absence is `false`, not an error.
    async fn has_role(&self, user: UserId, role: &str) -> Result<bool, StoreError>;

    async fn assign_role(&self, user: UserId, role: &str) -> Result<(), StoreError>;
}
