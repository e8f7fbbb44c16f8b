use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::shared::store::StoreError;

/// The boolean admin probe. An anonymous caller is `false` without touching
/// the store; a missing role row is also `false`, never an error.
#[async_trait]
pub trait CheckAdminUseCase: Send + Sync {
    async fn is_admin(&self, user: Option<UserId>) -> Result<bool, StoreError>;
}
