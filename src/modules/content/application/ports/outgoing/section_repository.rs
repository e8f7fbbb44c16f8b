use async_trait::async_trait;
use uuid::Uuid;

use crate::shared::store::StoreError;

#[async_trait]
pub trait SectionRepository<E, D>: Send + Sync {
    async fn list(&self) -> Result<Vec<E>, StoreError>;

    async fn insert(&self, draft: D) -> Result<E, StoreError>;

    async fn update(&self, id: Uuid, draft: D) -> Result<E, StoreError>;

    /// Must treat a missing row as success, not `RowNotFound`.
    async fn delete_by_id(&self, id: Uuid) -> Result<(), StoreError>;
}
