use async_trait::async_trait;
use uuid::Uuid;

use crate::shared::store::StoreError;

/// The uniform contract of an ordered portfolio section. One instantiation
/// per entity type lands in `AppState`, e.g.
/// `Arc<dyn SectionUseCase<Project, ProjectDraft>>`.
#[async_trait]
pub trait SectionUseCase<E, D>: Send + Sync {
    /// All rows, ordered by `sort_order` ascending. No rows is an empty vec.
    async fn list(&self) -> Result<Vec<E>, StoreError>;

    /// Draft with an id updates that row (only supplied fields change);
    /// without an id it inserts a new row and returns it with its
    /// server-assigned id.
    async fn upsert(&self, draft: D) -> Result<E, StoreError>;

    /// Deleting an id that no longer exists succeeds.
    async fn remove(&self, id: Uuid) -> Result<(), StoreError>;
}
