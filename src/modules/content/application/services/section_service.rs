use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::content::application::{
    domain::entities::SectionDraft,
    ports::{incoming::use_cases::SectionUseCase, outgoing::SectionRepository},
};
use crate::shared::store::StoreError;

/// One service drives all six section tables; the entity and draft types pick
/// the repository instantiation.
pub struct SectionService<E, D> {
    repository: Arc<dyn SectionRepository<E, D>>,
}

impl<E, D> SectionService<E, D> {
    pub fn new(repository: Arc<dyn SectionRepository<E, D>>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<E, D> SectionUseCase<E, D> for SectionService<E, D>
where
    E: Send + Sync + 'static,
    D: SectionDraft + Send + Sync + 'static,
{
    async fn list(&self) -> Result<Vec<E>, StoreError> {
        self.repository.list().await
    }

    async fn upsert(&self, draft: D) -> Result<E, StoreError> {
        match draft.id() {
            Some(id) => self.repository.update(id, draft).await,
            None => self.repository.insert(draft).await,
        }
    }

    async fn remove(&self, id: Uuid) -> Result<(), StoreError> {
        self.repository.delete_by_id(id).await
    }
}
