use async_trait::async_trait;
use uuid::Uuid;

use crate::blog::application::domain::entities::{BlogPost, BlogPostDraft};
use crate::shared::store::StoreError;

#[async_trait]
pub trait BlogPostRepository: Send + Sync {
    /// `published_only` pushes the filter into the query rather than the
    /// service.
    async fn list(&self, published_only: bool) -> Result<Vec<BlogPost>, StoreError>;

    async fn insert(&self, draft: BlogPostDraft) -> Result<BlogPost, StoreError>;

    async fn update(&self, id: Uuid, draft: BlogPostDraft) -> Result<BlogPost, StoreError>;

    async fn delete_by_id(&self, id: Uuid) -> Result<(), StoreError>;
}
