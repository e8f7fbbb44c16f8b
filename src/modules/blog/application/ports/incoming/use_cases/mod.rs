use async_trait::async_trait;
use uuid::Uuid;

use crate::blog::application::domain::entities::{BlogPost, BlogPostDraft};
use crate::shared::store::StoreError;

#[async_trait]
pub trait BlogPostsUseCase: Send + Sync {
    /// Newest first. With `include_unpublished` false the result never
    /// contains an unpublished post.
    async fn list(&self, include_unpublished: bool) -> Result<Vec<BlogPost>, StoreError>;

    async fn upsert(&self, draft: BlogPostDraft) -> Result<BlogPost, StoreError>;

    async fn remove(&self, id: Uuid) -> Result<(), StoreError>;
}
