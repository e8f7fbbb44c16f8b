use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::blog::application::{
    domain::entities::{BlogPost, BlogPostDraft},
    ports::{incoming::use_cases::BlogPostsUseCase, outgoing::BlogPostRepository},
};
use crate::shared::store::StoreError;

pub struct BlogPostsService {
    repository: Arc<dyn BlogPostRepository>,
}

impl BlogPostsService {
    pub fn new(repository: Arc<dyn BlogPostRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl BlogPostsUseCase for BlogPostsService {
    async fn list(&self, include_unpublished: bool) -> Result<Vec<BlogPost>, StoreError> {
        self.repository.list(!include_unpublished).await
    }

    async fn upsert(&self, draft: BlogPostDraft) -> Result<BlogPost, StoreError> {
        match draft.id {
            Some(id) => self.repository.update(id, draft).await,
            None => self.repository.insert(draft).await,
        }
    }

    async fn remove(&self, id: Uuid) -> Result<(), StoreError> {
        self.repository.delete_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::Mutex;

    struct RecordingRepo {
        last_published_only: Mutex<Option<bool>>,
    }

    fn post(published: bool) -> BlogPost {
        BlogPost {
            id: Uuid::new_v4(),
            title: "a post".to_string(),
            slug: "a-post".to_string(),
            content: "hello".to_string(),
            published,
            created_at: Utc::now().fixed_offset(),
        }
    }

    #[async_trait]
    impl BlogPostRepository for RecordingRepo {
        async fn list(&self, published_only: bool) -> Result<Vec<BlogPost>, StoreError> {
            *self.last_published_only.lock().unwrap() = Some(published_only);
            Ok(vec![post(true)])
        }

        async fn insert(&self, _draft: BlogPostDraft) -> Result<BlogPost, StoreError> {
            Ok(post(false))
        }

        async fn update(&self, _id: Uuid, _draft: BlogPostDraft) -> Result<BlogPost, StoreError> {
            Ok(post(true))
        }

        async fn delete_by_id(&self, _id: Uuid) -> Result<(), StoreError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn public_listing_requests_published_only() {
        let repo = Arc::new(RecordingRepo {
            last_published_only: Mutex::new(None),
        });
        let service = BlogPostsService::new(repo.clone());

        service.list(false).await.unwrap();

        assert_eq!(*repo.last_published_only.lock().unwrap(), Some(true));
    }

    #[tokio::test]
    async fn admin_listing_includes_unpublished() {
        let repo = Arc::new(RecordingRepo {
            last_published_only: Mutex::new(None),
        });
        let service = BlogPostsService::new(repo.clone());

        service.list(true).await.unwrap();

        assert_eq!(*repo.last_published_only.lock().unwrap(), Some(false));
    }
}
