use async_trait::async_trait;
use uuid::Uuid;

use crate::shared::store::StoreError;
use crate::site_config::application::domain::entities::{SiteConfig, SiteConfigDraft};

#[async_trait]
pub trait SiteConfigRepository: Send + Sync {
    async fn find(&self) -> Result<Option<SiteConfig>, StoreError>;

    async fn insert(&self, draft: SiteConfigDraft) -> Result<SiteConfig, StoreError>;

    async fn update(&self, id: Uuid, draft: SiteConfigDraft) -> Result<SiteConfig, StoreError>;
}
