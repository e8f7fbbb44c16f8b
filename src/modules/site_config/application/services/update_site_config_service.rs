use async_trait::async_trait;
use std::sync::Arc;

use crate::shared::store::StoreError;
use crate::site_config::application::{
    domain::entities::{SiteConfig, SiteConfigDraft},
    ports::{incoming::use_cases::UpdateSiteConfigUseCase, outgoing::SiteConfigRepository},
};

/// Ensure-and-update over the singleton row. The read-then-write is not
/// guarded by a compare-and-swap; two concurrent admins race and the last
/// write wins, which is accepted.
pub struct UpdateSiteConfigService {
    repository: Arc<dyn SiteConfigRepository>,
}

impl UpdateSiteConfigService {
    pub fn new(repository: Arc<dyn SiteConfigRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UpdateSiteConfigUseCase for UpdateSiteConfigService {
    async fn execute(&self, draft: SiteConfigDraft) -> Result<SiteConfig, StoreError> {
        match self.repository.find().await? {
            Some(existing) => self.repository.update(existing.id, draft).await,
            None => self.repository.insert(draft).await,
        }
    }
}
