use async_trait::async_trait;

use crate::shared::store::StoreError;
use crate::site_config::application::domain::entities::{SiteConfig, SiteConfigDraft};

#[async_trait]
pub trait GetSiteConfigUseCase: Send + Sync {
    /// Zero rows is `None`, not an error.
    async fn execute(&self) -> Result<Option<SiteConfig>, StoreError>;
}

#[async_trait]
pub trait UpdateSiteConfigUseCase: Send + Sync {
    /// Idempotent ensure-and-update: updates the singleton when present,
    /// inserts it when absent. The row count stays at 0 or 1.
    async fn execute(&self, draft: SiteConfigDraft) -> Result<SiteConfig, StoreError>;
}
