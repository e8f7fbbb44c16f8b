use async_trait::async_trait;
use std::sync::Arc;

use crate::shared::store::StoreError;
use crate::site_config::application::{
    domain::entities::SiteConfig,
    ports::{incoming::use_cases::GetSiteConfigUseCase, outgoing::SiteConfigRepository},
};

pub struct GetSiteConfigService {
    repository: Arc<dyn SiteConfigRepository>,
}

impl GetSiteConfigService {
    pub fn new(repository: Arc<dyn SiteConfigRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl GetSiteConfigUseCase for GetSiteConfigService {
    async fn execute(&self) -> Result<Option<SiteConfig>, StoreError> {
        self.repository.find().await
    }
}
