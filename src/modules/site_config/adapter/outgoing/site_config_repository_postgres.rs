use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::shared::store::StoreError;
use crate::site_config::application::{
    domain::entities::{SiteConfig, SiteConfigDraft},
    ports::outgoing::SiteConfigRepository,
};

use super::sea_orm_entity::{
    ActiveModel as ConfigActiveModel, Entity as ConfigEntity, Model as ConfigModel,
};

#[derive(Debug, Clone)]
pub struct SiteConfigRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SiteConfigRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn apply_draft(active: &mut ConfigActiveModel, draft: SiteConfigDraft) {
    if let Some(v) = draft.site_name {
        active.site_name = Set(Some(v));
    }
    if let Some(v) = draft.description {
        active.description = Set(Some(v));
    }
    if let Some(v) = draft.hero_name {
        active.hero_name = Set(Some(v));
    }
    if let Some(v) = draft.hero_headline {
        active.hero_headline = Set(Some(v));
    }
    if let Some(v) = draft.hero_photo_url {
        active.hero_photo_url = Set(Some(v));
    }
    if let Some(v) = draft.favicon_url {
        active.favicon_url = Set(Some(v));
    }
    if let Some(v) = draft.cv_url {
        active.cv_url = Set(Some(v));
    }
    if let Some(v) = draft.about_text {
        active.about_text = Set(Some(v));
    }
    if let Some(v) = draft.github_username {
        active.github_username = Set(Some(v));
    }
}

#[async_trait]
impl SiteConfigRepository for SiteConfigRepositoryPostgres {
    async fn find(&self) -> Result<Option<SiteConfig>, StoreError> {
        let model: Option<ConfigModel> = ConfigEntity::find()
            .one(&*self.db)
            .await
            .map_err(StoreError::from_db_err)?;

        Ok(model.map(ConfigModel::into_domain))
    }

    async fn insert(&self, draft: SiteConfigDraft) -> Result<SiteConfig, StoreError> {
        let mut active = ConfigActiveModel {
            id: Set(Uuid::new_v4()),
            ..Default::default()
        };
        apply_draft(&mut active, draft);

        let inserted: ConfigModel = active
            .insert(&*self.db)
            .await
            .map_err(StoreError::from_db_err)?;

        Ok(inserted.into_domain())
    }

    async fn update(&self, id: Uuid, draft: SiteConfigDraft) -> Result<SiteConfig, StoreError> {
        let mut active = ConfigActiveModel {
            id: Set(id),
            ..Default::default()
        };
        apply_draft(&mut active, draft);

        let updated: ConfigModel = active
            .update(&*self.db)
            .await
            .map_err(StoreError::from_db_err)?;

        Ok(updated.into_domain())
    }
}
