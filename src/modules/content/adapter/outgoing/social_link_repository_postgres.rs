use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::content::application::{
    domain::entities::{SocialLink, SocialLinkDraft},
    ports::outgoing::SectionRepository,
};
use crate::shared::store::StoreError;

use super::sea_orm_entity::social_links::{
    ActiveModel as SocialLinkActiveModel, Column as SocialLinkColumn, Entity as SocialLinkEntity,
    Model as SocialLinkModel,
};

#[derive(Debug, Clone)]
pub struct SocialLinkRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SocialLinkRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn apply_draft(active: &mut SocialLinkActiveModel, draft: SocialLinkDraft) {
    if let Some(v) = draft.platform {
        active.platform = Set(v);
    }
    if let Some(v) = draft.url {
        active.url = Set(v);
    }
    if let Some(v) = draft.icon {
        active.icon = Set(Some(v));
    }
    if let Some(v) = draft.sort_order {
        active.sort_order = Set(v);
    }
}

#[async_trait]
impl SectionRepository<SocialLink, SocialLinkDraft> for SocialLinkRepositoryPostgres {
    async fn list(&self) -> Result<Vec<SocialLink>, StoreError> {
        let models = SocialLinkEntity::find()
            .order_by_asc(SocialLinkColumn::SortOrder)
            .all(&*self.db)
            .await
            .map_err(StoreError::from_db_err)?;

        Ok(models.into_iter().map(SocialLinkModel::into_domain).collect())
    }

    async fn insert(&self, draft: SocialLinkDraft) -> Result<SocialLink, StoreError> {
        let mut active = SocialLinkActiveModel {
            id: Set(Uuid::new_v4()),
            platform: Set(String::new()),
            url: Set(String::new()),
            sort_order: Set(0),
            ..Default::default()
        };
        apply_draft(&mut active, draft);

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(StoreError::from_db_err)?;

        Ok(inserted.into_domain())
    }

    async fn update(&self, id: Uuid, draft: SocialLinkDraft) -> Result<SocialLink, StoreError> {
        let mut active = SocialLinkActiveModel {
            id: Set(id),
            ..Default::default()
        };
        apply_draft(&mut active, draft);

        let updated = active
            .update(&*self.db)
            .await
            .map_err(StoreError::from_db_err)?;

        Ok(updated.into_domain())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), StoreError> {
        SocialLinkEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(StoreError::from_db_err)?;

        Ok(())
    }
}
