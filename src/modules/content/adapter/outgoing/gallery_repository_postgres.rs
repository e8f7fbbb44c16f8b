use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::content::application::{
    domain::entities::{GalleryItem, GalleryItemDraft},
    ports::outgoing::SectionRepository,
};
use crate::shared::store::StoreError;

use super::sea_orm_entity::gallery::{
    ActiveModel as GalleryActiveModel, Column as GalleryColumn, Entity as GalleryEntity,
    Model as GalleryModel,
};

#[derive(Debug, Clone)]
pub struct GalleryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl GalleryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn apply_draft(active: &mut GalleryActiveModel, draft: GalleryItemDraft) {
    if let Some(v) = draft.image_url {
        active.image_url = Set(v);
    }
    if let Some(v) = draft.caption {
        active.caption = Set(Some(v));
    }
    if let Some(v) = draft.sort_order {
        active.sort_order = Set(v);
    }
}

#[async_trait]
impl SectionRepository<GalleryItem, GalleryItemDraft> for GalleryRepositoryPostgres {
    async fn list(&self) -> Result<Vec<GalleryItem>, StoreError> {
        let models = GalleryEntity::find()
            .order_by_asc(GalleryColumn::SortOrder)
            .all(&*self.db)
            .await
            .map_err(StoreError::from_db_err)?;

        Ok(models.into_iter().map(GalleryModel::into_domain).collect())
    }

    async fn insert(&self, draft: GalleryItemDraft) -> Result<GalleryItem, StoreError> {
        let mut active = GalleryActiveModel {
            id: Set(Uuid::new_v4()),
            image_url: Set(String::new()),
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

    async fn update(&self, id: Uuid, draft: GalleryItemDraft) -> Result<GalleryItem, StoreError> {
        let mut active = GalleryActiveModel {
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
        GalleryEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(StoreError::from_db_err)?;

        Ok(())
    }
}
