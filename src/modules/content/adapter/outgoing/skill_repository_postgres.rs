use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::content::application::{
    domain::entities::{Skill, SkillDraft},
    ports::outgoing::SectionRepository,
};
use crate::shared::store::StoreError;

use super::sea_orm_entity::skills::{
    ActiveModel as SkillActiveModel, Column as SkillColumn, Entity as SkillEntity,
    Model as SkillModel,
};

#[derive(Debug, Clone)]
pub struct SkillRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn apply_draft(active: &mut SkillActiveModel, draft: SkillDraft) {
    if let Some(v) = draft.name {
        active.name = Set(v);
    }
    if let Some(v) = draft.category {
        active.category = Set(v);
    }
    if let Some(v) = draft.icon {
        active.icon = Set(Some(v));
    }
    if let Some(v) = draft.sort_order {
        active.sort_order = Set(v);
    }
}

#[async_trait]
impl SectionRepository<Skill, SkillDraft> for SkillRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Skill>, StoreError> {
        let models = SkillEntity::find()
            .order_by_asc(SkillColumn::SortOrder)
            .all(&*self.db)
            .await
            .map_err(StoreError::from_db_err)?;

        Ok(models.into_iter().map(SkillModel::into_domain).collect())
    }

    async fn insert(&self, draft: SkillDraft) -> Result<Skill, StoreError> {
        let mut active = SkillActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(String::new()),
            category: Set(String::new()),
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

    async fn update(&self, id: Uuid, draft: SkillDraft) -> Result<Skill, StoreError> {
        let mut active = SkillActiveModel {
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
        SkillEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(StoreError::from_db_err)?;

        Ok(())
    }
}
