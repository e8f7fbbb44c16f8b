use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::content::application::{
    domain::entities::{Education, EducationDraft},
    ports::outgoing::SectionRepository,
};
use crate::shared::store::StoreError;

use super::sea_orm_entity::education::{
    ActiveModel as EducationActiveModel, Column as EducationColumn, Entity as EducationEntity,
    Model as EducationModel,
};

#[derive(Debug, Clone)]
pub struct EducationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EducationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn apply_draft(active: &mut EducationActiveModel, draft: EducationDraft) {
    if let Some(v) = draft.institution {
        active.institution = Set(v);
    }
    if let Some(v) = draft.degree {
        active.degree = Set(v);
    }
    if let Some(v) = draft.year {
        active.year = Set(v);
    }
    if let Some(v) = draft.sort_order {
        active.sort_order = Set(v);
    }
}

#[async_trait]
impl SectionRepository<Education, EducationDraft> for EducationRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Education>, StoreError> {
        let models = EducationEntity::find()
            .order_by_asc(EducationColumn::SortOrder)
            .all(&*self.db)
            .await
            .map_err(StoreError::from_db_err)?;

        Ok(models.into_iter().map(EducationModel::into_domain).collect())
    }

    async fn insert(&self, draft: EducationDraft) -> Result<Education, StoreError> {
        let mut active = EducationActiveModel {
            id: Set(Uuid::new_v4()),
            institution: Set(String::new()),
            degree: Set(String::new()),
            year: Set(String::new()),
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

    async fn update(&self, id: Uuid, draft: EducationDraft) -> Result<Education, StoreError> {
        let mut active = EducationActiveModel {
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
        EducationEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(StoreError::from_db_err)?;

        Ok(())
    }
}
