use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::content::application::{
    domain::entities::{Experience, ExperienceDraft},
    ports::outgoing::SectionRepository,
};
use crate::shared::store::StoreError;

use super::sea_orm_entity::experience::{
    ActiveModel as ExperienceActiveModel, Column as ExperienceColumn, Entity as ExperienceEntity,
    Model as ExperienceModel,
};

#[derive(Debug, Clone)]
pub struct ExperienceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn apply_draft(active: &mut ExperienceActiveModel, draft: ExperienceDraft) {
    if let Some(v) = draft.company {
        active.company = Set(v);
    }
    if let Some(v) = draft.role {
        active.role = Set(v);
    }
    if let Some(v) = draft.duration {
        active.duration = Set(v);
    }
    if let Some(v) = draft.description {
        active.description = Set(v);
    }
    if let Some(v) = draft.sort_order {
        active.sort_order = Set(v);
    }
}

#[async_trait]
impl SectionRepository<Experience, ExperienceDraft> for ExperienceRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Experience>, StoreError> {
        let models = ExperienceEntity::find()
            .order_by_asc(ExperienceColumn::SortOrder)
            .all(&*self.db)
            .await
            .map_err(StoreError::from_db_err)?;

        Ok(models.into_iter().map(ExperienceModel::into_domain).collect())
    }

    async fn insert(&self, draft: ExperienceDraft) -> Result<Experience, StoreError> {
        let mut active = ExperienceActiveModel {
            id: Set(Uuid::new_v4()),
            company: Set(String::new()),
            role: Set(String::new()),
            duration: Set(String::new()),
            description: Set(String::new()),
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

    async fn update(&self, id: Uuid, draft: ExperienceDraft) -> Result<Experience, StoreError> {
        let mut active = ExperienceActiveModel {
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
        ExperienceEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(StoreError::from_db_err)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn list_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![ExperienceModel {
                id: Uuid::new_v4(),
                company: "Acme".to_string(),
                role: "Engineer".to_string(),
                duration: "2020-2023".to_string(),
                description: "built things".to_string(),
                sort_order: 0,
            }]])
            .into_connection();

        let repo = ExperienceRepositoryPostgres::new(Arc::new(db));

        let rows = repo.list().await.unwrap();

        assert_eq!(rows[0].company, "Acme");
        assert_eq!(rows[0].role, "Engineer");
    }
}
