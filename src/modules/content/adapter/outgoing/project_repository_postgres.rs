use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::content::application::{
    domain::entities::{Project, ProjectDraft},
    ports::outgoing::SectionRepository,
};
use crate::shared::store::StoreError;

use super::sea_orm_entity::projects::{
    ActiveModel as ProjectActiveModel, Column as ProjectColumn, Entity as ProjectEntity,
    Model as ProjectModel,
};

#[derive(Debug, Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn apply_draft(active: &mut ProjectActiveModel, draft: ProjectDraft) {
    if let Some(v) = draft.title {
        active.title = Set(v);
    }
    if let Some(v) = draft.description {
        active.description = Set(v);
    }
    if let Some(v) = draft.tech_stack {
        active.tech_stack = Set(serde_json::json!(v));
    }
    if let Some(v) = draft.live_demo_url {
        active.live_demo_url = Set(Some(v));
    }
    if let Some(v) = draft.github_url {
        active.github_url = Set(Some(v));
    }
    if let Some(v) = draft.screenshot_url {
        active.screenshot_url = Set(Some(v));
    }
    if let Some(v) = draft.featured {
        active.featured = Set(v);
    }
    if let Some(v) = draft.sort_order {
        active.sort_order = Set(v);
    }
}

#[async_trait]
impl SectionRepository<Project, ProjectDraft> for ProjectRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Project>, StoreError> {
        let models = ProjectEntity::find()
            .order_by_asc(ProjectColumn::SortOrder)
            .all(&*self.db)
            .await
            .map_err(StoreError::from_db_err)?;

        Ok(models.into_iter().map(ProjectModel::into_domain).collect())
    }

    async fn insert(&self, draft: ProjectDraft) -> Result<Project, StoreError> {
        let mut active = ProjectActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(String::new()),
            description: Set(String::new()),
            tech_stack: Set(serde_json::json!([])),
            featured: Set(false),
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

    async fn update(&self, id: Uuid, draft: ProjectDraft) -> Result<Project, StoreError> {
        let mut active = ProjectActiveModel {
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
        // rows_affected 0 means the row was already gone, which is fine.
        ProjectEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(StoreError::from_db_err)?;

        Ok(())
    }
}
