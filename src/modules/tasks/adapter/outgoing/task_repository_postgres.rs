use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::content::application::ports::outgoing::SectionRepository;
use crate::shared::store::StoreError;
use crate::tasks::application::domain::entities::{Task, TaskDraft, TaskStatus};

use super::sea_orm_entity::{
    ActiveModel as TaskActiveModel, Column as TaskColumn, Entity as TaskEntity,
    Model as TaskModel,
};

/// Newest-first, unlike the sort_order sections.
#[derive(Debug, Clone)]
pub struct TaskRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TaskRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn apply_draft(active: &mut TaskActiveModel, draft: TaskDraft) {
    if let Some(v) = draft.title {
        active.title = Set(v);
    }
    if let Some(v) = draft.description {
        active.description = Set(Some(v));
    }
    if let Some(v) = draft.url {
        active.url = Set(Some(v));
    }
    if let Some(v) = draft.github_repo {
        active.github_repo = Set(Some(v));
    }
    if let Some(v) = draft.status {
        active.status = Set(v.as_str().to_string());
    }
}

#[async_trait]
impl SectionRepository<Task, TaskDraft> for TaskRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Task>, StoreError> {
        let models = TaskEntity::find()
            .order_by_desc(TaskColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(StoreError::from_db_err)?;

        Ok(models.into_iter().map(TaskModel::into_domain).collect())
    }

    async fn insert(&self, draft: TaskDraft) -> Result<Task, StoreError> {
        let mut active = TaskActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(String::new()),
            status: Set(TaskStatus::Pending.as_str().to_string()),
            ..Default::default()
        };
        apply_draft(&mut active, draft);

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(StoreError::from_db_err)?;

        Ok(inserted.into_domain())
    }

    async fn update(&self, id: Uuid, draft: TaskDraft) -> Result<Task, StoreError> {
        let mut active = TaskActiveModel {
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
        TaskEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(StoreError::from_db_err)?;

        Ok(())
    }
}
