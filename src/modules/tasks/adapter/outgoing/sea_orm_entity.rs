use chrono::{DateTime, FixedOffset};
use sea_orm::entity::prelude::*;

use crate::tasks::application::domain::entities::{Task, TaskStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub github_repo: Option<String>,
    pub status: String,
    pub created_at: DateTime<FixedOffset>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_domain(self) -> Task {
        Task {
            id: self.id,
            title: self.title,
            description: self.description,
            url: self.url,
            github_repo: self.github_repo,
            status: TaskStatus::from_stored(&self.status),
        }
    }
}
