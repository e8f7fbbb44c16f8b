use chrono::{DateTime, FixedOffset};
use sea_orm::entity::prelude::*;

use crate::content::application::domain::entities::Project;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// JSONB array of strings.
    pub tech_stack: Json,
    pub live_demo_url: Option<String>,
    pub github_url: Option<String>,
    pub screenshot_url: Option<String>,
    pub featured: bool,
    pub sort_order: i32,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_domain(self) -> Project {
        // A malformed jsonb value reads as an empty stack rather than failing
        // the whole listing.
        let tech_stack = serde_json::from_value(self.tech_stack).unwrap_or_default();

        Project {
            id: self.id,
            title: self.title,
            description: self.description,
            tech_stack,
            live_demo_url: self.live_demo_url,
            github_url: self.github_url,
            screenshot_url: self.screenshot_url,
            featured: self.featured,
            sort_order: self.sort_order,
        }
    }
}
