use chrono::{DateTime, FixedOffset};
use sea_orm::entity::prelude::*;

use crate::blog::application::domain::entities::BlogPost;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "blog_posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub published: bool,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_domain(self) -> BlogPost {
        BlogPost {
            id: self.id,
            title: self.title,
            slug: self.slug,
            content: self.content,
            published: self.published,
            created_at: self.created_at,
        }
    }
}
