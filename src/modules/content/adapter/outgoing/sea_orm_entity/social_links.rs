use sea_orm::entity::prelude::*;

use crate::content::application::domain::entities::SocialLink;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "social_links")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub platform: String,
    pub url: String,
    pub icon: Option<String>,
    pub sort_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_domain(self) -> SocialLink {
        SocialLink {
            id: self.id,
            platform: self.platform,
            url: self.url,
            icon: self.icon,
            sort_order: self.sort_order,
        }
    }
}
