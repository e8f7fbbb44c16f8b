use sea_orm::entity::prelude::*;

use crate::content::application::domain::entities::GalleryItem;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "gallery")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub image_url: String,
    pub caption: Option<String>,
    pub sort_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_domain(self) -> GalleryItem {
        GalleryItem {
            id: self.id,
            image_url: self.image_url,
            caption: self.caption,
            sort_order: self.sort_order,
        }
    }
}
