use sea_orm::entity::prelude::*;

use crate::content::application::domain::entities::Experience;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "experience")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub company: String,
    pub role: String,
    pub duration: String,
    pub description: String,
    pub sort_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_domain(self) -> Experience {
        Experience {
            id: self.id,
            company: self.company,
            role: self.role,
            duration: self.duration,
            description: self.description,
            sort_order: self.sort_order,
        }
    }
}
