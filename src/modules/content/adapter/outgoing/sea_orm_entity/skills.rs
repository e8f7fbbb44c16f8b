use sea_orm::entity::prelude::*;

use crate::content::application::domain::entities::Skill;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub icon: Option<String>,
    pub sort_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_domain(self) -> Skill {
        Skill {
            id: self.id,
            name: self.name,
            category: self.category,
            icon: self.icon,
            sort_order: self.sort_order,
        }
    }
}
