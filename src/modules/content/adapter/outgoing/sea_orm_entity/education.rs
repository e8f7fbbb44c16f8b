use sea_orm::entity::prelude::*;

use crate::content::application::domain::entities::Education;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "education")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub institution: String,
    pub degree: String,
    pub year: String,
    pub sort_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_domain(self) -> Education {
        Education {
            id: self.id,
            institution: self.institution,
            degree: self.degree,
            year: self.year,
            sort_order: self.sort_order,
        }
    }
}
