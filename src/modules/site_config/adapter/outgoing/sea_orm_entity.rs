use chrono::{DateTime, FixedOffset};
use sea_orm::entity::prelude::*;

use crate::site_config::application::domain::entities::SiteConfig;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "site_config")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub site_name: Option<String>,
    pub description: Option<String>,
    pub hero_name: Option<String>,
    pub hero_headline: Option<String>,
    pub hero_photo_url: Option<String>,
    pub favicon_url: Option<String>,
    pub cv_url: Option<String>,
    pub about_text: Option<String>,
    pub github_username: Option<String>,
    pub updated_at: DateTime<FixedOffset>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_domain(self) -> SiteConfig {
        SiteConfig {
            id: self.id,
            site_name: self.site_name,
            description: self.description,
            hero_name: self.hero_name,
            hero_headline: self.hero_headline,
            hero_photo_url: self.hero_photo_url,
            favicon_url: self.favicon_url,
            cv_url: self.cv_url,
            about_text: self.about_text,
            github_username: self.github_username,
        }
    }
}
