use serde::Serialize;

use crate::content::application::domain::entities::{
    Education, Experience, GalleryItem, Project, Skill, SocialLink,
};
use crate::site_config::application::domain::entities::SiteConfig;
use crate::tasks::application::domain::entities::Task;

/// Everything the public site needs in one payload. Sections are
/// independently ordered; a section with no rows is an empty array.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioView {
    pub site_config: Option<SiteConfig>,
    pub featured_projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub gallery: Vec<GalleryItem>,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub social_links: Vec<SocialLink>,
    pub tasks: Vec<Task>,
}
