mod education;
mod experience;
mod gallery;
mod projects;
mod skills;
mod social_links;

pub use education::{delete_education_handler, list_education_handler, upsert_education_handler};
pub use experience::{
    delete_experience_handler, list_experience_handler, upsert_experience_handler,
};
pub use gallery::{delete_gallery_item_handler, list_gallery_handler, upsert_gallery_item_handler};
pub use projects::{delete_project_handler, list_projects_handler, upsert_project_handler};
pub use skills::{delete_skill_handler, list_skills_handler, upsert_skill_handler};
pub use social_links::{
    delete_social_link_handler, list_social_links_handler, upsert_social_link_handler,
};
