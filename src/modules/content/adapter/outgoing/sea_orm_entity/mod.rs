pub mod education;
pub mod experience;
pub mod gallery;
pub mod projects;
pub mod skills;
pub mod social_links;
