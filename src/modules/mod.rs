pub mod auth;
pub mod authz;
pub mod blog;
pub mod content;
pub mod github;
pub mod media;
pub mod portfolio;
pub mod site_config;
pub mod tasks;
