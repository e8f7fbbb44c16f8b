mod list_repos_service;

pub use list_repos_service::ListReposService;
