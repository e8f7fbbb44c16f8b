mod list_repos;

pub use list_repos::list_repos_handler;
