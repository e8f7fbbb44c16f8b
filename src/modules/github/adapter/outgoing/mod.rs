mod repo_listing_github_api;

pub use repo_listing_github_api::GithubApiRepoListing;
