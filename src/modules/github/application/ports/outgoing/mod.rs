mod repo_listing;

pub use repo_listing::{RepoFetchError, RepoListing};
