use async_trait::async_trait;

use crate::github::application::domain::entities::RepoSummary;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RepoFetchError {
    #[error("GitHub request failed: {0}")]
    Transport(String),

    #[error("GitHub responded with status {0}")]
    Status(u16),
}

#[async_trait]
pub trait RepoListing: Send + Sync {
    async fn fetch_for_user(&self, username: &str) -> Result<Vec<RepoSummary>, RepoFetchError>;
}
