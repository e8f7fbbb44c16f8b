use async_trait::async_trait;

use crate::github::application::{
    domain::entities::RepoSummary, ports::outgoing::RepoFetchError,
};

#[async_trait]
pub trait ListReposUseCase: Send + Sync {
    /// The ten most recently updated public repos. An empty username yields
    /// an empty vec without touching the network.
    async fn execute(&self, username: &str) -> Result<Vec<RepoSummary>, RepoFetchError>;
}
