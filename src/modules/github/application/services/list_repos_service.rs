use async_trait::async_trait;
use std::sync::Arc;

use crate::github::application::{
    domain::entities::RepoSummary,
    ports::{
        incoming::use_cases::ListReposUseCase,
        outgoing::{RepoFetchError, RepoListing},
    },
};

pub struct ListReposService {
    listing: Arc<dyn RepoListing>,
}

impl ListReposService {
    pub fn new(listing: Arc<dyn RepoListing>) -> Self {
        Self { listing }
    }
}

#[async_trait]
impl ListReposUseCase for ListReposService {
    async fn execute(&self, username: &str) -> Result<Vec<RepoSummary>, RepoFetchError> {
        let username = username.trim();
        if username.is_empty() {
            return Ok(vec![]);
        }

        self.listing.fetch_for_user(username).await
    }
}
