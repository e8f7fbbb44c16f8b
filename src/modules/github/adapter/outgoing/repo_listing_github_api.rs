use async_trait::async_trait;
use serde::Deserialize;

use crate::github::application::{
    domain::entities::RepoSummary,
    ports::outgoing::{RepoFetchError, RepoListing},
};

const DEFAULT_BASE_URL: &str = "https://api.github.com";
const PER_PAGE: u8 = 10;

/// Unauthenticated GitHub REST calls require a User-Agent.
const USER_AGENT: &str = concat!("portfolio-backend/", env!("CARGO_PKG_VERSION"));

/// Wire shape of the fields we keep from `GET /users/{username}/repos`.
#[derive(Debug, Deserialize)]
struct ApiRepo {
    name: String,
    description: Option<String>,
    html_url: String,
    language: Option<String>,
    #[serde(default)]
    stargazers_count: u64,
    #[serde(default)]
    forks_count: u64,
}

impl ApiRepo {
    fn into_domain(self) -> RepoSummary {
        RepoSummary {
            name: self.name,
            description: self.description,
            html_url: self.html_url,
            language: self.language,
            stars: self.stargazers_count,
            forks: self.forks_count,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GithubApiRepoListing {
    http: reqwest::Client,
    base_url: String,
}

impl GithubApiRepoListing {
    pub fn new(http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    #[cfg(test)]
    fn with_base_url(http: reqwest::Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    fn repos_url(&self, username: &str) -> String {
        format!(
            "{}/users/{}/repos?sort=updated&per_page={}",
            self.base_url, username, PER_PAGE
        )
    }
}

#[async_trait]
impl RepoListing for GithubApiRepoListing {
    async fn fetch_for_user(&self, username: &str) -> Result<Vec<RepoSummary>, RepoFetchError> {
        let response = self
            .http
            .get(self.repos_url(username))
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| RepoFetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RepoFetchError::Status(status.as_u16()));
        }

        let repos: Vec<ApiRepo> = response
            .json()
            .await
            .map_err(|e| RepoFetchError::Transport(e.to_string()))?;

        Ok(repos.into_iter().map(ApiRepo::into_domain).collect())
    }
}
