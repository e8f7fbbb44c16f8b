use std::marker::PhantomData;
use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::test;
use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::incoming::use_cases::{
    LoginCommand, LoginError, LoginResult, LoginUserUseCase, UpdateCredentialsCommand,
    UpdateCredentialsError, UpdateCredentialsUseCase,
};
use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};
use crate::authz::application::ports::incoming::use_cases::CheckAdminUseCase;
use crate::blog::application::domain::entities::{BlogPost, BlogPostDraft};
use crate::blog::application::ports::incoming::use_cases::BlogPostsUseCase;
use crate::content::application::ports::incoming::use_cases::SectionUseCase;
use crate::github::application::domain::entities::RepoSummary;
use crate::github::application::ports::incoming::use_cases::ListReposUseCase;
use crate::github::application::ports::outgoing::RepoFetchError;
use crate::media::application::ports::incoming::use_cases::UploadMediaUseCase;
use crate::media::application::ports::outgoing::UploadError;
use crate::portfolio::application::domain::entities::PortfolioView;
use crate::portfolio::application::ports::incoming::use_cases::GetPortfolioUseCase;
use crate::shared::store::StoreError;
use crate::site_config::application::domain::entities::{SiteConfig, SiteConfigDraft};
use crate::site_config::application::ports::incoming::use_cases::{
    GetSiteConfigUseCase, UpdateSiteConfigUseCase,
};

/// The Authorization header every authenticated test request carries. The
/// token body is irrelevant; `StubTokenProvider` accepts anything.
pub fn bearer() -> (&'static str, &'static str) {
    ("Authorization", "Bearer test-token")
}

pub async fn read_json<B>(resp: ServiceResponse<B>) -> serde_json::Value
where
    B: MessageBody,
{
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).expect("response body is not valid JSON")
}

/// Accepts any token string and vouches for the configured user id.
pub struct StubTokenProvider {
    user_id: Uuid,
}

impl StubTokenProvider {
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }
}

impl TokenProvider for StubTokenProvider {
    fn generate_access_token(&self, _user_id: Uuid) -> Result<String, TokenError> {
        Ok("test-token".to_string())
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        Ok(TokenClaims {
            sub: self.user_id,
            exp: i64::MAX,
            iat: 0,
            nbf: 0,
            token_type: "access".to_string(),
        })
    }
}

enum LoginMode {
    Success(String),
    InvalidCredentials,
}

pub struct StubLoginUserUseCase {
    mode: LoginMode,
}

impl StubLoginUserUseCase {
    pub fn success(token: &str) -> Arc<dyn LoginUserUseCase> {
        Arc::new(Self {
            mode: LoginMode::Success(token.to_string()),
        })
    }

    pub fn invalid_credentials() -> Arc<dyn LoginUserUseCase> {
        Arc::new(Self {
            mode: LoginMode::InvalidCredentials,
        })
    }
}

#[async_trait]
impl LoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _command: LoginCommand) -> Result<LoginResult, LoginError> {
        match &self.mode {
            LoginMode::Success(token) => Ok(LoginResult {
                user_id: UserId::from(Uuid::new_v4()),
                access_token: token.clone(),
            }),
            LoginMode::InvalidCredentials => Err(LoginError::InvalidCredentials),
        }
    }
}

enum UpdateCredentialsMode {
    Success,
    EmptyUpdate,
}

pub struct StubUpdateCredentialsUseCase {
    mode: UpdateCredentialsMode,
}

impl StubUpdateCredentialsUseCase {
    pub fn success() -> Arc<dyn UpdateCredentialsUseCase> {
        Arc::new(Self {
            mode: UpdateCredentialsMode::Success,
        })
    }

    pub fn empty_update() -> Arc<dyn UpdateCredentialsUseCase> {
        Arc::new(Self {
            mode: UpdateCredentialsMode::EmptyUpdate,
        })
    }
}

#[async_trait]
impl UpdateCredentialsUseCase for StubUpdateCredentialsUseCase {
    async fn execute(
        &self,
        _command: UpdateCredentialsCommand,
    ) -> Result<(), UpdateCredentialsError> {
        match self.mode {
            UpdateCredentialsMode::Success => Ok(()),
            UpdateCredentialsMode::EmptyUpdate => Err(UpdateCredentialsError::EmptyUpdate),
        }
    }
}

pub struct StubCheckAdminUseCase {
    is_admin: bool,
}

impl StubCheckAdminUseCase {
    /// Everyone is a plain visitor, tokens included.
    pub fn anonymous_false() -> Arc<dyn CheckAdminUseCase> {
        Arc::new(Self { is_admin: false })
    }

    pub fn admin() -> Arc<dyn CheckAdminUseCase> {
        Arc::new(Self { is_admin: true })
    }
}

#[async_trait]
impl CheckAdminUseCase for StubCheckAdminUseCase {
    async fn is_admin(&self, user: Option<UserId>) -> Result<bool, StoreError> {
        // An anonymous caller can never be an admin, whatever the stub says.
        Ok(user.is_some() && self.is_admin)
    }
}

pub struct StubGetSiteConfigUseCase {
    config: Option<SiteConfig>,
}

impl StubGetSiteConfigUseCase {
    pub fn absent() -> Arc<dyn GetSiteConfigUseCase> {
        Arc::new(Self { config: None })
    }

    pub fn with_site_name(site_name: &str) -> Arc<dyn GetSiteConfigUseCase> {
        Arc::new(Self {
            config: Some(site_config_named(site_name)),
        })
    }
}

#[async_trait]
impl GetSiteConfigUseCase for StubGetSiteConfigUseCase {
    async fn execute(&self) -> Result<Option<SiteConfig>, StoreError> {
        Ok(self.config.clone())
    }
}

enum UpdateSiteConfigMode {
    EchoSiteName(String),
    NeverCalled,
}

pub struct StubUpdateSiteConfigUseCase {
    mode: UpdateSiteConfigMode,
}

impl StubUpdateSiteConfigUseCase {
    /// Asserts the draft carries the expected site name and echoes it back
    /// as the saved config.
    pub fn echo_site_name(expected: &str) -> Arc<dyn UpdateSiteConfigUseCase> {
        Arc::new(Self {
            mode: UpdateSiteConfigMode::EchoSiteName(expected.to_string()),
        })
    }

    pub fn never_called() -> Arc<dyn UpdateSiteConfigUseCase> {
        Arc::new(Self {
            mode: UpdateSiteConfigMode::NeverCalled,
        })
    }
}

#[async_trait]
impl UpdateSiteConfigUseCase for StubUpdateSiteConfigUseCase {
    async fn execute(&self, draft: SiteConfigDraft) -> Result<SiteConfig, StoreError> {
        match &self.mode {
            UpdateSiteConfigMode::EchoSiteName(expected) => {
                assert_eq!(draft.site_name.as_deref(), Some(expected.as_str()));
                Ok(site_config_named(expected))
            }
            UpdateSiteConfigMode::NeverCalled => {
                panic!("update site config must not be reached")
            }
        }
    }
}

fn site_config_named(site_name: &str) -> SiteConfig {
    SiteConfig {
        id: Uuid::new_v4(),
        site_name: Some(site_name.to_string()),
        description: None,
        hero_name: None,
        hero_headline: None,
        hero_photo_url: None,
        favicon_url: None,
        cv_url: None,
        about_text: None,
        github_username: None,
    }
}

enum SectionMode<E> {
    Listing(Vec<E>),
    Echo(E),
    NeverCalled,
}

/// One stub covers every section shape; the entity and draft types are
/// pinned by the builder setter it is handed to.
pub struct StubSectionUseCase<E, D> {
    mode: SectionMode<E>,
    _draft: PhantomData<fn(D)>,
}

impl<E, D> StubSectionUseCase<E, D>
where
    E: Clone + Send + Sync + 'static,
    D: Send + Sync + 'static,
{
    pub fn listing(entries: Vec<E>) -> Arc<dyn SectionUseCase<E, D>> {
        Arc::new(Self {
            mode: SectionMode::Listing(entries),
            _draft: PhantomData,
        })
    }

    /// Every upsert returns this entity, as if the store saved it.
    pub fn echo(saved: E) -> Arc<dyn SectionUseCase<E, D>> {
        Arc::new(Self {
            mode: SectionMode::Echo(saved),
            _draft: PhantomData,
        })
    }

    pub fn never_called() -> Arc<dyn SectionUseCase<E, D>> {
        Arc::new(Self {
            mode: SectionMode::NeverCalled,
            _draft: PhantomData,
        })
    }
}

#[async_trait]
impl<E, D> SectionUseCase<E, D> for StubSectionUseCase<E, D>
where
    E: Clone + Send + Sync + 'static,
    D: Send + Sync + 'static,
{
    async fn list(&self) -> Result<Vec<E>, StoreError> {
        match &self.mode {
            SectionMode::Listing(entries) => Ok(entries.clone()),
            SectionMode::Echo(saved) => Ok(vec![saved.clone()]),
            SectionMode::NeverCalled => panic!("section use case must not be reached"),
        }
    }

    async fn upsert(&self, _draft: D) -> Result<E, StoreError> {
        match &self.mode {
            SectionMode::Echo(saved) => Ok(saved.clone()),
            SectionMode::Listing(_) => panic!("stub has no entity to echo"),
            SectionMode::NeverCalled => panic!("section use case must not be reached"),
        }
    }

    async fn remove(&self, _id: Uuid) -> Result<(), StoreError> {
        match &self.mode {
            SectionMode::NeverCalled => panic!("section use case must not be reached"),
            _ => Ok(()),
        }
    }
}

enum BlogMode {
    /// Expects `include_unpublished == false`.
    PublishedOnly(Vec<BlogPost>),
    /// Expects `include_unpublished == true`.
    WithDrafts(Vec<BlogPost>),
    NeverCalled,
}

pub struct StubBlogPostsUseCase {
    mode: BlogMode,
}

impl StubBlogPostsUseCase {
    pub fn published_only(posts: Vec<BlogPost>) -> Arc<dyn BlogPostsUseCase> {
        Arc::new(Self {
            mode: BlogMode::PublishedOnly(posts),
        })
    }

    pub fn with_drafts(posts: Vec<BlogPost>) -> Arc<dyn BlogPostsUseCase> {
        Arc::new(Self {
            mode: BlogMode::WithDrafts(posts),
        })
    }

    pub fn never_called() -> Arc<dyn BlogPostsUseCase> {
        Arc::new(Self {
            mode: BlogMode::NeverCalled,
        })
    }
}

#[async_trait]
impl BlogPostsUseCase for StubBlogPostsUseCase {
    async fn list(&self, include_unpublished: bool) -> Result<Vec<BlogPost>, StoreError> {
        match &self.mode {
            BlogMode::PublishedOnly(posts) => {
                assert!(!include_unpublished, "expected a published-only listing");
                Ok(posts.clone())
            }
            BlogMode::WithDrafts(posts) => {
                assert!(include_unpublished, "expected a listing with drafts");
                Ok(posts.clone())
            }
            BlogMode::NeverCalled => panic!("blog use case must not be reached"),
        }
    }

    async fn upsert(&self, _draft: BlogPostDraft) -> Result<BlogPost, StoreError> {
        panic!("blog use case must not be reached")
    }

    async fn remove(&self, _id: Uuid) -> Result<(), StoreError> {
        match self.mode {
            BlogMode::NeverCalled => panic!("blog use case must not be reached"),
            _ => Ok(()),
        }
    }
}

enum UploadMode {
    Success(String),
    InvalidPath,
    NeverCalled,
}

pub struct StubUploadMediaUseCase {
    mode: UploadMode,
}

impl StubUploadMediaUseCase {
    pub fn success(url: &str) -> Arc<dyn UploadMediaUseCase> {
        Arc::new(Self {
            mode: UploadMode::Success(url.to_string()),
        })
    }

    pub fn invalid_path() -> Arc<dyn UploadMediaUseCase> {
        Arc::new(Self {
            mode: UploadMode::InvalidPath,
        })
    }

    pub fn never_called() -> Arc<dyn UploadMediaUseCase> {
        Arc::new(Self {
            mode: UploadMode::NeverCalled,
        })
    }
}

#[async_trait]
impl UploadMediaUseCase for StubUploadMediaUseCase {
    async fn execute(
        &self,
        _path: &str,
        _content_type: &str,
        _bytes: Vec<u8>,
    ) -> Result<String, UploadError> {
        match &self.mode {
            UploadMode::Success(url) => Ok(url.clone()),
            UploadMode::InvalidPath => Err(UploadError::InvalidPath),
            UploadMode::NeverCalled => panic!("upload use case must not be reached"),
        }
    }
}

enum ReposMode {
    Repos(Vec<RepoSummary>),
    Failing,
}

pub struct StubListReposUseCase {
    mode: ReposMode,
}

impl StubListReposUseCase {
    pub fn repos(repos: Vec<RepoSummary>) -> Arc<dyn ListReposUseCase> {
        Arc::new(Self {
            mode: ReposMode::Repos(repos),
        })
    }

    pub fn empty() -> Arc<dyn ListReposUseCase> {
        Self::repos(vec![])
    }

    pub fn failing() -> Arc<dyn ListReposUseCase> {
        Arc::new(Self {
            mode: ReposMode::Failing,
        })
    }
}

#[async_trait]
impl ListReposUseCase for StubListReposUseCase {
    async fn execute(&self, _username: &str) -> Result<Vec<RepoSummary>, RepoFetchError> {
        match &self.mode {
            ReposMode::Repos(repos) => Ok(repos.clone()),
            ReposMode::Failing => Err(RepoFetchError::Status(503)),
        }
    }
}

pub struct StubGetPortfolioUseCase {
    failing: bool,
}

impl StubGetPortfolioUseCase {
    pub fn empty() -> Arc<dyn GetPortfolioUseCase> {
        Arc::new(Self { failing: false })
    }

    pub fn failing() -> Arc<dyn GetPortfolioUseCase> {
        Arc::new(Self { failing: true })
    }
}

#[async_trait]
impl GetPortfolioUseCase for StubGetPortfolioUseCase {
    async fn execute(&self) -> Result<PortfolioView, StoreError> {
        if self.failing {
            return Err(StoreError::Database("stub store is down".to_string()));
        }
        Ok(PortfolioView {
            site_config: None,
            featured_projects: vec![],
            skills: vec![],
            gallery: vec![],
            education: vec![],
            experience: vec![],
            social_links: vec![],
            tasks: vec![],
        })
    }
}
