pub mod modules;
pub use modules::auth;
pub use modules::authz;
pub use modules::blog;
pub use modules::content;
pub use modules::github;
pub use modules::media;
pub use modules::portfolio;
pub use modules::site_config;
pub use modules::tasks;
pub mod health;
pub mod shared;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::UserRepositoryPostgres;
use crate::auth::application::ports::incoming::use_cases::{
    LoginUserUseCase, UpdateCredentialsUseCase,
};
use crate::auth::application::services::{LoginUserService, UpdateCredentialsService};
use crate::authz::adapter::outgoing::RoleStorePostgres;
use crate::authz::application::ports::incoming::use_cases::CheckAdminUseCase;
use crate::authz::application::services::{CheckAdminService, SeedAdminService};
use crate::blog::adapter::outgoing::BlogPostRepositoryPostgres;
use crate::blog::application::ports::incoming::use_cases::BlogPostsUseCase;
use crate::blog::application::services::BlogPostsService;
use crate::content::adapter::outgoing::{
    EducationRepositoryPostgres, ExperienceRepositoryPostgres, GalleryRepositoryPostgres,
    ProjectRepositoryPostgres, SkillRepositoryPostgres, SocialLinkRepositoryPostgres,
};
use crate::content::application::domain::entities::{
    Education, EducationDraft, Experience, ExperienceDraft, GalleryItem, GalleryItemDraft,
    Project, ProjectDraft, Skill, SkillDraft, SocialLink, SocialLinkDraft,
};
use crate::content::application::ports::incoming::use_cases::SectionUseCase;
use crate::content::application::services::SectionService;
use crate::github::adapter::outgoing::GithubApiRepoListing;
use crate::github::application::ports::incoming::use_cases::ListReposUseCase;
use crate::github::application::services::ListReposService;
use crate::media::adapter::outgoing::GcsObjectStore;
use crate::media::application::ports::incoming::use_cases::UploadMediaUseCase;
use crate::media::application::services::UploadMediaService;
use crate::portfolio::application::ports::incoming::use_cases::GetPortfolioUseCase;
use crate::portfolio::application::services::GetPortfolioService;
use crate::shared::api::custom_json_config;
use crate::site_config::adapter::outgoing::SiteConfigRepositoryPostgres;
use crate::site_config::application::ports::incoming::use_cases::{
    GetSiteConfigUseCase, UpdateSiteConfigUseCase,
};
use crate::site_config::application::services::{GetSiteConfigService, UpdateSiteConfigService};
use crate::tasks::adapter::outgoing::TaskRepositoryPostgres;
use crate::tasks::application::domain::entities::{Task, TaskDraft};

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub login_user: Arc<dyn LoginUserUseCase>,
    pub update_credentials: Arc<dyn UpdateCredentialsUseCase>,
    pub check_admin: Arc<dyn CheckAdminUseCase>,
    pub get_site_config: Arc<dyn GetSiteConfigUseCase>,
    pub update_site_config: Arc<dyn UpdateSiteConfigUseCase>,
    pub projects: Arc<dyn SectionUseCase<Project, ProjectDraft>>,
    pub skills: Arc<dyn SectionUseCase<Skill, SkillDraft>>,
    pub gallery: Arc<dyn SectionUseCase<GalleryItem, GalleryItemDraft>>,
    pub education: Arc<dyn SectionUseCase<Education, EducationDraft>>,
    pub experience: Arc<dyn SectionUseCase<Experience, ExperienceDraft>>,
    pub social_links: Arc<dyn SectionUseCase<SocialLink, SocialLinkDraft>>,
    pub tasks: Arc<dyn SectionUseCase<Task, TaskDraft>>,
    pub blog: Arc<dyn BlogPostsUseCase>,
    pub upload_media: Arc<dyn UploadMediaUseCase>,
    pub list_repos: Arc<dyn ListReposUseCase>,
    pub get_portfolio: Arc<dyn GetPortfolioUseCase>,
}

#[actix_web::main]
async fn start() -> std::io::Result<()> {
    use crate::auth::adapter::outgoing::security::Argon2Hasher;
    use crate::auth::application::ports::outgoing::password_hasher::PasswordHasher;
    use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env_name = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let media_bucket = env::var("MEDIA_BUCKET").expect("MEDIA_BUCKET is not set in .env file");

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Auth and authorization
    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let user_repo = Arc::new(UserRepositoryPostgres::new(Arc::clone(&db_arc)));
    let role_store = Arc::new(RoleStorePostgres::new(Arc::clone(&db_arc)));
    let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2Hasher::new());

    let login_user = LoginUserService::new(
        user_repo.clone(),
        hasher.clone(),
        Arc::new(jwt_service.clone()),
    );
    let update_credentials = UpdateCredentialsService::new(user_repo.clone(), hasher.clone());
    let check_admin = CheckAdminService::new(role_store.clone());

    // One-shot admin provisioning; a failure is logged, not fatal, so a
    // transient DB hiccup does not keep the public site down.
    match (env::var("ADMIN_EMAIL"), env::var("ADMIN_PASSWORD")) {
        (Ok(admin_email), Ok(admin_password)) => {
            let seeder = SeedAdminService::new(user_repo.clone(), role_store.clone(), hasher);
            if let Err(e) = seeder.execute(&admin_email, &admin_password).await {
                tracing::error!("Admin seeding failed: {e}");
            }
        }
        _ => {
            tracing::warn!("ADMIN_EMAIL/ADMIN_PASSWORD not set, skipping admin seeding");
        }
    }

    // Site configuration
    let site_config_repo = Arc::new(SiteConfigRepositoryPostgres::new(Arc::clone(&db_arc)));
    let get_site_config: Arc<dyn GetSiteConfigUseCase> =
        Arc::new(GetSiteConfigService::new(site_config_repo.clone()));
    let update_site_config = UpdateSiteConfigService::new(site_config_repo);

    // Portfolio sections
    let projects: Arc<dyn SectionUseCase<Project, ProjectDraft>> = Arc::new(SectionService::new(
        Arc::new(ProjectRepositoryPostgres::new(Arc::clone(&db_arc))),
    ));
    let skills: Arc<dyn SectionUseCase<Skill, SkillDraft>> = Arc::new(SectionService::new(
        Arc::new(SkillRepositoryPostgres::new(Arc::clone(&db_arc))),
    ));
    let gallery: Arc<dyn SectionUseCase<GalleryItem, GalleryItemDraft>> = Arc::new(
        SectionService::new(Arc::new(GalleryRepositoryPostgres::new(Arc::clone(&db_arc)))),
    );
    let education: Arc<dyn SectionUseCase<Education, EducationDraft>> = Arc::new(
        SectionService::new(Arc::new(EducationRepositoryPostgres::new(Arc::clone(
            &db_arc,
        )))),
    );
    let experience: Arc<dyn SectionUseCase<Experience, ExperienceDraft>> = Arc::new(
        SectionService::new(Arc::new(ExperienceRepositoryPostgres::new(Arc::clone(
            &db_arc,
        )))),
    );
    let social_links: Arc<dyn SectionUseCase<SocialLink, SocialLinkDraft>> = Arc::new(
        SectionService::new(Arc::new(SocialLinkRepositoryPostgres::new(Arc::clone(
            &db_arc,
        )))),
    );
    let tasks: Arc<dyn SectionUseCase<Task, TaskDraft>> = Arc::new(SectionService::new(Arc::new(
        TaskRepositoryPostgres::new(Arc::clone(&db_arc)),
    )));

    // Blog, media, GitHub
    let blog = BlogPostsService::new(Arc::new(BlogPostRepositoryPostgres::new(Arc::clone(
        &db_arc,
    ))));
    let upload_media = UploadMediaService::new(Arc::new(GcsObjectStore::new(media_bucket)));
    let list_repos = ListReposService::new(Arc::new(GithubApiRepoListing::new(
        reqwest::Client::new(),
    )));

    // Aggregated public view over the section use cases
    let get_portfolio = GetPortfolioService::new(
        get_site_config.clone(),
        projects.clone(),
        skills.clone(),
        gallery.clone(),
        education.clone(),
        experience.clone(),
        social_links.clone(),
        tasks.clone(),
    );

    let state = AppState {
        login_user: Arc::new(login_user),
        update_credentials: Arc::new(update_credentials),
        check_admin: Arc::new(check_admin),
        get_site_config,
        update_site_config: Arc::new(update_site_config),
        projects,
        skills,
        gallery,
        education,
        experience,
        social_links,
        tasks,
        blog: Arc::new(blog),
        upload_media: Arc::new(upload_media),
        list_repos: Arc::new(list_repos),
        get_portfolio: Arc::new(get_portfolio),
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::update_credentials_handler);
    cfg.service(crate::authz::adapter::incoming::web::routes::check_admin_handler);
    // Site configuration
    cfg.service(crate::site_config::adapter::incoming::web::routes::get_site_config_handler);
    cfg.service(crate::site_config::adapter::incoming::web::routes::update_site_config_handler);
    // Portfolio sections
    cfg.service(crate::content::adapter::incoming::web::routes::list_projects_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::upsert_project_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::delete_project_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::list_skills_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::upsert_skill_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::delete_skill_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::list_gallery_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::upsert_gallery_item_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::delete_gallery_item_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::list_education_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::upsert_education_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::delete_education_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::list_experience_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::upsert_experience_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::delete_experience_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::list_social_links_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::upsert_social_link_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::delete_social_link_handler);
    // Tasks
    cfg.service(crate::tasks::adapter::incoming::web::routes::list_tasks_handler);
    cfg.service(crate::tasks::adapter::incoming::web::routes::upsert_task_handler);
    cfg.service(crate::tasks::adapter::incoming::web::routes::delete_task_handler);
    // Blog
    cfg.service(crate::blog::adapter::incoming::web::routes::list_blog_posts_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::upsert_blog_post_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::delete_blog_post_handler);
    // Media
    cfg.service(crate::media::adapter::incoming::web::routes::upload_media_handler);
    // GitHub
    cfg.service(crate::github::adapter::incoming::web::routes::list_repos_handler);
    // Aggregated portfolio
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_portfolio_handler);
}

fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
