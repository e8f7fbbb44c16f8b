use std::sync::Arc;

use actix_web::web;

use crate::auth::application::ports::incoming::use_cases::{
    LoginUserUseCase, UpdateCredentialsUseCase,
};
use crate::authz::application::ports::incoming::use_cases::CheckAdminUseCase;
use crate::blog::application::ports::incoming::use_cases::BlogPostsUseCase;
use crate::content::application::domain::entities::{
    Education, EducationDraft, Experience, ExperienceDraft, GalleryItem, GalleryItemDraft,
    Project, ProjectDraft, Skill, SkillDraft, SocialLink, SocialLinkDraft,
};
use crate::content::application::ports::incoming::use_cases::SectionUseCase;
use crate::github::application::ports::incoming::use_cases::ListReposUseCase;
use crate::media::application::ports::incoming::use_cases::UploadMediaUseCase;
use crate::portfolio::application::ports::incoming::use_cases::GetPortfolioUseCase;
use crate::site_config::application::ports::incoming::use_cases::{
    GetSiteConfigUseCase, UpdateSiteConfigUseCase,
};
use crate::tasks::application::domain::entities::{Task, TaskDraft};
use crate::tests::support::stubs::*;
use crate::AppState;

/// Assembles an `AppState` where every port is a benign stub; tests swap in
/// the one or two ports they actually exercise.
pub struct TestAppStateBuilder {
    login_user: Arc<dyn LoginUserUseCase>,
    update_credentials: Arc<dyn UpdateCredentialsUseCase>,
    check_admin: Arc<dyn CheckAdminUseCase>,
    get_site_config: Arc<dyn GetSiteConfigUseCase>,
    update_site_config: Arc<dyn UpdateSiteConfigUseCase>,
    projects: Arc<dyn SectionUseCase<Project, ProjectDraft>>,
    skills: Arc<dyn SectionUseCase<Skill, SkillDraft>>,
    gallery: Arc<dyn SectionUseCase<GalleryItem, GalleryItemDraft>>,
    education: Arc<dyn SectionUseCase<Education, EducationDraft>>,
    experience: Arc<dyn SectionUseCase<Experience, ExperienceDraft>>,
    social_links: Arc<dyn SectionUseCase<SocialLink, SocialLinkDraft>>,
    tasks: Arc<dyn SectionUseCase<Task, TaskDraft>>,
    blog: Arc<dyn BlogPostsUseCase>,
    upload_media: Arc<dyn UploadMediaUseCase>,
    list_repos: Arc<dyn ListReposUseCase>,
    get_portfolio: Arc<dyn GetPortfolioUseCase>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            login_user: StubLoginUserUseCase::invalid_credentials(),
            update_credentials: StubUpdateCredentialsUseCase::success(),
            check_admin: StubCheckAdminUseCase::anonymous_false(),
            get_site_config: StubGetSiteConfigUseCase::absent(),
            update_site_config: StubUpdateSiteConfigUseCase::never_called(),
            projects: StubSectionUseCase::listing(vec![]),
            skills: StubSectionUseCase::listing(vec![]),
            gallery: StubSectionUseCase::listing(vec![]),
            education: StubSectionUseCase::listing(vec![]),
            experience: StubSectionUseCase::listing(vec![]),
            social_links: StubSectionUseCase::listing(vec![]),
            tasks: StubSectionUseCase::listing(vec![]),
            blog: StubBlogPostsUseCase::published_only(vec![]),
            upload_media: StubUploadMediaUseCase::never_called(),
            list_repos: StubListReposUseCase::empty(),
            get_portfolio: StubGetPortfolioUseCase::empty(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_login_user(mut self, use_case: Arc<dyn LoginUserUseCase>) -> Self {
        self.login_user = use_case;
        self
    }

    pub fn with_update_credentials(
        mut self,
        use_case: Arc<dyn UpdateCredentialsUseCase>,
    ) -> Self {
        self.update_credentials = use_case;
        self
    }

    pub fn with_check_admin(mut self, use_case: Arc<dyn CheckAdminUseCase>) -> Self {
        self.check_admin = use_case;
        self
    }

    pub fn with_get_site_config(mut self, use_case: Arc<dyn GetSiteConfigUseCase>) -> Self {
        self.get_site_config = use_case;
        self
    }

    pub fn with_update_site_config(mut self, use_case: Arc<dyn UpdateSiteConfigUseCase>) -> Self {
        self.update_site_config = use_case;
        self
    }

    pub fn with_projects(
        mut self,
        use_case: Arc<dyn SectionUseCase<Project, ProjectDraft>>,
    ) -> Self {
        self.projects = use_case;
        self
    }

    pub fn with_skills(mut self, use_case: Arc<dyn SectionUseCase<Skill, SkillDraft>>) -> Self {
        self.skills = use_case;
        self
    }

    pub fn with_gallery(
        mut self,
        use_case: Arc<dyn SectionUseCase<GalleryItem, GalleryItemDraft>>,
    ) -> Self {
        self.gallery = use_case;
        self
    }

    pub fn with_education(
        mut self,
        use_case: Arc<dyn SectionUseCase<Education, EducationDraft>>,
    ) -> Self {
        self.education = use_case;
        self
    }

    pub fn with_experience(
        mut self,
        use_case: Arc<dyn SectionUseCase<Experience, ExperienceDraft>>,
    ) -> Self {
        self.experience = use_case;
        self
    }

    pub fn with_social_links(
        mut self,
        use_case: Arc<dyn SectionUseCase<SocialLink, SocialLinkDraft>>,
    ) -> Self {
        self.social_links = use_case;
        self
    }

    pub fn with_tasks(mut self, use_case: Arc<dyn SectionUseCase<Task, TaskDraft>>) -> Self {
        self.tasks = use_case;
        self
    }

    pub fn with_blog(mut self, use_case: Arc<dyn BlogPostsUseCase>) -> Self {
        self.blog = use_case;
        self
    }

    pub fn with_upload_media(mut self, use_case: Arc<dyn UploadMediaUseCase>) -> Self {
        self.upload_media = use_case;
        self
    }

    pub fn with_list_repos(mut self, use_case: Arc<dyn ListReposUseCase>) -> Self {
        self.list_repos = use_case;
        self
    }

    pub fn with_get_portfolio(mut self, use_case: Arc<dyn GetPortfolioUseCase>) -> Self {
        self.get_portfolio = use_case;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            login_user: self.login_user,
            update_credentials: self.update_credentials,
            check_admin: self.check_admin,
            get_site_config: self.get_site_config,
            update_site_config: self.update_site_config,
            projects: self.projects,
            skills: self.skills,
            gallery: self.gallery,
            education: self.education,
            experience: self.experience,
            social_links: self.social_links,
            tasks: self.tasks,
            blog: self.blog,
            upload_media: self.upload_media,
            list_repos: self.list_repos,
            get_portfolio: self.get_portfolio,
        })
    }
}
