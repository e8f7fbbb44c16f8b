use async_trait::async_trait;
use std::sync::Arc;

use crate::content::application::{
    domain::entities::{
        Education, EducationDraft, Experience, ExperienceDraft, GalleryItem, GalleryItemDraft,
        Project, ProjectDraft, Skill, SkillDraft, SocialLink, SocialLinkDraft,
    },
    ports::incoming::use_cases::SectionUseCase,
};
use crate::portfolio::application::{
    domain::entities::PortfolioView, ports::incoming::use_cases::GetPortfolioUseCase,
};
use crate::shared::store::StoreError;
use crate::site_config::application::ports::incoming::use_cases::GetSiteConfigUseCase;
use crate::tasks::application::domain::entities::{Task, TaskDraft};

/// Composes the public projection out of the per-section use cases. Each
/// section is an independent awaited read; a failure in any of them fails
/// the whole view.
pub struct GetPortfolioService {
    site_config: Arc<dyn GetSiteConfigUseCase>,
    projects: Arc<dyn SectionUseCase<Project, ProjectDraft>>,
    skills: Arc<dyn SectionUseCase<Skill, SkillDraft>>,
    gallery: Arc<dyn SectionUseCase<GalleryItem, GalleryItemDraft>>,
    education: Arc<dyn SectionUseCase<Education, EducationDraft>>,
    experience: Arc<dyn SectionUseCase<Experience, ExperienceDraft>>,
    social_links: Arc<dyn SectionUseCase<SocialLink, SocialLinkDraft>>,
    tasks: Arc<dyn SectionUseCase<Task, TaskDraft>>,
}

impl GetPortfolioService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        site_config: Arc<dyn GetSiteConfigUseCase>,
        projects: Arc<dyn SectionUseCase<Project, ProjectDraft>>,
        skills: Arc<dyn SectionUseCase<Skill, SkillDraft>>,
        gallery: Arc<dyn SectionUseCase<GalleryItem, GalleryItemDraft>>,
        education: Arc<dyn SectionUseCase<Education, EducationDraft>>,
        experience: Arc<dyn SectionUseCase<Experience, ExperienceDraft>>,
        social_links: Arc<dyn SectionUseCase<SocialLink, SocialLinkDraft>>,
        tasks: Arc<dyn SectionUseCase<Task, TaskDraft>>,
    ) -> Self {
        Self {
            site_config,
            projects,
            skills,
            gallery,
            education,
            experience,
            social_links,
            tasks,
        }
    }
}

#[async_trait]
impl GetPortfolioUseCase for GetPortfolioService {
    async fn execute(&self) -> Result<PortfolioView, StoreError> {
        let site_config = self.site_config.execute().await?;
        let featured_projects = self
            .projects
            .list()
            .await?
            .into_iter()
            .filter(|p| p.featured)
            .collect();
        let skills = self.skills.list().await?;
        let gallery = self.gallery.list().await?;
        let education = self.education.list().await?;
        let experience = self.experience.list().await?;
        let social_links = self.social_links.list().await?;
        let tasks = self.tasks.list().await?;

        Ok(PortfolioView {
            site_config,
            featured_projects,
            skills,
            gallery,
            education,
            experience,
            social_links,
            tasks,
        })
    }
}
