pub mod sea_orm_entity;

mod education_repository_postgres;
mod experience_repository_postgres;
mod gallery_repository_postgres;
mod project_repository_postgres;
mod skill_repository_postgres;
mod social_link_repository_postgres;

pub use education_repository_postgres::EducationRepositoryPostgres;
pub use experience_repository_postgres::ExperienceRepositoryPostgres;
pub use gallery_repository_postgres::GalleryRepositoryPostgres;
pub use project_repository_postgres::ProjectRepositoryPostgres;
pub use skill_repository_postgres::SkillRepositoryPostgres;
pub use social_link_repository_postgres::SocialLinkRepositoryPostgres;
