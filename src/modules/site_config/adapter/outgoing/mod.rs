pub mod sea_orm_entity;
mod site_config_repository_postgres;

pub use site_config_repository_postgres::SiteConfigRepositoryPostgres;
