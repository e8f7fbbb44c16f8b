mod site_config_repository;

pub use site_config_repository::SiteConfigRepository;
