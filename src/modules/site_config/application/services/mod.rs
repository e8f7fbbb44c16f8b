mod get_site_config_service;
mod update_site_config_service;

pub use get_site_config_service::GetSiteConfigService;
pub use update_site_config_service::UpdateSiteConfigService;
