mod get_site_config;
mod update_site_config;

pub use get_site_config::get_site_config_handler;
pub use update_site_config::update_site_config_handler;
