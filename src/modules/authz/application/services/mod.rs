mod check_admin_service;
mod seed_admin_service;

pub use check_admin_service::CheckAdminService;
pub use seed_admin_service::SeedAdminService;
