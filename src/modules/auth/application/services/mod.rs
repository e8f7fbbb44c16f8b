mod login_user_service;
mod update_credentials_service;

pub use login_user_service::LoginUserService;
pub use update_credentials_service::UpdateCredentialsService;
