mod login_user;
mod update_credentials;

pub use login_user::login_handler;
pub use update_credentials::update_credentials_handler;
