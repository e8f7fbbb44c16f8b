mod login_user;
mod update_credentials;

pub use login_user::{LoginCommand, LoginError, LoginResult, LoginUserUseCase};
pub use update_credentials::{
    UpdateCredentialsCommand, UpdateCredentialsError, UpdateCredentialsUseCase,
};
