use async_trait::async_trait;
use serde::Serialize;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResult {
    pub user_id: UserId,
    pub access_token: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    // Deliberately covers both unknown email and wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Auth error: {0}")]
    Infrastructure(String),
}

#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    async fn execute(&self, command: LoginCommand) -> Result<LoginResult, LoginError>;
}
