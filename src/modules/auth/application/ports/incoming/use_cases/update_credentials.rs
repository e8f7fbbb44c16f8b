use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

/// Either field may be omitted; supplying neither is a caller error.
#[derive(Debug, Clone)]
pub struct UpdateCredentialsCommand {
    pub user_id: UserId,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateCredentialsError {
    #[error("Nothing to update")]
    EmptyUpdate,

    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),

    #[error("Auth error: {0}")]
    Infrastructure(String),
}

#[async_trait]
pub trait UpdateCredentialsUseCase: Send + Sync {
    async fn execute(&self, command: UpdateCredentialsCommand)
        -> Result<(), UpdateCredentialsError>;
}
