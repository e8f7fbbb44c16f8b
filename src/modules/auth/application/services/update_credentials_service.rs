use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::{
    incoming::use_cases::{
        UpdateCredentialsCommand, UpdateCredentialsError, UpdateCredentialsUseCase,
    },
    outgoing::{password_hasher::PasswordHasher, user_repository::UserRepository},
};

const MIN_PASSWORD_LEN: usize = 12;

pub struct UpdateCredentialsService {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UpdateCredentialsService {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }
}

#[async_trait]
impl UpdateCredentialsUseCase for UpdateCredentialsService {
    async fn execute(
        &self,
        command: UpdateCredentialsCommand,
    ) -> Result<(), UpdateCredentialsError> {
        if command.email.is_none() && command.password.is_none() {
            return Err(UpdateCredentialsError::EmptyUpdate);
        }

        // Validate and hash before the first write; a rejected request must
        // leave both columns untouched.
        let password_hash = match &command.password {
            Some(password) if password.len() < MIN_PASSWORD_LEN => {
                return Err(UpdateCredentialsError::PasswordTooShort(MIN_PASSWORD_LEN));
            }
            Some(password) => Some(
                self.hasher
                    .hash_password(password)
                    .await
                    .map_err(|e| UpdateCredentialsError::Infrastructure(e.to_string()))?,
            ),
            None => None,
        };

        if let Some(email) = &command.email {
            self.users
                .update_email(command.user_id, email.trim())
                .await
                .map_err(|e| UpdateCredentialsError::Infrastructure(e.to_string()))?;
        }

        if let Some(hash) = &password_hash {
            self.users
                .update_password_hash(command.user_id, hash)
                .await
                .map_err(|e| UpdateCredentialsError::Infrastructure(e.to_string()))?;
        }

        Ok(())
    }
}
