use std::sync::Arc;

use crate::auth::application::ports::outgoing::{
    password_hasher::PasswordHasher,
    user_repository::{NewUser, UserRepository},
};
use crate::authz::application::ports::outgoing::{RoleStore, ADMIN_ROLE};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SeedAdminError {
    #[error("Provisioning failed: {0}")]
    Infrastructure(String),
}

/// One-shot provisioning, run at startup: creates the designated admin
/// account and its role row. Idempotent: an existing user (matched by
/// email) short-circuits to ensuring the role row only.
pub struct SeedAdminService {
    users: Arc<dyn UserRepository>,
    roles: Arc<dyn RoleStore>,
    hasher: Arc<dyn PasswordHasher>,
}

impl SeedAdminService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        roles: Arc<dyn RoleStore>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            users,
            roles,
            hasher,
        }
    }

    pub async fn execute(&self, email: &str, password: &str) -> Result<(), SeedAdminError> {
        let existing = self
            .users
            .find_by_email(email)
            .await
            .map_err(|e| SeedAdminError::Infrastructure(e.to_string()))?;

        let user_id = match existing {
            Some(user) => {
                tracing::info!("Admin account already present, skipping creation");
                user.id
            }
            None => {
                let password_hash = self
                    .hasher
                    .hash_password(password)
                    .await
                    .map_err(|e| SeedAdminError::Infrastructure(e.to_string()))?;

                let created = self
                    .users
                    .create(NewUser {
                        email: email.to_string(),
                        password_hash,
                    })
                    .await
                    .map_err(|e| SeedAdminError::Infrastructure(e.to_string()))?;

                tracing::info!("Admin account created");
                created.id
            }
        };

        let has_role = self
            .roles
            .has_role(user_id, ADMIN_ROLE)
            .await
            .map_err(|e| SeedAdminError::Infrastructure(e.to_string()))?;

        if !has_role {
            self.roles
                .assign_role(user_id, ADMIN_ROLE)
                .await
                .map_err(|e| SeedAdminError::Infrastructure(e.to_string()))?;
        }

        Ok(())
    }
}
