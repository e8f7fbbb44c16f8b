use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::{
    incoming::use_cases::{LoginCommand, LoginError, LoginResult, LoginUserUseCase},
    outgoing::{
        password_hasher::PasswordHasher, token_provider::TokenProvider,
        user_repository::UserRepository,
    },
};

pub struct LoginUserService {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenProvider>,
}

impl LoginUserService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl LoginUserUseCase for LoginUserService {
    async fn execute(&self, command: LoginCommand) -> Result<LoginResult, LoginError> {
        let user = self
            .users
            .find_by_email(command.email.trim())
            .await
            .map_err(|e| LoginError::Infrastructure(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        let matches = self
            .hasher
            .verify_password(&command.password, &user.password_hash)
            .await
            .map_err(|e| LoginError::Infrastructure(e.to_string()))?;

        if !matches {
            tracing::debug!("Rejected login for {}", command.email);
            return Err(LoginError::InvalidCredentials);
        }

        let access_token = self
            .tokens
            .generate_access_token(user.id.value())
            .map_err(|e| LoginError::Infrastructure(e.to_string()))?;

        Ok(LoginResult {
            user_id: user.id,
            access_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    use crate::auth::application::domain::entities::UserId;
    use crate::auth::application::ports::outgoing::{
        password_hasher::HashError,
        token_provider::{TokenClaims, TokenError},
        user_repository::{NewUser, UserRecord},
    };
    use crate::shared::store::StoreError;

    struct StubUsers {
        user: Option<UserRecord>,
    }

    #[async_trait]
    impl UserRepository for StubUsers {
        async fn find_by_email(&self, _email: &str) -> Result<Option<UserRecord>, StoreError> {
            Ok(self.user.clone())
        }

        async fn create(&self, _user: NewUser) -> Result<UserRecord, StoreError> {
            unimplemented!("not used in login tests")
        }

        async fn update_email(&self, _id: UserId, _email: &str) -> Result<(), StoreError> {
            unimplemented!("not used in login tests")
        }

        async fn update_password_hash(&self, _id: UserId, _hash: &str) -> Result<(), StoreError> {
            unimplemented!("not used in login tests")
        }
    }

    struct StubHasher {
        accept: bool,
    }

    #[async_trait]
    impl PasswordHasher for StubHasher {
        async fn hash_password(&self, _password: &str) -> Result<String, HashError> {
            unimplemented!("not used in login tests")
        }

        async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
            Ok(self.accept)
        }
    }

    struct StubTokens;

    impl TokenProvider for StubTokens {
        fn generate_access_token(&self, _user_id: Uuid) -> Result<String, TokenError> {
            Ok("token-123".to_string())
        }

        fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
            unimplemented!("not used in login tests")
        }
    }

    fn user(id: Uuid) -> UserRecord {
        UserRecord {
            id: UserId::from(id),
            email: "admin@example.com".to_string(),
            password_hash: "$argon2id$stub".to_string(),
        }
    }

    fn command() -> LoginCommand {
        LoginCommand {
            email: "admin@example.com".to_string(),
            password: "hunter22hunter22".to_string(),
        }
    }

    #[tokio::test]
    async fn login_success_returns_token() {
        let id = Uuid::new_v4();
        let service = LoginUserService::new(
            Arc::new(StubUsers {
                user: Some(user(id)),
            }),
            Arc::new(StubHasher { accept: true }),
            Arc::new(StubTokens),
        );

        let result = service.execute(command()).await.unwrap();

        assert_eq!(result.user_id.value(), id);
        assert_eq!(result.access_token, "token-123");
    }

    #[tokio::test]
    async fn unknown_email_is_invalid_credentials() {
        let service = LoginUserService::new(
            Arc::new(StubUsers { user: None }),
            Arc::new(StubHasher { accept: true }),
            Arc::new(StubTokens),
        );

        let result = service.execute(command()).await;

        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let service = LoginUserService::new(
            Arc::new(StubUsers {
                user: Some(user(Uuid::new_v4())),
            }),
            Arc::new(StubHasher { accept: false }),
            Arc::new(StubTokens),
        );

        let result = service.execute(command()).await;

        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
    }
}
