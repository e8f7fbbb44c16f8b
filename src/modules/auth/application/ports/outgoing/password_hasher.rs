use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum HashError {
    #[error("Hashing failed: {0}")]
    HashingFailed(String),
}

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    /// `false` for a wrong password; `Err` only when the stored hash cannot
    /// be parsed at all.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
