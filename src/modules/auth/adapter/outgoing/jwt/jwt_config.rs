use std::env;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub access_token_expiry: i64, // seconds
}

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let secret_key = env::var("JWT_SECRET").expect("JWT_SECRET must be set");

        // HS256 wants at least 32 bytes of key material
        if secret_key.len() < 32 {
            panic!("JWT_SECRET must be at least 32 characters long for HS256");
        }

        let access_token_expiry = env::var("JWT_ACCESS_EXPIRY")
            .unwrap_or_else(|_| "1800".to_string())
            .parse::<i64>()
            .unwrap_or_else(|_| panic!("Invalid JWT_ACCESS_EXPIRY value"));

        if access_token_expiry <= 0 || access_token_expiry > 86400 {
            panic!("JWT_ACCESS_EXPIRY must be between 1 and 86400 seconds");
        }

        Self {
            secret_key,
            access_token_expiry,
        }
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            secret_key: "a-test-secret-key-of-at-least-32-bytes!".to_string(),
            access_token_expiry: 1800,
        }
    }
}
