//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Server-held pepper appended to every plaintext before hashing.
    #[serde(default = "default_pepper")]
    pub pepper: String,
    /// Secret key for session token signing (HMAC-SHA256).
    #[serde(default = "default_token_secret")]
    pub token_secret: String,
    /// Session token validity window in minutes.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_minutes: u64,
}

impl AuthConfig {
    /// Whether the pepper is still the compiled-in development fallback.
    pub fn uses_development_pepper(&self) -> bool {
        self.pepper == default_pepper()
    }

    /// Whether the signing secret is still the compiled-in development fallback.
    pub fn uses_development_token_secret(&self) -> bool {
        self.token_secret == default_token_secret()
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            pepper: default_pepper(),
            token_secret: default_token_secret(),
            token_ttl_minutes: default_token_ttl(),
        }
    }
}

fn default_pepper() -> String {
    "CHANGE_ME_DEVELOPMENT_PEPPER".to_string()
}

fn default_token_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_token_ttl() -> u64 {
    60
}
