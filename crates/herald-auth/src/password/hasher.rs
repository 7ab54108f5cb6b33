//! Argon2id secret hashing and verification.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use herald_core::config::auth::AuthConfig;
use herald_core::error::AppError;

/// Argon2id memory cost in KiB (64 MiB).
const MEMORY_COST_KIB: u32 = 65536;
/// Argon2id iteration count.
const TIME_COST: u32 = 3;
/// Argon2id lane count.
const PARALLELISM: u32 = 4;

/// Hashes and verifies credentials using Argon2id with a process-wide pepper.
///
/// The pepper is appended to every plaintext before hashing. The per-call
/// random salt travels inside the PHC output string; the pepper never does.
#[derive(Clone)]
pub struct SecretHasher {
    /// Argon2id instance carrying the fixed cost parameters.
    argon2: Argon2<'static>,
    /// Server-held pepper.
    pepper: String,
}

impl std::fmt::Debug for SecretHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretHasher")
            .field("pepper", &"<redacted>")
            .finish()
    }
}

impl SecretHasher {
    /// Creates a hasher from auth configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let params = Params::new(MEMORY_COST_KIB, TIME_COST, PARALLELISM, None)
            .map_err(|e| AppError::configuration(format!("Invalid Argon2 parameters: {e}")))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
            pepper: config.pepper.clone(),
        })
    }

    /// Hashes a plaintext credential with a fresh random salt.
    ///
    /// The output is a self-describing PHC string carrying the algorithm
    /// identifier, cost parameters, salt, and digest bytes.
    pub fn hash(&self, plaintext: &str) -> Result<String, AppError> {
        let salted = self.with_pepper(plaintext);
        let salt = SaltString::generate(&mut OsRng);

        let digest = self
            .argon2
            .hash_password(salted.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Credential hashing failed: {e}")))?;

        Ok(digest.to_string())
    }

    /// Verifies a plaintext credential against a stored digest.
    ///
    /// Recomputes with the salt and parameters embedded in `digest` and
    /// compares in constant time. A malformed digest verifies as `false`
    /// so callers cannot distinguish a corrupt record from a wrong secret.
    pub fn verify(&self, digest: &str, plaintext: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(digest) else {
            return false;
        };

        let salted = self.with_pepper(plaintext);
        self.argon2
            .verify_password(salted.as_bytes(), &parsed)
            .is_ok()
    }

    fn with_pepper(&self, plaintext: &str) -> String {
        format!("{plaintext}{}", self.pepper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher(pepper: &str) -> SecretHasher {
        let config = AuthConfig {
            pepper: pepper.to_string(),
            ..AuthConfig::default()
        };
        SecretHasher::new(&config).unwrap()
    }

    #[test]
    fn hash_then_verify_round_trips() {
        let hasher = hasher("test-pepper");
        let digest = hasher.hash("s3cr3t").unwrap();
        assert!(hasher.verify(&digest, "s3cr3t"));
    }

    #[test]
    fn wrong_plaintext_fails_verification() {
        let hasher = hasher("test-pepper");
        let digest = hasher.hash("s3cr3t").unwrap();
        assert!(!hasher.verify(&digest, "wrong"));
    }

    #[test]
    fn fresh_salt_per_hash() {
        let hasher = hasher("test-pepper");
        let first = hasher.hash("s3cr3t").unwrap();
        let second = hasher.hash("s3cr3t").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn digest_embeds_algorithm_and_params() {
        let hasher = hasher("test-pepper");
        let digest = hasher.hash("s3cr3t").unwrap();
        assert!(digest.starts_with("$argon2id$"));
        assert!(digest.contains("m=65536,t=3,p=4"));
    }

    #[test]
    fn malformed_digest_verifies_as_false() {
        let hasher = hasher("test-pepper");
        assert!(!hasher.verify("", "s3cr3t"));
        assert!(!hasher.verify("not-a-phc-string", "s3cr3t"));
        assert!(!hasher.verify("$argon2id$garbage", "s3cr3t"));
    }

    #[test]
    fn different_pepper_fails_verification() {
        let digest = hasher("pepper-one").hash("s3cr3t").unwrap();
        assert!(!hasher("pepper-two").verify(&digest, "s3cr3t"));
    }
}
