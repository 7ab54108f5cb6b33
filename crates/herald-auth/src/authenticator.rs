//! Registration and login flows.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::task;
use tracing::{debug, info};

use herald_core::error::AppError;
use herald_core::result::AppResult;
use herald_entity::account::{NewAccount, PublicAccount};

use crate::password::SecretHasher;
use crate::store::CredentialStore;
use crate::token::TokenEncoder;

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// Signed session token.
    pub token: String,
    /// Token expiration time.
    pub expires_at: DateTime<Utc>,
    /// Sanitized view of the authenticated account.
    pub account: PublicAccount,
}

/// Orchestrates registration and login over explicit collaborators.
///
/// Holds no mutable state; concurrent calls coordinate only through the
/// credential store's own atomicity. Argon2 work runs on the blocking
/// pool so it never stalls the async executor.
#[derive(Clone)]
pub struct Authenticator {
    /// Durable credential records.
    store: Arc<dyn CredentialStore>,
    /// Argon2id hasher with the process pepper.
    hasher: Arc<SecretHasher>,
    /// Session token signer.
    tokens: Arc<TokenEncoder>,
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("hasher", &self.hasher)
            .field("tokens", &self.tokens)
            .finish()
    }
}

impl Authenticator {
    /// Creates a new authenticator with all required collaborators.
    pub fn new(
        store: Arc<dyn CredentialStore>,
        hasher: Arc<SecretHasher>,
        tokens: Arc<TokenEncoder>,
    ) -> Self {
        Self {
            store,
            hasher,
            tokens,
        }
    }

    /// Registers a new account.
    ///
    /// A taken identifier fails before any digest is computed; the Conflict
    /// reply already reveals existence. A concurrent duplicate insert
    /// surfaces as the same conflict through the store's atomic create.
    pub async fn register(&self, identifier: &str, plaintext: &str) -> AppResult<PublicAccount> {
        if self
            .store
            .find_by_identifier(identifier)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(format!(
                "Account '{identifier}' already exists"
            )));
        }

        let digest = self.hash_blocking(plaintext).await?;
        let account = self
            .store
            .create(NewAccount {
                identifier: identifier.to_string(),
                digest,
            })
            .await?;

        info!(identifier = %account.identifier, "account registered");
        Ok(account.into_public())
    }

    /// Authenticates an account and mints a session token.
    ///
    /// An unknown identifier and a wrong secret produce the identical
    /// failure; nothing about the reply reveals whether the account exists.
    pub async fn login(&self, identifier: &str, plaintext: &str) -> AppResult<LoginOutcome> {
        let Some(account) = self.store.find_by_identifier(identifier).await? else {
            debug!(identifier, "login for unknown identifier");
            return Err(Self::invalid_credentials());
        };

        let hasher = Arc::clone(&self.hasher);
        let digest = account.digest.clone();
        let secret = plaintext.to_string();
        let verified = task::spawn_blocking(move || hasher.verify(&digest, &secret))
            .await
            .map_err(|e| AppError::internal(format!("Credential verification task failed: {e}")))?;

        if !verified {
            debug!(identifier, "login with wrong secret");
            return Err(Self::invalid_credentials());
        }

        let (token, expires_at) = self.tokens.mint(&account)?;
        info!(identifier = %account.identifier, "login succeeded");

        Ok(LoginOutcome {
            token,
            expires_at,
            account: account.into_public(),
        })
    }

    /// Runs the Argon2 hash on the blocking pool.
    async fn hash_blocking(&self, plaintext: &str) -> AppResult<String> {
        let hasher = Arc::clone(&self.hasher);
        let secret = plaintext.to_string();
        task::spawn_blocking(move || hasher.hash(&secret))
            .await
            .map_err(|e| AppError::internal(format!("Credential hashing task failed: {e}")))?
    }

    /// Identical failure for unknown identifier and wrong secret.
    fn invalid_credentials() -> AppError {
        AppError::authentication("Invalid identifier or secret")
    }
}
