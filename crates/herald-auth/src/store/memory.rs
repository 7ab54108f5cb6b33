//! In-memory credential store for single-node development and tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use herald_core::error::AppError;
use herald_core::result::AppResult;
use herald_entity::account::{Account, NewAccount};

use super::CredentialStore;

/// In-memory credential store guarded by a Tokio mutex.
///
/// Holding the lock across the lookup and the insert makes `create`
/// atomic. Suitable for single-node development and tests only.
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    /// Accounts keyed by login identifier.
    accounts: Arc<Mutex<HashMap<String, Account>>>,
}

impl MemoryCredentialStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn find_by_identifier(&self, identifier: &str) -> AppResult<Option<Account>> {
        let accounts = self.accounts.lock().await;
        Ok(accounts.get(identifier).cloned())
    }

    async fn create(&self, account: NewAccount) -> AppResult<Account> {
        let mut accounts = self.accounts.lock().await;

        if accounts.contains_key(&account.identifier) {
            return Err(AppError::conflict(format!(
                "Account '{}' already exists",
                account.identifier
            )));
        }

        let now = Utc::now();
        let record = Account {
            id: Uuid::new_v4(),
            identifier: account.identifier.clone(),
            digest: account.digest,
            created_at: now,
            updated_at: now,
        };
        accounts.insert(account.identifier, record.clone());

        Ok(record)
    }

    async fn rotate_digest(&self, id: Uuid, digest: &str) -> AppResult<()> {
        let mut accounts = self.accounts.lock().await;

        let record = accounts
            .values_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AppError::not_found(format!("Account {id} not found")))?;

        record.digest = digest.to_string();
        record.updated_at = Utc::now();
        Ok(())
    }
}
