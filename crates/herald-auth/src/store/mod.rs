//! Credential store contract and backends.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use herald_core::result::AppResult;
use herald_entity::account::{Account, NewAccount};

pub use memory::MemoryCredentialStore;

/// Durable mapping from login identifier to credential record.
///
/// `create` must be atomic: the uniqueness check and the insert happen as
/// one operation, with no race window in between. Everything else the
/// authentication core needs from persistence is listed here.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Look up an account by its login identifier (case-sensitive).
    async fn find_by_identifier(&self, identifier: &str) -> AppResult<Option<Account>>;

    /// Create a new account, failing with a conflict if the identifier is taken.
    async fn create(&self, account: NewAccount) -> AppResult<Account>;

    /// Replace an account's stored digest (credential re-hash).
    async fn rotate_digest(&self, id: Uuid, digest: &str) -> AppResult<()>;
}
