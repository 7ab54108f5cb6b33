//! PostgreSQL credential store backed by the account repository.

use async_trait::async_trait;
use uuid::Uuid;

use herald_core::result::AppResult;
use herald_database::repositories::account::AccountRepository;
use herald_entity::account::{Account, NewAccount};

use super::CredentialStore;

#[async_trait]
impl CredentialStore for AccountRepository {
    async fn find_by_identifier(&self, identifier: &str) -> AppResult<Option<Account>> {
        AccountRepository::find_by_identifier(self, identifier).await
    }

    async fn create(&self, account: NewAccount) -> AppResult<Account> {
        AccountRepository::create(self, &account).await
    }

    async fn rotate_digest(&self, id: Uuid, digest: &str) -> AppResult<()> {
        self.update_digest(id, digest).await
    }
}
