//! Account repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use herald_core::error::{AppError, ErrorKind};
use herald_core::result::AppResult;
use herald_entity::account::{Account, NewAccount};

/// Repository for account credential records.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    pool: PgPool,
}

impl AccountRepository {
    /// Create a new account repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an account by its login identifier (exact, case-sensitive match).
    pub async fn find_by_identifier(&self, identifier: &str) -> AppResult<Option<Account>> {
        sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE identifier = $1")
            .bind(identifier)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Store, "Credential store unavailable", e)
            })
    }

    /// Insert a new account.
    ///
    /// The unique constraint on `identifier` makes the existence check and
    /// the insert a single atomic operation; a concurrent duplicate insert
    /// surfaces as a conflict, never as a second row.
    pub async fn create(&self, data: &NewAccount) -> AppResult<Account> {
        sqlx::query_as::<_, Account>(
            "INSERT INTO accounts (identifier, digest) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.identifier)
        .bind(&data.digest)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("accounts_identifier_key") =>
            {
                AppError::conflict(format!("Account '{}' already exists", data.identifier))
            }
            _ => AppError::with_source(ErrorKind::Store, "Credential store unavailable", e),
        })
    }

    /// Replace an account's stored digest (credential re-hash).
    pub async fn update_digest(&self, id: Uuid, digest: &str) -> AppResult<()> {
        let result =
            sqlx::query("UPDATE accounts SET digest = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(digest)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Store, "Credential store unavailable", e)
                })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Account {id} not found")));
        }
        Ok(())
    }
}
