//! Account entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered account in the Herald console.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Account {
    /// Unique account identifier.
    pub id: Uuid,
    /// Unique, case-sensitive login name.
    pub identifier: String,
    /// Argon2id credential digest (PHC string). Never serialized.
    #[serde(skip_serializing)]
    pub digest: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Strips the digest, leaving only the fields safe to return to callers.
    pub fn into_public(self) -> PublicAccount {
        PublicAccount {
            id: self.id,
            identifier: self.identifier,
            created_at: self.created_at,
        }
    }
}

/// Data required to create a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAccount {
    /// Desired login identifier.
    pub identifier: String,
    /// Pre-hashed credential digest.
    pub digest: String,
}

/// Sanitized account view returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicAccount {
    /// Account ID.
    pub id: Uuid,
    /// Login identifier.
    pub identifier: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}
