//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use herald_entity::account::PublicAccount;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Registered account summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    /// Account ID.
    pub id: Uuid,
    /// Login identifier.
    pub identifier: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<PublicAccount> for AccountResponse {
    fn from(account: PublicAccount) -> Self {
        Self {
            id: account.id,
            identifier: account.identifier,
            created_at: account.created_at,
        }
    }
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Signed session token.
    pub token: String,
    /// Token expiration.
    pub expires_at: DateTime<Utc>,
    /// Login identifier.
    pub identifier: String,
    /// Account ID.
    pub account_id: Uuid,
}

/// Authenticated identity attached to the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    /// Account ID.
    pub account_id: Uuid,
    /// Login identifier.
    pub identifier: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}
