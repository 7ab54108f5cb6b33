//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Desired login identifier.
    #[validate(length(min = 1, message = "Identifier is required"))]
    pub identifier: String,
    /// Plaintext credential.
    #[validate(length(min = 1, message = "Secret is required"))]
    pub plaintext: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login identifier.
    #[validate(length(min = 1, message = "Identifier is required"))]
    pub identifier: String,
    /// Plaintext credential.
    #[validate(length(min = 1, message = "Secret is required"))]
    pub plaintext: String,
}
