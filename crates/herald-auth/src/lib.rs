//! # herald-auth
//!
//! Credential authentication core for the Herald console.
//!
//! ## Modules
//!
//! - `password` — Argon2id secret hashing with a process-wide pepper
//! - `token` — session token creation and validation
//! - `store` — the credential store contract and its backends
//! - `authenticator` — registration and login flows

pub mod authenticator;
pub mod password;
pub mod store;
pub mod token;

pub use authenticator::{Authenticator, LoginOutcome};
pub use password::SecretHasher;
pub use store::{CredentialStore, MemoryCredentialStore};
pub use token::{Claims, TokenDecoder, TokenEncoder};
