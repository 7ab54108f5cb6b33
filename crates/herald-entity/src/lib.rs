//! # herald-entity
//!
//! Domain entity models for Herald. Each struct represents a database
//! table row or a value object derived from one. Entities derive `Debug`,
//! `Clone`, `Serialize`, `Deserialize`, and database entities additionally
//! derive `sqlx::FromRow`.

pub mod account;
