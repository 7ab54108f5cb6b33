//! Repository implementations for Herald entities.

pub mod account;

pub use account::AccountRepository;
