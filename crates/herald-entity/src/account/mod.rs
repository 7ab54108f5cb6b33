//! Account entity and views.

pub mod model;

pub use model::{Account, NewAccount, PublicAccount};
