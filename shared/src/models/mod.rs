//! Data models
//!
//! Shared between the server and its API clients.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod patch;
pub mod product;

// Re-exports
pub use patch::Patch;
pub use product::*;
