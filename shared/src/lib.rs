//! Shared types for the product catalog service
//!
//! Common types used by the server crate and its tests: the unified error
//! system, the product models and small utilities.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};
