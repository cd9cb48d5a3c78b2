//! Unified error system for the product catalog service
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ErrorBody`]: The JSON body every failed request answers with
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 6xxx: Product errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ErrorBody};
//!
//! // Create a simple error
//! let err = AppError::new(ErrorCode::ProductNotFound);
//!
//! // Create an error with custom message
//! let err = AppError::with_message(ErrorCode::ValidationFailed, "Price must be greater than 0.0");
//!
//! // Create an error with details
//! let err = AppError::with_message(ErrorCode::ProductNameExists, "Duplicate product names")
//!     .with_detail("names", vec!["Coffee"]);
//!
//! // Convert to the response body
//! let body = ErrorBody::from(&err);
//! assert_eq!(body.error, "Duplicate product names");
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::ErrorCode;
pub use types::{AppError, AppResult, ErrorBody};
