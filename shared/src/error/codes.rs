//! Error codes
//!
//! Codes are grouped by range:
//! - 0xxx: General errors
//! - 6xxx: Product errors
//! - 9xxx: System errors

use std::fmt;

/// Error code carried by every [`AppError`](super::AppError)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Request body or parameters failed validation
    ValidationFailed = 2,

    // ==================== 6xxx: Product ====================
    /// Product not found
    ProductNotFound = 6001,
    /// Product name already taken
    ProductNameExists = 6002,
    /// Delete target does not exist
    ProductDeleteMissing = 6003,
    /// Unsupported sort field
    InvalidSortField = 6004,
    /// Update could not be applied to the product
    ProductUpdateFailed = 6005,

    // ==================== 9xxx: System ====================
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default message, also shown in place of masked system errors
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::ProductNameExists => "Product name already exists",
            ErrorCode::ProductDeleteMissing => "Product to delete does not exist",
            ErrorCode::InvalidSortField => "Sort field must be 'createdAt' or 'price'",
            ErrorCode::ProductUpdateFailed => "Error on updating product",
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
