//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::ProductNotFound => StatusCode::NOT_FOUND,

            Self::ProductNameExists => StatusCode::CONFLICT,

            Self::ProductUpdateFailed | Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,

            // Delete of a missing id is a bad request, not a 404
            Self::ValidationFailed | Self::InvalidSortField | Self::ProductDeleteMissing => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}
