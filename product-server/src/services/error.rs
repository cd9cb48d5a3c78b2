//! Service-layer error type
//!
//! `ProductError` sits between the repository (`RepoError`) and the API layer
//! (`AppError`), so handlers can use `?` on service calls directly.

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

use crate::db::repository::RepoError;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product with id {0} not found")]
    NotFound(i64),

    #[error("{}", duplicate_message(.names))]
    DuplicateName { names: Vec<String> },

    #[error("{0}")]
    UpdateFailure(String),

    #[error("Invalid sort field '{0}', expected 'createdAt' or 'price'")]
    InvalidSortField(String),

    #[error(transparent)]
    Repository(RepoError),
}

fn duplicate_message(names: &[String]) -> String {
    match names {
        [] => "The product name already exists.".to_string(),
        [name] => format!("The product name '{name}' already exists."),
        _ => format!("The product names already exist: {}", names.join(", ")),
    }
}

impl ProductError {
    pub fn duplicate(name: impl Into<String>) -> Self {
        ProductError::DuplicateName {
            names: vec![name.into()],
        }
    }
}

impl From<RepoError> for ProductError {
    fn from(err: RepoError) -> Self {
        match err {
            // The UNIQUE constraint caught a name the pre-checks missed
            RepoError::Duplicate(msg) => {
                tracing::warn!(error = %msg, "Duplicate product name rejected by store");
                ProductError::DuplicateName { names: Vec::new() }
            }
            other => ProductError::Repository(other),
        }
    }
}

impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        let message = err.to_string();
        match err {
            ProductError::NotFound(id) => {
                AppError::with_message(ErrorCode::ProductNotFound, message).with_detail("id", id)
            }
            ProductError::DuplicateName { names } if names.is_empty() => {
                AppError::with_message(ErrorCode::ProductNameExists, message)
            }
            ProductError::DuplicateName { names } => {
                AppError::with_message(ErrorCode::ProductNameExists, message)
                    .with_detail("names", names)
            }
            ProductError::UpdateFailure(_) => {
                AppError::with_message(ErrorCode::ProductUpdateFailed, message)
            }
            ProductError::InvalidSortField(field) => {
                AppError::new(ErrorCode::InvalidSortField).with_detail("sortBy", field)
            }
            ProductError::Repository(RepoError::Validation(msg)) => AppError::validation(msg),
            ProductError::Repository(other) => AppError::database(other.to_string()),
        }
    }
}

impl axum::response::IntoResponse for ProductError {
    fn into_response(self) -> axum::response::Response {
        AppError::from(self).into_response()
    }
}

/// Convenience type alias for service-layer results
pub type ProductResult<T> = Result<T, ProductError>;
