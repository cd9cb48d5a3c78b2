//! Input validation helpers
//!
//! Turns `validator` output into the single-line messages returned to
//! clients, and checks query parameters that have no DTO of their own.

use shared::error::AppError;
use validator::ValidationErrors;

/// Flatten field errors into `"field: message; field: message"`, sorted by field
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let msg = e
                    .message
                    .as_deref()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("invalid value ({})", e.code));
                format!("{field}: {msg}")
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

/// Convert validation failures into a 400 [`AppError`]
pub fn validation_error(errors: &ValidationErrors) -> AppError {
    AppError::validation(validation_message(errors))
}

/// A price bound given in a query string must be a finite number above zero
pub fn require_positive_price(value: f64, param: &str) -> Result<(), AppError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AppError::validation(format!("{param} must be greater than 0.0"))
            .with_detail("param", param))
    }
}
