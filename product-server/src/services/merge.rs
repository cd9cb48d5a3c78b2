//! Update merging
//!
//! Applies a [`ProductUpdate`] onto a stored [`Product`] field by field.
//! Nothing is persisted here.

use shared::models::{Patch, Product, ProductUpdate, validate_name, validate_price};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MergeError {
    #[error("Cannot apply update to field '{field}': {reason}")]
    InvalidField { field: &'static str, reason: String },
}

fn check(field: &'static str, result: Result<(), validator::ValidationError>) -> Result<(), MergeError> {
    result.map_err(|e| MergeError::InvalidField {
        field,
        reason: e
            .message
            .map(|m| m.into_owned())
            .unwrap_or_else(|| e.code.into_owned()),
    })
}

/// Merge `update` into `existing`
///
/// `Full` overwrites every field. `Partial` only overwrites fields that carry
/// a value; absent and `null` fields keep the stored value.
pub fn merge(mut existing: Product, update: &ProductUpdate) -> Result<Product, MergeError> {
    match update {
        ProductUpdate::Full(dto) => {
            existing.name = dto.name.clone();
            existing.price = dto.price;
        }
        ProductUpdate::Partial(patch) => {
            if let Patch::Value(name) = &patch.name {
                existing.name = name.clone();
            }
            if let Patch::Value(price) = patch.price {
                existing.price = price;
            }
        }
    }

    check("name", validate_name(&existing.name))?;
    check("price", validate_price(existing.price))?;
    Ok(existing)
}
