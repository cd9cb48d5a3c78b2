//! Product Model

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::hash::{Hash, Hasher};
use validator::{Validate, ValidationError, ValidationErrors};

use super::patch::Patch;

/// Entity names: longest accepted product name
pub const MAX_NAME_LEN: usize = 200;

const PRICE_MESSAGE: &str = "Price must be greater than 0.0";

/// Product entity
///
/// Timestamps are Unix epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create / full-replace payload
///
/// Two payloads are the same product when their names match; price is
/// ignored for equality.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProductCreate {
    #[validate(custom(function = "validate_name"))]
    pub name: String,
    #[validate(range(exclusive_min = 0.0, message = "Price must be greater than 0.0"))]
    pub price: f64,
}

impl ProductCreate {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

impl PartialEq for ProductCreate {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ProductCreate {}

impl Hash for ProductCreate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// Partial update payload
///
/// Omitted and `null` fields leave the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub name: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub price: Patch<f64>,
}

impl ProductPatch {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Patch::Value(name.into()),
            ..Self::default()
        }
    }

    pub fn price(price: f64) -> Self {
        Self {
            price: Patch::Value(price),
            ..Self::default()
        }
    }
}

impl Validate for ProductPatch {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let mut failed = false;

        if let Patch::Value(name) = &self.name
            && let Err(e) = validate_name(name)
        {
            errors.add("name", e);
            failed = true;
        }
        if let Patch::Value(price) = self.price
            && let Err(e) = validate_price(price)
        {
            errors.add("price", e);
            failed = true;
        }

        if failed { Err(errors) } else { Ok(()) }
    }
}

/// Update payload handed to the merger: full replace or partial patch
#[derive(Debug, Clone, PartialEq)]
pub enum ProductUpdate {
    Full(ProductCreate),
    Partial(ProductPatch),
}

impl ProductUpdate {
    /// The name this update would write, if it carries one
    pub fn name(&self) -> Option<&str> {
        match self {
            ProductUpdate::Full(dto) => Some(dto.name.as_str()),
            ProductUpdate::Partial(patch) => patch.name.as_value().map(String::as_str),
        }
    }
}

impl From<ProductCreate> for ProductUpdate {
    fn from(dto: ProductCreate) -> Self {
        ProductUpdate::Full(dto)
    }
}

impl From<ProductPatch> for ProductUpdate {
    fn from(patch: ProductPatch) -> Self {
        ProductUpdate::Partial(patch)
    }
}

fn invalid(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

/// Name must be non-blank and at most [`MAX_NAME_LEN`] chars
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(invalid("required", "Name is required"));
    }
    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(invalid(
            "length",
            format!("Name is too long ({len} chars, max {MAX_NAME_LEN})"),
        ));
    }
    Ok(())
}

/// Price must be a finite number strictly greater than zero
pub fn validate_price(price: f64) -> Result<(), ValidationError> {
    if price.is_finite() && price > 0.0 {
        Ok(())
    } else {
        Err(invalid("range", PRICE_MESSAGE))
    }
}
