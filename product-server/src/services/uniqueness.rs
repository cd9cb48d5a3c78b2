//! Product name uniqueness checks
//!
//! Batch creation runs two passes, in this order:
//! 1. names repeated inside the request itself
//! 2. names already present in the store

use std::collections::HashSet;

use shared::models::ProductCreate;

use super::error::{ProductError, ProductResult};
use crate::db::repository::ProductRepository;

pub struct UniquenessValidator {
    repo: ProductRepository,
}

impl UniquenessValidator {
    pub fn new(repo: ProductRepository) -> Self {
        Self { repo }
    }

    /// Fail if a product with `name` is already stored
    pub async fn check_unique_name(&self, name: &str) -> ProductResult<()> {
        if self.repo.find_by_name(name).await?.is_some() {
            return Err(ProductError::duplicate(name));
        }
        Ok(())
    }

    /// Both batch passes, in-request duplicates first
    pub async fn validate_batch(&self, dtos: &[ProductCreate]) -> ProductResult<()> {
        validate_no_duplicates_in_input(dtos)?;
        self.validate_no_existing_names(dtos).await
    }

    /// Fail with every requested name that is already stored
    pub async fn validate_no_existing_names(&self, dtos: &[ProductCreate]) -> ProductResult<()> {
        let requested: Vec<String> = dtos.iter().map(|d| d.name.clone()).collect();
        let existing: HashSet<String> = self
            .repo
            .find_by_names(&requested)
            .await?
            .into_iter()
            .map(|p| p.name)
            .collect();

        let mut reported = HashSet::new();
        let names: Vec<String> = requested
            .into_iter()
            .filter(|name| existing.contains(name) && reported.insert(name.clone()))
            .collect();

        if names.is_empty() {
            Ok(())
        } else {
            Err(ProductError::DuplicateName { names })
        }
    }
}

/// Fail with every name that repeats within `dtos`
///
/// Names are reported once each, in the order they first repeat.
pub fn validate_no_duplicates_in_input(dtos: &[ProductCreate]) -> ProductResult<()> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut names = Vec::new();

    for dto in dtos {
        if !seen.insert(dto) && reported.insert(dto) {
            names.push(dto.name.clone());
        }
    }

    if names.is_empty() {
        Ok(())
    } else {
        Err(ProductError::DuplicateName { names })
    }
}
