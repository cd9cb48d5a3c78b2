//! Product Service
//!
//! Create, read, update and delete with name uniqueness enforced before
//! every write.

use shared::models::{Product, ProductCreate, ProductPatch, ProductUpdate};

use super::error::{ProductError, ProductResult};
use super::merge;
use super::uniqueness::UniquenessValidator;
use crate::db::repository::ProductRepository;

pub struct ProductService {
    repo: ProductRepository,
    uniqueness: UniquenessValidator,
}

impl ProductService {
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        let repo = ProductRepository::new(pool);
        Self {
            uniqueness: UniquenessValidator::new(repo.clone()),
            repo,
        }
    }

    pub async fn create(&self, dto: ProductCreate) -> ProductResult<Product> {
        self.uniqueness.check_unique_name(&dto.name).await?;
        let product = self.repo.save(&dto).await?;
        tracing::info!(product_id = product.id, name = %product.name, "Product created");
        Ok(product)
    }

    /// Create every product or none
    pub async fn create_all(&self, dtos: Vec<ProductCreate>) -> ProductResult<Vec<Product>> {
        if dtos.is_empty() {
            return Ok(Vec::new());
        }
        self.uniqueness.validate_batch(&dtos).await?;
        let products = self.repo.save_all(&dtos).await?;
        tracing::info!(count = products.len(), "Products created");
        Ok(products)
    }

    pub async fn find_by_id(&self, id: i64) -> ProductResult<Product> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    pub async fn find_all(&self) -> ProductResult<Vec<Product>> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn update_full(&self, id: i64, dto: ProductCreate) -> ProductResult<Product> {
        self.update(id, ProductUpdate::Full(dto)).await
    }

    pub async fn update_partial(&self, id: i64, patch: ProductPatch) -> ProductResult<Product> {
        self.update(id, ProductUpdate::Partial(patch)).await
    }

    /// Fetch, check the incoming name, merge, persist
    ///
    /// A name equal to the record's own current name counts as taken.
    pub async fn update(&self, id: i64, update: ProductUpdate) -> ProductResult<Product> {
        let existing = self.find_by_id(id).await?;

        if let Some(name) = update.name() {
            self.uniqueness.check_unique_name(name).await?;
        }

        let merged = merge::merge(existing, &update).map_err(|e| {
            tracing::warn!(product_id = id, error = %e, "Product update could not be merged");
            ProductError::UpdateFailure(format!("Error on updating product: {e}"))
        })?;

        let product = self
            .repo
            .update(&merged)
            .await?
            .ok_or(ProductError::NotFound(id))?;
        tracing::info!(product_id = id, "Product updated");
        Ok(product)
    }

    pub async fn delete_by_id(&self, id: i64) -> ProductResult<()> {
        if !self.repo.exists(id).await? {
            return Err(ProductError::NotFound(id));
        }
        if !self.repo.delete(id).await? {
            // Removed concurrently between the check and the delete
            return Err(ProductError::NotFound(id));
        }
        tracing::info!(product_id = id, "Product deleted");
        Ok(())
    }
}
