//! Product Query Service
//!
//! Read-only listings: price filters, ordering and name search.

use std::str::FromStr;

use shared::models::Product;

use super::error::{ProductError, ProductResult};
use crate::db::repository::ProductRepository;

pub use crate::db::repository::SortField;

impl FromStr for SortField {
    type Err = ProductError;

    /// Exact, case-sensitive match on the wire names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "createdAt" => Ok(SortField::CreatedAt),
            "price" => Ok(SortField::Price),
            other => Err(ProductError::InvalidSortField(other.to_string())),
        }
    }
}

pub struct ProductQueryService {
    repo: ProductRepository,
}

impl ProductQueryService {
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        Self {
            repo: ProductRepository::new(pool),
        }
    }

    /// Products priced strictly above `price`
    pub async fn find_by_price_greater_than(&self, price: f64) -> ProductResult<Vec<Product>> {
        Ok(self.repo.find_by_price_greater_than(price).await?)
    }

    /// Products priced within `[min, max]`; empty when `min > max`
    pub async fn find_by_price_between(&self, min: f64, max: f64) -> ProductResult<Vec<Product>> {
        Ok(self.repo.find_by_price_between(min, max).await?)
    }

    pub async fn find_all_order_by(
        &self,
        sort_by: &str,
        ascending: bool,
    ) -> ProductResult<Vec<Product>> {
        let field: SortField = sort_by.parse()?;
        Ok(self.repo.find_all_ordered(field, ascending).await?)
    }

    pub async fn find_by_name_containing(&self, name: &str) -> ProductResult<Vec<Product>> {
        Ok(self.repo.find_by_name_containing(name).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use shared::models::ProductCreate;

    async fn seeded(items: &[(&str, f64)]) -> ProductQueryService {
        let db = DbService::in_memory().await.unwrap();
        let drafts: Vec<ProductCreate> = items
            .iter()
            .map(|(name, price)| ProductCreate::new(*name, *price))
            .collect();
        ProductRepository::new(db.pool.clone())
            .save_all(&drafts)
            .await
            .unwrap();
        ProductQueryService::new(db.pool)
    }

    fn prices(products: &[Product]) -> Vec<f64> {
        products.iter().map(|p| p.price).collect()
    }

    #[test]
    fn test_sort_field_parse() {
        assert_eq!("createdAt".parse::<SortField>().unwrap(), SortField::CreatedAt);
        assert_eq!("price".parse::<SortField>().unwrap(), SortField::Price);
        assert!("Price".parse::<SortField>().is_err());
        assert!("created_at".parse::<SortField>().is_err());
        assert_eq!(SortField::CreatedAt.to_string(), "createdAt");
    }

    #[tokio::test]
    async fn test_price_between() {
        let service = seeded(&[("P1", 12.5), ("P2", 34.7), ("P3", 11.6)]).await;
        let found = service.find_by_price_between(10.0, 15.0).await.unwrap();
        assert_eq!(prices(&found), vec![12.5, 11.6]);
    }

    #[tokio::test]
    async fn test_price_greater_than() {
        let service = seeded(&[("P1", 12.5), ("P2", 34.7), ("P3", 11.6)]).await;
        let found = service.find_by_price_greater_than(12.0).await.unwrap();
        assert_eq!(prices(&found), vec![12.5, 34.7]);
    }

    #[tokio::test]
    async fn test_order_by() {
        let service = seeded(&[("P1", 12.5), ("P2", 34.7), ("P3", 11.6)]).await;

        let found = service.find_all_order_by("price", true).await.unwrap();
        assert_eq!(prices(&found), vec![11.6, 12.5, 34.7]);

        let err = service.find_all_order_by("bogus", true).await.unwrap_err();
        assert!(matches!(err, ProductError::InvalidSortField(f) if f == "bogus"));
    }

    #[tokio::test]
    async fn test_name_containing() {
        let service = seeded(&[("Product 1", 1.0), ("Product 2", 2.0), ("Product 3", 3.0)]).await;
        let found = service.find_by_name_containing("2").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Product 2");
    }
}
