//! Services - business logic between the HTTP handlers and the repositories

pub mod error;
pub mod merge;
pub mod product;
pub mod query;
pub mod uniqueness;

pub use error::{ProductError, ProductResult};
pub use product::ProductService;
pub use query::{ProductQueryService, SortField};
pub use uniqueness::UniquenessValidator;
