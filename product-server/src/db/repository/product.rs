//! Product Repository

use super::{RepoError, RepoResult};
use shared::models::{Product, ProductCreate};
use sqlx::{SqliteConnection, SqlitePool};
use std::fmt;

const PRODUCT_SELECT: &str = "SELECT id, name, price, created_at, updated_at FROM product";

/// Names bound per `IN (...)` lookup
const NAME_LOOKUP_CHUNK: usize = 500;

const PRODUCT_INSERT: &str = "INSERT INTO product (name, price, created_at, updated_at) VALUES (?1, ?2, ?3, ?3) RETURNING id, name, price, created_at, updated_at";

/// Columns a product listing can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    CreatedAt,
    Price,
}

impl SortField {
    /// Wire name accepted in the `sortBy` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::CreatedAt => "createdAt",
            SortField::Price => "price",
        }
    }

    fn column(&self) -> &'static str {
        match self {
            SortField::CreatedAt => "created_at",
            SortField::Price => "price",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Escape `%`, `_` and the escape char itself so `s` matches literally inside LIKE
fn escape_like(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    for c in s.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Storage gateway for the `product` table
#[derive(Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<Product>> {
        let sql = format!("{PRODUCT_SELECT} WHERE id = ?");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn find_by_name(&self, name: &str) -> RepoResult<Option<Product>> {
        let sql = format!("{PRODUCT_SELECT} WHERE name = ?");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// All products whose name is one of `names`, in store order
    ///
    /// The `IN` list is bound in chunks to stay under SQLite's host parameter limit.
    pub async fn find_by_names(&self, names: &[String]) -> RepoResult<Vec<Product>> {
        let mut rows = Vec::new();
        for chunk in names.chunks(NAME_LOOKUP_CHUNK) {
            let placeholders = vec!["?"; chunk.len()].join(", ");
            let sql = format!("{PRODUCT_SELECT} WHERE name IN ({placeholders})");
            let mut query = sqlx::query_as::<_, Product>(&sql);
            for name in chunk {
                query = query.bind(name);
            }
            rows.extend(query.fetch_all(&self.pool).await?);
        }
        rows.sort_by_key(|p| p.id);
        Ok(rows)
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Product>> {
        let sql = format!("{PRODUCT_SELECT} ORDER BY id");
        let rows = sqlx::query_as::<_, Product>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn find_by_price_greater_than(&self, bound: f64) -> RepoResult<Vec<Product>> {
        let sql = format!("{PRODUCT_SELECT} WHERE price > ? ORDER BY id");
        let rows = sqlx::query_as::<_, Product>(&sql)
            .bind(bound)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Inclusive on both ends
    pub async fn find_by_price_between(&self, min: f64, max: f64) -> RepoResult<Vec<Product>> {
        let sql = format!("{PRODUCT_SELECT} WHERE price BETWEEN ?1 AND ?2 ORDER BY id");
        let rows = sqlx::query_as::<_, Product>(&sql)
            .bind(min)
            .bind(max)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn find_all_ordered(
        &self,
        field: SortField,
        ascending: bool,
    ) -> RepoResult<Vec<Product>> {
        let direction = if ascending { "ASC" } else { "DESC" };
        let sql = format!(
            "{PRODUCT_SELECT} ORDER BY {column} {direction}, id {direction}",
            column = field.column()
        );
        let rows = sqlx::query_as::<_, Product>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Substring match on the name (ASCII case-insensitive, like SQLite LIKE)
    pub async fn find_by_name_containing(&self, needle: &str) -> RepoResult<Vec<Product>> {
        let pattern = format!("%{}%", escape_like(needle));
        let sql = format!("{PRODUCT_SELECT} WHERE name LIKE ? ESCAPE '\\' ORDER BY id");
        let rows = sqlx::query_as::<_, Product>(&sql)
            .bind(&pattern)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Insert a new product; id and timestamps are assigned here
    pub async fn save(&self, draft: &ProductCreate) -> RepoResult<Product> {
        let mut conn = self.pool.acquire().await?;
        insert(&mut conn, draft, shared::util::now_millis()).await
    }

    /// Insert every draft in one transaction, all or nothing
    pub async fn save_all(&self, drafts: &[ProductCreate]) -> RepoResult<Vec<Product>> {
        if drafts.is_empty() {
            return Ok(Vec::new());
        }
        let now = shared::util::now_millis();
        let mut tx = self.pool.begin().await?;
        let mut saved = Vec::with_capacity(drafts.len());
        for draft in drafts {
            saved.push(insert(&mut tx, draft, now).await?);
        }
        tx.commit().await?;
        Ok(saved)
    }

    /// Write name and price of an existing row
    ///
    /// `updated_at` always moves forward, even within the same millisecond.
    /// Returns `None` when the row no longer exists.
    pub async fn update(&self, product: &Product) -> RepoResult<Option<Product>> {
        let now = shared::util::now_millis();
        let row = sqlx::query_as::<_, Product>(
            "UPDATE product SET name = ?1, price = ?2, updated_at = MAX(?3, updated_at + 1) WHERE id = ?4 RETURNING id, name, price, created_at, updated_at",
        )
        .bind(&product.name)
        .bind(product.price)
        .bind(now)
        .bind(product.id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn delete(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM product WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn exists(&self, id: i64) -> RepoResult<bool> {
        let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM product WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(found.is_some())
    }
}

async fn insert(conn: &mut SqliteConnection, draft: &ProductCreate, now: i64) -> RepoResult<Product> {
    sqlx::query_as::<_, Product>(PRODUCT_INSERT)
        .bind(&draft.name)
        .bind(draft.price)
        .bind(now)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create product".into()))
}
