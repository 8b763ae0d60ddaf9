//! # Product Repository
//!
//! SQLite implementation of [`ProductStore`].
//!
//! ## Key Operations
//! - Table creation and first-run seeding
//! - Newest-first listing, optionally by exact category
//! - Create / overwrite / hard-delete, one transaction each
//!
//! ## Missing Rows
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  UPDATE products SET ... WHERE id = 999   → rows_affected = 0 → Ok(())  │
//! │  DELETE FROM products WHERE id = 999      → rows_affected = 0 → Ok(())  │
//! │                                                                         │
//! │  The caller always re-fetches the list afterwards, so a stale id just  │
//! │  disappears from the screen instead of raising an error.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::schema::{CREATE_PRODUCTS_TABLE, INSERT_SEED_PRODUCTS, SEED_PRODUCTS};
use crate::store::ProductStore;
use tienda_core::{Product, ProductFields};

// NULL stock/category can only come from rows written outside this crate;
// read them back as the column defaults.
const LIST_ALL: &str = r#"
SELECT id, name, price,
       COALESCE(stock, 0) AS stock,
       COALESCE(category, 'General') AS category
FROM products
ORDER BY id DESC
"#;

const LIST_BY_CATEGORY: &str = r#"
SELECT id, name, price,
       COALESCE(stock, 0) AS stock,
       COALESCE(category, 'General') AS category
FROM products
WHERE category = ?1
ORDER BY id DESC
"#;

const GET_BY_ID: &str = r#"
SELECT id, name, price,
       COALESCE(stock, 0) AS stock,
       COALESCE(category, 'General') AS category
FROM products
WHERE id = ?1
"#;

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
/// repo.initialize().await?;
///
/// let id = repo.create(&ProductFields::new("Mouse", 25.0, 5, "General")).await?;
/// let ropa = repo.list_by_category("Ropa").await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Gets a product by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - No such row
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(GET_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    /// Counts rows (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl ProductStore for ProductRepository {
    async fn initialize(&self) -> DbResult<()> {
        let mut tx = self.pool.begin().await.map_err(DbError::transaction)?;

        sqlx::query(CREATE_PRODUCTS_TABLE).execute(&mut *tx).await?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&mut *tx)
            .await?;

        if count == 0 {
            let [first, second] = SEED_PRODUCTS;
            sqlx::query(INSERT_SEED_PRODUCTS)
                .bind(first.0)
                .bind(first.1)
                .bind(first.2)
                .bind(first.3)
                .bind(second.0)
                .bind(second.1)
                .bind(second.2)
                .bind(second.3)
                .execute(&mut *tx)
                .await?;
            info!(rows = SEED_PRODUCTS.len(), "Seeded empty products table");
        } else {
            debug!(count, "Products table already populated");
        }

        tx.commit().await.map_err(DbError::transaction)?;
        Ok(())
    }

    async fn list_all(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(LIST_ALL)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    async fn list_by_category(&self, category: &str) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(LIST_BY_CATEGORY)
            .bind(category)
            .fetch_all(&self.pool)
            .await?;

        debug!(category = %category, count = products.len(), "Listed products by category");
        Ok(products)
    }

    async fn create(&self, fields: &ProductFields) -> DbResult<i64> {
        debug!(name = %fields.name, "Inserting product");

        let mut tx = self.pool.begin().await.map_err(DbError::transaction)?;

        let result = sqlx::query(
            "INSERT INTO products (name, price, stock, category) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(&fields.name)
        .bind(fields.price)
        .bind(fields.stock)
        .bind(&fields.category)
        .execute(&mut *tx)
        .await?;

        tx.commit().await.map_err(DbError::transaction)?;

        Ok(result.last_insert_rowid())
    }

    async fn update(&self, id: i64, fields: &ProductFields) -> DbResult<()> {
        debug!(id, "Updating product");

        let mut tx = self.pool.begin().await.map_err(DbError::transaction)?;

        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = ?2,
                price = ?3,
                stock = ?4,
                category = ?5
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&fields.name)
        .bind(fields.price)
        .bind(fields.stock)
        .bind(&fields.category)
        .execute(&mut *tx)
        .await?;

        tx.commit().await.map_err(DbError::transaction)?;

        if result.rows_affected() == 0 {
            debug!(id, "Update matched no rows");
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting product");

        let mut tx = self.pool.begin().await.map_err(DbError::transaction)?;

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await.map_err(DbError::transaction)?;

        if result.rows_affected() == 0 {
            debug!(id, "Delete matched no rows");
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn open() -> (Database, ProductRepository) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.products();
        (db, repo)
    }

    async fn seeded() -> (Database, ProductRepository) {
        let (db, repo) = open().await;
        repo.initialize().await.unwrap();
        (db, repo)
    }

    fn mouse() -> ProductFields {
        ProductFields::new("Mouse", 25.5, 5, "Electrónica")
    }

    #[tokio::test]
    async fn test_initialize_seeds_empty_store() {
        let (_db, repo) = seeded().await;

        let rows = repo.list_all().await.unwrap();
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].name, "Camiseta");
        assert_eq!(rows[0].price, 50.0);
        assert_eq!(rows[0].stock, 20);
        assert_eq!(rows[0].category, "Ropa");

        assert_eq!(rows[1].name, "Laptop");
        assert_eq!(rows[1].price, 3500.0);
        assert_eq!(rows[1].stock, 10);
        assert_eq!(rows[1].category, "Electrónica");

        assert!(rows[0].id > rows[1].id);
    }

    #[tokio::test]
    async fn test_initialize_is_idempotent() {
        let (_db, repo) = seeded().await;
        repo.initialize().await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_initialize_keeps_existing_rows() {
        let (_db, repo) = seeded().await;
        let laptop = repo.list_all().await.unwrap().pop().unwrap();
        repo.delete(laptop.id).await.unwrap();

        repo.initialize().await.unwrap();
        let rows = repo.list_all().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Camiseta");
    }

    #[tokio::test]
    async fn test_list_before_initialize_fails() {
        let (_db, repo) = open().await;
        let err = repo.list_all().await.unwrap_err();
        assert!(matches!(err, DbError::QueryFailed(_)));
    }

    #[tokio::test]
    async fn test_create_adds_exactly_one_row() {
        let (_db, repo) = seeded().await;
        let before = repo.list_all().await.unwrap();

        let id = repo.create(&mouse()).await.unwrap();

        let after = repo.list_all().await.unwrap();
        assert_eq!(after.len(), before.len() + 1);
        assert!(before.iter().all(|p| p.id != id));

        // newest first
        assert_eq!(after[0].id, id);
        assert!(after[0].matches(&mouse()));
        assert_eq!(&after[1..], &before[..]);
    }

    #[tokio::test]
    async fn test_create_assigns_fresh_ids() {
        let (_db, repo) = seeded().await;
        let a = repo.create(&mouse()).await.unwrap();
        repo.delete(a).await.unwrap();
        let b = repo.create(&mouse()).await.unwrap();

        // AUTOINCREMENT never reuses a deleted id
        assert!(b > a);
    }

    #[tokio::test]
    async fn test_update_overwrites_only_target_row() {
        let (_db, repo) = seeded().await;
        let id = repo.create(&mouse()).await.unwrap();
        let before = repo.list_all().await.unwrap();

        let fields = ProductFields::new("Mouse inalámbrico", 39.9, 0, "General");
        repo.update(id, &fields).await.unwrap();

        let after = repo.list_all().await.unwrap();
        assert_eq!(after.len(), before.len());
        for (old, new) in before.iter().zip(&after) {
            assert_eq!(old.id, new.id);
            if new.id == id {
                assert_eq!(new.fields(), fields);
            } else {
                assert_eq!(old, new);
            }
        }
    }

    #[tokio::test]
    async fn test_update_missing_id_reports_success() {
        let (_db, repo) = seeded().await;
        let before = repo.list_all().await.unwrap();

        let result = repo.update(9_999, &mouse()).await;
        assert!(result.is_ok(), "no matching row is reported as success");

        assert_eq!(repo.list_all().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let (_db, repo) = seeded().await;
        let id = repo.create(&mouse()).await.unwrap();

        repo.delete(id).await.unwrap();
        let after_first = repo.list_all().await.unwrap();
        assert!(after_first.iter().all(|p| p.id != id));

        repo.delete(id).await.unwrap();
        assert_eq!(repo.list_all().await.unwrap(), after_first);
        assert!(repo.get_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_by_category_is_exact_subset() {
        let (_db, repo) = seeded().await;
        repo.create(&mouse()).await.unwrap();
        repo.create(&ProductFields::new("Teclado", 80.0, 3, "electrónica")).await.unwrap();
        repo.create(&ProductFields::new("Monitor", 900.0, 2, "Electrónica ")).await.unwrap();
        repo.create(&ProductFields::new("Cable", 5.0, 40, "Electrónica")).await.unwrap();

        let all = repo.list_all().await.unwrap();
        let expected: Vec<Product> = all
            .into_iter()
            .filter(|p| p.category == "Electrónica")
            .collect();

        let filtered = repo.list_by_category("Electrónica").await.unwrap();
        assert_eq!(filtered, expected);
        assert_eq!(
            filtered.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
            ["Cable", "Mouse", "Laptop"]
        );
    }

    #[tokio::test]
    async fn test_list_by_unknown_category_is_empty() {
        let (_db, repo) = seeded().await;
        assert!(repo.list_by_category("Juguetes").await.unwrap().is_empty());
        assert!(repo.list_by_category("ropa").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_table_lists_nothing() {
        let (_db, repo) = seeded().await;
        for product in repo.list_all().await.unwrap() {
            repo.delete(product.id).await.unwrap();
        }
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_null_columns_read_as_defaults() {
        let (db, repo) = seeded().await;
        sqlx::query("INSERT INTO products (name, price, stock, category) VALUES ('Taza', 12.0, NULL, NULL)")
            .execute(db.pool())
            .await
            .unwrap();

        let taza = repo.list_all().await.unwrap().remove(0);
        assert_eq!(taza.stock, 0);
        assert_eq!(taza.category, "General");
    }

    #[tokio::test]
    async fn test_not_null_violation_maps_to_constraint_error() {
        let (db, _repo) = seeded().await;
        let err = sqlx::query("INSERT INTO products (name, price) VALUES (NULL, 1.0)")
            .execute(db.pool())
            .await
            .map_err(DbError::from)
            .unwrap_err();

        assert!(matches!(err, DbError::ConstraintViolation(_)));
    }

    #[tokio::test]
    async fn test_closed_store_reports_errors() {
        let (db, repo) = seeded().await;
        db.close().await;

        assert!(repo.list_all().await.is_err());
        assert!(repo.create(&mouse()).await.is_err());
        assert!(repo.delete(1).await.is_err());
    }

    #[tokio::test]
    async fn test_rows_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tienda.db");

        let db = Database::new(DbConfig::new(&path)).await.unwrap();
        let repo = db.products();
        repo.initialize().await.unwrap();
        let id = repo.create(&mouse()).await.unwrap();
        db.close().await;

        let db = Database::new(DbConfig::new(&path)).await.unwrap();
        let repo = db.products();
        repo.initialize().await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 3);
        let stored = repo.get_by_id(id).await.unwrap().unwrap();
        assert!(stored.matches(&mouse()));
        db.close().await;
    }
}
