//! # Product Store Trait
//!
//! The seam between the screen controller and persistence. The controller
//! only ever sees this trait, so tests can hand it an in-memory double.

use async_trait::async_trait;
use tienda_core::{Product, ProductFields};

use crate::error::DbResult;

/// Storage interface for products.
///
/// Every method is one unit of work: it either fully succeeds or has no
/// effect. Nothing spans two calls.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Create the table if needed and seed it when empty.
    ///
    /// Safe to call on every start; never duplicates the seed rows.
    async fn initialize(&self) -> DbResult<()>;

    /// All rows, newest (`id` descending) first. Empty table gives an empty vec.
    async fn list_all(&self) -> DbResult<Vec<Product>>;

    /// Rows whose category equals `category` exactly (case-sensitive),
    /// newest first.
    async fn list_by_category(&self, category: &str) -> DbResult<Vec<Product>>;

    /// Insert a row and return its new id.
    async fn create(&self, fields: &ProductFields) -> DbResult<i64>;

    /// Overwrite all four fields of row `id`.
    ///
    /// No-op (still `Ok`) if the row doesn't exist.
    async fn update(&self, id: i64, fields: &ProductFields) -> DbResult<()>;

    /// Hard-delete row `id`.
    ///
    /// No-op (still `Ok`) if the row doesn't exist.
    async fn delete(&self, id: i64) -> DbResult<()>;
}
