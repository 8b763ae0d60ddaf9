//! # tienda-db: Store Adapter for Tienda
//!
//! Durable CRUD over the single `products` table, using SQLite through sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tienda Data Flow                                 │
//! │                                                                         │
//! │  ScreenController (add / edit / delete / filter)                       │
//! │       │                                                                 │
//! │       │  store.create(&fields).await?                                   │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     tienda-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  ProductStore │    │    Schema    │  │   │
//! │  │   │   (pool.rs)   │    │  (store.rs)   │    │ (schema.rs)  │  │   │
//! │  │   │               │    │       ▲       │    │              │  │   │
//! │  │   │ SqlitePool    │    │       │       │    │ CREATE TABLE │  │   │
//! │  │   │ Connection    │◄───│ ProductRepo   │    │ seed rows    │  │   │
//! │  │   │ Management    │    │ (repository/) │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │   ~/.local/share/tienda/tienda.db                               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`schema`] - Table DDL and seed rows
//! - [`store`] - The `ProductStore` trait the controller depends on
//! - [`error`] - Database error types
//! - [`repository`] - SQLite implementation of the store
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tienda_db::{Database, DbConfig, ProductStore};
//!
//! let db = Database::new(DbConfig::new("tienda.db")).await?;
//! let products = db.products();
//!
//! products.initialize().await?;
//! let rows = products.list_all().await?;
//! ```

pub mod error;
pub mod pool;
pub mod repository;
pub mod schema;
pub mod store;

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::product::ProductRepository;
pub use store::ProductStore;
