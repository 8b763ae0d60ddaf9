//! # Schema
//!
//! The `products` table and the rows that seed it.
//!
//! There is no migration history: the table is created with
//! `CREATE TABLE IF NOT EXISTS` on every start, inside the same transaction
//! that checks whether seeding is needed.
//!
//! ## Initialization
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      initialize()                                       │
//! │                                                                         │
//! │  BEGIN                                                                  │
//! │    CREATE TABLE IF NOT EXISTS products (...)                            │
//! │    SELECT COUNT(*) FROM products                                        │
//! │       ├── 0  → INSERT Laptop, Camiseta (one statement)                  │
//! │       └── >0 → nothing                                                  │
//! │  COMMIT                                                                 │
//! │                                                                         │
//! │  Second call: table exists, count = 2 → no-op                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

/// DDL for the only table.
pub const CREATE_PRODUCTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    name      TEXT NOT NULL,
    price     REAL NOT NULL,
    stock     INTEGER DEFAULT 0,
    category  TEXT DEFAULT 'General'
)
"#;

/// A seed row: name, price, stock, category.
pub type SeedRow = (&'static str, f64, i64, &'static str);

/// Rows inserted into an empty table, in insertion order.
///
/// Listing is newest-first, so a freshly seeded store lists Camiseta
/// before Laptop.
pub const SEED_PRODUCTS: [SeedRow; 2] = [
    ("Laptop", 3500.0, 10, "Electrónica"),
    ("Camiseta", 50.0, 20, "Ropa"),
];

/// Inserts both seed rows in a single statement.
pub const INSERT_SEED_PRODUCTS: &str = r#"
INSERT INTO products (name, price, stock, category)
VALUES (?1, ?2, ?3, ?4), (?5, ?6, ?7, ?8)
"#;
