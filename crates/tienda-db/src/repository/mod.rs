//! # Repository Module
//!
//! SQLite implementations of the store traits.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  ScreenController<S: ProductStore>                                     │
//! │       │                                                                 │
//! │       │  store.list_by_category("Ropa")                                 │
//! │       ▼                                                                 │
//! │  ProductRepository (impl ProductStore)                                 │
//! │  ├── initialize()                                                      │
//! │  ├── list_all() / list_by_category(c)                                  │
//! │  ├── create(fields) / update(id, fields) / delete(id)                  │
//! │  └── get_by_id(id) / count()                                           │
//! │       │                                                                 │
//! │       │  SQL                                                            │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod product;
