//! # tienda-core: Pure Product Types
//!
//! Everything about a product that does not touch the database: the entity
//! itself, the raw form a user types into, and the rules that turn one into
//! the other.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tienda Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation (terminal / web)                   │   │
//! │  │        list surface ──► edit/delete intents                     │   │
//! │  │        form surface ──► create/update intents (raw strings)     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Screen Controller (app)                      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tienda-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────────┐  ┌──────────────┐  ┌──────────────┐         │   │
//! │  │   │    types     │  │  validation  │  │    error     │         │   │
//! │  │   │  Product     │  │  parse_price │  │ Validation-  │         │   │
//! │  │   │  ProductForm │  │  parse_stock │  │   Error      │         │   │
//! │  │   │  ProductCard │  │  category    │  │              │         │   │
//! │  │   └──────────────┘  └──────────────┘  └──────────────┘         │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    tienda-db (Store Adapter)                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use tienda_core::ProductForm;
//!
//! let form = ProductForm {
//!     name: "  Mouse ".to_string(),
//!     price: "25.5".to_string(),
//!     stock: "abc".to_string(),
//!     category: String::new(),
//! };
//!
//! let fields = form.parse().unwrap();
//! assert_eq!(fields.name, "Mouse");
//! assert_eq!(fields.stock, 0);
//! assert_eq!(fields.category, "General");
//! ```

pub mod error;
pub mod types;
pub mod validation;

pub use error::ValidationError;
pub use types::*;

/// Category stored when the user leaves the category input empty.
pub const DEFAULT_CATEGORY: &str = "General";

/// Currency symbol used for price labels unless configured otherwise.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "S/.";
