//! # Domain Types
//!
//! The product entity and its view models.
//!
//! ## Type Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ProductForm (raw strings)                                            │
//! │        │  parse()  ── ValidationError ──► blocking alert               │
//! │        ▼                                                                │
//! │   ProductFields (name, price, stock, category)                         │
//! │        │  create / update                                               │
//! │        ▼                                                                │
//! │   products table                                                       │
//! │        │  list_all / list_by_category                                   │
//! │        ▼                                                                │
//! │   Product (id + fields) ──► ProductCard (display labels)               │
//! │        │                                                                │
//! │        └──► ProductForm::from_product (edit view, display strings)      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::validation::{self, ValidationResult};

// =============================================================================
// Product
// =============================================================================

/// A stored product row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Product {
    /// Row id assigned by the store. Never changes.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Unit price.
    pub price: f64,

    /// Units in stock.
    pub stock: i64,

    /// Free-text category, `"General"` when the user gave none.
    pub category: String,
}

impl Product {
    /// Returns the mutable part of the row.
    pub fn fields(&self) -> ProductFields {
        ProductFields {
            name: self.name.clone(),
            price: self.price,
            stock: self.stock,
            category: self.category.clone(),
        }
    }

    /// True when this row carries exactly the given fields.
    pub fn matches(&self, fields: &ProductFields) -> bool {
        self.name == fields.name
            && self.price == fields.price
            && self.stock == fields.stock
            && self.category == fields.category
    }
}

// =============================================================================
// Product Fields
// =============================================================================

/// The four user-editable fields, already coerced.
///
/// This is what the store receives on create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFields {
    pub name: String,
    pub price: f64,
    pub stock: i64,
    pub category: String,
}

impl ProductFields {
    /// Builds fields directly (seed data, tests).
    pub fn new(
        name: impl Into<String>,
        price: f64,
        stock: i64,
        category: impl Into<String>,
    ) -> Self {
        ProductFields {
            name: name.into(),
            price,
            stock,
            category: category.into(),
        }
    }
}

// =============================================================================
// Product Form
// =============================================================================

/// Raw form input, exactly as typed.
///
/// Used for both the add form and the edit view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub stock: String,
    pub category: String,
}

impl ProductForm {
    /// The add form's initial (and post-submit) state.
    pub fn blank() -> Self {
        ProductForm {
            name: String::new(),
            price: String::new(),
            stock: "0".to_string(),
            category: String::new(),
        }
    }

    /// Pre-populates an edit view from a stored row.
    ///
    /// Numbers use their shortest display form: a price of `3500.0`
    /// becomes `"3500"`, `49.9` stays `"49.9"`.
    pub fn from_product(product: &Product) -> Self {
        ProductForm {
            name: product.name.clone(),
            price: product.price.to_string(),
            stock: product.stock.to_string(),
            category: product.category.clone(),
        }
    }

    /// Applies the coercion policy.
    ///
    /// Name is checked before price, so a form with both missing reports
    /// the name.
    pub fn parse(&self) -> ValidationResult<ProductFields> {
        let name = validation::validate_product_name(&self.name)?;
        let price = validation::parse_price(&self.price)?;

        Ok(ProductFields {
            name,
            price,
            stock: validation::parse_stock(&self.stock),
            category: validation::normalize_category(&self.category),
        })
    }
}

impl Default for ProductForm {
    fn default() -> Self {
        ProductForm::blank()
    }
}

// =============================================================================
// Product Card
// =============================================================================

/// One entry of the list surface, with every label pre-rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductCard {
    pub id: i64,
    pub title: String,
    pub price_label: String,
    pub stock_label: String,
    pub category_label: String,
}

impl ProductCard {
    /// Renders a row. Prices always show two decimals.
    pub fn new(product: &Product, currency_symbol: &str) -> Self {
        ProductCard {
            id: product.id,
            title: product.name.clone(),
            price_label: format!("Price: {} {:.2}", currency_symbol, product.price),
            stock_label: format!("Stock: {}", product.stock),
            category_label: format!("Category: {}", product.category),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValidationError;

    fn laptop() -> Product {
        Product {
            id: 1,
            name: "Laptop".to_string(),
            price: 3500.0,
            stock: 10,
            category: "Electrónica".to_string(),
        }
    }

    #[test]
    fn test_blank_form() {
        let form = ProductForm::blank();
        assert_eq!(form.stock, "0");
        assert!(form.name.is_empty());
        assert!(form.price.is_empty());
        assert!(form.category.is_empty());
    }

    #[test]
    fn test_form_from_product_uses_display_strings() {
        let form = ProductForm::from_product(&laptop());
        assert_eq!(form.name, "Laptop");
        assert_eq!(form.price, "3500");
        assert_eq!(form.stock, "10");
        assert_eq!(form.category, "Electrónica");

        let mut half = laptop();
        half.price = 49.9;
        assert_eq!(ProductForm::from_product(&half).price, "49.9");
    }

    #[test]
    fn test_form_round_trips_through_edit_view() {
        let product = laptop();
        let fields = ProductForm::from_product(&product).parse().unwrap();
        assert!(product.matches(&fields));
        assert_eq!(fields, product.fields());
    }

    #[test]
    fn test_fields_strip_the_id() {
        let product = laptop();
        let fields = product.fields();

        assert_eq!(fields, ProductFields::new("Laptop", 3500.0, 10, "Electrónica"));

        let mut other = product.clone();
        other.stock = 9;
        assert!(!other.matches(&fields));
    }

    #[test]
    fn test_parse_applies_defaults() {
        let form = ProductForm {
            name: " Mouse ".to_string(),
            price: "25".to_string(),
            stock: "many".to_string(),
            category: "  ".to_string(),
        };

        let fields = form.parse().unwrap();
        assert_eq!(fields, ProductFields::new("Mouse", 25.0, 0, "General"));
    }

    #[test]
    fn test_parse_rejects_non_numeric_price() {
        let form = ProductForm {
            name: "Mouse".to_string(),
            price: "abc".to_string(),
            stock: "5".to_string(),
            category: String::new(),
        };

        assert_eq!(
            form.parse(),
            Err(ValidationError::NotNumeric {
                field: "price".to_string()
            })
        );
    }

    #[test]
    fn test_parse_reports_name_first() {
        let form = ProductForm {
            name: String::new(),
            price: String::new(),
            ..ProductForm::blank()
        };
        assert_eq!(form.parse().unwrap_err().field(), "name");
    }

    #[test]
    fn test_card_labels() {
        let card = ProductCard::new(&laptop(), "S/.");
        assert_eq!(card.title, "Laptop");
        assert_eq!(card.price_label, "Price: S/. 3500.00");
        assert_eq!(card.stock_label, "Stock: 10");
        assert_eq!(card.category_label, "Category: Electrónica");
    }

    #[test]
    fn test_card_serializes_camel_case() {
        let json = serde_json::to_value(ProductCard::new(&laptop(), "$")).unwrap();
        assert_eq!(json["priceLabel"], "Price: $ 3500.00");
    }
}
