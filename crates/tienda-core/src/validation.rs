//! # Validation Module
//!
//! Coercion of raw form strings into storable product fields.
//!
//! ## Coercion Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Field      Empty / unparsable input        Result                      │
//! │  ─────────  ──────────────────────────────  ─────────────────────────── │
//! │  name       "" or "   "                     ✗ Required (blocking)       │
//! │  price      "" / "abc" / "NaN" / "inf"      ✗ NotNumeric / Required     │
//! │  price      "-3"                            ✗ Negative                  │
//! │  stock      "" / "abc" / "-2"               ✓ 0                         │
//! │  stock      "12abc"                         ✓ 12 (leading digits)       │
//! │  category   "" or "   "                     ✓ "General"                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only name and price can reject a form. Stock and category always coerce
//! to something storable.

use crate::error::ValidationError;
use crate::DEFAULT_CATEGORY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a product name and returns it trimmed.
///
/// ## Example
/// ```rust
/// use tienda_core::validation::validate_product_name;
///
/// assert_eq!(validate_product_name("  Laptop ").unwrap(), "Laptop");
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(name.to_string())
}

/// Parses a price typed by the user.
///
/// ## Rules
/// - Must be present (non-empty after trimming)
/// - Must parse as a finite real number
/// - Must not be negative; zero is allowed
///
/// ## Example
/// ```rust
/// use tienda_core::validation::parse_price;
///
/// assert_eq!(parse_price("3500").unwrap(), 3500.0);
/// assert_eq!(parse_price(" 49.90 ").unwrap(), 49.9);
/// assert!(parse_price("abc").is_err());
/// assert!(parse_price("").is_err());
/// ```
pub fn parse_price(raw: &str) -> ValidationResult<f64> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: "price".to_string(),
        });
    }

    let price: f64 = raw.parse().map_err(|_| ValidationError::NotNumeric {
        field: "price".to_string(),
    })?;

    // f64::from_str accepts "NaN" and "inf"
    if !price.is_finite() {
        return Err(ValidationError::NotNumeric {
            field: "price".to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(price)
}

/// Parses a stock quantity, defaulting to 0 instead of failing.
///
/// Reads an optional sign followed by the leading run of ASCII digits, so
/// `"12 units"` is 12. No digits, overflow, or a negative value all give 0.
///
/// ## Example
/// ```rust
/// use tienda_core::validation::parse_stock;
///
/// assert_eq!(parse_stock("20"), 20);
/// assert_eq!(parse_stock("12abc"), 12);
/// assert_eq!(parse_stock("abc"), 0);
/// assert_eq!(parse_stock("-4"), 0);
/// ```
pub fn parse_stock(raw: &str) -> i64 {
    let raw = raw.trim();

    let (negative, rest) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 || negative {
        return 0;
    }

    rest[..digits_len].parse::<i64>().unwrap_or(0)
}

/// Trims a category, substituting [`DEFAULT_CATEGORY`] when nothing is left.
pub fn normalize_category(raw: &str) -> String {
    let category = raw.trim();
    if category.is_empty() {
        DEFAULT_CATEGORY.to_string()
    } else {
        category.to_string()
    }
}

/// Trims filter text. `None` means "no filter, show everything".
pub fn normalize_filter(raw: &str) -> Option<String> {
    let filter = raw.trim();
    if filter.is_empty() {
        None
    } else {
        Some(filter.to_string())
    }
}
