//! # Error Types
//!
//! Input validation errors for product forms.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tienda-core (this file)                                               │
//! │  └── ValidationError  - form input rejected before reaching the store  │
//! │                                                                         │
//! │  tienda-db                                                             │
//! │  └── DbError          - database operation failures                    │
//! │                                                                         │
//! │  app                                                                   │
//! │  └── Alert            - what the user sees                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Input validation errors.
///
/// A validation error never reaches the store: the controller shows it as a
/// blocking alert and leaves the user's input in place for correction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty after trimming.
    #[error("{field} is required")]
    Required { field: String },

    /// Field must parse as a finite number.
    #[error("{field} must be numeric")]
    NotNumeric { field: String },

    /// Field must not be negative.
    #[error("{field} cannot be negative")]
    Negative { field: String },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::NotNumeric { field }
            | ValidationError::Negative { field } => field,
        }
    }
}
