//! # Alerts
//!
//! Everything the controller wants the user to see.
//!
//! ## Alert Kinds
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Kind         Blocking   Raised by                                      │
//! │  ───────────  ────────   ────────────────────────────────────────────── │
//! │  Success      no         add / save edit / delete succeeded             │
//! │  Validation   yes        form rejected, store never called              │
//! │  Error        no         a store call failed, list left as it was       │
//! │  Fatal        yes        open / initialize failed, data features off    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tienda_core::ValidationError;
use tienda_db::DbError;

/// Severity of an [`Alert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertKind {
    Success,
    Validation,
    Error,
    Fatal,
}

impl AlertKind {
    /// Blocking alerts must be acknowledged before the user continues.
    pub fn is_blocking(self) -> bool {
        matches!(self, AlertKind::Validation | AlertKind::Fatal)
    }
}

/// A user-visible message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub kind: AlertKind,
    pub title: String,
    pub message: String,

    /// Underlying store error text, for the log line or a details view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Alert {
    pub fn success(message: impl Into<String>) -> Self {
        Alert {
            kind: AlertKind::Success,
            title: "Success".to_string(),
            message: message.into(),
            detail: None,
        }
    }

    pub fn validation(err: &ValidationError) -> Self {
        let message = match err {
            ValidationError::Required { field } => format!("The {} is required.", field),
            ValidationError::NotNumeric { field } => format!("The {} must be numeric.", field),
            ValidationError::Negative { field } => format!("The {} cannot be negative.", field),
        };

        Alert {
            kind: AlertKind::Validation,
            title: "Validation".to_string(),
            message,
            detail: None,
        }
    }

    /// Non-blocking failure of a single store call.
    pub fn store_error(message: impl Into<String>, err: &DbError) -> Self {
        tracing::error!(error = %err, "Store operation failed");
        Alert {
            kind: AlertKind::Error,
            title: "Error".to_string(),
            message: message.into(),
            detail: Some(err.to_string()),
        }
    }

    /// The store could not be opened or initialized.
    pub fn fatal(message: impl Into<String>, err: &DbError) -> Self {
        tracing::error!(error = %err, "Store unavailable");
        Alert {
            kind: AlertKind::Fatal,
            title: "Error".to_string(),
            message: message.into(),
            detail: Some(err.to_string()),
        }
    }

    /// Raised when an action needs the store but startup failed.
    pub fn unavailable() -> Self {
        Alert {
            kind: AlertKind::Fatal,
            title: "Error".to_string(),
            message: "The product database is not available.".to_string(),
            detail: None,
        }
    }

    /// An edit was requested for a row that isn't on screen.
    pub fn not_displayed(id: i64) -> Self {
        Alert {
            kind: AlertKind::Error,
            title: "Error".to_string(),
            message: format!("Product #{} is not in the displayed list.", id),
            detail: None,
        }
    }

    pub fn no_selection() -> Self {
        Alert {
            kind: AlertKind::Error,
            title: "Error".to_string(),
            message: "No product selected.".to_string(),
            detail: None,
        }
    }

    pub fn is_blocking(&self) -> bool {
        self.kind.is_blocking()
    }
}

/// A question the user must answer before a destructive action runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Confirmation {
    pub title: String,
    pub message: String,
}
