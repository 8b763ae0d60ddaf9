//! # Screen Controller
//!
//! Owns everything the product screen shows and turns user intents into
//! store calls.
//!
//! ## Phases
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Controller Lifecycle                                │
//! │                                                                         │
//! │   new(store)                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │   ┌─────────┐  start(): initialize + list_all   ┌─────────┐            │
//! │   │ Loading │ ────────────────────────────────► │  Ready  │ ◄──┐       │
//! │   └─────────┘                                    └─────────┘    │       │
//! │       │                                               │  add / edit /  │
//! │       │ initialize or first load failed               │  delete /      │
//! │       ▼                                               │  filter        │
//! │   ┌─────────┐                                         └───────┘        │
//! │   │ Failed  │  Fatal alert, every data action refused                  │
//! │   └─────────┘                                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Mutation Flow
//! Every successful mutation is followed by a full reload of the displayed
//! list (re-running the active category filter, if any). Nothing is patched
//! locally, so the list always mirrors what the store returned.
//!
//! A failed store call leaves the displayed list exactly as it was and
//! surfaces a non-blocking error alert.

mod alert;

#[cfg(test)]
pub(crate) mod testing;

pub use alert::{Alert, AlertKind, Confirmation};

use tienda_core::validation::normalize_filter;
use tienda_core::{Product, ProductCard, ProductForm};
use tienda_db::ProductStore;
use tracing::{debug, info, warn};

/// Where the screen is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Created, store not yet initialized.
    Loading,
    /// Store initialized and the list has loaded at least once.
    Ready,
    /// Startup failed. Data features stay off for the session.
    Failed,
}

/// An open edit of one existing row.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    pub id: i64,
    pub form: ProductForm,
}

/// State and behavior of the product screen, generic over its store.
pub struct ScreenController<S> {
    store: S,
    phase: Phase,
    products: Vec<Product>,
    form: ProductForm,
    filter: String,
    active_filter: Option<String>,
    editing: Option<EditSession>,
    pending_delete: Option<i64>,
}

impl<S: ProductStore> ScreenController<S> {
    pub fn new(store: S) -> Self {
        ScreenController {
            store,
            phase: Phase::Loading,
            products: Vec::new(),
            form: ProductForm::blank(),
            filter: String::new(),
            active_filter: None,
            editing: None,
            pending_delete: None,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The displayed list, newest first.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn cards(&self, currency_symbol: &str) -> Vec<ProductCard> {
        self.products
            .iter()
            .map(|p| ProductCard::new(p, currency_symbol))
            .collect()
    }

    /// The add form.
    pub fn form(&self) -> &ProductForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ProductForm {
        &mut self.form
    }

    /// Raw text of the category filter input.
    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter = text.into();
    }

    /// The category the displayed list is currently restricted to.
    pub fn active_filter(&self) -> Option<&str> {
        self.active_filter.as_deref()
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    pub fn edit_form_mut(&mut self) -> Option<&mut ProductForm> {
        self.editing.as_mut().map(|session| &mut session.form)
    }

    pub fn pending_delete(&self) -> Option<i64> {
        self.pending_delete
    }

    // =========================================================================
    // Startup
    // =========================================================================

    /// Initializes the store and loads the full list.
    ///
    /// On failure the controller moves to [`Phase::Failed`] and the returned
    /// alert is fatal.
    pub async fn start(&mut self) -> Result<(), Alert> {
        info!("Starting product screen");
        self.phase = Phase::Loading;

        if let Err(e) = self.store.initialize().await {
            self.phase = Phase::Failed;
            return Err(Alert::fatal("Could not open the product database.", &e));
        }

        match self.store.list_all().await {
            Ok(rows) => {
                debug!(count = rows.len(), "Initial list loaded");
                self.products = rows;
                self.phase = Phase::Ready;
                Ok(())
            }
            Err(e) => {
                self.phase = Phase::Failed;
                Err(Alert::fatal("Could not load products.", &e))
            }
        }
    }

    /// Reloads the displayed list, honoring the active category filter.
    pub async fn refresh(&mut self) -> Result<(), Alert> {
        self.ensure_ready()?;

        let result = match &self.active_filter {
            Some(category) => self.store.list_by_category(category).await,
            None => self.store.list_all().await,
        };

        match result {
            Ok(rows) => {
                debug!(count = rows.len(), filter = ?self.active_filter, "List refreshed");
                self.products = rows;
                Ok(())
            }
            Err(e) => Err(Alert::store_error("Could not load products.", &e)),
        }
    }

    // =========================================================================
    // Add
    // =========================================================================

    /// Submits the add form.
    ///
    /// A rejected form is kept as typed. After a successful create the form
    /// is reset to blank even if the follow-up reload fails.
    pub async fn add(&mut self) -> Alert {
        if let Err(alert) = self.ensure_ready() {
            return alert;
        }

        let fields = match self.form.parse() {
            Ok(fields) => fields,
            Err(e) => {
                debug!(field = e.field(), "Add form rejected");
                return Alert::validation(&e);
            }
        };

        let id = match self.store.create(&fields).await {
            Ok(id) => id,
            Err(e) => return Alert::store_error("Could not add the product.", &e),
        };

        info!(id, name = %fields.name, "Product added");
        self.form = ProductForm::blank();

        match self.refresh().await {
            Ok(()) => Alert::success("Product added."),
            Err(alert) => alert,
        }
    }

    // =========================================================================
    // Edit
    // =========================================================================

    /// Opens an edit session pre-populated from a displayed row.
    ///
    /// Replaces any session already open.
    pub fn begin_edit(&mut self, id: i64) -> Result<(), Alert> {
        self.ensure_ready()?;

        let product = self
            .products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| Alert::not_displayed(id))?;

        debug!(id, "Edit session opened");
        self.editing = Some(EditSession {
            id,
            form: ProductForm::from_product(product),
        });
        Ok(())
    }

    /// Saves the open edit session.
    ///
    /// The session stays open when the form is rejected or the store call
    /// fails, so the user can correct it and retry.
    pub async fn save_edit(&mut self) -> Alert {
        if let Err(alert) = self.ensure_ready() {
            return alert;
        }

        let Some(session) = &self.editing else {
            return Alert::no_selection();
        };
        let id = session.id;

        let fields = match session.form.parse() {
            Ok(fields) => fields,
            Err(e) => {
                debug!(id, field = e.field(), "Edit form rejected");
                return Alert::validation(&e);
            }
        };

        if let Err(e) = self.store.update(id, &fields).await {
            return Alert::store_error("Could not update the product.", &e);
        }

        info!(id, "Product updated");
        self.editing = None;

        match self.refresh().await {
            Ok(()) => Alert::success("Product updated."),
            Err(alert) => alert,
        }
    }

    pub fn cancel_edit(&mut self) {
        if let Some(session) = self.editing.take() {
            debug!(id = session.id, "Edit session cancelled");
        }
    }

    // =========================================================================
    // Delete
    // =========================================================================

    /// Asks for confirmation before deleting row `id`.
    ///
    /// Nothing is deleted until [`confirm_delete`](Self::confirm_delete).
    pub fn request_delete(&mut self, id: i64) -> Result<Confirmation, Alert> {
        self.ensure_ready()?;

        let message = match self.products.iter().find(|p| p.id == id) {
            Some(product) => format!("Delete \"{}\"? This cannot be undone.", product.name),
            None => format!("Delete product #{}? This cannot be undone.", id),
        };

        self.pending_delete = Some(id);
        Ok(Confirmation {
            title: "Confirm".to_string(),
            message,
        })
    }

    pub async fn confirm_delete(&mut self) -> Alert {
        if let Err(alert) = self.ensure_ready() {
            return alert;
        }

        let Some(id) = self.pending_delete.take() else {
            return Alert::no_selection();
        };

        if let Err(e) = self.store.delete(id).await {
            return Alert::store_error("Could not delete the product.", &e);
        }

        info!(id, "Product deleted");
        if self.editing.as_ref().is_some_and(|s| s.id == id) {
            self.editing = None;
        }

        match self.refresh().await {
            Ok(()) => Alert::success("Product deleted."),
            Err(alert) => alert,
        }
    }

    pub fn cancel_delete(&mut self) {
        if let Some(id) = self.pending_delete.take() {
            debug!(id, "Delete cancelled");
        }
    }

    // =========================================================================
    // Filter
    // =========================================================================

    /// Restricts the list to the category typed in the filter input.
    ///
    /// The input is trimmed. A blank input behaves like [`show_all`](Self::show_all)
    /// without clearing what was typed.
    pub async fn apply_filter(&mut self) -> Result<(), Alert> {
        self.ensure_ready()?;

        let Some(category) = normalize_filter(&self.filter) else {
            self.active_filter = None;
            return self.refresh().await;
        };

        match self.store.list_by_category(&category).await {
            Ok(rows) => {
                debug!(%category, count = rows.len(), "Filter applied");
                self.products = rows;
                self.active_filter = Some(category);
                Ok(())
            }
            Err(e) => Err(Alert::store_error("Could not filter products.", &e)),
        }
    }

    /// Clears the filter input and reloads every row.
    pub async fn show_all(&mut self) -> Result<(), Alert> {
        self.ensure_ready()?;

        self.filter.clear();
        self.active_filter = None;
        self.refresh().await
    }

    fn ensure_ready(&self) -> Result<(), Alert> {
        match self.phase {
            Phase::Ready => Ok(()),
            phase => {
                warn!(?phase, "Action refused, store not ready");
                Err(Alert::unavailable())
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
