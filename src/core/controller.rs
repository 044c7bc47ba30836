//! Catalog controller - orchestrates store reads/writes and the display grid
//!
//! The controller owns the [`CoffeeStore`] and a [`CatalogView`]. It validates
//! form input before any store call and reloads the whole grid after every
//! successful mutation. Failures leave the displayed grid untouched.

use miette::Diagnostic;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::coffee::{CoffeeId, CoffeeItem};
use crate::core::store::{CoffeeStore, SchemaReport, StoreError};
use crate::core::validation::{CoffeeForm, ValidationError};

/// A display surface for the catalog grid
pub trait CatalogView {
    /// Replace everything currently displayed with `rows`
    fn render(&mut self, rows: &[CoffeeItem]);

    /// Ask an explicit yes/no question; `true` means go ahead
    fn confirm(&mut self, question: &str) -> bool;
}

/// Anything a catalog operation can fail with
#[derive(Debug, Error, Diagnostic)]
pub enum CatalogError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Store(#[from] StoreError),
}

impl CatalogError {
    /// Input problem the user can correct in the form
    pub fn is_validation(&self) -> bool {
        matches!(self, CatalogError::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::Store(e) if e.is_not_found())
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Result of [`CatalogController::confirm_delete`]
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// The row was removed; carries what it held
    Deleted(CoffeeItem),
    /// The user answered no
    Declined,
}

/// Mediates between the store and a view
pub struct CatalogController<V> {
    store: CoffeeStore,
    view: V,
    rows: Vec<CoffeeItem>,
    schema: Option<SchemaReport>,
}

impl<V: CatalogView> CatalogController<V> {
    pub fn new(store: CoffeeStore, view: V) -> Self {
        Self {
            store,
            view,
            rows: Vec::new(),
            schema: None,
        }
    }

    /// Ensure the schema, read every row and replace the displayed grid
    pub fn load_and_render(&mut self) -> Result<&[CoffeeItem]> {
        let report = self.store.ensure_schema()?;
        if self.schema.is_none() {
            self.schema = Some(report);
        }

        let rows = self.store.list_all()?;
        debug!(rows = rows.len(), "rendering catalog");
        self.rows = rows;
        self.view.render(&self.rows);
        Ok(&self.rows)
    }

    /// Rows currently on display
    pub fn rows(&self) -> &[CoffeeItem] {
        &self.rows
    }

    /// Outcome of the first successful schema check in this session
    pub fn schema_report(&self) -> Option<SchemaReport> {
        self.schema
    }

    pub fn store(&self) -> &CoffeeStore {
        &self.store
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Fetch one row, reporting not-found as an error
    pub fn get(&self, id: CoffeeId) -> Result<CoffeeItem> {
        self.store
            .get(id)?
            .ok_or_else(|| StoreError::NotFound(id).into())
    }

    /// Form contents to pre-populate an edit of `id`
    pub fn edit_form(&self, id: CoffeeId) -> Result<CoffeeForm> {
        self.get(id).map(|item| CoffeeForm::from(&item))
    }

    /// Validate and insert a new coffee, then reload
    pub fn submit_new(&mut self, form: &CoffeeForm) -> Result<CoffeeId> {
        let coffee = form.validate().inspect_err(|e| warn!("rejected new coffee: {e}"))?;
        let id = self.store.insert(&coffee)?;
        self.load_and_render()?;
        Ok(id)
    }

    /// Validate and replace the fields of `id`, then reload
    pub fn submit_edit(&mut self, id: CoffeeId, form: &CoffeeForm) -> Result<()> {
        let coffee = form
            .validate()
            .inspect_err(|e| warn!(id, "rejected coffee edit: {e}"))?;
        self.store.update(id, &coffee)?;
        self.load_and_render()?;
        Ok(())
    }

    /// Ask the view for confirmation, then delete `id` and reload
    pub fn confirm_delete(&mut self, id: CoffeeId) -> Result<DeleteOutcome> {
        let item = self.get(id)?;

        let question = format!("Delete coffee '{}'?", item.name);
        if !self.view.confirm(&question) {
            debug!(id, "delete declined");
            return Ok(DeleteOutcome::Declined);
        }

        self.store.delete(id)?;
        self.load_and_render()?;
        Ok(DeleteOutcome::Deleted(item))
    }
}
