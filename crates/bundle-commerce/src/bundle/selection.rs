//! Selection store.
//!
//! `Selection` is the only owner of the shopper's chosen products. Readers
//! get a shared slice; mutation goes through `toggle`, `remove` and
//! `clear`.
//!
//! Every successful mutation must be followed by exactly one projection of
//! the display model. The store does not notify anyone itself; the widget
//! controller pairs each committed mutation with one projection.

use serde::Serialize;

use crate::catalog::{Catalog, Product};
use crate::error::BundleError;
use crate::ids::ProductId;

/// Outcome of a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Toggled {
    /// Product was appended to the bundle.
    Added,
    /// Product was removed from the bundle.
    Removed,
}

/// Ordered set of selected products, in insertion order, without
/// duplicate ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    items: Vec<Product>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the product if absent, remove it if present.
    ///
    /// Returns `UnknownProductId` without touching the selection when the
    /// id is not in the catalog.
    ///
    /// A removed product that is toggled back on is appended, so toggling a
    /// selected id twice restores the same ids with that one moved to the end.
    pub fn toggle(&mut self, catalog: &Catalog, id: ProductId) -> Result<Toggled, BundleError> {
        let product = catalog.get(id).ok_or(BundleError::UnknownProductId(id))?;

        if let Some(position) = self.position(id) {
            self.items.remove(position);
            tracing::debug!(product_id = %id, count = self.items.len(), "removed from bundle");
            return Ok(Toggled::Removed);
        }

        self.items.push(product.clone());
        tracing::debug!(product_id = %id, count = self.items.len(), "added to bundle");
        Ok(Toggled::Added)
    }

    /// Remove a product if present. Returns whether anything changed.
    pub fn remove(&mut self, id: ProductId) -> bool {
        match self.position(id) {
            Some(position) => {
                self.items.remove(position);
                tracing::debug!(product_id = %id, count = self.items.len(), "removed from bundle");
                true
            }
            None => false,
        }
    }

    /// Empty the selection.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Selected products in insertion order.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.items.iter()
    }

    /// Number of selected products.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.position(id).is_some()
    }

    /// Selected ids in insertion order.
    pub fn ids(&self) -> Vec<ProductId> {
        self.items.iter().map(|p| p.id).collect()
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.items.iter().position(|p| p.id == id)
    }
}
