//! Bundle widget controller.
//!
//! `BundleWidget` owns the catalog, config and selection and runs every
//! user action through a mutate-then-project pipeline: an action that
//! changes the selection bumps the revision and produces exactly one
//! display model; an action that changes nothing produces none.

use bundle_commerce::bundle::{BundleConfig, PricingResult, Selection};
use bundle_commerce::catalog::Catalog;
use bundle_commerce::checkout::{self, CheckoutSummary};
use bundle_commerce::{BundleError, ProductId};

use crate::notify::Notification;
use crate::shortcuts::product_for_key;
use crate::view::{project, DisplayModel};

/// A discrete user interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Add or remove a product (card button, quick-add button).
    Toggle(ProductId),
    /// Remove a product from the bundle panel.
    Remove(ProductId),
    /// Empty the bundle.
    Clear,
    /// Add-to-cart button.
    Checkout,
    /// Key press; digits toggle catalog products.
    KeyPress(char),
}

/// Result of dispatching one action.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    /// Selection revision after the action.
    pub revision: u64,
    /// New display model, present iff the selection changed.
    pub display: Option<DisplayModel>,
    /// Summary for the cart collaborator after a successful checkout.
    pub checkout: Option<CheckoutSummary>,
    /// Notification for the toast collaborator.
    pub notification: Option<Notification>,
}

impl Update {
    fn unchanged(revision: u64) -> Self {
        Self {
            revision,
            display: None,
            checkout: None,
            notification: None,
        }
    }

    /// Whether the action changed the selection.
    pub fn changed(&self) -> bool {
        self.display.is_some()
    }
}

/// Controller for one shopping session.
#[derive(Debug, Clone)]
pub struct BundleWidget {
    catalog: Catalog,
    config: BundleConfig,
    selection: Selection,
    revision: u64,
}

impl BundleWidget {
    /// Start a session with an empty selection.
    pub fn new(catalog: Catalog, config: BundleConfig) -> Self {
        Self {
            catalog,
            config,
            selection: Selection::new(),
            revision: 0,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &BundleConfig {
        &self.config
    }

    /// Read-only view of the selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Number of committed selection changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn pricing(&self) -> PricingResult {
        PricingResult::compute(&self.selection, &self.config)
    }

    /// Project the current state, e.g. for the initial paint.
    pub fn render(&self) -> DisplayModel {
        project(&self.selection, &self.config, &self.catalog, None)
    }

    /// Apply one action.
    pub fn dispatch(&mut self, action: Action) -> Update {
        match action {
            Action::Toggle(id) => self.toggle(id),
            Action::Remove(id) => {
                if self.selection.remove(id) {
                    self.commit(None)
                } else {
                    tracing::debug!(product_id = %id, "remove ignored: not in bundle");
                    Update::unchanged(self.revision)
                }
            }
            Action::Clear => {
                if self.selection.is_empty() {
                    return Update::unchanged(self.revision);
                }
                self.selection.clear();
                self.commit(None)
            }
            Action::Checkout => self.checkout(),
            Action::KeyPress(key) => match product_for_key(&self.catalog, key) {
                Some(id) => self.toggle(id),
                None => Update::unchanged(self.revision),
            },
        }
    }

    fn toggle(&mut self, id: ProductId) -> Update {
        match self.selection.toggle(&self.catalog, id) {
            Ok(_) => self.commit(Some(id)),
            Err(err) => self.swallow(err),
        }
    }

    fn checkout(&mut self) -> Update {
        let before = self.selection.count();
        let summary = match checkout::checkout(&mut self.selection, &self.config) {
            Ok(summary) => summary,
            Err(err) => return self.swallow(err),
        };

        let notification = Notification::checkout(&summary);
        let mut update = if self.selection.count() != before {
            self.commit(None)
        } else {
            Update::unchanged(self.revision)
        };
        update.checkout = Some(summary);
        update.notification = Some(notification);
        update
    }

    /// Bump the revision and project exactly once.
    fn commit(&mut self, pulse: Option<ProductId>) -> Update {
        self.revision += 1;
        let display = project(&self.selection, &self.config, &self.catalog, pulse);
        Update {
            revision: self.revision,
            display: Some(display),
            checkout: None,
            notification: None,
        }
    }

    fn swallow(&self, err: BundleError) -> Update {
        if err.is_recoverable() {
            tracing::debug!(error = %err, "action ignored");
        } else {
            tracing::warn!(error = %err, "action failed");
        }
        Update::unchanged(self.revision)
    }
}
