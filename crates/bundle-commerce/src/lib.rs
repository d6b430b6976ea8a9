//! Bundle selection, pricing and checkout domain logic.
//!
//! This crate provides the state and arithmetic behind a "build your bundle"
//! storefront widget:
//!
//! - **Catalog**: the fixed list of products a shopper can pick from
//! - **Bundle**: the selection store, its configuration and pricing engine
//! - **Checkout**: converts an eligible bundle into a cart summary
//!
//! # Example
//!
//! ```
//! use bundle_commerce::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let catalog = Catalog::new(vec![
//!     Product::new(1, "Tie-Dye Midi Dress", Decimal::new(8999, 2), "dress.jpg"),
//!     Product::new(2, "Cropped Hoodie Set", Decimal::new(6599, 2), "hoodie.jpg"),
//!     Product::new(3, "Retro Logo Tee", Decimal::new(4599, 2), "tee.jpg"),
//! ])
//! .unwrap();
//! let config = BundleConfig::default();
//!
//! let mut selection = Selection::new();
//! for id in 1..=3 {
//!     selection.toggle(&catalog, ProductId::new(id)).unwrap();
//! }
//!
//! let pricing = PricingResult::compute(&selection, &config);
//! assert!(pricing.eligible);
//! assert_eq!(pricing.total.display(), "$141.38");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod bundle;
pub mod catalog;
pub mod checkout;

pub use error::BundleError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::BundleError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Product};

    // Bundle
    pub use crate::bundle::{BundleConfig, CheckoutPolicy, PricingResult, Selection, Toggled};

    // Checkout
    pub use crate::checkout::{attempt_checkout, checkout, CheckoutSummary};
}
