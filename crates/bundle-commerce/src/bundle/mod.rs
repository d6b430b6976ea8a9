//! Bundle module.
//!
//! Contains the bundle configuration, the selection store and the pricing
//! engine derived from them.

mod config;
mod pricing;
mod selection;

pub use config::{BundleConfig, CheckoutPolicy, DEFAULT_DISCOUNT_PERCENTAGE, DEFAULT_THRESHOLD};
pub use pricing::{discount, is_eligible, subtotal, total, PricingResult};
pub use selection::{Selection, Toggled};
