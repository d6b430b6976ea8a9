//! Checkout module.
//!
//! Turns an eligible bundle into a summary handed to the cart.

mod summary;

pub use summary::{attempt_checkout, checkout, CheckoutSummary};
