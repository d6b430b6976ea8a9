//! Checkout summary and trigger.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::bundle::{BundleConfig, CheckoutPolicy, PricingResult, Selection};
use crate::catalog::Product;
use crate::error::BundleError;
use crate::money::Money;

/// Payload handed to the external cart/notification collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSummary {
    /// Bundled products, in selection order.
    pub items: Vec<Product>,
    /// Sum of item prices.
    pub subtotal: Money,
    /// Bundle discount.
    pub discount: Money,
    /// Amount charged.
    pub total: Money,
    /// Discount percentage that was applied.
    pub discount_percentage: Decimal,
}

impl CheckoutSummary {
    /// Number of items in the bundle.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Serialize for the cart-persistence collaborator.
    pub fn to_json(&self) -> Result<String, BundleError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Build a checkout summary without touching the selection.
///
/// Fails with `IneligibleCheckout` below the threshold.
pub fn attempt_checkout(
    selection: &Selection,
    config: &BundleConfig,
) -> Result<CheckoutSummary, BundleError> {
    let pricing = PricingResult::compute(selection, config);
    if !pricing.eligible {
        return Err(BundleError::IneligibleCheckout {
            count: pricing.item_count,
            threshold: config.threshold,
        });
    }

    Ok(CheckoutSummary {
        items: selection.items().to_vec(),
        subtotal: pricing.subtotal,
        discount: pricing.discount,
        total: pricing.total,
        discount_percentage: config.discount_percentage,
    })
}

/// Check out and apply the configured post-checkout policy.
///
/// On failure the selection is left untouched.
pub fn checkout(
    selection: &mut Selection,
    config: &BundleConfig,
) -> Result<CheckoutSummary, BundleError> {
    let summary = attempt_checkout(selection, config)?;
    if config.checkout_policy == CheckoutPolicy::ClearSelection {
        selection.clear();
    }
    tracing::info!(
        items = summary.item_count(),
        total = %summary.total,
        "bundle checked out"
    );
    Ok(summary)
}
