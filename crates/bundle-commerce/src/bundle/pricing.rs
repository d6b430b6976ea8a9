//! Bundle pricing engine.
//!
//! Pure functions of (`Selection`, `BundleConfig`). Nothing here is cached;
//! a `PricingResult` is rebuilt from the selection every time it is needed.
//! Amounts are exact: rounding is left to `Money::display`.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::bundle::{BundleConfig, Selection};
use crate::money::Money;

/// Sum of the prices of all selected products.
///
/// Products come from a `Catalog`, whose construction bounds the combined
/// price so this sum and any percentage of it fit in a `Decimal`.
pub fn subtotal(selection: &Selection, config: &BundleConfig) -> Money {
    let amount = selection
        .iter()
        .fold(Decimal::ZERO, |acc, product| acc + product.price);
    Money::new(amount, config.currency)
}

/// Whether the selection meets the item-count threshold.
pub fn is_eligible(selection: &Selection, config: &BundleConfig) -> bool {
    selection.count() >= config.threshold as usize
}

/// Discount amount: a percentage of the subtotal once eligible, else zero.
pub fn discount(selection: &Selection, config: &BundleConfig) -> Money {
    if is_eligible(selection, config) {
        subtotal(selection, config).percentage(config.discount_percentage)
    } else {
        Money::zero(config.currency)
    }
}

/// Subtotal minus discount.
pub fn total(selection: &Selection, config: &BundleConfig) -> Money {
    subtotal(selection, config) - discount(selection, config)
}

/// Complete pricing breakdown for a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricingResult {
    /// Number of selected items.
    pub item_count: usize,
    /// Sum of item prices.
    pub subtotal: Money,
    /// Discount applied (zero unless eligible).
    pub discount: Money,
    /// Subtotal minus discount.
    pub total: Money,
    /// Whether the threshold is met.
    pub eligible: bool,
}

impl PricingResult {
    /// Compute pricing for the current selection.
    pub fn compute(selection: &Selection, config: &BundleConfig) -> Self {
        let subtotal = subtotal(selection, config);
        let eligible = is_eligible(selection, config);
        let discount = if eligible {
            subtotal.percentage(config.discount_percentage)
        } else {
            Money::zero(config.currency)
        };

        Self {
            item_count: selection.count(),
            subtotal,
            discount,
            total: subtotal - discount,
            eligible,
        }
    }

    /// Amount saved by the bundle discount.
    pub fn savings(&self) -> Money {
        self.discount
    }

    /// Check if a discount is applied.
    pub fn has_discount(&self) -> bool {
        self.eligible && !self.discount.is_zero()
    }

    /// Items still needed to unlock the discount.
    pub fn remaining(&self, config: &BundleConfig) -> usize {
        (config.threshold as usize).saturating_sub(self.item_count)
    }
}
