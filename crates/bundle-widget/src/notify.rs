//! Checkout notifications for the toast collaborator.

use bundle_commerce::checkout::CheckoutSummary;
use serde::Serialize;

use crate::view::format_percentage;

/// Title shown after a bundle reaches the cart.
pub const CHECKOUT_TITLE: &str = "Bundle Added to Cart!";

/// Message payload; presentation is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
}

impl Notification {
    /// Success notice for a completed checkout.
    pub fn checkout(summary: &CheckoutSummary) -> Self {
        Self {
            title: CHECKOUT_TITLE.to_string(),
            message: format!(
                "{} items added with {}% off discount",
                summary.item_count(),
                format_percentage(summary.discount_percentage)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bundle_commerce::money::{Currency, Money};
    use rust_decimal_macros::dec;

    #[test]
    fn test_checkout_notification() {
        let summary = CheckoutSummary {
            items: vec![],
            subtotal: Money::zero(Currency::USD),
            discount: Money::zero(Currency::USD),
            total: Money::zero(Currency::USD),
            discount_percentage: dec!(30),
        };
        let notification = Notification::checkout(&summary);
        assert_eq!(notification.title, "Bundle Added to Cart!");
        assert_eq!(notification.message, "0 items added with 30% off discount");
    }
}
