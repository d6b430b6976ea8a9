//! Pure projection from bundle state to the display model.
//!
//! The whole model is rebuilt on every call; inputs are a handful of
//! products so there is no diffing.

use bundle_commerce::bundle::{BundleConfig, PricingResult, Selection};
use bundle_commerce::catalog::Catalog;
use bundle_commerce::ProductId;
use rust_decimal::Decimal;

use crate::shortcuts::shortcut_for_position;
use crate::view::{
    CartButtonView, DisplayModel, PricingSummaryView, ProductCardView, SelectedItemView,
    SelectedItemsView,
};

/// Build the full display model.
///
/// `pulse` marks the product whose card should play the toggle feedback.
pub fn project(
    selection: &Selection,
    config: &BundleConfig,
    catalog: &Catalog,
    pulse: Option<ProductId>,
) -> DisplayModel {
    let pricing = PricingResult::compute(selection, config);
    let count = selection.count();

    DisplayModel {
        status_text: status_text(count, config),
        progress_percentage: progress_percentage(count, config),
        progress_text: progress_text(count, config),
        selected_items: selected_items(selection, config),
        pricing_summary_visible: !selection.is_empty(),
        pricing: PricingSummaryView {
            subtotal_text: pricing.subtotal.display(),
            discount_text: pricing
                .eligible
                .then(|| format!("-{}", pricing.discount.display())),
            total_text: pricing.total.display(),
        },
        discount_row_visible: pricing.eligible,
        savings_text: savings_text(&pricing),
        cart_button: cart_button(&pricing, config),
        product_cards: product_cards(selection, config, catalog, pulse),
    }
}

/// Percentage without trailing zeros ("30", "12.5").
pub fn format_percentage(percentage: Decimal) -> String {
    percentage.normalize().to_string()
}

/// "{count} of {threshold} items", with the unlock suffix once eligible.
pub fn status_text(count: usize, config: &BundleConfig) -> String {
    let mut text = format!("{} of {} items", count, config.threshold);
    if count >= config.threshold as usize {
        text.push_str(&format!(
            " - {}% off unlocked!",
            format_percentage(config.discount_percentage)
        ));
    }
    text
}

/// Progress bar fill, capped at 100.
pub fn progress_percentage(count: usize, config: &BundleConfig) -> f64 {
    let ratio = count as f64 / f64::from(config.threshold.max(1));
    (ratio * 100.0).min(100.0)
}

pub fn progress_text(count: usize, config: &BundleConfig) -> String {
    let threshold = config.threshold as usize;
    if count >= threshold {
        return "Bundle discount applied!".to_string();
    }

    let remaining = threshold - count;
    format!(
        "Add {} more item{} for {}% off",
        remaining,
        if remaining == 1 { "" } else { "s" },
        format_percentage(config.discount_percentage)
    )
}

/// Bundle contents or the empty-state marker.
pub fn selected_items(selection: &Selection, config: &BundleConfig) -> SelectedItemsView {
    if selection.is_empty() {
        return SelectedItemsView::empty();
    }

    let items = selection
        .iter()
        .map(|product| SelectedItemView {
            product_id: product.id,
            name: product.name.clone(),
            image: product.image.clone(),
            formatted_price: product.price_in(config.currency).display(),
            removable: true,
        })
        .collect();
    SelectedItemsView::Items { items }
}

pub fn savings_text(pricing: &PricingResult) -> Option<String> {
    pricing
        .eligible
        .then(|| format!("You saved {}!", pricing.savings().display()))
}

pub fn cart_button(pricing: &PricingResult, config: &BundleConfig) -> CartButtonView {
    let label = if pricing.eligible {
        format!("Add Bundle to Cart - {}", pricing.total.display())
    } else {
        format!("Add {}+ Items to Continue", config.threshold)
    };

    CartButtonView {
        enabled: pricing.eligible,
        label,
    }
}

/// One card per catalog product, in catalog order.
pub fn product_cards(
    selection: &Selection,
    config: &BundleConfig,
    catalog: &Catalog,
    pulse: Option<ProductId>,
) -> Vec<ProductCardView> {
    catalog
        .iter()
        .enumerate()
        .map(|(position, product)| {
            let selected = selection.contains(product.id);
            ProductCardView {
                product_id: product.id,
                name: product.name.clone(),
                image: product.image.clone(),
                formatted_price: product.price_in(config.currency).display(),
                selected,
                badge: if selected { "\u{2713}" } else { "+" }.to_string(),
                button_label: if selected {
                    "Added to Bundle"
                } else {
                    "Add to Bundle"
                }
                .to_string(),
                shortcut: shortcut_for_position(position),
                pulse: pulse == Some(product.id),
            }
        })
        .collect()
}
