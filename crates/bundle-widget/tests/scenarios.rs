//! End-to-end bundle builder scenarios.

use bundle_commerce::prelude::*;
use bundle_widget::view::SelectedItemsView;
use bundle_widget::{Action, BundleWidget};
use rust_decimal_macros::dec;

const CATALOG_JSON: &str = r#"[
    {"id": 1, "name": "Tie-Dye Midi Dress", "price": 89.99, "image": "photo-1432149877166-f75d49000351.jpg"},
    {"id": 2, "name": "Cropped Hoodie Set", "price": 65.99, "image": "photo-1515886657613-9f3515b0c78f.jpg"},
    {"id": 3, "name": "Retro Logo Tee", "price": 45.99, "image": "photo-1529139574466-a303027c1d8b.jpg"},
    {"id": 4, "name": "Street Style Combo", "price": 125.99, "image": "photo-1588117260148-b47818741c74.jpg"},
    {"id": 5, "name": "Casual Linen Set", "price": 79.99, "image": "photo-1603344797033-f0f4f587ab60.jpg"},
    {"id": 6, "name": "Oversized Blazer", "price": 149.99, "image": "photo-1608748010899-18f300247112.jpg"}
]"#;

fn widget() -> BundleWidget {
    let catalog = Catalog::from_json_str(CATALOG_JSON).unwrap();
    let config = BundleConfig::new(3, dec!(30)).unwrap();
    BundleWidget::new(catalog, config)
}

fn toggle(widget: &mut BundleWidget, id: u32) {
    widget.dispatch(Action::Toggle(ProductId::new(id)));
}

#[test]
fn test_initial_render() {
    let widget = widget();
    let display = widget.render();
    assert_eq!(display.status_text, "0 of 3 items");
    assert_eq!(display.progress_percentage, 0.0);
    assert_eq!(display.progress_text, "Add 3 more items for 30% off");
    assert_eq!(
        display.selected_items,
        SelectedItemsView::Empty {
            title: "No items in your bundle".to_string(),
            subtext: "Start adding products to build your bundle".to_string(),
        }
    );
    assert!(!display.pricing_summary_visible);
    assert_eq!(display.product_cards.len(), 6);
    assert_eq!(display.product_cards[5].shortcut, Some('6'));
}

#[test]
fn test_three_items_unlock_discount() {
    let mut widget = widget();
    toggle(&mut widget, 1);
    toggle(&mut widget, 2);
    toggle(&mut widget, 3);

    let pricing = widget.pricing();
    assert!(pricing.eligible);
    assert_eq!(pricing.subtotal.amount, dec!(201.97));
    assert_eq!(pricing.discount.amount, dec!(60.591));
    assert_eq!(pricing.total.amount, dec!(141.379));

    let display = widget.render();
    assert_eq!(display.status_text, "3 of 3 items - 30% off unlocked!");
    assert_eq!(display.progress_percentage, 100.0);
    assert_eq!(display.progress_text, "Bundle discount applied!");
    assert_eq!(display.pricing.subtotal_text, "$201.97");
    assert_eq!(display.pricing.discount_text.as_deref(), Some("-$60.59"));
    assert_eq!(display.pricing.total_text, "$141.38");
    assert!(display.discount_row_visible);
    assert_eq!(display.savings_text.as_deref(), Some("You saved $60.59!"));
    assert!(display.cart_button.enabled);
    assert_eq!(display.cart_button.label, "Add Bundle to Cart - $141.38");
}

#[test]
fn test_two_items_stay_locked() {
    let mut widget = widget();
    toggle(&mut widget, 1);
    toggle(&mut widget, 2);

    let pricing = widget.pricing();
    assert!(!pricing.eligible);
    assert!(pricing.discount.is_zero());
    assert_eq!(pricing.total.amount, dec!(155.98));

    let display = widget.render();
    assert!(!display.cart_button.enabled);
    assert_eq!(display.cart_button.label, "Add 3+ Items to Continue");
    assert_eq!(display.progress_text, "Add 1 more item for 30% off");
    assert!(!display.discount_row_visible);
    assert!(display.savings_text.is_none());
    assert!(display.pricing.discount_text.is_none());
}

#[test]
fn test_toggle_on_then_off() {
    let mut widget = widget();
    toggle(&mut widget, 1);
    let update = widget.dispatch(Action::Toggle(ProductId::new(1)));

    assert!(widget.selection().is_empty());
    let display = update.display.unwrap();
    assert!(!display.pricing_summary_visible);
    assert!(display.selected_items.is_empty());
}

#[test]
fn test_remove_absent_product() {
    let mut widget = widget();
    toggle(&mut widget, 4);
    let before = widget.selection().clone();

    let update = widget.dispatch(Action::Remove(ProductId::new(2)));
    assert!(!update.changed());
    assert_eq!(widget.selection(), &before);
}

#[test]
fn test_checkout_below_threshold_is_silent() {
    let mut widget = widget();
    toggle(&mut widget, 6);
    let update = widget.dispatch(Action::Checkout);
    assert!(update.checkout.is_none());
    assert!(update.notification.is_none());
    assert_eq!(widget.selection().count(), 1);
}

#[test]
fn test_keyboard_and_panel_interplay() {
    let mut widget = widget();
    for key in ['6', '4', '5'] {
        widget.dispatch(Action::KeyPress(key));
    }
    let ids: Vec<u32> = widget.selection().iter().map(|p| p.id.get()).collect();
    assert_eq!(ids, vec![6, 4, 5]);

    let update = widget.dispatch(Action::Remove(ProductId::new(4)));
    let display = update.display.unwrap();
    let names: Vec<&str> = display
        .selected_items
        .items()
        .iter()
        .map(|i| i.name.as_str())
        .collect();
    assert_eq!(names, vec!["Oversized Blazer", "Casual Linen Set"]);
    assert_eq!(display.status_text, "2 of 3 items");
}

#[test]
fn test_display_model_serializes_for_renderer() {
    let mut widget = widget();
    toggle(&mut widget, 3);
    let json = serde_json::to_value(widget.render()).unwrap();
    assert_eq!(json["selected_items"]["kind"], "items");
    assert_eq!(json["selected_items"]["items"][0]["formatted_price"], "$45.99");
    assert_eq!(json["cart_button"]["enabled"], false);
}
