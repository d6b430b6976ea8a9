//! Display model types consumed by the renderer.

use bundle_commerce::ProductId;
use serde::Serialize;

/// Heading shown when nothing has been selected.
pub const EMPTY_BUNDLE_TITLE: &str = "No items in your bundle";

/// Hint shown under the empty-bundle heading.
pub const EMPTY_BUNDLE_SUBTEXT: &str = "Start adding products to build your bundle";

/// Everything the renderer needs to paint the widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayModel {
    /// e.g. "2 of 3 items" or "3 of 3 items - 30% off unlocked!".
    pub status_text: String,
    /// Progress bar fill, 0-100.
    pub progress_percentage: f64,
    /// Line under the progress bar.
    pub progress_text: String,
    /// Bundle contents, or the empty state.
    pub selected_items: SelectedItemsView,
    /// Whether the pricing block is shown at all.
    pub pricing_summary_visible: bool,
    /// Formatted prices for the pricing block.
    pub pricing: PricingSummaryView,
    /// Whether the discount row is shown.
    pub discount_row_visible: bool,
    /// "You saved $x.xx!" once eligible.
    pub savings_text: Option<String>,
    /// Add-to-cart button state.
    pub cart_button: CartButtonView,
    /// One card per catalog product, in catalog order.
    pub product_cards: Vec<ProductCardView>,
}

/// Selected-products panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectedItemsView {
    /// Nothing selected yet.
    Empty { title: String, subtext: String },
    /// Selected products in bundle order.
    Items { items: Vec<SelectedItemView> },
}

impl SelectedItemsView {
    /// Empty-state marker with its standard copy.
    pub fn empty() -> Self {
        SelectedItemsView::Empty {
            title: EMPTY_BUNDLE_TITLE.to_string(),
            subtext: EMPTY_BUNDLE_SUBTEXT.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SelectedItemsView::Empty { .. })
    }

    /// Selected rows; empty slice for the empty state.
    pub fn items(&self) -> &[SelectedItemView] {
        match self {
            SelectedItemsView::Empty { .. } => &[],
            SelectedItemsView::Items { items } => items.as_slice(),
        }
    }
}

/// One row of the selected-products panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedItemView {
    pub product_id: ProductId,
    pub name: String,
    pub image: String,
    pub formatted_price: String,
    pub removable: bool,
}

/// Formatted pricing block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricingSummaryView {
    /// e.g. "$201.97".
    pub subtotal_text: String,
    /// e.g. "-$60.59"; only present once eligible.
    pub discount_text: Option<String>,
    /// e.g. "$141.38".
    pub total_text: String,
}

/// Add-to-cart button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartButtonView {
    pub enabled: bool,
    pub label: String,
}

/// A product tile in the catalog grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCardView {
    pub product_id: ProductId,
    pub name: String,
    pub image: String,
    pub formatted_price: String,
    /// Whether the product is in the bundle.
    pub selected: bool,
    /// "✓" when selected, "+" otherwise.
    pub badge: String,
    /// "Added to Bundle" or "Add to Bundle".
    pub button_label: String,
    /// Digit key that toggles this card, if any.
    pub shortcut: Option<char>,
    /// Set on the card toggled by the action that produced this model.
    pub pulse: bool,
}
