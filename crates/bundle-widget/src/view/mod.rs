//! View projection.
//!
//! Maps bundle state to a presentation-ready display model. The rendering
//! layer owns everything past this point.

mod display;
mod projector;

pub use display::{
    CartButtonView, DisplayModel, PricingSummaryView, ProductCardView, SelectedItemView,
    SelectedItemsView, EMPTY_BUNDLE_SUBTEXT, EMPTY_BUNDLE_TITLE,
};
pub use projector::{
    cart_button, format_percentage, product_cards, progress_percentage, progress_text, project,
    savings_text, selected_items, status_text,
};
