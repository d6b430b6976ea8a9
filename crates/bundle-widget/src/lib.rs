//! Display model projection and controller for the bundle builder widget.
//!
//! This crate sits between the bundle domain logic and a rendering layer:
//!
//! - `view` - pure projection of bundle state into a `DisplayModel`
//! - `widget` - `BundleWidget`, which pairs every selection change with
//!   exactly one projection
//! - `shortcuts` - digit-key bindings to catalog positions
//! - `notify` - checkout notification payloads
//!
//! # Example
//!
//! ```
//! use bundle_commerce::prelude::*;
//! use bundle_widget::{Action, BundleWidget};
//! use rust_decimal::Decimal;
//!
//! let catalog = Catalog::new(vec![
//!     Product::new(1, "Tie-Dye Midi Dress", Decimal::new(8999, 2), "dress.jpg"),
//!     Product::new(2, "Cropped Hoodie Set", Decimal::new(6599, 2), "hoodie.jpg"),
//! ])
//! .unwrap();
//! let mut widget = BundleWidget::new(catalog, BundleConfig::default());
//!
//! let update = widget.dispatch(Action::Toggle(ProductId::new(1)));
//! let display = update.display.unwrap();
//! assert_eq!(display.status_text, "1 of 3 items");
//! assert_eq!(display.progress_text, "Add 2 more items for 30% off");
//! ```

pub mod notify;
pub mod shortcuts;
pub mod view;
pub mod widget;

pub use notify::Notification;
pub use view::DisplayModel;
pub use widget::{Action, BundleWidget, Update};
