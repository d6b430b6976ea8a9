//! Product catalog module.
//!
//! The catalog is the fixed, read-only list of products a shopper can
//! pick from. It is supplied once at startup and never mutated.

mod catalog;
mod product;

pub use catalog::Catalog;
pub use product::Product;
