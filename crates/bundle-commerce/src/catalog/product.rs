//! Product type.

use crate::ids::ProductId;
use crate::money::{Currency, Money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price in major currency units.
    pub price: Decimal,
    /// Image reference (URL or asset path).
    pub image: String,
}

impl Product {
    /// Create a new product.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        price: Decimal,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            price,
            image: image.into(),
        }
    }

    /// Price as a Money value in the given currency.
    pub fn price_in(&self, currency: Currency) -> Money {
        Money::new(self.price, currency)
    }
}
