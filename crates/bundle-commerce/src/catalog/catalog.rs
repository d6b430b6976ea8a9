//! Ordered, read-only product catalog.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::catalog::Product;
use crate::error::BundleError;
use crate::ids::ProductId;

/// The fixed list of purchasable products.
///
/// Order is preserved as supplied; it drives card order and the digit-key
/// shortcuts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and negative prices.
    ///
    /// Also rejects catalogs whose combined price times 100 does not fit in
    /// a `Decimal`, so pricing any selection cannot overflow.
    pub fn new(products: Vec<Product>) -> Result<Self, BundleError> {
        let mut index = HashMap::with_capacity(products.len());
        let mut total = Decimal::ZERO;
        for (position, product) in products.iter().enumerate() {
            if product.price.is_sign_negative() && !product.price.is_zero() {
                return Err(BundleError::NegativePrice(product.id));
            }
            if index.insert(product.id, position).is_some() {
                return Err(BundleError::DuplicateProductId(product.id));
            }
            total = total
                .checked_add(product.price)
                .filter(|sum| sum.checked_mul(Decimal::ONE_HUNDRED).is_some())
                .ok_or(BundleError::PriceOverflow(product.id))?;
        }
        tracing::debug!(products = products.len(), "catalog loaded");
        Ok(Self { products, index })
    }

    /// Load a catalog from a JSON array of product records.
    pub fn from_json_str(json: &str) -> Result<Self, BundleError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.index.get(&id).map(|&position| &self.products[position])
    }

    /// Product at a catalog position.
    pub fn at(&self, position: usize) -> Option<&Product> {
        self.products.get(position)
    }

    /// Iterate products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
