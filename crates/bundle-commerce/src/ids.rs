//! Newtype IDs for type-safe identifiers.
//!
//! Catalog products are keyed by small integers; wrapping them keeps a
//! product id from being confused with a count or a catalog position.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of a catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    /// Create a new ID from its numeric value.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the numeric value.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<ProductId> for u32 {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new(42);
        assert_eq!(id.get(), 42);
    }

    #[test]
    fn test_id_from_u32() {
        let id: ProductId = 7.into();
        assert_eq!(id, ProductId::new(7));
    }

    #[test]
    fn test_id_display() {
        assert_eq!(format!("{}", ProductId::new(3)), "3");
    }

    #[test]
    fn test_id_serializes_as_number() {
        let json = serde_json::to_string(&ProductId::new(5)).unwrap();
        assert_eq!(json, "5");
        let back: ProductId = serde_json::from_str("5").unwrap();
        assert_eq!(back, ProductId::new(5));
    }
}
