//! Bundle error types.

use crate::ids::ProductId;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in bundle operations.
///
/// `UnknownProductId` and `IneligibleCheckout` are recoverable: callers
/// driving a user interface treat them as no-ops.
#[derive(Error, Debug)]
pub enum BundleError {
    /// Product id is not in the catalog.
    #[error("Unknown product id: {0}")]
    UnknownProductId(ProductId),

    /// Checkout attempted below the discount threshold.
    #[error("Bundle not eligible for checkout: {count} of {threshold} items")]
    IneligibleCheckout { count: usize, threshold: u32 },

    /// Catalog contains the same id twice.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProductId(ProductId),

    /// Catalog product has a negative price.
    #[error("Negative price for product {0}")]
    NegativePrice(ProductId),

    /// Catalog prices too large to price every possible bundle.
    #[error("Catalog total too large at product {0}")]
    PriceOverflow(ProductId),

    /// Configuration values out of range.
    #[error("Invalid bundle config: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read.
    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl BundleError {
    /// Whether the error is one a UI layer swallows as a no-op.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            BundleError::UnknownProductId(_) | BundleError::IneligibleCheckout { .. }
        )
    }
}

impl From<serde_json::Error> for BundleError {
    fn from(e: serde_json::Error) -> Self {
        BundleError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for BundleError {
    fn from(e: toml::de::Error) -> Self {
        BundleError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_errors() {
        assert!(BundleError::UnknownProductId(ProductId::new(9)).is_recoverable());
        assert!(BundleError::IneligibleCheckout {
            count: 1,
            threshold: 3
        }
        .is_recoverable());
        assert!(!BundleError::InvalidConfig("x".into()).is_recoverable());
    }

    #[test]
    fn test_error_messages() {
        let err = BundleError::IneligibleCheckout {
            count: 2,
            threshold: 3,
        };
        assert_eq!(
            err.to_string(),
            "Bundle not eligible for checkout: 2 of 3 items"
        );
        assert_eq!(
            BundleError::UnknownProductId(ProductId::new(12)).to_string(),
            "Unknown product id: 12"
        );
    }
}
