//! Bundle discount configuration.

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::BundleError;
use crate::money::Currency;

/// Minimum item count for the discount when none is configured.
pub const DEFAULT_THRESHOLD: u32 = 3;

/// Discount percentage when none is configured.
pub const DEFAULT_DISCOUNT_PERCENTAGE: u32 = 30;

/// What happens to the selection after a successful checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CheckoutPolicy {
    /// Leave the bundle in place so the shopper can review it.
    #[default]
    KeepSelection,
    /// Empty the bundle once it has been handed to the cart.
    ClearSelection,
}

/// Bundle configuration, fixed for a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleConfig {
    /// Minimum number of items that unlocks the discount.
    #[serde(default = "default_threshold")]
    pub threshold: u32,

    /// Discount applied once eligible, in percent (0-100).
    #[serde(default = "default_discount_percentage")]
    pub discount_percentage: Decimal,

    /// Currency prices are expressed in, as a case-insensitive code.
    #[serde(default, deserialize_with = "currency_code")]
    pub currency: Currency,

    /// Selection handling after checkout.
    #[serde(default)]
    pub checkout_policy: CheckoutPolicy,
}

fn default_threshold() -> u32 {
    DEFAULT_THRESHOLD
}

fn default_discount_percentage() -> Decimal {
    Decimal::from(DEFAULT_DISCOUNT_PERCENTAGE)
}

fn currency_code<'de, D>(deserializer: D) -> Result<Currency, D::Error>
where
    D: Deserializer<'de>,
{
    let code = String::deserialize(deserializer)?;
    Currency::from_code(&code)
        .ok_or_else(|| serde::de::Error::custom(format!("unknown currency code: {}", code)))
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            discount_percentage: default_discount_percentage(),
            currency: Currency::default(),
            checkout_policy: CheckoutPolicy::default(),
        }
    }
}

impl BundleConfig {
    /// Create a validated config.
    pub fn new(threshold: u32, discount_percentage: Decimal) -> Result<Self, BundleError> {
        let config = Self {
            threshold,
            discount_percentage,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Set the currency.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Set the post-checkout policy.
    pub fn with_checkout_policy(mut self, policy: CheckoutPolicy) -> Self {
        self.checkout_policy = policy;
        self
    }

    /// Check that threshold and percentage are in range.
    pub fn validate(&self) -> Result<(), BundleError> {
        if self.threshold == 0 {
            return Err(BundleError::InvalidConfig(
                "threshold must be at least 1".to_string(),
            ));
        }
        if self.discount_percentage < Decimal::ZERO
            || self.discount_percentage > Decimal::ONE_HUNDRED
        {
            return Err(BundleError::InvalidConfig(format!(
                "discount_percentage must be within 0-100, got {}",
                self.discount_percentage
            )));
        }
        Ok(())
    }

    /// Parse and validate a TOML config.
    pub fn from_toml_str(content: &str) -> Result<Self, BundleError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(content: &str) -> Result<Self, BundleError> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a file. `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BundleError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| BundleError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let config = if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };
        tracing::debug!(
            path = %path.display(),
            threshold = config.threshold,
            discount_percentage = %config.discount_percentage,
            "bundle config loaded"
        );
        Ok(config)
    }
}
