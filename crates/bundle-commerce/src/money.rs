//! Money type for representing monetary values.
//!
//! Amounts are exact decimals. Arithmetic never rounds; rounding to the
//! currency's minor unit happens only when a value is formatted for display.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
    AUD,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
            Currency::CAD => "CA$",
            Currency::AUD => "A$",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "JPY" => Some(Currency::JPY),
            "CAD" => Some(Currency::CAD),
            "AUD" => Some(Currency::AUD),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Exact, unrounded amount in major units (e.g., dollars).
    pub amount: Decimal,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value.
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Amount rounded half away from zero to the currency's minor unit.
    pub fn rounded(&self) -> Decimal {
        self.amount.round_dp_with_strategy(
            self.currency.decimal_places(),
            RoundingStrategy::MidpointAwayFromZero,
        )
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format as a display string without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        format!("{:.places$}", self.rounded())
    }

    /// Try to add another Money value, returning None if currencies don't match.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount
            .checked_add(other.amount)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Try to subtract another Money value.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount
            .checked_sub(other.amount)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Calculate a percentage of this amount, without rounding.
    pub fn percentage(&self, percent: Decimal) -> Money {
        Money::new(self.amount * percent / Decimal::ONE_HUNDRED, self.currency)
    }
}

impl Add for Money {
    type Output = Money;

    /// # Panics
    /// Panics if currencies don't match. Use `try_add` for fallible addition.
    fn add(self, other: Money) -> Money {
        self.try_add(&other).expect("Currency mismatch in addition")
    }
}

impl Sub for Money {
    type Output = Money;

    /// # Panics
    /// Panics if currencies don't match.
    fn sub(self, other: Money) -> Money {
        self.try_subtract(&other)
            .expect("Currency mismatch in subtraction")
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_display() {
        let m = Money::new(dec!(49.99), Currency::USD);
        assert_eq!(m.display(), "$49.99");

        let m = Money::new(dec!(100), Currency::JPY);
        assert_eq!(m.display(), "\u{00a5}100");
    }

    #[test]
    fn test_display_pads_to_two_places() {
        let m = Money::new(dec!(5), Currency::USD);
        assert_eq!(m.display(), "$5.00");
    }

    #[test]
    fn test_display_rounds_only_at_format_time() {
        let m = Money::new(dec!(60.591), Currency::USD);
        assert_eq!(m.display(), "$60.59");
        assert_eq!(m.amount, dec!(60.591));

        let m = Money::new(dec!(141.379), Currency::USD);
        assert_eq!(m.display_amount(), "141.38");
    }

    #[test]
    fn test_display_midpoint_rounds_up() {
        let m = Money::new(dec!(0.125), Currency::USD);
        assert_eq!(m.display(), "$0.13");
    }

    #[test]
    fn test_money_addition() {
        let a = Money::new(dec!(89.99), Currency::USD);
        let b = Money::new(dec!(65.99), Currency::USD);
        assert_eq!((a + b).amount, dec!(155.98));
    }

    #[test]
    fn test_money_subtraction() {
        let a = Money::new(dec!(201.97), Currency::USD);
        let b = Money::new(dec!(60.591), Currency::USD);
        assert_eq!((a - b).amount, dec!(141.379));
    }

    #[test]
    fn test_money_percentage_is_unrounded() {
        let m = Money::new(dec!(201.97), Currency::USD);
        assert_eq!(m.percentage(dec!(30)).amount, dec!(60.591));
    }

    #[test]
    fn test_try_add_currency_mismatch() {
        let usd = Money::new(dec!(10), Currency::USD);
        let eur = Money::new(dec!(10), Currency::EUR);
        assert!(usd.try_add(&eur).is_none());
    }

    #[test]
    #[should_panic(expected = "Currency mismatch")]
    fn test_money_currency_mismatch() {
        let usd = Money::new(dec!(10), Currency::USD);
        let eur = Money::new(dec!(10), Currency::EUR);
        let _ = usd + eur;
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("USD"), Some(Currency::USD));
        assert_eq!(Currency::from_code("eur"), Some(Currency::EUR));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
