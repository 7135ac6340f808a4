//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts keep full precision internally; rounding to cents happens only
//! when a value is presented.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of decimal places shown for monetary amounts.
pub const DISPLAY_SCALE: u32 = 2;

/// Represents a monetary amount with currency.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount in major currency units, unrounded.
    pub amount: Decimal,
    /// Currency of the amount.
    pub currency: Currency,
}

/// ISO 4217 currency codes supported by the system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Euro
    #[default]
    #[serde(alias = "€")]
    Eur,
    /// US Dollar
    #[serde(alias = "$")]
    Usd,
    /// Swiss Franc
    Chf,
    /// Pound Sterling
    #[serde(alias = "£")]
    Gbp,
}

impl Currency {
    /// Returns the symbol printed next to amounts.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Eur => "€",
            Self::Usd => "$",
            Self::Chf => "CHF",
            Self::Gbp => "£",
        }
    }
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Returns the amount rounded half away from zero to cents, with the
    /// scale fixed at two places.
    #[must_use]
    pub fn rounded(&self) -> Decimal {
        let mut rounded = self
            .amount
            .round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(DISPLAY_SCALE);
        rounded
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.rounded(), self.currency.symbol())
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Eur => write!(f, "EUR"),
            Self::Usd => write!(f, "USD"),
            Self::Chf => write!(f, "CHF"),
            Self::Gbp => write!(f, "GBP"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "EUR" | "€" => Ok(Self::Eur),
            "USD" | "$" => Ok(Self::Usd),
            "CHF" => Ok(Self::Chf),
            "GBP" | "£" => Ok(Self::Gbp),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    #[test]
    fn test_money_new() {
        let amount = dec!(416.5);
        let money = Money::new(amount, Currency::Eur);
        assert_eq!(money.amount, amount);
        assert_eq!(money.currency, Currency::Eur);
    }

    #[test]
    fn test_money_zero() {
        let money = Money::zero(Currency::Usd);
        assert!(money.is_zero());
        assert!(!money.is_negative());
    }

    #[test]
    fn test_money_is_negative() {
        assert!(Money::new(dec!(-0.01), Currency::Eur).is_negative());
        assert!(!Money::new(dec!(0.01), Currency::Eur).is_negative());
    }

    #[rstest]
    #[case(dec!(350), "350.00")]
    #[case(dec!(66.5), "66.50")]
    #[case(dec!(0.125), "0.13")]
    #[case(dec!(0.135), "0.14")]
    #[case(dec!(-2.005), "-2.01")]
    #[case(dec!(19.999), "20.00")]
    fn test_money_rounded(#[case] amount: Decimal, #[case] expected: &str) {
        let money = Money::new(amount, Currency::Eur);
        assert_eq!(money.rounded().to_string(), expected);
    }

    #[test]
    fn test_money_rounding_keeps_amount_intact() {
        let money = Money::new(dec!(10.005), Currency::Eur);
        let _ = money.rounded();
        assert_eq!(money.amount, dec!(10.005));
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(dec!(416.5), Currency::Eur).to_string(), "416.50 €");
        assert_eq!(Money::new(dec!(3), Currency::Chf).to_string(), "3.00 CHF");
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!(Currency::from_str("EUR").unwrap(), Currency::Eur);
        assert_eq!(Currency::from_str("eur").unwrap(), Currency::Eur);
        assert_eq!(Currency::from_str("€").unwrap(), Currency::Eur);
        assert_eq!(Currency::from_str("$").unwrap(), Currency::Usd);
        assert!(Currency::from_str("XXX").is_err());
        assert!(Currency::from_str("").is_err());
    }

    #[test]
    fn test_currency_deserializes_legacy_symbol() {
        let currency: Currency = serde_json::from_str("\"€\"").unwrap();
        assert_eq!(currency, Currency::Eur);
        let currency: Currency = serde_json::from_str("\"USD\"").unwrap();
        assert_eq!(currency, Currency::Usd);
    }
}
