//! Type-safe price representation using decimal arithmetic.
//!
//! Amounts are stored in the currency's standard unit (dollars, not cents)
//! and never pass through floating point once parsed.
//!
//! ```
//! use rust_decimal::Decimal;
//! use weekenders_core::{CurrencyCode, Price};
//!
//! let price = Price::new(Decimal::new(4500, 2), CurrencyCode::USD);
//! assert_eq!(price.display(), "$45.00");
//! assert_eq!(price.times(3).display(), "$135.00");
//! ```

use core::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// A zero amount in the given currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::ZERO, currency_code)
    }

    /// The price of `quantity` units at this unit price, saturating at
    /// [`Decimal::MAX`].
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self::new(
            self.amount.saturating_mul(Decimal::from(quantity)),
            self.currency_code,
        )
    }

    /// Sum a sequence of amounts into a single price, saturating at the
    /// bounds of [`Decimal`].
    pub fn sum<I>(currency_code: CurrencyCode, amounts: I) -> Self
    where
        I: IntoIterator<Item = Decimal>,
    {
        let total = amounts
            .into_iter()
            .fold(Decimal::ZERO, Decimal::saturating_add);
        Self::new(total, currency_code)
    }

    /// Format for display (e.g., "$19.99").
    ///
    /// Always two decimal places with the currency symbol in front. No
    /// thousands separators and no currency-code suffix.
    #[must_use]
    pub fn display(&self) -> String {
        let rounded = self
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{}{rounded:.2}", self.currency_code.symbol())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// The symbol printed in front of amounts.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// The three-letter ISO code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }
}

/// Error returned when a currency code is not supported.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported currency code: {0}")]
pub struct UnknownCurrency(pub String);

impl FromStr for CurrencyCode {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            "GBP" => Ok(Self::GBP),
            "CAD" => Ok(Self::CAD),
            "AUD" => Ok(Self::AUD),
            _ => Err(UnknownCurrency(s.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn usd(cents: i64) -> Price {
        Price::new(Decimal::new(cents, 2), CurrencyCode::USD)
    }

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(usd(4500).display(), "$45.00");
        assert_eq!(usd(5).display(), "$0.05");
        assert_eq!(Price::zero(CurrencyCode::USD).display(), "$0.00");
    }

    #[test]
    fn test_display_no_thousands_separator() {
        assert_eq!(usd(123_456_789).display(), "$1234567.89");
    }

    #[test]
    fn test_display_rounds_half_away_from_zero() {
        let price = Price::new(Decimal::new(10_005, 3), CurrencyCode::USD);
        assert_eq!(price.display(), "$10.01");
    }

    #[test]
    fn test_display_other_currencies() {
        let eur = Price::new(Decimal::new(999, 2), CurrencyCode::EUR);
        assert_eq!(eur.display(), "€9.99");
        let gbp = Price::new(Decimal::new(100, 0), CurrencyCode::GBP);
        assert_eq!(gbp.to_string(), "£100.00");
    }

    #[test]
    fn test_times_and_sum() {
        assert_eq!(usd(1000).times(5), usd(5000));
        let total = Price::sum(
            CurrencyCode::USD,
            [Decimal::new(4500, 2), Decimal::new(2000, 2)],
        );
        assert_eq!(total.display(), "$65.00");
    }

    #[test]
    fn test_times_and_sum_saturate() {
        let max = Price::new(Decimal::MAX, CurrencyCode::USD);
        assert_eq!(max.times(u32::MAX).amount, Decimal::MAX);
        let total = Price::sum(CurrencyCode::USD, [Decimal::MAX, Decimal::ONE]);
        assert_eq!(total.amount, Decimal::MAX);
        assert_eq!(total.display(), "$79228162514264337593543950335.00");
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!("usd".parse::<CurrencyCode>().unwrap(), CurrencyCode::USD);
        assert_eq!(" GBP ".parse::<CurrencyCode>().unwrap(), CurrencyCode::GBP);
        assert!("XYZ".parse::<CurrencyCode>().is_err());
    }
}
