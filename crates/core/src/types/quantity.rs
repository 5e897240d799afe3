//! Line-item quantity.
//!
//! Quantities are always at least one. The stepper control on a product page
//! feeds free-form text into [`Quantity::parse_lenient`] and nudges it with
//! [`Quantity::increment`] / [`Quantity::decrement`]; none of these can
//! produce a zero or negative value.

use core::fmt;
use core::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// A positive item quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// A quantity of one.
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Create a quantity, returning `None` for zero.
    #[must_use]
    pub const fn new(n: u32) -> Option<Self> {
        match NonZeroU32::new(n) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// Create a quantity from any integer, clamping to the range `1..=u32::MAX`.
    #[must_use]
    pub fn clamped(n: i64) -> Self {
        let n = u32::try_from(n.max(1)).unwrap_or(u32::MAX);
        Self::new(n).unwrap_or(Self::ONE)
    }

    /// Read a quantity the way a number input is read.
    ///
    /// Leading whitespace is skipped, an optional sign and the leading run of
    /// digits are taken, and anything after that is ignored. Empty or
    /// non-numeric input reads as one; the result is clamped to at least one.
    ///
    /// ```
    /// use weekenders_core::Quantity;
    ///
    /// assert_eq!(Quantity::parse_lenient("3").get(), 3);
    /// assert_eq!(Quantity::parse_lenient(" 7 pcs").get(), 7);
    /// assert_eq!(Quantity::parse_lenient("").get(), 1);
    /// assert_eq!(Quantity::parse_lenient("-4").get(), 1);
    /// ```
    #[must_use]
    pub fn parse_lenient(input: &str) -> Self {
        let s = input.trim_start();
        let (negative, rest) = match s.as_bytes().first() {
            Some(b'-') => (true, s.get(1..).unwrap_or("")),
            Some(b'+') => (false, s.get(1..).unwrap_or("")),
            _ => (false, s),
        };
        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        let digits = rest.get(..digits_end).unwrap_or("");
        if digits.is_empty() || negative {
            return Self::ONE;
        }
        // Overlong digit runs saturate rather than wrap.
        digits
            .parse::<u32>()
            .map_or(Self(NonZeroU32::MAX), |n| Self::new(n).unwrap_or(Self::ONE))
    }

    /// The quantity as a plain integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// One more, saturating at `u32::MAX`.
    #[must_use]
    pub const fn increment(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// One less, never below one.
    #[must_use]
    pub fn decrement(self) -> Self {
        Self::new(self.get() - 1).unwrap_or(Self::ONE)
    }

    /// Sum of two quantities, saturating at `u32::MAX`.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.get()))
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Quantity> for u32 {
    fn from(q: Quantity) -> Self {
        q.get()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero() {
        assert!(Quantity::new(0).is_none());
        assert_eq!(Quantity::new(5).unwrap().get(), 5);
    }

    #[test]
    fn test_clamped() {
        assert_eq!(Quantity::clamped(0), Quantity::ONE);
        assert_eq!(Quantity::clamped(-12), Quantity::ONE);
        assert_eq!(Quantity::clamped(9).get(), 9);
        assert_eq!(Quantity::clamped(i64::MAX).get(), u32::MAX);
    }

    #[test]
    fn test_parse_lenient() {
        assert_eq!(Quantity::parse_lenient("2").get(), 2);
        assert_eq!(Quantity::parse_lenient("+2").get(), 2);
        assert_eq!(Quantity::parse_lenient("  12abc").get(), 12);
        assert_eq!(Quantity::parse_lenient("0").get(), 1);
        assert_eq!(Quantity::parse_lenient("-1").get(), 1);
        assert_eq!(Quantity::parse_lenient("abc").get(), 1);
        assert_eq!(Quantity::parse_lenient("").get(), 1);
        assert_eq!(Quantity::parse_lenient("3.9").get(), 3);
        assert_eq!(Quantity::parse_lenient("99999999999999").get(), u32::MAX);
    }

    #[test]
    fn test_stepper() {
        let q = Quantity::ONE;
        assert_eq!(q.decrement(), Quantity::ONE);
        assert_eq!(q.increment().get(), 2);
        assert_eq!(q.increment().increment().decrement().get(), 2);
        assert_eq!(Quantity::new(u32::MAX).unwrap().increment().get(), u32::MAX);
    }

    #[test]
    fn test_serde_rejects_zero_and_fractions() {
        assert!(serde_json::from_str::<Quantity>("0").is_err());
        assert!(serde_json::from_str::<Quantity>("-1").is_err());
        assert!(serde_json::from_str::<Quantity>("1.5").is_err());
        assert_eq!(serde_json::from_str::<Quantity>("4").unwrap().get(), 4);
    }
}
