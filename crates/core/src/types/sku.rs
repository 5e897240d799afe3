//! Stock keeping unit identifier.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Sku`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SkuError {
    /// The input is empty or only whitespace.
    #[error("SKU cannot be empty")]
    Empty,
}

/// A SKU, unique per distinct purchasable item.
///
/// The surrounding page owns the catalog, so the only rule enforced here is
/// that the identifier is non-empty. Surrounding whitespace is trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Sku(String);

impl Sku {
    /// Parse a `Sku` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`SkuError::Empty`] if nothing is left after trimming.
    pub fn parse(s: &str) -> Result<Self, SkuError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(SkuError::Empty);
        }
        Ok(Self(s.to_owned()))
    }

    /// Returns the SKU as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Sku {
    type Error = SkuError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Sku> for String {
    fn from(sku: Sku) -> Self {
        sku.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Sku::parse(" WDR-SUMMIT-01 ").unwrap().as_str(), "WDR-SUMMIT-01");
        assert_eq!(Sku::parse(""), Err(SkuError::Empty));
        assert_eq!(Sku::parse("  \t"), Err(SkuError::Empty));
    }

    #[test]
    fn test_serde_rejects_empty() {
        assert!(serde_json::from_str::<Sku>("\"\"").is_err());
        let sku: Sku = serde_json::from_str("\"X\"").unwrap();
        assert_eq!(sku.to_string(), "X");
    }
}
