//! The cart slot: load, save and clear with self-healing reads.
//!
//! The slot holds a JSON array of line items:
//!
//! ```json
//! [{"sku":"WDR-SUMMIT-01","title":"The Summit Beanie","price":45.0,"qty":2,
//!   "selectedOptions":{"Size":"M"}}]
//! ```
//!
//! `selectedOptions` may be missing in older records and reads as empty.
//! Anything that does not decode into a complete, valid cart is discarded.

use thiserror::Error;
use tracing::{debug, warn};
use weekenders_core::{Cart, CartError, LineItem};

use super::{KeyValueStore, StorageError};

/// Why a stored record was rejected.
#[derive(Debug, Error)]
pub enum InvalidCart {
    /// Not a JSON array of well-typed line items.
    #[error("malformed cart record: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A line carries a negative unit price.
    #[error("negative price on line {sku}")]
    NegativePrice {
        /// SKU of the offending line.
        sku: String,
    },

    /// Two lines share a SKU and option selection.
    #[error("duplicate line item for SKU {sku}")]
    Duplicate {
        /// SKU of the repeated line.
        sku: String,
    },

    /// A line total or the grand total does not fit in a `Decimal`.
    #[error("cart total out of range at line {sku}")]
    TotalOverflow {
        /// SKU of the line that pushed the total out of range.
        sku: String,
    },
}

impl From<CartError> for InvalidCart {
    fn from(err: CartError) -> Self {
        match err {
            CartError::DuplicateLine { sku } => Self::Duplicate { sku },
            CartError::NegativePrice { sku } => Self::NegativePrice { sku },
            CartError::TotalOverflow { sku } => Self::TotalOverflow { sku },
        }
    }
}

/// Decode a stored record into a cart.
///
/// Either every line is valid and the whole cart is returned, or nothing is.
/// A blank record reads as an empty cart.
///
/// # Errors
///
/// Returns [`InvalidCart`] describing the first problem found.
pub fn decode_cart(raw: &str) -> Result<Cart, InvalidCart> {
    if raw.trim().is_empty() {
        return Ok(Cart::new());
    }

    let lines: Vec<LineItem> = serde_json::from_str(raw)?;
    Ok(Cart::from_lines(lines)?)
}

/// Encode a cart into its stored form.
///
/// # Errors
///
/// Returns [`StorageError::Encode`] if serialization fails.
pub fn encode_cart(cart: &Cart) -> Result<String, StorageError> {
    Ok(serde_json::to_string(cart)?)
}

/// The cart's storage slot on top of any [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct CartStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> CartStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub const fn inner(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Read the cart.
    ///
    /// Never fails: a missing slot is an empty cart, a corrupt slot is
    /// deleted and read as an empty cart, and an unreadable store is logged
    /// and read as an empty cart.
    pub fn load(&mut self) -> Cart {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Cart::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to read cart, using an empty cart");
                return Cart::new();
            }
        };

        match decode_cart(&raw) {
            Ok(cart) => {
                debug!(key = %self.key, lines = cart.len(), "Cart loaded");
                cart
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to parse stored cart. Resetting cart.");
                if let Err(e) = self.store.remove(&self.key) {
                    warn!(key = %self.key, error = %e, "Failed to discard corrupt cart");
                }
                Cart::new()
            }
        }
    }

    /// Replace the stored cart.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the cart cannot be encoded or written.
    pub fn save(&mut self, cart: &Cart) -> Result<(), StorageError> {
        let encoded = encode_cart(cart)?;
        self.store.set(&self.key, &encoded)
    }

    /// Store an empty cart.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the slot cannot be written.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.save(&Cart::new())
    }
}
