//! Unified error handling for the cart engine.
//!
//! Most failures in the engine recover locally (a corrupt cart reads as
//! empty, a refused clipboard becomes a prompt). What remains is surfaced
//! through [`CartEngineError`].

use thiserror::Error;
use weekenders_core::{CartError, OptionError};

use crate::checkout::{CheckoutError, MailError};
use crate::config::ConfigError;
use crate::storage::StorageError;

/// Engine-level error type.
#[derive(Debug, Error)]
pub enum CartEngineError {
    /// Writing the cart slot failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The change would leave the cart unable to hold or total its lines.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Checkout was refused (e.g. empty cart).
    #[error("{0}")]
    Checkout(#[from] CheckoutError),

    /// The mail handler could not be reached.
    #[error("Mail error: {0}")]
    Mail(#[from] MailError),

    /// The option selection does not fit the product.
    #[error("Invalid options: {0}")]
    Options(#[from] OptionError),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Template rendering failed.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

impl CartEngineError {
    /// Whether this is the empty-cart guard rather than a real failure.
    #[must_use]
    pub const fn is_empty_cart(&self) -> bool {
        matches!(self, Self::Checkout(CheckoutError::EmptyCart))
    }
}

/// Result type alias for `CartEngineError`.
pub type Result<T> = std::result::Result<T, CartEngineError>;
