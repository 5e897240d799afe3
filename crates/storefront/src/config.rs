//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `WEEKENDERS_ORDER_EMAIL` - Address that receives order emails
//!
//! ## Optional
//! - `WEEKENDERS_STORE_NAME` - Store name used in the order subject and header
//!   (default: `Weekenders Co.`)
//! - `WEEKENDERS_CURRENCY` - ISO currency code for money display (default: USD)
//! - `WEEKENDERS_CART_KEY` - Storage slot holding the cart (default: `w_cart`)
//! - `WEEKENDERS_DATA_DIR` - Directory backing the local store
//!   (default: `.weekenders`)

use std::path::PathBuf;

use thiserror::Error;
use weekenders_core::{CurrencyCode, Email};

/// Default store name.
pub const DEFAULT_STORE_NAME: &str = "Weekenders Co.";
/// Default storage slot for the cart.
pub const DEFAULT_CART_KEY: &str = "w_cart";
/// Default data directory for the file-backed store.
pub const DEFAULT_DATA_DIR: &str = ".weekenders";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Store-wide settings passed into the cart engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Where checkout emails are addressed
    pub order_email: Email,
    /// Shown in the order subject and summary header
    pub store_name: String,
    /// Currency used when formatting money
    pub currency: CurrencyCode,
    /// Storage slot holding the cart
    pub cart_key: String,
    /// Directory backing the file store
    pub data_dir: PathBuf,
}

impl StoreConfig {
    /// Build a configuration with defaults for everything but the names.
    #[must_use]
    pub fn new(order_email: Email, store_name: impl Into<String>) -> Self {
        Self {
            order_email,
            store_name: store_name.into(),
            currency: CurrencyCode::default(),
            cart_key: DEFAULT_CART_KEY.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the order email is missing or any variable
    /// fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`from_env`](Self::from_env).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let order_email = lookup("WEEKENDERS_ORDER_EMAIL")
            .ok_or_else(|| ConfigError::MissingEnvVar("WEEKENDERS_ORDER_EMAIL".to_string()))?;
        let order_email = Email::parse(&order_email).map_err(|e| {
            ConfigError::InvalidEnvVar("WEEKENDERS_ORDER_EMAIL".to_string(), e.to_string())
        })?;

        let store_name = non_empty(lookup("WEEKENDERS_STORE_NAME"))
            .unwrap_or_else(|| DEFAULT_STORE_NAME.to_string());

        let currency = match non_empty(lookup("WEEKENDERS_CURRENCY")) {
            Some(code) => code.parse::<CurrencyCode>().map_err(|e| {
                ConfigError::InvalidEnvVar("WEEKENDERS_CURRENCY".to_string(), e.to_string())
            })?,
            None => CurrencyCode::default(),
        };

        let cart_key = non_empty(lookup("WEEKENDERS_CART_KEY"))
            .unwrap_or_else(|| DEFAULT_CART_KEY.to_string());

        let data_dir = non_empty(lookup("WEEKENDERS_DATA_DIR"))
            .map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);

        Ok(Self {
            order_email,
            store_name,
            currency,
            cart_key,
            data_dir,
        })
    }
}

/// Treat blank values as unset.
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
