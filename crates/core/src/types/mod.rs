//! Core types for Weekenders.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod price;
pub mod quantity;
pub mod sku;

pub use email::{Email, EmailError};
pub use price::{CurrencyCode, Price, UnknownCurrency};
pub use quantity::Quantity;
pub use sku::{Sku, SkuError};
