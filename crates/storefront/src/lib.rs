//! Weekenders Storefront - the cart engine.
//!
//! This crate holds everything between the page shell and the customer's
//! mail client:
//!
//! - [`storage`] - local key-value slot holding the cart, self-healing on
//!   corrupt data
//! - [`order`] - plain-text order summary and the rendered cart summary
//! - [`checkout`] - `mailto:` order dispatch and clipboard export
//! - [`engine`] - [`CartEngine`], the facade a shell calls into
//!
//! Nothing here talks to a server. The only order channel is a composed
//! email handed to the operating system's mail handler.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod checkout;
pub mod config;
pub mod engine;
pub mod error;
pub mod notices;
pub mod order;
pub mod storage;

pub use config::StoreConfig;
pub use engine::CartEngine;
pub use error::{CartEngineError, Result};
