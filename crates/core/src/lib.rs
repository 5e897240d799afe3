//! Weekenders Core - Shared cart and product types.
//!
//! This crate provides the pure domain model used by every Weekenders
//! component:
//! - `storefront` - Cart engine (storage, order rendering, checkout)
//! - `cli` - Command-line shell that drives the cart engine
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! storage, no clocks. Line-item merging lives here so it can be tested
//! without any surrounding shell.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for prices, emails, SKUs and quantities
//! - [`product`] - Product records supplied by the page
//! - [`options`] - Selected option values and their identity
//! - [`cart`] - Line items, the cart and the merge logic

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod options;
pub mod product;
pub mod types;

pub use cart::{Cart, CartError, LineIdentity, LineItem};
pub use options::SelectedOptions;
pub use product::{NegativePrice, OptionError, Product};
pub use types::*;
