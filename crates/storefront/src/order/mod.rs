//! Order rendering.
//!
//! Two views of the same cart: [`OrderSummary`] is the plain text used as
//! the email body and clipboard payload, [`CartSummaryView`] feeds the
//! cart-summary region of the page. Both compute money the same way, from
//! each line's captured unit price.

pub mod summary;
pub mod text;

pub use summary::{CartRow, CartSummaryTemplate, CartSummaryView, escape_html};
pub use text::OrderSummary;
