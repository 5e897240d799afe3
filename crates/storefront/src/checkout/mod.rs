//! Order dispatch.
//!
//! Checkout composes an email and hands it to the operating system's mail
//! handler; there is no confirmation, retry or record of the order. The
//! secondary path copies the same order text to the clipboard, falling back
//! to a manual-copy prompt.

pub mod clipboard;
pub mod mailto;

use thiserror::Error;

pub use clipboard::{Clipboard, ClipboardError, CopyOutcome, ManualCopyPrompt, copy_order};
pub use mailto::{MailError, MailHandler, MailtoRequest};

use crate::notices;

/// Reasons checkout does not proceed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// There is nothing to order.
    #[error("{}", notices::EMPTY_CART)]
    EmptyCart,
}
