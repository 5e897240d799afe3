//! `mailto:` order requests.

use chrono::NaiveDate;
use thiserror::Error;
use weekenders_core::{Cart, Email};

use super::CheckoutError;
use crate::config::StoreConfig;
use crate::order::OrderSummary;

/// A composed order email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailtoRequest {
    pub recipient: Email,
    pub subject: String,
    pub body: String,
}

impl MailtoRequest {
    /// Compose the order email for `cart`, dated `date`.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] when the cart has no lines.
    pub fn for_order(
        config: &StoreConfig,
        cart: &Cart,
        date: NaiveDate,
    ) -> Result<Self, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        Ok(Self {
            recipient: config.order_email.clone(),
            subject: order_subject(&config.store_name, date),
            body: OrderSummary::new(&config.store_name, config.currency, cart).to_string(),
        })
    }

    /// `mailto:<recipient>?subject=<encoded>&body=<encoded>`
    #[must_use]
    pub fn to_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body),
        )
    }
}

/// `<store> order - YYYY-MM-DD`
#[must_use]
pub fn order_subject(store_name: &str, date: NaiveDate) -> String {
    format!("{store_name} order - {}", date.format("%Y-%m-%d"))
}

/// Errors raised while handing a request to the mail handler.
#[derive(Debug, Error)]
pub enum MailError {
    /// The handler could not be started.
    #[error("failed to launch mail handler: {0}")]
    Launch(#[from] std::io::Error),

    /// The handler ran but reported failure.
    #[error("mail handler exited unsuccessfully: {0}")]
    Handler(String),
}

/// Something that can open a composed email, typically the OS default
/// mail client. Success means the request was handed over, not that any
/// email was sent.
pub trait MailHandler {
    /// Hand `request` to the mail client.
    ///
    /// # Errors
    ///
    /// Returns `MailError` if the handler cannot be reached.
    fn open(&self, request: &MailtoRequest) -> Result<(), MailError>;
}
