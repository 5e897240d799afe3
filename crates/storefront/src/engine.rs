//! The cart engine facade.
//!
//! A shell (page script, CLI, test) owns one [`CartEngine`] and calls into it
//! from its event handlers. Each call runs to completion on its own: load
//! the cart, apply the change, save it back. Only [`CartEngine::copy_order`]
//! awaits anything.

use chrono::NaiveDate;
use tracing::{info, instrument};
use weekenders_core::{Cart, Product, Quantity, SelectedOptions};

use crate::checkout::{
    CheckoutError, Clipboard, CopyOutcome, MailHandler, MailtoRequest, ManualCopyPrompt,
    copy_order,
};
use crate::config::StoreConfig;
use crate::error::Result;
use crate::order::{CartSummaryView, OrderSummary};
use crate::storage::{CartStore, KeyValueStore};

/// Cart operations bound to a store configuration and a storage backend.
#[derive(Debug)]
pub struct CartEngine<S> {
    config: StoreConfig,
    carts: CartStore<S>,
}

impl<S: KeyValueStore> CartEngine<S> {
    /// Create an engine storing its cart in `store` under the configured key.
    pub fn new(config: StoreConfig, store: S) -> Self {
        let carts = CartStore::new(store, config.cart_key.clone());
        Self { config, carts }
    }

    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        self.carts.inner()
    }

    /// The current cart. Corrupt stored data reads as an empty cart.
    pub fn cart(&mut self) -> Cart {
        self.carts.load()
    }

    /// Add `quantity` of `product` and persist the result.
    ///
    /// The stored cart is left as it was when the add is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`CartEngineError::Cart`](crate::CartEngineError::Cart) if the new totals would be out of
    /// range, or an error if the cart cannot be saved.
    #[instrument(skip(self, product, selected), fields(sku = %product.sku, qty = %quantity))]
    pub fn add(
        &mut self,
        product: &Product,
        selected: &SelectedOptions,
        quantity: Quantity,
    ) -> Result<Cart> {
        let cart = self
            .carts
            .load()
            .add_line_item(product, selected, quantity)?;
        self.carts.save(&cart)?;
        info!(lines = cart.len(), items = cart.item_count(), "Added to cart");
        Ok(cart)
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be saved.
    #[instrument(skip(self))]
    pub fn clear(&mut self) -> Result<()> {
        self.carts.clear()?;
        info!("Cart cleared");
        Ok(())
    }

    /// Structured view of the current cart.
    pub fn summary(&mut self) -> CartSummaryView {
        CartSummaryView::from_cart(&self.carts.load(), self.config.currency)
    }

    /// Rendered cart-summary fragment.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn summary_html(&mut self) -> Result<String> {
        Ok(self.summary().render_html()?)
    }

    /// Plain-text order summary of the current cart.
    pub fn order_text(&mut self) -> String {
        let cart = self.carts.load();
        self.render_text(&cart)
    }

    fn render_text(&self, cart: &Cart) -> String {
        OrderSummary::new(&self.config.store_name, self.config.currency, cart).to_string()
    }

    /// Compose the order email for the current cart.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] when there is nothing to order.
    pub fn checkout_request(&mut self, date: NaiveDate) -> Result<MailtoRequest> {
        let cart = self.carts.load();
        Ok(MailtoRequest::for_order(&self.config, &cart, date)?)
    }

    /// Compose the order email for the current cart and open it.
    ///
    /// The cart is left as is; nothing records that an order was placed.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty cart or if the handler cannot be reached.
    #[instrument(skip(self, handler))]
    pub fn checkout<H>(&mut self, handler: &H, date: NaiveDate) -> Result<MailtoRequest>
    where
        H: MailHandler + ?Sized,
    {
        let request = self.checkout_request(date)?;
        handler.open(&request)?;
        info!(recipient = %request.recipient, "Order email handed to mail client");
        Ok(request)
    }

    /// Order a single product immediately, bypassing the stored cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the order total is out of range or the handler
    /// cannot be reached.
    #[instrument(skip(self, product, selected, handler), fields(sku = %product.sku, qty = %quantity))]
    pub fn buy_now<H>(
        &self,
        product: &Product,
        selected: &SelectedOptions,
        quantity: Quantity,
        handler: &H,
        date: NaiveDate,
    ) -> Result<MailtoRequest>
    where
        H: MailHandler + ?Sized,
    {
        let cart = Cart::single(product, selected, quantity)?;
        let request = MailtoRequest::for_order(&self.config, &cart, date)?;
        handler.open(&request)?;
        info!(recipient = %request.recipient, "Buy-now email handed to mail client");
        Ok(request)
    }

    /// Copy the order text to the clipboard, or prompt for a manual copy.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] when there is nothing to copy.
    pub async fn copy_order<C, P>(&mut self, clipboard: &C, prompt: &P) -> Result<CopyOutcome>
    where
        C: Clipboard + ?Sized,
        P: ManualCopyPrompt + ?Sized,
    {
        let cart = self.carts.load();
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart.into());
        }
        let text = self.render_text(&cart);
        Ok(copy_order(clipboard, prompt, &text).await)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;

    use rust_decimal::Decimal;
    use weekenders_core::{Email, Sku};

    use super::*;
    use crate::CartEngineError;
    use crate::checkout::MailError;
    use crate::storage::MemoryStore;

    #[derive(Default)]
    struct RecordingHandler {
        opened: RefCell<Vec<String>>,
    }

    impl MailHandler for RecordingHandler {
        fn open(&self, request: &MailtoRequest) -> std::result::Result<(), MailError> {
            self.opened.borrow_mut().push(request.to_uri());
            Ok(())
        }
    }

    fn engine() -> CartEngine<MemoryStore> {
        let config = StoreConfig::new(
            Email::parse("orders@weekendersco.com").unwrap(),
            "Weekenders Co.",
        );
        CartEngine::new(config, MemoryStore::new())
    }

    fn beanie() -> Product {
        Product::new(
            Sku::parse("WDR-SUMMIT-01").unwrap(),
            "The Summit Beanie",
            Decimal::new(4500, 2),
        )
        .unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn test_add_persists() {
        let mut engine = engine();
        engine
            .add(&beanie(), &SelectedOptions::new(), Quantity::new(2).unwrap())
            .unwrap();
        engine
            .add(&beanie(), &SelectedOptions::new(), Quantity::ONE)
            .unwrap();

        let cart = engine.cart();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.item_count(), 3);
        assert!(engine.store().contains("w_cart"));
    }

    #[test]
    fn test_clear() {
        let mut engine = engine();
        engine
            .add(&beanie(), &SelectedOptions::new(), Quantity::ONE)
            .unwrap();
        engine.clear().unwrap();
        assert!(engine.cart().is_empty());
        assert!(!engine.summary().visible);
    }

    #[test]
    fn test_checkout_empty_cart_does_not_dispatch() {
        let mut engine = engine();
        let handler = RecordingHandler::default();
        let err = engine.checkout(&handler, date()).unwrap_err();
        assert!(err.is_empty_cart());
        assert!(handler.opened.borrow().is_empty());
    }

    #[test]
    fn test_checkout_opens_mailto_and_keeps_cart() {
        let mut engine = engine();
        let handler = RecordingHandler::default();
        engine
            .add(&beanie(), &SelectedOptions::new(), Quantity::ONE)
            .unwrap();

        let request = engine.checkout(&handler, date()).unwrap();

        assert_eq!(request.subject, "Weekenders Co. order - 2026-10-16");
        let opened = handler.opened.borrow();
        assert_eq!(opened.len(), 1);
        assert!(opened.first().unwrap().starts_with("mailto:orders@weekendersco.com?"));
        assert_eq!(engine.cart().len(), 1);
    }

    #[test]
    fn test_buy_now_ignores_stored_cart() {
        let mut engine = engine();
        let handler = RecordingHandler::default();
        let tee =
            Product::new(Sku::parse("TEE-01").unwrap(), "Camp Tee", Decimal::new(2000, 2)).unwrap();
        engine
            .add(&tee, &SelectedOptions::new(), Quantity::ONE)
            .unwrap();

        let request = engine
            .buy_now(
                &beanie(),
                &SelectedOptions::new(),
                Quantity::new(2).unwrap(),
                &handler,
                date(),
            )
            .unwrap();

        assert!(request.body.contains("The Summit Beanie (SKU WDR-SUMMIT-01) x 2"));
        assert!(!request.body.contains("Camp Tee"));
        assert!(request.body.contains("Total: $90.00"));
        assert_eq!(engine.cart().len(), 1);
    }

    #[test]
    fn test_add_out_of_range_keeps_stored_cart() {
        let mut engine = engine();
        engine
            .add(&beanie(), &SelectedOptions::new(), Quantity::ONE)
            .unwrap();
        let gold: Product =
            serde_json::from_str(r#"{"title":"Gold Bar","sku":"GOLD","price":1e20}"#).unwrap();

        let err = engine
            .add(
                &gold,
                &SelectedOptions::new(),
                Quantity::parse_lenient("99999999999"),
            )
            .unwrap_err();

        assert!(matches!(err, CartEngineError::Cart(_)));
        let cart = engine.cart();
        assert_eq!(cart.len(), 1);
        let summary = engine.summary();
        assert_eq!(summary.total, "$45.00");
    }

    #[test]
    fn test_buy_now_out_of_range_is_not_dispatched() {
        let engine = engine();
        let handler = RecordingHandler::default();
        let gold = Product::new(
            Sku::parse("GOLD").unwrap(),
            "Gold Bar",
            Decimal::from_i128_with_scale(100_000_000_000_000_000_000, 0),
        )
        .unwrap();

        let result = engine.buy_now(
            &gold,
            &SelectedOptions::new(),
            Quantity::new(u32::MAX).unwrap(),
            &handler,
            date(),
        );

        assert!(result.is_err());
        assert!(handler.opened.borrow().is_empty());
    }

    #[test]
    fn test_summary_and_text_agree_on_total() {
        let mut engine = engine();
        engine
            .add(&beanie(), &SelectedOptions::new(), Quantity::new(3).unwrap())
            .unwrap();
        let summary = engine.summary();
        let text = engine.order_text();
        assert_eq!(summary.total, "$135.00");
        assert!(text.contains(&format!("Total: {}", summary.total)));
        assert!(engine.summary_html().unwrap().contains("$135.00"));
    }
}
