//! Plain-text order summary.

use core::fmt;

use weekenders_core::{Cart, CurrencyCode, LineItem, Price};

use crate::notices::CUSTOMER_DETAILS_PLACEHOLDER;

/// Plain-text rendering of a cart, suitable for an email body.
///
/// ```text
/// Order from Weekenders Co.
///
/// Items:
/// The Summit Beanie [Size: M] (SKU WDR-SUMMIT-01) x 2 - $45.00 each - $90.00
///
/// Total: $90.00
///
/// Customer details: (paste name, address, phone here)
/// ```
#[derive(Debug, Clone, Copy)]
pub struct OrderSummary<'a> {
    store_name: &'a str,
    currency: CurrencyCode,
    cart: &'a Cart,
}

impl<'a> OrderSummary<'a> {
    #[must_use]
    pub const fn new(store_name: &'a str, currency: CurrencyCode, cart: &'a Cart) -> Self {
        Self {
            store_name,
            currency,
            cart,
        }
    }

    /// The line written for a single item.
    #[must_use]
    pub fn item_line(&self, line: &LineItem) -> String {
        let unit = Price::new(line.unit_price, self.currency);
        let total = Price::new(line.line_total(), self.currency);
        format!(
            "{} (SKU {}) x {} - {unit} each - {total}",
            line.display_title(),
            line.sku,
            line.quantity,
        )
    }

    #[must_use]
    pub fn total(&self) -> Price {
        Price::new(self.cart.total(), self.currency)
    }
}

impl fmt::Display for OrderSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Order from {}", self.store_name)?;
        writeln!(f)?;
        writeln!(f, "Items:")?;
        for line in self.cart {
            writeln!(f, "{}", self.item_line(line))?;
        }
        writeln!(f)?;
        writeln!(f, "Total: {}", self.total())?;
        writeln!(f)?;
        f.write_str(CUSTOMER_DETAILS_PLACEHOLDER)
    }
}
