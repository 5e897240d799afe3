//! Structured cart summary for the page's cart region.

use askama::Template;
use weekenders_core::{Cart, CurrencyCode, Price};

/// One display row: `"<title>[ <options>] x <qty>"` and its line total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRow {
    /// Row label, already HTML-escaped.
    pub label: String,
    /// Formatted `unit price * quantity`.
    pub line_total: String,
}

/// Cart display data for the cart-summary region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummaryView {
    /// `false` when the cart is empty; the region is hidden entirely.
    pub visible: bool,
    pub rows: Vec<CartRow>,
    pub total: String,
    pub item_count: u64,
}

impl CartSummaryView {
    /// Build the view for `cart`.
    #[must_use]
    pub fn from_cart(cart: &Cart, currency: CurrencyCode) -> Self {
        let rows = cart
            .lines()
            .iter()
            .map(|line| CartRow {
                label: escape_html(&line.row_label()),
                line_total: Price::new(line.line_total(), currency).display(),
            })
            .collect();

        Self {
            visible: !cart.is_empty(),
            rows,
            total: Price::new(cart.total(), currency).display(),
            item_count: cart.item_count(),
        }
    }

    /// Render the cart-summary HTML fragment.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_html(&self) -> askama::Result<String> {
        CartSummaryTemplate { summary: self }.render()
    }
}

/// Cart summary fragment template.
#[derive(Template)]
#[template(path = "partials/cart_summary.html")]
pub struct CartSummaryTemplate<'a> {
    pub summary: &'a CartSummaryView,
}

/// Escape the characters that would otherwise open markup: `&`, `<`, `>`.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;
    use weekenders_core::{Product, Quantity, SelectedOptions, Sku};

    use super::*;

    fn product(sku: &str, title: &str, cents: i64) -> Product {
        Product::new(Sku::parse(sku).unwrap(), title, Decimal::new(cents, 2)).unwrap()
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Salt & <Pepper>"), "Salt &amp; &lt;Pepper&gt;");
        assert_eq!(escape_html("\"quoted\" 'single'"), "\"quoted\" 'single'");
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_empty_cart_is_hidden() {
        let view = CartSummaryView::from_cart(&Cart::new(), CurrencyCode::USD);
        assert!(!view.visible);
        assert!(view.rows.is_empty());
        assert_eq!(view.total, "$0.00");

        let html = view.render_html().unwrap();
        assert!(html.contains("id=\"cartSummary\" class=\"cart-summary\" hidden"));
    }

    #[test]
    fn test_rows_and_total() {
        let x = product("X", "Trail Cap", 1000);
        let cart = Cart::new()
            .add_line_item(
                &x,
                &SelectedOptions::new().with("Size", "M"),
                Quantity::new(5).unwrap(),
            )
            .unwrap()
            .add_line_item(&product("Y", "Socks", 1500), &SelectedOptions::new(), Quantity::ONE)
            .unwrap();

        let view = CartSummaryView::from_cart(&cart, CurrencyCode::USD);
        assert!(view.visible);
        assert_eq!(view.item_count, 6);
        assert_eq!(
            view.rows,
            vec![
                CartRow {
                    label: "Trail Cap [Size: M] x 5".to_string(),
                    line_total: "$50.00".to_string(),
                },
                CartRow {
                    label: "Socks x 1".to_string(),
                    line_total: "$15.00".to_string(),
                },
            ]
        );
        assert_eq!(view.total, "$65.00");
    }

    #[test]
    fn test_markup_in_titles_is_escaped() {
        let cart = Cart::new()
            .add_line_item(
                &product("X", "<b>Bold</b> & Co", 100),
                &SelectedOptions::new(),
                Quantity::ONE,
            )
            .unwrap();
        let view = CartSummaryView::from_cart(&cart, CurrencyCode::USD);
        let html = view.render_html().unwrap();

        assert!(html.contains("&lt;b&gt;Bold&lt;/b&gt; &amp; Co x 1"));
        assert!(!html.contains("<b>"));
        assert!(!html.contains(" hidden"));
        assert!(html.contains("<span id=\"cartTotal\">$1.00</span>"));
    }
}
