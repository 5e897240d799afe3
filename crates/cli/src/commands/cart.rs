//! Cart commands: show, add, clear, text, html.

use std::io::Write;

use weekenders_core::{Cart, CurrencyCode, Price};
use weekenders_storefront::notices;
use weekenders_storefront::storage::KeyValueStore;
use weekenders_storefront::CartEngine;

use super::Selection;

/// Print the cart summary, or the empty-cart notice.
///
/// # Errors
///
/// Returns an error if output cannot be written.
pub fn show<S: KeyValueStore, W: Write>(
    engine: &mut CartEngine<S>,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let cart = engine.cart();
    write_summary(&cart, engine.config().currency, out)
}

/// Add the selection to the cart and print the new summary.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved or output cannot be written.
pub fn add<S: KeyValueStore, W: Write>(
    engine: &mut CartEngine<S>,
    selection: &Selection,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let cart = engine.add(&selection.product, &selection.options, selection.quantity)?;
    writeln!(out, "Added")?;
    write_summary(&cart, engine.config().currency, out)
}

/// Empty the cart.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved or output cannot be written.
pub fn clear<S: KeyValueStore, W: Write>(
    engine: &mut CartEngine<S>,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    engine.clear()?;
    writeln!(out, "Cart cleared.")?;
    Ok(())
}

/// Print the plain-text order summary.
///
/// # Errors
///
/// Returns an error if output cannot be written.
pub fn text<S: KeyValueStore, W: Write>(
    engine: &mut CartEngine<S>,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    if engine.cart().is_empty() {
        writeln!(out, "{}", notices::EMPTY_CART)?;
        return Ok(());
    }
    writeln!(out, "{}", engine.order_text())?;
    Ok(())
}

/// Print the rendered cart-summary fragment.
///
/// # Errors
///
/// Returns an error if rendering fails or output cannot be written.
pub fn html<S: KeyValueStore, W: Write>(
    engine: &mut CartEngine<S>,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    writeln!(out, "{}", engine.summary_html()?)?;
    Ok(())
}

fn write_summary<W: Write>(
    cart: &Cart,
    currency: CurrencyCode,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    if cart.is_empty() {
        writeln!(out, "{}", notices::EMPTY_CART)?;
        return Ok(());
    }

    let rows: Vec<(String, String)> = cart
        .lines()
        .iter()
        .map(|line| {
            (
                line.row_label(),
                Price::new(line.line_total(), currency).display(),
            )
        })
        .collect();
    let width = rows
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    for (label, total) in &rows {
        writeln!(out, "{label:<width$}  {total:>10}")?;
    }
    let total = Price::new(cart.total(), currency).display();
    writeln!(out, "{:<width$}  {total:>10}", "Total")?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use weekenders_core::{Email, Product, Quantity, SelectedOptions};
    use weekenders_storefront::StoreConfig;
    use weekenders_storefront::storage::MemoryStore;

    use super::*;

    fn engine() -> CartEngine<MemoryStore> {
        let config = StoreConfig::new(Email::parse("orders@example.com").unwrap(), "Test Shop");
        CartEngine::new(config, MemoryStore::new())
    }

    fn selection(qty: &str) -> Selection {
        let product: Product = serde_json::from_str(
            r#"{"title":"Trail Cap","sku":"CAP-1","price":10,"options":["Size"],"optionValues":{"Size":["M","L"]}}"#,
        )
        .unwrap();
        Selection {
            options: product.select([("Size", "L")]).unwrap(),
            product,
            quantity: Quantity::parse_lenient(qty),
        }
    }

    fn output(f: impl FnOnce(&mut Vec<u8>)) -> String {
        let mut out = Vec::new();
        f(&mut out);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_show_empty() {
        let mut engine = engine();
        let printed = output(|out| show(&mut engine, out).unwrap());
        assert_eq!(printed, "Cart is empty.\n");
    }

    #[test]
    fn test_add_then_show() {
        let mut engine = engine();
        let printed = output(|out| add(&mut engine, &selection("3"), out).unwrap());
        assert!(printed.starts_with("Added\n"));
        assert!(printed.contains("Trail Cap [Size: L] x 3"));
        assert!(printed.contains("$30.00"));

        let printed = output(|out| show(&mut engine, out).unwrap());
        assert!(printed.contains("Total"));
        assert!(printed.contains("$30.00"));
    }

    #[test]
    fn test_quantity_below_one_is_clamped() {
        let mut engine = engine();
        output(|out| add(&mut engine, &selection("-5"), out).unwrap());
        let cart = engine.cart();
        assert_eq!(cart.lines().first().unwrap().quantity, Quantity::ONE);
        assert!(cart.find(&selection("1").product.sku, &SelectedOptions::new().with("Size", "L")).is_some());
    }

    #[test]
    fn test_clear_and_text() {
        let mut engine = engine();
        output(|out| add(&mut engine, &selection("1"), out).unwrap());
        let printed = output(|out| text(&mut engine, out).unwrap());
        assert!(printed.starts_with("Order from Test Shop\n"));

        output(|out| clear(&mut engine, out).unwrap());
        let printed = output(|out| text(&mut engine, out).unwrap());
        assert_eq!(printed, "Cart is empty.\n");
    }

    #[test]
    fn test_show_prints_plain_titles() {
        let mut engine = engine();
        let product: Product =
            serde_json::from_str(r#"{"title":"Salt & Pepper","sku":"SP","price":4}"#).unwrap();
        let selection = Selection {
            product,
            options: SelectedOptions::new(),
            quantity: Quantity::ONE,
        };
        let printed = output(|out| add(&mut engine, &selection, out).unwrap());
        assert!(printed.contains("Salt & Pepper x 1"));
        assert!(!printed.contains("&amp;"));
    }

    #[test]
    fn test_add_out_of_range_fails_and_keeps_cart() {
        let mut engine = engine();
        output(|out| add(&mut engine, &selection("2"), out).unwrap());
        let gold = Selection {
            product: serde_json::from_str(r#"{"title":"Gold Bar","sku":"GOLD","price":1e20}"#)
                .unwrap(),
            options: SelectedOptions::new(),
            quantity: Quantity::parse_lenient("99999999999"),
        };

        let mut out = Vec::new();
        assert!(add(&mut engine, &gold, &mut out).is_err());
        assert!(out.is_empty());

        let printed = output(|out| show(&mut engine, out).unwrap());
        assert!(printed.contains("Trail Cap [Size: L] x 2"));
        assert!(!printed.contains("Gold Bar"));
    }

    #[test]
    fn test_html() {
        let mut engine = engine();
        let printed = output(|out| html(&mut engine, out).unwrap());
        assert!(printed.contains(" hidden"));
    }
}
