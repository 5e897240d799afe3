//! Checkout commands: checkout, buy-now, copy.

use std::io::Write;

use chrono::Utc;
use weekenders_storefront::checkout::MailHandler;
use weekenders_storefront::storage::KeyValueStore;
use weekenders_storefront::{CartEngine, CartEngineError, notices};

use super::Selection;
use crate::system::{PrintMailHandler, SystemClipboard, SystemMailHandler, TerminalPrompt};

/// Email the cart, or print the empty-cart notice.
///
/// # Errors
///
/// Returns an error if the mail client cannot be reached or output cannot
/// be written.
pub fn checkout<S: KeyValueStore, W: Write>(
    engine: &mut CartEngine<S>,
    print: bool,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let today = Utc::now().date_naive();
    let result = if print {
        engine.checkout(&PrintMailHandler::new(&mut *out), today)
    } else {
        engine.checkout(&SystemMailHandler, today)
    };
    report(result.map(|_| ()), out)
}

/// Email a single product without touching the cart.
///
/// # Errors
///
/// Returns an error if the mail client cannot be reached.
pub fn buy_now<S: KeyValueStore, W: Write>(
    engine: &CartEngine<S>,
    selection: &Selection,
    print: bool,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let today = Utc::now().date_naive();
    let handler: Box<dyn MailHandler + '_> = if print {
        Box::new(PrintMailHandler::new(&mut *out))
    } else {
        Box::new(SystemMailHandler)
    };
    engine.buy_now(
        &selection.product,
        &selection.options,
        selection.quantity,
        handler.as_ref(),
        today,
    )?;
    Ok(())
}

/// Copy the order text, falling back to printing it for a manual copy.
///
/// # Errors
///
/// Returns an error if output cannot be written.
pub async fn copy<S: KeyValueStore, W: Write>(
    engine: &mut CartEngine<S>,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let prompt = TerminalPrompt::new(&mut *out);
    let result = engine.copy_order(&SystemClipboard, &prompt).await;
    drop(prompt);
    match result {
        Ok(outcome) => {
            if let Some(notice) = outcome.notice() {
                writeln!(out, "{notice}")?;
            }
            Ok(())
        }
        Err(e) => report(Err(e), out),
    }
}

/// Turn the empty-cart guard into a notice; pass real failures on.
fn report<W: Write>(
    result: Result<(), CartEngineError>,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    match result {
        Ok(()) => Ok(()),
        Err(e) if e.is_empty_cart() => {
            writeln!(out, "{}", notices::EMPTY_CART)?;
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
