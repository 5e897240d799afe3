//! "Copy order to clipboard" with a manual-copy fallback.

use std::future::Future;

use thiserror::Error;
use tracing::{info, warn};

use crate::notices;

/// Why the clipboard refused the text.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// No clipboard is reachable from this environment.
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    /// The clipboard was reachable but refused the write.
    #[error("clipboard write rejected: {0}")]
    Rejected(String),

    #[error("clipboard I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// System clipboard. A single outstanding write, no cancellation.
pub trait Clipboard {
    /// Place `text` on the clipboard.
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), ClipboardError>> + Send;
}

/// Synchronous prompt showing text for the user to copy by hand.
pub trait ManualCopyPrompt {
    fn show(&self, title: &str, text: &str);
}

/// Which path delivered the order text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The text is on the clipboard.
    Copied,
    /// The clipboard refused; the text was shown in a prompt instead.
    Prompted,
}

impl CopyOutcome {
    /// Notice to show the user, if any. The prompt speaks for itself.
    #[must_use]
    pub const fn notice(self) -> Option<&'static str> {
        match self {
            Self::Copied => Some(notices::ORDER_COPIED),
            Self::Prompted => None,
        }
    }
}

/// Try the clipboard, and fall back to the prompt on any failure.
pub async fn copy_order<C, P>(clipboard: &C, prompt: &P, text: &str) -> CopyOutcome
where
    C: Clipboard + ?Sized,
    P: ManualCopyPrompt + ?Sized,
{
    match clipboard.write_text(text).await {
        Ok(()) => {
            info!(bytes = text.len(), "Order copied to clipboard");
            CopyOutcome::Copied
        }
        Err(e) => {
            warn!(error = %e, "Clipboard write failed, showing manual copy prompt");
            prompt.show(notices::COPY_PROMPT_TITLE, text);
            CopyOutcome::Prompted
        }
    }
}
