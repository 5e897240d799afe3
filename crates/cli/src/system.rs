//! Operating-system collaborators: mail client, clipboard, terminal prompt.

use std::io::Write;
use std::process::{Command, Stdio};

use tokio::io::AsyncWriteExt;
use weekenders_storefront::checkout::{
    Clipboard, ClipboardError, MailError, MailHandler, MailtoRequest, ManualCopyPrompt,
};

/// Opens `mailto:` URIs with the platform's default handler.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemMailHandler;

impl SystemMailHandler {
    fn command(uri: &str) -> Command {
        if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(uri);
            cmd
        } else if cfg!(windows) {
            let mut cmd = Command::new("rundll32");
            cmd.args(["url.dll,FileProtocolHandler", uri]);
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(uri);
            cmd
        }
    }
}

impl MailHandler for SystemMailHandler {
    fn open(&self, request: &MailtoRequest) -> Result<(), MailError> {
        let status = Self::command(&request.to_uri())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;
        if status.success() {
            Ok(())
        } else {
            Err(MailError::Handler(status.to_string()))
        }
    }
}

/// Writes the `mailto:` URI to stdout instead of opening it.
pub struct PrintMailHandler<W> {
    out: std::cell::RefCell<W>,
}

impl<W: Write> PrintMailHandler<W> {
    pub const fn new(out: W) -> Self {
        Self {
            out: std::cell::RefCell::new(out),
        }
    }
}

impl<W: Write> MailHandler for PrintMailHandler<W> {
    fn open(&self, request: &MailtoRequest) -> Result<(), MailError> {
        writeln!(self.out.borrow_mut(), "{}", request.to_uri())?;
        Ok(())
    }
}

const NO_ARGS: &[&str] = &[];
const XCLIP_ARGS: &[&str] = &["-selection", "clipboard"];
const XSEL_ARGS: &[&str] = &["--clipboard", "--input"];

const MACOS_CLIPBOARD: &[(&str, &[&str])] = &[("pbcopy", NO_ARGS)];
const WINDOWS_CLIPBOARD: &[(&str, &[&str])] = &[("clip", NO_ARGS)];
const UNIX_CLIPBOARD: &[(&str, &[&str])] = &[
    ("wl-copy", NO_ARGS),
    ("xclip", XCLIP_ARGS),
    ("xsel", XSEL_ARGS),
];

/// Clipboard programs tried in order, per platform.
const fn clipboard_programs() -> &'static [(&'static str, &'static [&'static str])] {
    if cfg!(target_os = "macos") {
        MACOS_CLIPBOARD
    } else if cfg!(windows) {
        WINDOWS_CLIPBOARD
    } else {
        UNIX_CLIPBOARD
    }
}

/// The desktop clipboard, reached through the platform's copy utility.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        for (program, args) in clipboard_programs() {
            let spawned = tokio::process::Command::new(program)
                .args(*args)
                .stdin(Stdio::piped())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn();
            let mut child = match spawned {
                Ok(child) => child,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => return Err(e.into()),
            };

            if let Some(mut stdin) = child.stdin.take() {
                stdin.write_all(text.as_bytes()).await?;
                stdin.shutdown().await?;
            }
            let status = child.wait().await?;
            return if status.success() {
                tracing::debug!(program, "Clipboard write succeeded");
                Ok(())
            } else {
                Err(ClipboardError::Rejected(format!("{program} exited with {status}")))
            };
        }
        Err(ClipboardError::Unavailable(
            "no clipboard utility found".to_string(),
        ))
    }
}

/// Prints the order text for manual copying.
pub struct TerminalPrompt<W> {
    out: std::cell::RefCell<W>,
}

impl<W: Write> TerminalPrompt<W> {
    pub const fn new(out: W) -> Self {
        Self {
            out: std::cell::RefCell::new(out),
        }
    }
}

impl<W: Write> ManualCopyPrompt for TerminalPrompt<W> {
    fn show(&self, title: &str, text: &str) {
        let mut out = self.out.borrow_mut();
        // Nothing sensible to do if the terminal itself is gone.
        let _ = writeln!(out, "{title}:\n\n{text}");
    }
}
