//! Clipboard collaborator and the write fallback chain.

/// MIME type of the Markdown representation
pub const MARKDOWN_MIME: &str = "text/markdown";

/// MIME type of the plain-text representation
pub const PLAIN_TEXT_MIME: &str = "text/plain";

/// Error type for clipboard writes
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable")]
    Unavailable,

    #[error("Clipboard write rejected: {0}")]
    Rejected(String),
}

/// One representation of the copied content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipboardEntry<'a> {
    pub mime: &'a str,
    pub data: &'a str,
}

/// A clipboard the copy command can write to.
///
/// Implementations wrap whatever the host offers: an async clipboard API that
/// takes several formats at once, or a plain-text-only fallback.
pub trait Clipboard {
    /// Whether [`Clipboard::write_formats`] can be used
    fn supports_multiple_formats(&self) -> bool;

    /// Write several representations as one clipboard item
    fn write_formats(&mut self, entries: &[ClipboardEntry<'_>]) -> Result<(), ClipboardError>;

    /// Write plain text only
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// How the content ended up on the clipboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Written {
    /// Both `text/markdown` and `text/plain`
    MarkdownAndPlainText,
    /// `text/plain` only
    PlainText,
}

/// Write `markdown` with the richest method available.
///
/// A failed multi-format write falls back to plain text; only when the plain
/// write fails too is the error returned.
pub fn write_markdown<C: Clipboard + ?Sized>(
    clipboard: &mut C,
    markdown: &str,
) -> Result<Written, ClipboardError> {
    if clipboard.supports_multiple_formats() {
        let entries = [
            ClipboardEntry {
                mime: MARKDOWN_MIME,
                data: markdown,
            },
            ClipboardEntry {
                mime: PLAIN_TEXT_MIME,
                data: markdown,
            },
        ];
        match clipboard.write_formats(&entries) {
            Ok(()) => return Ok(Written::MarkdownAndPlainText),
            Err(err) => log::warn!("multi-format clipboard write failed, retrying as plain text: {err}"),
        }
    }

    clipboard.write_text(markdown)?;
    Ok(Written::PlainText)
}
