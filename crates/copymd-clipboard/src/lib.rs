//! # copymd-clipboard
//!
//! Glue between the "copy as Markdown" keyboard command and [`copymd`].
//!
//! The command relay forwards [`COMMAND_NAME`] to the page as a
//! [`Message::CopyMarkdown`]; the page answers with [`copy_selection`], which
//! gates on the selection, converts it, and writes the result through a
//! [`Clipboard`]. Clipboard failures are logged and absorbed.
//!
//! ```rust
//! use copymd::{MarkdownService, Node};
//! use copymd_clipboard::{copy_selection, Clipboard, ClipboardEntry, ClipboardError, CopyOutcome, Selection};
//!
//! #[derive(Default)]
//! struct Memory(String);
//!
//! impl Clipboard for Memory {
//!     fn supports_multiple_formats(&self) -> bool {
//!         false
//!     }
//!     fn write_formats(&mut self, _: &[ClipboardEntry<'_>]) -> Result<(), ClipboardError> {
//!         Err(ClipboardError::Unavailable)
//!     }
//!     fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
//!         self.0 = text.to_string();
//!         Ok(())
//!     }
//! }
//!
//! let fragment = Node::fragment().with_child(Node::element("b").with_child(Node::text("hi")));
//! let mut clipboard = Memory::default();
//! let outcome = copy_selection(&Selection::new(fragment), &mut clipboard, &MarkdownService::new());
//!
//! assert!(matches!(outcome, CopyOutcome::Copied { .. }));
//! assert_eq!(clipboard.0, "**hi**");
//! ```

mod clipboard;
mod selection;

use copymd::MarkdownService;

pub use clipboard::{
    write_markdown, Clipboard, ClipboardEntry, ClipboardError, Written, MARKDOWN_MIME,
    PLAIN_TEXT_MIME,
};
pub use selection::{is_editable, Selection};

/// Name of the keyboard command that triggers a copy
pub const COMMAND_NAME: &str = "copy_as_markdown";

/// Messages relayed from the command handler to the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    CopyMarkdown,
}

impl Message {
    /// Wire name of the message's `action` field
    pub fn action(&self) -> &'static str {
        match self {
            Message::CopyMarkdown => "copyMarkdown",
        }
    }

    /// Parse an `action` field; unknown actions are ignored
    pub fn from_action(action: &str) -> Option<Self> {
        match action {
            "copyMarkdown" => Some(Message::CopyMarkdown),
            _ => None,
        }
    }
}

/// Map a keyboard command to the message the page should receive
pub fn relay_command(command: &str) -> Option<Message> {
    (command == COMMAND_NAME).then_some(Message::CopyMarkdown)
}

/// Why nothing was copied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Caret only, or an empty fragment
    Collapsed,
    /// The selection is inside a form field or editable region
    Editable,
    /// Conversion produced no text
    Empty,
}

/// Result of one copy command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied { markdown: String, written: Written },
    Skipped(SkipReason),
    /// Every clipboard write failed; the error was logged
    Failed,
}

/// Convert the selection and put it on the clipboard.
///
/// Never returns an error: an empty result is a skip, and clipboard failures
/// end as [`CopyOutcome::Failed`] after being logged.
pub fn copy_selection<C: Clipboard + ?Sized>(
    selection: &Selection,
    clipboard: &mut C,
    service: &MarkdownService,
) -> CopyOutcome {
    if selection.is_empty() {
        return CopyOutcome::Skipped(SkipReason::Collapsed);
    }
    if selection.in_editable() {
        log::debug!("selection is inside an editable field, leaving it to the page");
        return CopyOutcome::Skipped(SkipReason::Editable);
    }

    let markdown = service.convert(&selection.fragment);
    if markdown.is_empty() {
        return CopyOutcome::Skipped(SkipReason::Empty);
    }

    match write_markdown(clipboard, &markdown) {
        Ok(written) => CopyOutcome::Copied { markdown, written },
        Err(err) => {
            log::warn!("failed to copy selection as markdown: {err}");
            CopyOutcome::Failed
        }
    }
}

/// Handle a relayed message; returns `None` for messages this crate ignores
pub fn handle_message<C: Clipboard + ?Sized>(
    action: &str,
    selection: &Selection,
    clipboard: &mut C,
    service: &MarkdownService,
) -> Option<CopyOutcome> {
    match Message::from_action(action)? {
        Message::CopyMarkdown => Some(copy_selection(selection, clipboard, service)),
    }
}
