//! The copy command from relayed message to clipboard contents.

use copymd::{parse_html, MarkdownService, Node};
use copymd_clipboard::{
    handle_message, relay_command, Clipboard, ClipboardEntry, ClipboardError, CopyOutcome,
    Selection, SkipReason, Written, MARKDOWN_MIME, PLAIN_TEXT_MIME,
};

/// Records what was written, like a browser clipboard would hold it
#[derive(Default)]
struct RecordingClipboard {
    rich: bool,
    reject_rich: bool,
    reject_all: bool,
    items: Vec<(String, String)>,
}

impl Clipboard for RecordingClipboard {
    fn supports_multiple_formats(&self) -> bool {
        self.rich
    }

    fn write_formats(&mut self, entries: &[ClipboardEntry<'_>]) -> Result<(), ClipboardError> {
        if self.reject_rich || self.reject_all {
            return Err(ClipboardError::Rejected("NotAllowedError".to_string()));
        }
        self.items = entries
            .iter()
            .map(|entry| (entry.mime.to_string(), entry.data.to_string()))
            .collect();
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.reject_all {
            return Err(ClipboardError::Unavailable);
        }
        self.items = vec![(PLAIN_TEXT_MIME.to_string(), text.to_string())];
        Ok(())
    }
}

fn run(selection: &Selection, clipboard: &mut RecordingClipboard) -> CopyOutcome {
    let _ = env_logger::builder().is_test(true).try_init();
    let message = relay_command("copy_as_markdown").expect("command is relayed");
    handle_message(message.action(), selection, clipboard, &MarkdownService::new())
        .expect("copy message is handled")
}

fn selection(html: &str) -> Selection {
    Selection::new(parse_html(html))
}

#[test]
fn copies_markdown_and_plain_text() {
    let mut clipboard = RecordingClipboard {
        rich: true,
        ..Default::default()
    };
    let outcome = run(&selection("<p>Hello <b>World</b></p>"), &mut clipboard);

    assert_eq!(
        outcome,
        CopyOutcome::Copied {
            markdown: "Hello **World**".to_string(),
            written: Written::MarkdownAndPlainText,
        }
    );
    assert_eq!(
        clipboard.items,
        vec![
            (MARKDOWN_MIME.to_string(), "Hello **World**".to_string()),
            (PLAIN_TEXT_MIME.to_string(), "Hello **World**".to_string()),
        ]
    );
}

#[test]
fn falls_back_to_plain_text() {
    let mut clipboard = RecordingClipboard {
        rich: true,
        reject_rich: true,
        ..Default::default()
    };
    let outcome = run(&selection("<ol><li>A</li><li>B</li></ol>"), &mut clipboard);

    assert!(matches!(
        outcome,
        CopyOutcome::Copied {
            written: Written::PlainText,
            ..
        }
    ));
    assert_eq!(
        clipboard.items,
        vec![(PLAIN_TEXT_MIME.to_string(), "1. A\n2. B".to_string())]
    );
}

#[test]
fn clipboard_failure_is_absorbed() {
    let mut clipboard = RecordingClipboard {
        reject_all: true,
        ..Default::default()
    };
    assert_eq!(run(&selection("<p>x</p>"), &mut clipboard), CopyOutcome::Failed);
    assert!(clipboard.items.is_empty());
}

#[test]
fn collapsed_selection_is_skipped() {
    let mut clipboard = RecordingClipboard::default();
    assert_eq!(
        run(&Selection::collapsed(), &mut clipboard),
        CopyOutcome::Skipped(SkipReason::Collapsed)
    );
}

#[test]
fn editable_selection_is_skipped() {
    let mut clipboard = RecordingClipboard::default();
    let selection = selection("<p>typed</p>").with_anchor_ancestors(vec![
        Node::element("p"),
        Node::element_with_attrs("div", vec![("contenteditable", "true")]),
        Node::element("body"),
    ]);
    assert_eq!(
        run(&selection, &mut clipboard),
        CopyOutcome::Skipped(SkipReason::Editable)
    );
    assert!(clipboard.items.is_empty());
}

#[test]
fn blank_conversion_is_skipped() {
    let mut clipboard = RecordingClipboard::default();
    assert_eq!(
        run(&selection("<p></p><!-- x -->"), &mut clipboard),
        CopyOutcome::Skipped(SkipReason::Empty)
    );
}

#[test]
fn unknown_messages_are_ignored() {
    let mut clipboard = RecordingClipboard::default();
    let outcome = handle_message(
        "paste",
        &selection("<p>x</p>"),
        &mut clipboard,
        &MarkdownService::new(),
    );
    assert!(outcome.is_none());
}
