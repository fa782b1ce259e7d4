//! Utility functions and constants for fragment processing.

use once_cell::sync::Lazy;
use regex::Regex;

/// Block-level HTML elements (user-agent `display: block` defaults)
pub const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "body", "center", "dd", "details", "dialog",
    "dir", "div", "dl", "dt", "fieldset", "figcaption", "figure", "footer", "form", "frameset",
    "h1", "h2", "h3", "h4", "h5", "h6", "header", "hgroup", "hr", "html", "legend", "li", "main",
    "menu", "nav", "noframes", "ol", "p", "pre", "search", "section", "summary", "table", "ul",
];

static EXCESS_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Check if a tag is a block-level element
pub fn is_block(tag: &str) -> bool {
    BLOCK_ELEMENTS.contains(&tag.to_ascii_lowercase().as_str())
}

/// Drop blank lines around `text`.
///
/// Leading whitespace is removed up to and including its last newline, and
/// trailing whitespace from its first newline on. Whitespace on the first or
/// last content line itself is kept, so `"  foo  "` is returned unchanged.
pub fn trim_blank_lines(text: &str) -> &str {
    let lead_len = text.len() - text.trim_start().len();
    let text = match text[..lead_len].rfind('\n') {
        Some(pos) => &text[pos + 1..],
        None => text,
    };

    let tail_start = text.trim_end().len();
    match text[tail_start..].find('\n') {
        Some(pos) => &text[..tail_start + pos],
        None => text,
    }
}

/// Collapse each run of whitespace to a single space
pub fn collapse_whitespace(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_was_whitespace = false;

    for c in s.chars() {
        if c.is_whitespace() {
            if !prev_was_whitespace {
                result.push(' ');
                prev_was_whitespace = true;
            }
        } else {
            result.push(c);
            prev_was_whitespace = false;
        }
    }

    result
}

/// Replace every run of three or more newlines with one blank line
pub fn collapse_blank_lines(text: &str) -> String {
    EXCESS_NEWLINES.replace_all(text, "\n\n").into_owned()
}
