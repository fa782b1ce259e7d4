//! Inline pass: content that stays inside a paragraph, heading or table cell.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::escape::escape;
use crate::node::{Node, NodeRef};
use crate::options::Options;
use crate::tag::Tag;
use crate::utilities::trim_blank_lines;

/// Display text that reads as a social-media handle: optional leading
/// whitespace, `@`, then word-like characters, including common Japanese and
/// full-width ranges.
static MENTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*@[\p{L}\p{N}_.\-ー一-龠ぁ-んァ-ンａ-ｚＡ-Ｚ０-９々〆〤]+").unwrap()
});

/// Serialize a node in inline mode.
///
/// Inside a table cell, literal newlines and `<br>` elements become raw
/// `<br>` tags since a cell must stay on one line.
pub fn serialize_inline(node: NodeRef, in_table_cell: bool, options: &Options) -> String {
    let element = match node.node {
        Node::Text(text) => {
            let escaped = escape(text);
            return if in_table_cell {
                escaped.replace('\n', "<br>")
            } else {
                escaped
            };
        }
        Node::Comment(_) => return String::new(),
        Node::Element(element) => element,
    };

    match Tag::classify(&element.tag) {
        Tag::LineBreak => {
            if in_table_cell {
                "<br>".to_string()
            } else {
                "  \n".to_string()
            }
        }
        Tag::Code if node.parent_tag() != Some("pre") => {
            format!("`{}`", trim_blank_lines(&node.text_content()))
        }
        Tag::Strong => {
            let delimiter = &options.strong_delimiter;
            format!("{delimiter}{}{delimiter}", inline_children(node, in_table_cell, options))
        }
        Tag::Emphasis => {
            let delimiter = options.em_delimiter;
            format!("{delimiter}{}{delimiter}", inline_children(node, in_table_cell, options))
        }
        Tag::Strike => {
            let delimiter = &options.strike_delimiter;
            format!("{delimiter}{}{delimiter}", inline_children(node, in_table_cell, options))
        }
        Tag::Link => serialize_link(node, in_table_cell, options),
        Tag::Image => {
            let alt = node.attr("alt").unwrap_or("");
            let src = node.attr("src").unwrap_or("");
            format!("![{alt}]({src})")
        }
        _ => inline_children(node, in_table_cell, options),
    }
}

/// Concatenate the inline serializations of a node's children
pub(crate) fn inline_children(node: NodeRef, in_table_cell: bool, options: &Options) -> String {
    node.children()
        .map(|child| serialize_inline(child, in_table_cell, options))
        .collect()
}

fn serialize_link(node: NodeRef, in_table_cell: bool, options: &Options) -> String {
    let href = node.attr("href").unwrap_or("");
    let content = inline_children(node, in_table_cell, options);
    let text = match trim_blank_lines(&content) {
        "" => href,
        text => text,
    };

    if options.suppress_mention_links && is_mention(text) {
        log::trace!("link text {text:?} looks like a handle, emitting bare text");
        return text.to_string();
    }

    format!("[{text}]({href})")
}

/// Whether link text starts like an `@handle`
pub fn is_mention(text: &str) -> bool {
    MENTION.is_match(text)
}
