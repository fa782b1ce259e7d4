//! Block pass: paragraphs, headings, quotes, code blocks, lists, tables.
//!
//! Every block construct brings its own surrounding newlines; runs of blank
//! lines are collapsed once at the end by the service.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::escape::escape;
use crate::inline::{inline_children, serialize_inline};
use crate::node::{Node, NodeRef};
use crate::options::Options;
use crate::tag::Tag;
use crate::utilities::{collapse_whitespace, trim_blank_lines};

static LANGUAGE_CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)language-([a-z0-9#+\-]+)").unwrap());
static LANG_CLASS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)lang-([a-z0-9#+\-]+)").unwrap());

/// Rendering state threaded down the block recursion.
///
/// Passed by value; handlers derive modified copies for their children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderContext {
    /// Nesting depth of the list currently being rendered
    pub list_indent: usize,
    /// Set below a blockquote. Informational only: the blockquote handler
    /// prefixes its own lines, nothing else reads this.
    pub in_blockquote: bool,
}

impl RenderContext {
    /// Context for a list nested one level deeper
    pub fn nested_list(self) -> Self {
        Self {
            list_indent: self.list_indent + 1,
            ..self
        }
    }

    /// Context for blockquote content
    pub fn quoted(self) -> Self {
        Self {
            in_blockquote: true,
            ..self
        }
    }
}

/// Serialize a node in block mode
pub fn serialize_block(node: NodeRef, ctx: RenderContext, options: &Options) -> String {
    let element = match node.node {
        Node::Text(text) => return escape(&collapse_whitespace(text)),
        Node::Comment(_) => return String::new(),
        Node::Element(element) => element,
    };

    match Tag::classify(&element.tag) {
        Tag::Heading(level) => {
            let content = inline_children(node, false, options);
            format!(
                "\n\n{} {}\n\n",
                "#".repeat(usize::from(level)),
                trim_blank_lines(&content)
            )
        }

        Tag::Container => {
            let content = inline_children(node, false, options);
            surround_blank_lines(trim_blank_lines(&content))
        }

        Tag::Blockquote => {
            let content = block_children(node, ctx.quoted(), options);
            let quoted = trim_blank_lines(&content)
                .split('\n')
                .map(|line| format!("> {line}"))
                .collect::<Vec<_>>()
                .join("\n");
            format!("\n{quoted}\n\n")
        }

        Tag::Pre => serialize_code_block(node, options),

        Tag::List { ordered } => serialize_list(node, ordered, ctx, options),

        // Markers belong to the enclosing list; a stray item renders bare.
        Tag::ListItem => block_children(node, ctx, options),

        Tag::Table => serialize_table(node, options),

        Tag::HorizontalRule => format!("\n\n{}\n\n", options.hr),

        _ if element.display.is_block_like() => {
            let content = block_children(node, ctx, options);
            surround_blank_lines(trim_blank_lines(&content))
        }

        _ => {
            log::trace!("<{}> has inline display, using inline pass", element.tag);
            serialize_inline(node, false, options)
        }
    }
}

fn block_children(node: NodeRef, ctx: RenderContext, options: &Options) -> String {
    node.children()
        .map(|child| serialize_block(child, ctx, options))
        .collect()
}

fn surround_blank_lines(content: &str) -> String {
    if content.is_empty() {
        String::new()
    } else {
        format!("\n\n{content}\n\n")
    }
}

fn serialize_code_block(node: NodeRef, options: &Options) -> String {
    let code = node.node.find_descendant("code");

    let language = code
        .and_then(|code| code.attr("class"))
        .and_then(code_language)
        .unwrap_or_default();

    let text = match code {
        Some(code) => code.text_content(),
        None => node.text_content(),
    };

    let fence = &options.fence;
    format!(
        "\n\n{fence}{language}\n{}\n{fence}\n\n",
        text.trim_end_matches('\n')
    )
}

/// Language identifier encoded in a `class` attribute (`language-xxx` or `lang-xxx`)
pub fn code_language(class: &str) -> Option<String> {
    LANGUAGE_CLASS
        .captures(class)
        .or_else(|| LANG_CLASS.captures(class))
        .map(|caps| caps[1].to_lowercase())
}

fn serialize_list(node: NodeRef, ordered: bool, ctx: RenderContext, options: &Options) -> String {
    let indent = "  ".repeat(ctx.list_indent);

    let items: Vec<String> = node
        .element_children()
        .filter(|child| Tag::classify(child.tag_name()) == Tag::ListItem)
        .enumerate()
        .map(|(index, item)| {
            let marker = if ordered {
                format!("{}.", index + 1)
            } else {
                options.bullet_list_marker.to_string()
            };

            let content: String = item
                .children()
                .map(|child| match Tag::classify(child.tag_name()) {
                    Tag::List { .. } => serialize_block(child, ctx.nested_list(), options),
                    _ => serialize_block(child, ctx, options),
                })
                .collect();

            let mut lines = trim_blank_lines(&content).split('\n');
            let first = format!("{indent}{marker} {}", lines.next().unwrap_or_default());
            let rest = lines
                .map(|line| format!("{indent}  {line}"))
                .collect::<Vec<_>>()
                .join("\n");

            if rest.is_empty() {
                first
            } else {
                format!("{first}\n{rest}")
            }
        })
        .collect();

    format!("\n{}\n\n", items.join("\n"))
}

fn serialize_table(node: NodeRef, options: &Options) -> String {
    let rows: Vec<Vec<String>> = node
        .node
        .descendants_by_tag("tr")
        .into_iter()
        .map(|tr| {
            NodeRef::new(tr)
                .element_children()
                .map(|cell| trim_blank_lines(&serialize_inline(cell, true, options)).to_string())
                .collect()
        })
        .collect();

    // The first row is the header whether or not it uses <th>.
    let Some((header, body)) = rows.split_first() else {
        return String::new();
    };

    let mut out = format!("|{}|\n", header.join("|"));
    out.push_str(&format!("|{}|\n", vec!["---"; header.len()].join("|")));
    for row in body {
        out.push_str(&format!("|{}|\n", row.join("|")));
    }
    out.push('\n');
    out
}
