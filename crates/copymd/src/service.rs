//! MarkdownService - the main entry point for fragment to Markdown conversion.

use crate::block::{serialize_block, RenderContext};
use crate::escape::escape;
use crate::node::{Node, NodeRef};
use crate::options::Options;
use crate::utilities::{collapse_blank_lines, trim_blank_lines};
use crate::Result;

/// Converts selected fragments to Markdown with a fixed set of options
#[derive(Debug, Clone, Default)]
pub struct MarkdownService {
    options: Options,
}

impl MarkdownService {
    /// Create a new MarkdownService with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a MarkdownService with custom options
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// Like [`MarkdownService::with_options`], rejecting unusable markers
    pub fn try_with_options(options: Options) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Convert the children of a fragment container to Markdown.
    ///
    /// Returns an empty string when the fragment has no meaningful content.
    pub fn convert(&self, container: &Node) -> String {
        let container = NodeRef::from(container);
        let output: String = container
            .children()
            .map(|child| serialize_block(child, RenderContext::default(), &self.options))
            .collect();

        let markdown = post_process(&output);
        log::debug!(
            "converted <{}> fragment to {} bytes of markdown",
            container.tag_name(),
            markdown.len()
        );
        markdown
    }

    /// Parse an HTML fragment and convert it to Markdown
    #[cfg(feature = "html")]
    pub fn convert_html(&self, html: &str) -> String {
        self.convert(&crate::html::parse_html(html))
    }

    /// Escape markdown special characters in a string
    pub fn escape(&self, text: &str) -> String {
        escape(text)
    }

    /// Get the current options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }
}

/// Trim blank lines around the document and cap blank-line runs at one
fn post_process(output: &str) -> String {
    collapse_blank_lines(trim_blank_lines(output))
}

/// Convert a fragment container to Markdown with default options.
///
/// ```
/// use copymd::{convert, Node};
///
/// let fragment = Node::fragment().with_child(
///     Node::element("p")
///         .with_child(Node::text("Hello "))
///         .with_child(Node::element("b").with_child(Node::text("World"))),
/// );
/// assert_eq!(convert(&fragment), "Hello **World**");
/// ```
pub fn convert(container: &Node) -> String {
    MarkdownService::new().convert(container)
}
