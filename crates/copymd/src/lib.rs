//! # copymd
//!
//! Convert a selected HTML fragment to Markdown.
//!
//! The caller clones the user's selection into a detached container, converts
//! it into a [`Node`] tree and hands it to [`convert`]. The result is a single
//! Markdown string, or an empty string when there is nothing worth copying.
//!
//! ## Design
//!
//! Serialization is a recursive walk with two mutually recursive passes:
//!
//! - **Block pass**: paragraphs, headings, blockquotes, fenced code, lists,
//!   tables and rules, each surrounded by its own blank lines
//! - **Inline pass**: bold, italic, strikethrough, code spans, links, images,
//!   line breaks and escaped text inside a paragraph or table cell
//!
//! A final pass trims the document and caps blank-line runs at one.
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use copymd::{convert, Node};
//!
//! let list = Node::element("ol")
//!     .with_child(Node::element("li").with_child(Node::text("A")))
//!     .with_child(Node::element("li").with_child(Node::text("B")));
//! let fragment = Node::fragment().with_child(list);
//!
//! assert_eq!(convert(&fragment), "1. A\n2. B");
//! ```
//!
//! ## Example (HTML string)
//!
//! ```rust
//! use copymd::MarkdownService;
//!
//! let service = MarkdownService::new();
//! let markdown = service.convert_html(r#"<a href="https://x.test">Example</a>"#);
//! assert_eq!(markdown, "[Example](https://x.test)");
//! ```

pub mod block;
mod escape;
#[cfg(feature = "html")]
pub mod html;
pub mod inline;
pub mod node;
mod options;
mod service;
mod tag;
mod utilities;

pub use block::{serialize_block, RenderContext};
pub use escape::escape;
#[cfg(feature = "html")]
pub use html::parse_html;
pub use inline::serialize_inline;
pub use node::{Display, Element, Node, NodeRef};
pub use options::Options;
pub use service::{convert, MarkdownService};
pub use tag::Tag;
pub use utilities::{collapse_whitespace, trim_blank_lines};

/// Error type for copymd operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;
