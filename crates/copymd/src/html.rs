//! HTML parsing support.
//!
//! Parses an HTML string into the [`Node`] structure. No styles are computed;
//! every element gets the user-agent default display for its tag.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::Node;

/// Parse an HTML fragment into a Node tree.
///
/// The returned node is the fragment's root container; its children are the
/// parsed content, ready for [`crate::convert`].
///
/// # Example
///
/// ```rust
/// use copymd::{convert, parse_html};
///
/// let fragment = parse_html("<h1>Hello <em>World</em></h1>");
/// assert_eq!(convert(&fragment), "# Hello _World_");
/// ```
pub fn parse_html(html: &str) -> Node {
    let document = Html::parse_fragment(html);
    scraper_to_node(document.root_element())
}

/// Convert a scraper ElementRef to our Node structure
fn scraper_to_node(element: ElementRef) -> Node {
    let tag = element.value().name();
    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();
    let mut node = Node::element_with_attrs(tag, attrs);

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(Node::text(&text.text));
            }
            ScraperNode::Comment(comment) => {
                node.add_child(Node::comment(&comment.comment));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(scraper_to_node(child_element));
                }
            }
            _ => {}
        }
    }

    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Display;
    use crate::MarkdownService;

    #[test]
    fn test_parse_simple_html() {
        let node = parse_html("<p>Hello World</p>");
        assert!(node.is_element());
        assert_eq!(node.tag_name(), "html");
        let p = node.element_children().next().unwrap();
        assert_eq!(p.tag_name(), "p");
        assert_eq!(p.display(), Some(&Display::Block));
    }

    #[test]
    fn test_parse_keeps_attributes_and_comments() {
        let node = parse_html(r#"<a HREF="https://x.test">x</a><!-- note -->"#);
        let a = node.element_children().next().unwrap();
        assert_eq!(a.attr("href"), Some("https://x.test"));
        assert!(node.children().any(|n| matches!(n, Node::Comment(c) if c.trim() == "note")));
    }

    #[test]
    fn test_convert_html() {
        let service = MarkdownService::new();
        assert_eq!(service.convert_html("<p>Hello World</p>"), "Hello World");
        assert_eq!(
            service.convert_html("<p>Hello <strong>World</strong></p>"),
            "Hello **World**"
        );
    }

    #[test]
    fn test_convert_html_heading() {
        let service = MarkdownService::new();
        assert_eq!(service.convert_html("<h1>Title</h1>"), "# Title");
    }
}
