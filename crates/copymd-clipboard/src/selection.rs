//! The user's selection as handed over by the page.

use copymd::Node;

/// A cloned selection.
#[derive(Debug, Clone)]
pub struct Selection {
    /// Detached container holding a clone of the selected range
    pub fragment: Node,

    /// Whether the range is collapsed (a caret, nothing selected)
    pub collapsed: bool,

    /// Element chain from the selection anchor outwards, nearest first.
    /// Only tags and attributes are consulted.
    pub anchor_ancestors: Vec<Node>,
}

impl Selection {
    /// A non-collapsed selection with no known anchor ancestry
    pub fn new(fragment: Node) -> Self {
        Self {
            fragment,
            collapsed: false,
            anchor_ancestors: Vec::new(),
        }
    }

    /// Builder for the anchor's ancestor chain
    pub fn with_anchor_ancestors(mut self, ancestors: Vec<Node>) -> Self {
        self.anchor_ancestors = ancestors;
        self
    }

    /// A caret with nothing selected
    pub fn collapsed() -> Self {
        Self {
            fragment: Node::fragment(),
            collapsed: true,
            anchor_ancestors: Vec::new(),
        }
    }

    /// Whether there is anything to convert at all
    pub fn is_empty(&self) -> bool {
        self.collapsed || self.fragment.children().next().is_none()
    }

    /// Whether the anchor sits inside a form field or editable region
    pub fn in_editable(&self) -> bool {
        is_editable(&self.anchor_ancestors)
    }
}

/// True when any element in the chain is an `input`, a `textarea`, or
/// editable through `contenteditable`.
pub fn is_editable(ancestors: &[Node]) -> bool {
    ancestors.iter().any(|node| {
        let tag = node.tag_name();
        if tag == "input" || tag == "textarea" {
            return true;
        }
        node.attr("contenteditable")
            .map(|value| {
                matches!(
                    value.trim().to_ascii_lowercase().as_str(),
                    "" | "true" | "plaintext-only"
                )
            })
            .unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editable(value: &str) -> Node {
        Node::element_with_attrs("div", vec![("contenteditable", value)])
    }

    #[test]
    fn test_form_fields_are_editable() {
        assert!(is_editable(&[Node::element("textarea")]));
        assert!(is_editable(&[Node::element("span"), Node::element("input")]));
    }

    #[test]
    fn test_contenteditable_values() {
        assert!(is_editable(&[editable("")]));
        assert!(is_editable(&[editable("TRUE")]));
        assert!(is_editable(&[editable("plaintext-only")]));
        assert!(!is_editable(&[editable("false")]));
    }

    #[test]
    fn test_editable_ancestor_wins_over_disabled_child() {
        assert!(is_editable(&[editable("false"), Node::element("p"), editable("true")]));
    }

    #[test]
    fn test_plain_page_is_not_editable() {
        assert!(!is_editable(&[]));
        assert!(!is_editable(&[Node::element("p"), Node::element("body")]));
    }

    #[test]
    fn test_empty_selection() {
        assert!(Selection::collapsed().is_empty());
        assert!(Selection::new(Node::fragment()).is_empty());
        let selection = Selection::new(Node::fragment().with_child(Node::text("x")));
        assert!(!selection.is_empty());
        assert!(!selection.in_editable());
    }
}
