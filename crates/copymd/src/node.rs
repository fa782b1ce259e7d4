//! DOM-like node tree consumed by the serializer.
//!
//! The page collaborator clones the user's selection into a detached fragment
//! and converts it into this structure. Any parser (scraper, a live DOM bridge,
//! hand-built test trees) can produce it; the serializer only reads it.

use indexmap::IndexMap;

use crate::utilities::is_block;

/// Computed display role of an element.
///
/// Only the distinction between block-like and inline-like roles matters to the
/// serializer, but the common keywords are kept so callers can pass through
/// whatever the browser reported.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Display {
    Block,
    #[default]
    Inline,
    InlineBlock,
    ListItem,
    Table,
    TableRow,
    TableCell,
    Flex,
    Grid,
    Contents,
    None,
    /// Any keyword not listed above, stored lowercase
    Other(String),
}

impl Display {
    /// Parse a CSS `display` keyword as reported by `getComputedStyle`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "block" => Display::Block,
            "inline" => Display::Inline,
            "inline-block" => Display::InlineBlock,
            "list-item" => Display::ListItem,
            "table" => Display::Table,
            "table-row" => Display::TableRow,
            "table-cell" => Display::TableCell,
            "flex" => Display::Flex,
            "grid" => Display::Grid,
            "contents" => Display::Contents,
            "none" => Display::None,
            other => Display::Other(other.to_string()),
        }
    }

    /// User-agent default display for a tag, used when no computed style is known.
    pub fn for_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "li" => Display::ListItem,
            "table" => Display::Table,
            "tr" => Display::TableRow,
            "td" | "th" => Display::TableCell,
            "thead" => Display::Other("table-header-group".to_string()),
            "tbody" => Display::Other("table-row-group".to_string()),
            "tfoot" => Display::Other("table-footer-group".to_string()),
            "head" | "script" | "style" | "template" | "title" => Display::None,
            "#document-fragment" => Display::Contents,
            other if is_block(other) => Display::Block,
            _ => Display::Inline,
        }
    }

    /// Whether this role starts its own block (block, table, list-item, flex, grid)
    pub fn is_block_like(&self) -> bool {
        matches!(
            self,
            Display::Block | Display::Table | Display::ListItem | Display::Flex | Display::Grid
        )
    }
}

/// An element node
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Tag name, lowercase
    pub tag: String,

    /// Attributes in source order, names lowercase
    pub attributes: IndexMap<String, String>,

    /// Child nodes
    pub children: Vec<Node>,

    /// Computed display role
    pub display: Display,
}

impl Element {
    /// Create an element with the user-agent default display for its tag
    pub fn new(tag: &str) -> Self {
        let tag = tag.to_ascii_lowercase();
        let display = Display::for_tag(&tag);
        Self {
            tag,
            attributes: IndexMap::new(),
            children: Vec::new(),
            display,
        }
    }
}

/// A node of the selected fragment.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Text node
    Text(String),
    /// Element node
    Element(Element),
    /// Comment node, never rendered
    Comment(String),
}

impl Node {
    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Node::Element(Element::new(tag_name))
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let mut element = Element::new(tag_name);
        for (name, value) in attrs {
            element
                .attributes
                .insert(name.to_ascii_lowercase(), value.to_string());
        }
        Node::Element(element)
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Node::Text(content.to_string())
    }

    /// Create a new comment node
    pub fn comment(content: &str) -> Self {
        Node::Comment(content.to_string())
    }

    /// Create a detached container to hold a cloned selection
    pub fn fragment() -> Self {
        Node::element("#document-fragment")
    }

    /// Builder form of [`Node::add_child`]
    pub fn with_child(mut self, child: Node) -> Self {
        self.add_child(child);
        self
    }

    /// Override the computed display role. No effect on text and comment nodes.
    pub fn with_display(mut self, display: Display) -> Self {
        if let Node::Element(element) = &mut self {
            element.display = display;
        }
        self
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Tag name for elements, `#text` / `#comment` otherwise
    pub fn tag_name(&self) -> &str {
        match self {
            Node::Element(element) => &element.tag,
            Node::Text(_) => "#text",
            Node::Comment(_) => "#comment",
        }
    }

    /// Computed display role, `None` for non-elements
    pub fn display(&self) -> Option<&Display> {
        self.as_element().map(|element| &element.display)
    }

    /// Get an attribute value by name (case-insensitive)
    pub fn attr(&self, name: &str) -> Option<&str> {
        let element = self.as_element()?;
        element
            .attributes
            .get(name.to_ascii_lowercase().as_str())
            .map(String::as_str)
    }

    /// Get all child nodes
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.as_element()
            .into_iter()
            .flat_map(|element| element.children.iter())
    }

    /// Get only element children
    pub fn element_children(&self) -> impl Iterator<Item = &Node> {
        self.children().filter(|n| n.is_element())
    }

    /// Append a child. Text and comment nodes cannot hold children, so the
    /// child is dropped for them.
    pub fn add_child(&mut self, child: Node) {
        if let Node::Element(element) = self {
            element.children.push(child);
        }
    }

    /// Set an attribute, replacing an existing value in place
    pub fn set_attr(&mut self, name: &str, value: &str) {
        if let Node::Element(element) = self {
            element
                .attributes
                .insert(name.to_ascii_lowercase(), value.to_string());
        }
    }

    /// Get all text content from this node and descendants.
    /// Comments do not contribute, matching DOM `textContent`.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
            Node::Comment(_) => {}
        }
    }

    /// First descendant element with the given tag, in document order
    pub fn find_descendant(&self, tag: &str) -> Option<&Node> {
        for child in self.element_children() {
            if child.tag_name().eq_ignore_ascii_case(tag) {
                return Some(child);
            }
            if let Some(found) = child.find_descendant(tag) {
                return Some(found);
            }
        }
        None
    }

    /// All descendant elements with the given tag, in document order
    pub fn descendants_by_tag(&self, tag: &str) -> Vec<&Node> {
        let mut found = Vec::new();
        self.collect_descendants(tag, &mut found);
        found
    }

    fn collect_descendants<'a>(&'a self, tag: &str, found: &mut Vec<&'a Node>) {
        for child in self.element_children() {
            if child.tag_name().eq_ignore_ascii_case(tag) {
                found.push(child);
            }
            child.collect_descendants(tag, found);
        }
    }
}

/// A reference to a node with parent context.
/// This allows the inline pass to look one level up without parent pointers.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    /// The node itself
    pub node: &'a Node,
    parent_tag: Option<&'a str>,
}

impl<'a> NodeRef<'a> {
    /// Create a new NodeRef without parent context
    pub fn new(node: &'a Node) -> Self {
        Self {
            node,
            parent_tag: None,
        }
    }

    /// Create a new NodeRef with parent tag context
    pub fn with_parent(node: &'a Node, parent_tag: &'a str) -> Self {
        Self {
            node,
            parent_tag: Some(parent_tag),
        }
    }

    /// Get the parent tag name if known
    pub fn parent_tag(&self) -> Option<&'a str> {
        self.parent_tag
    }

    /// Children of this node, each carrying this node's tag as parent
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        let node = self.node;
        let tag = node.tag_name();
        node.children().map(move |child| NodeRef::with_parent(child, tag))
    }

    /// Direct element children, each carrying this node's tag as parent
    pub fn element_children(&self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        self.children().filter(|child| child.node.is_element())
    }

    pub fn tag_name(&self) -> &'a str {
        self.node.tag_name()
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.node.attr(name)
    }

    pub fn text_content(&self) -> String {
        self.node.text_content()
    }
}

impl<'a> From<&'a Node> for NodeRef<'a> {
    fn from(node: &'a Node) -> Self {
        NodeRef::new(node)
    }
}
