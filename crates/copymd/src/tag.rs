//! Tag classification for the serializer's dispatch.

/// Element kinds the serializer recognizes.
///
/// Both passes match on this instead of comparing tag strings; unrecognized
/// tags land in [`Tag::Other`] and take the generic block/inline path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// `h1` through `h6`
    Heading(u8),
    /// Paragraph-like and sectioning containers whose children render inline
    Container,
    Blockquote,
    Pre,
    List { ordered: bool },
    ListItem,
    Table,
    HorizontalRule,
    LineBreak,
    Code,
    Strong,
    Emphasis,
    Strike,
    Link,
    Image,
    Other,
}

impl Tag {
    pub fn classify(tag_name: &str) -> Self {
        match tag_name.to_ascii_lowercase().as_str() {
            "h1" => Tag::Heading(1),
            "h2" => Tag::Heading(2),
            "h3" => Tag::Heading(3),
            "h4" => Tag::Heading(4),
            "h5" => Tag::Heading(5),
            "h6" => Tag::Heading(6),
            "p" | "div" | "section" | "article" | "header" | "footer" | "main" => Tag::Container,
            "blockquote" => Tag::Blockquote,
            "pre" => Tag::Pre,
            "ul" => Tag::List { ordered: false },
            "ol" => Tag::List { ordered: true },
            "li" => Tag::ListItem,
            "table" => Tag::Table,
            "hr" => Tag::HorizontalRule,
            "br" => Tag::LineBreak,
            "code" => Tag::Code,
            "strong" | "b" => Tag::Strong,
            "em" | "i" => Tag::Emphasis,
            "del" | "s" | "strike" => Tag::Strike,
            "a" => Tag::Link,
            "img" => Tag::Image,
            _ => Tag::Other,
        }
    }
}
