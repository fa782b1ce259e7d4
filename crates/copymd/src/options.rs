//! Configuration options for Markdown output

use crate::{Error, Result};

/// Options for Markdown output.
///
/// The defaults produce the dialect the clipboard command emits; changing them
/// only swaps the literal markers, never the structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Bullet list marker
    pub bullet_list_marker: char,

    /// Horizontal rule string
    pub hr: String,

    /// Fence string for code blocks
    pub fence: String,

    /// Emphasis delimiter
    pub em_delimiter: char,

    /// Strong delimiter
    pub strong_delimiter: String,

    /// Strikethrough delimiter
    pub strike_delimiter: String,

    /// Emit `@handle` links as bare text instead of `[@handle](href)`
    pub suppress_mention_links: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            bullet_list_marker: '-',
            hr: "---".to_string(),
            fence: "```".to_string(),
            em_delimiter: '_',
            strong_delimiter: "**".to_string(),
            strike_delimiter: "~~".to_string(),
            suppress_mention_links: true,
        }
    }
}

impl Options {
    /// Reject options that would produce markers Markdown cannot parse back
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("hr", &self.hr),
            ("fence", &self.fence),
            ("strong_delimiter", &self.strong_delimiter),
            ("strike_delimiter", &self.strike_delimiter),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(Error::InvalidInput(format!("{name} must not be empty")));
            }
        }
        if self.bullet_list_marker.is_whitespace() || self.em_delimiter.is_whitespace() {
            return Err(Error::InvalidInput(
                "list and emphasis markers must not be whitespace".to_string(),
            ));
        }
        Ok(())
    }
}
