//! Markdown escaping for literal text runs.

use once_cell::sync::Lazy;
use regex::Regex;

static INLINE_MARKERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"([*_`~])").unwrap());
static HEADING_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#+\s").unwrap());
static QUOTE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^>\s").unwrap());

/// Escape Markdown control characters in literal text.
///
/// The passes run in a fixed order: backslashes first so later passes never
/// double-escape, then emphasis/code/strike markers, then heading-looking and
/// quote-looking line starts, then pipes. Whitespace is left alone.
///
/// ```
/// use copymd::escape;
///
/// assert_eq!(escape("*bold* a|b"), "\\*bold\\* a\\|b");
/// assert_eq!(escape("## not a heading"), "\\#\\# not a heading");
/// ```
pub fn escape(text: &str) -> String {
    let text = text.replace('\\', "\\\\");
    let text = INLINE_MARKERS.replace_all(&text, r"\$1");
    let text = HEADING_LINE.replace_all(&text, |caps: &regex::Captures| caps[0].replace('#', "\\#"));
    let text = QUOTE_LINE.replace_all(&text, r"\> ");
    text.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(escape("normal text"), "normal text");
        assert_eq!(escape("  spaced\n\tout  "), "  spaced\n\tout  ");
    }

    #[test]
    fn test_backslash_first() {
        assert_eq!(escape("a\\b"), "a\\\\b");
        assert_eq!(escape("\\*"), "\\\\\\*");
    }

    #[test]
    fn test_inline_markers() {
        assert_eq!(escape("*test*"), "\\*test\\*");
        assert_eq!(escape("snake_case"), "snake\\_case");
        assert_eq!(escape("`tick`"), "\\`tick\\`");
        assert_eq!(escape("~~gone~~"), "\\~\\~gone\\~\\~");
    }

    #[test]
    fn test_heading_runs() {
        assert_eq!(escape("# Title"), "\\# Title");
        assert_eq!(escape("### Deep"), "\\#\\#\\# Deep");
        assert_eq!(escape("intro\n## Next"), "intro\n\\#\\# Next");
        // not followed by whitespace, or not at line start
        assert_eq!(escape("#hashtag"), "#hashtag");
        assert_eq!(escape("issue # 5"), "issue # 5");
    }

    #[test]
    fn test_quote_lines() {
        assert_eq!(escape("> quoted"), "\\> quoted");
        assert_eq!(escape("line\n>\tquoted"), "line\n\\> quoted");
        assert_eq!(escape("a > b"), "a > b");
        assert_eq!(escape(">nospace"), ">nospace");
    }

    #[test]
    fn test_pipes() {
        assert_eq!(escape("a|b|c"), "a\\|b\\|c");
    }
}
