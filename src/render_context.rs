//! Pre-computed per-line information for the block scanner.
//!
//! Every render call builds a fresh [`RenderContext`] that splits the
//! source into lines and classifies each one exactly once. The block
//! scanner then only looks at classification facts; no regex runs twice
//! and no state survives across calls.

use regex::Regex;
use std::sync::LazyLock;

// Block-level patterns, tested against the trimmed line. The scanner's
// priority order (blank, rule, heading, blockquote, ordered, unordered,
// paragraph) is enforced here so a line carries at most one block role.
static HORIZONTAL_RULE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-{3,}$").unwrap());
static HEADING_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{1,4})\s+(.+)$").unwrap());
static ORDERED_ITEM_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s+(.+)$").unwrap());
static UNORDERED_ITEM_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-*]\s+(.+)$").unwrap());
static BLOCKQUOTE_PREFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^>\s*").unwrap());

/// Pre-computed information about a single input line.
#[derive(Debug, Clone)]
pub struct LineInfo<'a> {
    /// The line with surrounding whitespace trimmed
    pub trimmed: &'a str,
    /// Whether the line is blank (empty or only whitespace)
    pub is_blank: bool,
    /// Whether the line is a horizontal rule (three or more dashes)
    pub is_horizontal_rule: bool,
    /// Heading information if this line is a heading
    pub heading: Option<HeadingInfo<'a>>,
    /// List item information if this line is a list item
    pub list_item: Option<ListItemInfo<'a>>,
    /// Blockquote information if this line is a blockquote line
    pub blockquote: Option<BlockquoteInfo<'a>>,
}

/// Information about a heading line
#[derive(Debug, Clone)]
pub struct HeadingInfo<'a> {
    /// Heading level (1-4), the run length of leading `#`
    pub level: usize,
    /// The heading text after the marker
    pub text: &'a str,
}

/// Information about a list item line
#[derive(Debug, Clone)]
pub struct ListItemInfo<'a> {
    /// Whether the marker is ordered (`1.`) or unordered (`-` or `*`)
    pub is_ordered: bool,
    /// Item text after the marker
    pub text: &'a str,
}

/// Information about a blockquote line
#[derive(Debug, Clone)]
pub struct BlockquoteInfo<'a> {
    /// Content after the `>` marker and any whitespace that follows it
    pub content: &'a str,
}

/// The document as an ordered sequence of classified lines.
///
/// Built fresh for every render call; dropping it drops all scan state.
#[derive(Debug)]
pub struct RenderContext<'a> {
    /// Classified lines in document order
    pub lines: Vec<LineInfo<'a>>,
}

impl<'a> RenderContext<'a> {
    pub fn new(content: &'a str) -> Self {
        Self {
            lines: content.lines().map(classify_line).collect(),
        }
    }
}

/// Classify one raw line into its block role.
///
/// Tests run in scanner priority order and stop at the first match, so
/// `---` is a rule and never an unordered item, and a `#`-line that is
/// not a well-formed heading falls through to plain text.
fn classify_line(line: &str) -> LineInfo<'_> {
    let trimmed = line.trim();
    let mut info = LineInfo {
        trimmed,
        is_blank: trimmed.is_empty(),
        is_horizontal_rule: false,
        heading: None,
        list_item: None,
        blockquote: None,
    };

    if info.is_blank {
        return info;
    }

    if HORIZONTAL_RULE_REGEX.is_match(trimmed) {
        info.is_horizontal_rule = true;
    } else if let Some(cap) = HEADING_REGEX.captures(trimmed) {
        info.heading = Some(HeadingInfo {
            level: cap.get(1).map_or(0, |m| m.as_str().len()),
            text: cap.get(2).map_or("", |m| m.as_str()),
        });
    } else if trimmed.starts_with('>') {
        // Strip one `>` and the whitespace after it; nested markers
        // stay in the content.
        let content = match BLOCKQUOTE_PREFIX_REGEX.find(trimmed) {
            Some(m) => &trimmed[m.end()..],
            None => trimmed,
        };
        info.blockquote = Some(BlockquoteInfo { content });
    } else if let Some(cap) = ORDERED_ITEM_REGEX.captures(trimmed) {
        info.list_item = Some(ListItemInfo {
            is_ordered: true,
            text: cap.get(1).map_or("", |m| m.as_str()),
        });
    } else if let Some(cap) = UNORDERED_ITEM_REGEX.captures(trimmed) {
        info.list_item = Some(ListItemInfo {
            is_ordered: false,
            text: cap.get(1).map_or("", |m| m.as_str()),
        });
    }

    info
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(line: &str) -> LineInfo<'_> {
        classify_line(line)
    }

    #[test]
    fn blank_lines() {
        assert!(classify("").is_blank);
        assert!(classify("   ").is_blank);
        assert!(classify("\t").is_blank);
        assert!(!classify("x").is_blank);
    }

    #[test]
    fn horizontal_rules() {
        assert!(classify("---").is_horizontal_rule);
        assert!(classify("----------").is_horizontal_rule);
        assert!(classify("  ---  ").is_horizontal_rule);
        // Two dashes or interleaved spaces are not a rule
        assert!(!classify("--").is_horizontal_rule);
        assert!(!classify("- - -").is_horizontal_rule);
    }

    #[test]
    fn headings() {
        let info = classify("# Title");
        let heading = info.heading.expect("should be a heading");
        assert_eq!(heading.level, 1);
        assert_eq!(heading.text, "Title");

        let info = classify("#### deep");
        assert_eq!(info.heading.unwrap().level, 4);

        // Five hashes exceed the supported depth
        assert!(classify("##### too deep").heading.is_none());
        // Missing space after the marker
        assert!(classify("#nospace").heading.is_none());
        // Marker with no text
        assert!(classify("#").heading.is_none());
    }

    #[test]
    fn heading_consumes_extra_marker_whitespace() {
        let info = classify("##   padded text");
        let heading = info.heading.unwrap();
        assert_eq!(heading.level, 2);
        assert_eq!(heading.text, "padded text");
    }

    #[test]
    fn ordered_items() {
        let info = classify("1. first");
        let item = info.list_item.expect("should be a list item");
        assert!(item.is_ordered);
        assert_eq!(item.text, "first");

        let item = classify("42. answer").list_item.unwrap();
        assert_eq!(item.text, "answer");

        // No space after the dot, or no content at all
        assert!(classify("1.nospace").list_item.is_none());
        assert!(classify("1.").list_item.is_none());
    }

    #[test]
    fn unordered_items() {
        let item = classify("- dash").list_item.unwrap();
        assert!(!item.is_ordered);
        assert_eq!(item.text, "dash");

        let item = classify("* star").list_item.unwrap();
        assert!(!item.is_ordered);
        assert_eq!(item.text, "star");

        // A bare marker is plain text
        assert!(classify("-").list_item.is_none());
        assert!(classify("*").list_item.is_none());
    }

    #[test]
    fn blockquote_marker_is_stripped() {
        let quote = classify("> quoted").blockquote.unwrap();
        assert_eq!(quote.content, "quoted");

        let quote = classify(">tight").blockquote.unwrap();
        assert_eq!(quote.content, "tight");

        // Only one marker is stripped; nesting is not interpreted
        let quote = classify(">> deep").blockquote.unwrap();
        assert_eq!(quote.content, "> deep");

        let quote = classify(">").blockquote.unwrap();
        assert_eq!(quote.content, "");
    }

    #[test]
    fn indented_blockquote_is_recognized() {
        let quote = classify("   > indented").blockquote.unwrap();
        assert_eq!(quote.content, "indented");
    }

    #[test]
    fn priority_rule_over_list() {
        // `---` matches the rule pattern before the unordered pattern
        // ever runs.
        let info = classify("---");
        assert!(info.is_horizontal_rule);
        assert!(info.list_item.is_none());
    }

    #[test]
    fn plain_text_has_no_role() {
        let info = classify("just some words");
        assert!(!info.is_blank);
        assert!(!info.is_horizontal_rule);
        assert!(info.heading.is_none());
        assert!(info.list_item.is_none());
        assert!(info.blockquote.is_none());
        assert_eq!(info.trimmed, "just some words");
    }
}
