//! Blockquote sub-parser.
//!
//! A quote run is a sequence of `>`-lines with blank lines freely
//! interleaved; blanks are skipped outright instead of becoming `<br>`
//! markers the way top-level blanks do. The first quote line may carry
//! a border-color directive that is stripped from its content.

use regex::Regex;
use std::sync::LazyLock;

use crate::RenderOptions;
use crate::inline::format_inline;
use crate::render_context::RenderContext;

// First-line color directives: a 6-hex-digit literal or a CSS custom
// property reference, each followed by a space and content.
static HEX_COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{6})\s+(.+)$").unwrap());
static CSS_VARIABLE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(--[\w-]+)\s+(.+)$").unwrap());

/// Parse a blockquote run starting at `start`, which must point at a
/// line classified as a blockquote.
///
/// Stops at the first non-blank line that is not a quote line. Blank
/// lines the run swallows (including trailing ones) produce no output.
/// Returns the fragment and the number of lines consumed.
pub fn parse_blockquote(
    ctx: &RenderContext<'_>,
    start: usize,
    options: &RenderOptions,
) -> (String, usize) {
    let mut lines: Vec<String> = Vec::new();
    let mut border_color: Option<String> = None;
    let mut index = start;

    while index < ctx.lines.len() {
        let line = &ctx.lines[index];
        if line.is_blank {
            index += 1;
            continue;
        }
        let Some(quote) = line.blockquote.as_ref() else {
            break;
        };

        let mut content = quote.content;
        // Only the first quote line is checked for a directive; a
        // failed match leaves the whole remainder as content.
        if lines.is_empty() {
            if let Some(cap) = HEX_COLOR_REGEX.captures(content) {
                border_color = Some(format!("#{}", &cap[1]));
                content = cap.get(2).map_or("", |m| m.as_str());
            } else if let Some(cap) = CSS_VARIABLE_REGEX.captures(content) {
                border_color = Some(format!("var({})", &cap[1]));
                content = cap.get(2).map_or("", |m| m.as_str());
            }
        }
        lines.push(format_inline(content, options.escape));
        index += 1;
    }

    let style = border_color
        .map(|color| format!(" style=\"border-left-color: {color};\""))
        .unwrap_or_default();
    let fragment = format!("<blockquote{style}>\n{}\n</blockquote>", lines.join("<br>\n"));
    (fragment, index - start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(content: &str) -> (String, usize) {
        let ctx = RenderContext::new(content);
        parse_blockquote(&ctx, 0, &RenderOptions::default())
    }

    #[test]
    fn single_line_quote() {
        let (fragment, consumed) = parse("> hello");
        assert_eq!(fragment, "<blockquote>\nhello\n</blockquote>");
        assert_eq!(consumed, 1);
    }

    #[test]
    fn multi_line_quote_joins_with_breaks() {
        let (fragment, consumed) = parse("> a\n> b\n> c");
        assert_eq!(fragment, "<blockquote>\na<br>\nb<br>\nc\n</blockquote>");
        assert_eq!(consumed, 3);
    }

    #[test]
    fn blank_lines_inside_quote_are_skipped() {
        let (fragment, consumed) = parse("> a\n\n> b");
        assert_eq!(fragment, "<blockquote>\na<br>\nb\n</blockquote>");
        assert_eq!(consumed, 3);
    }

    #[test]
    fn quote_ends_at_plain_text() {
        let (fragment, consumed) = parse("> a\nplain");
        assert_eq!(fragment, "<blockquote>\na\n</blockquote>");
        assert_eq!(consumed, 1);
    }

    #[test]
    fn trailing_blanks_are_swallowed() {
        // Blanks consumed by the quote never become `<br>` fragments.
        let (fragment, consumed) = parse("> a\n\n\nplain");
        assert_eq!(fragment, "<blockquote>\na\n</blockquote>");
        assert_eq!(consumed, 3);
    }

    #[test]
    fn hex_color_directive() {
        let (fragment, _) = parse(">#ff00ff hello");
        assert_eq!(
            fragment,
            "<blockquote style=\"border-left-color: #ff00ff;\">\nhello\n</blockquote>"
        );
    }

    #[test]
    fn hex_color_is_case_tolerant() {
        let (fragment, _) = parse(">#CC00CC loud");
        assert!(fragment.contains("border-left-color: #CC00CC;"));
        assert!(fragment.contains("\nloud\n"));
    }

    #[test]
    fn css_variable_directive() {
        let (fragment, _) = parse(">--color-primary themed");
        assert_eq!(
            fragment,
            "<blockquote style=\"border-left-color: var(--color-primary);\">\nthemed\n</blockquote>"
        );
    }

    #[test]
    fn invalid_hex_degrades_to_content() {
        // Three hex digits fail the pattern; the remainder is text.
        let (fragment, _) = parse(">#f0f not a directive");
        assert_eq!(fragment, "<blockquote>\n#f0f not a directive\n</blockquote>");
    }

    #[test]
    fn directive_without_content_degrades_to_content() {
        let (fragment, _) = parse(">#ff00ff");
        assert_eq!(fragment, "<blockquote>\n#ff00ff\n</blockquote>");
    }

    #[test]
    fn directive_only_applies_to_first_line() {
        let (fragment, _) = parse("> plain\n>#ff00ff still text");
        assert_eq!(
            fragment,
            "<blockquote>\nplain<br>\n#ff00ff still text\n</blockquote>"
        );
    }

    #[test]
    fn quote_lines_are_inline_formatted() {
        let (fragment, _) = parse("> **bold** words");
        assert_eq!(fragment, "<blockquote>\n<strong>bold</strong> words\n</blockquote>");
    }

    #[test]
    fn directive_content_is_inline_formatted() {
        let (fragment, _) = parse(">--accent *soft* voice");
        assert!(fragment.contains("<em>soft</em> voice"));
    }

    #[test]
    fn empty_quote_line_keeps_its_slot() {
        let (fragment, _) = parse("> a\n>\n> b");
        assert_eq!(fragment, "<blockquote>\na<br>\n<br>\nb\n</blockquote>");
    }
}
