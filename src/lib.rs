//! mdpress — a small line-oriented Markdown-to-HTML renderer.
//!
//! The dialect is deliberately tiny: headings (`#` through `####`),
//! horizontal rules, blockquotes with an optional first-line border
//! color, ordered and unordered lists with checkbox items and
//! blank-line spacing classes, paragraphs, and bold/italic/
//! strikethrough emphasis. Anything else degrades to paragraph text —
//! rendering is total and never fails.
//!
//! ```
//! assert_eq!(mdpress_lib::render_markdown("# Title"), "<h1>Title</h1>");
//! assert_eq!(mdpress_lib::render_markdown(""), "");
//! ```
//!
//! Input is treated as trusted, author-authored text: nothing is
//! HTML-escaped unless [`RenderOptions::escape`] is set. Callers
//! injecting the output into an untrusted context own that decision.

pub mod blocks;
pub mod config;
pub mod exit_codes;
pub mod inline;
pub mod render_context;

use crate::render_context::RenderContext;

/// Options controlling a render call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// HTML-escape text content (`&`, `<`, `>`) before emphasis
    /// substitution. Off by default: literal markup in the input passes
    /// through to the output verbatim.
    pub escape: bool,
}

/// Render Markdown to an HTML fragment string with explicit options.
///
/// The output is one HTML fragment per recognized block, joined by
/// newlines, with no surrounding document wrapper. The function is
/// total: every input line is classifiable, malformed constructs
/// degrade to paragraph text, and repeated calls on the same input are
/// byte-identical.
pub fn render(content: &str, options: &RenderOptions) -> String {
    // Early return for empty content
    if content.is_empty() {
        return String::new();
    }

    let ctx = RenderContext::new(content);
    blocks::render_blocks(&ctx, options)
}

/// Render Markdown to an HTML fragment string with default options.
pub fn render_markdown(content: &str) -> String {
    render(content, &RenderOptions::default())
}
