//! Generic list sub-parser.
//!
//! Ordered and unordered lists differ only in marker pattern (already
//! folded into classification) and wrapper tag, so one implementation
//! handles both. Blank lines inside a list never become output; they
//! feed a run counter that turns into a spacing class on the next item.

use regex::Regex;
use std::sync::LazyLock;

use crate::RenderOptions;
use crate::inline::format_inline;
use crate::render_context::{ListItemInfo, RenderContext};

// Checkbox prefix on an item's text: `[x] label` or `[ ] label`.
static CHECKBOX_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\[([xX ])\]\s+(.+)$").unwrap());

/// List flavor being parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Ordered,
    Unordered,
}

impl ListKind {
    /// The wrapper element for this flavor.
    fn wrapper_tag(self) -> &'static str {
        match self {
            ListKind::Ordered => "ol",
            ListKind::Unordered => "ul",
        }
    }

    /// Whether `item` belongs to a list of this flavor.
    fn matches(self, item: &ListItemInfo<'_>) -> bool {
        match self {
            ListKind::Ordered => item.is_ordered,
            ListKind::Unordered => !item.is_ordered,
        }
    }
}

/// Spacing class for an item preceded by a run of blank lines.
///
/// A single blank line has no effect; longer runs map to progressively
/// wider spacing.
fn spacing_class(blank_run: usize) -> Option<&'static str> {
    match blank_run {
        0 | 1 => None,
        2 => Some("spacing-medium"),
        3 => Some("spacing-large"),
        _ => Some("spacing-xlarge"),
    }
}

/// Parse a list run starting at `start`, which must point at a line
/// classified as an item of `kind`.
///
/// Consumes item lines of the same flavor and interleaved blank lines;
/// stops at the first line that is neither. Returns the emitted
/// fragments and the number of lines consumed. Blank lines left pending
/// after the last item sit between blocks rather than inside the list,
/// so they surface as `<br>` fragments after the closing wrapper tag —
/// the only place trailing blanks become markers instead of spacing.
pub fn parse_list(
    ctx: &RenderContext<'_>,
    start: usize,
    kind: ListKind,
    options: &RenderOptions,
) -> (Vec<String>, usize) {
    let mut items: Vec<String> = Vec::new();
    let mut blank_run = 0usize;
    let mut index = start;

    while index < ctx.lines.len() {
        let line = &ctx.lines[index];
        if line.is_blank {
            blank_run += 1;
            index += 1;
            continue;
        }
        let Some(item) = line.list_item.as_ref().filter(|item| kind.matches(item)) else {
            break;
        };
        items.push(render_item(item.text, blank_run, options));
        blank_run = 0;
        index += 1;
    }

    let tag = kind.wrapper_tag();
    let mut fragments = vec![format!("<{tag}>\n{}\n</{tag}>", items.join("\n"))];
    fragments.extend(std::iter::repeat_n("<br>".to_string(), blank_run));
    (fragments, index - start)
}

/// Render one `<li>`: optional checkbox control, inline-formatted
/// label, spacing class from the preceding blank run.
fn render_item(text: &str, blank_run: usize, options: &RenderOptions) -> String {
    let (checkbox, label) = match CHECKBOX_REGEX.captures(text) {
        Some(cap) => {
            let checked = cap.get(1).is_some_and(|m| m.as_str().eq_ignore_ascii_case("x"));
            let control = if checked {
                r#"<input type="checkbox" checked> "#
            } else {
                r#"<input type="checkbox"> "#
            };
            (control, cap.get(2).map_or("", |m| m.as_str()))
        }
        None => ("", text),
    };
    let class = spacing_class(blank_run)
        .map(|name| format!(" class=\"{name}\""))
        .unwrap_or_default();
    format!("<li{class}>{checkbox}{}</li>", format_inline(label, options.escape))
}
