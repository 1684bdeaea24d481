//! Block-level scanning and HTML assembly.
//!
//! The scanner owns the document walk: it flushes the paragraph buffer
//! whenever any other block starts, emits single-line blocks itself,
//! and hands list and quote runs to their sub-parsers. Sub-parsers
//! report how many lines they consumed; all index arithmetic lives
//! here.

pub mod blockquote;
pub mod list;

use crate::RenderOptions;
use crate::inline::format_inline;
use crate::render_context::RenderContext;

use self::list::ListKind;

/// Render classified lines into an HTML fragment string.
///
/// Fragments are produced in document order and joined by newlines.
/// Every line is classifiable, so this never fails; malformed
/// constructs have already degraded to paragraph text during
/// classification.
pub fn render_blocks(ctx: &RenderContext<'_>, options: &RenderOptions) -> String {
    let mut fragments: Vec<String> = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut index = 0;

    while index < ctx.lines.len() {
        let line = &ctx.lines[index];

        if line.is_blank {
            flush_paragraph(&mut fragments, &mut paragraph, options);
            fragments.push("<br>".to_string());
            index += 1;
            continue;
        }

        if line.is_horizontal_rule {
            flush_paragraph(&mut fragments, &mut paragraph, options);
            fragments.push("<hr>".to_string());
            index += 1;
            continue;
        }

        if let Some(heading) = &line.heading {
            flush_paragraph(&mut fragments, &mut paragraph, options);
            let level = heading.level;
            let text = format_inline(heading.text, options.escape);
            fragments.push(format!("<h{level}>{text}</h{level}>"));
            index += 1;
            continue;
        }

        if line.blockquote.is_some() {
            flush_paragraph(&mut fragments, &mut paragraph, options);
            let (fragment, consumed) = blockquote::parse_blockquote(ctx, index, options);
            fragments.push(fragment);
            index += consumed;
            continue;
        }

        if let Some(item) = &line.list_item {
            flush_paragraph(&mut fragments, &mut paragraph, options);
            let kind = if item.is_ordered {
                ListKind::Ordered
            } else {
                ListKind::Unordered
            };
            let (list_fragments, consumed) = list::parse_list(ctx, index, kind, options);
            fragments.extend(list_fragments);
            index += consumed;
            continue;
        }

        paragraph.push(line.trimmed);
        index += 1;
    }

    flush_paragraph(&mut fragments, &mut paragraph, options);
    fragments.join("\n")
}

/// Emit buffered paragraph lines, joined by single spaces, as one
/// `<p>` element. No-op when the buffer is empty.
fn flush_paragraph(fragments: &mut Vec<String>, paragraph: &mut Vec<&str>, options: &RenderOptions) {
    if paragraph.is_empty() {
        return;
    }
    let text = paragraph.join(" ");
    fragments.push(format!("<p>{}</p>", format_inline(&text, options.escape)));
    paragraph.clear();
}
