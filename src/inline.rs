//! Inline emphasis substitution.
//!
//! A fixed pipeline of global, non-greedy regex passes over a block's
//! text. Order is load-bearing: both bold forms run before the italic
//! forms, so a `**bold**` pair is consumed before the single-marker
//! pass can reinterpret its asterisks as nested emphasis.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static BOLD_ASTERISK_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static BOLD_UNDERSCORE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"__(.+?)__").unwrap());
static ITALIC_ASTERISK_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.+?)\*").unwrap());
static ITALIC_UNDERSCORE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_(.+?)_").unwrap());
static STRIKETHROUGH_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"~~(.+?)~~").unwrap());

/// Expand emphasis markup (`**bold**`, `__bold__`, `*italic*`,
/// `_italic_`, `~~strikethrough~~`) into HTML tags.
///
/// When `escape` is set, text content is HTML-escaped (`&`, `<`, `>`)
/// before any substitution runs, so markup characters still trigger and
/// the emitted tags are never mangled. With `escape` off the text
/// passes through verbatim; the caller owns that trust decision.
pub fn format_inline(text: &str, escape: bool) -> String {
    let text: Cow<'_, str> = if escape {
        html_escape::encode_text(text)
    } else {
        Cow::Borrowed(text)
    };
    let text = BOLD_ASTERISK_REGEX.replace_all(&text, "<strong>$1</strong>");
    let text = BOLD_UNDERSCORE_REGEX.replace_all(&text, "<strong>$1</strong>");
    let text = ITALIC_ASTERISK_REGEX.replace_all(&text, "<em>$1</em>");
    let text = ITALIC_UNDERSCORE_REGEX.replace_all(&text, "<em>$1</em>");
    let text = STRIKETHROUGH_REGEX.replace_all(&text, "<del>$1</del>");
    text.into_owned()
}
