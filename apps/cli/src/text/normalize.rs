//! Markup stripping for backend-supplied strings.
//!
//! Backend responses arrive as loosely markdown-formatted (and occasionally
//! HTML-formatted) text. These helpers reduce both to plain text. They are
//! pure, never fail, and are safe to call on every render.

use std::sync::LazyLock;

use regex::Regex;

static HEADING_MARKERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#{1,3}\s*").expect("heading marker regex"));

/// Strips lightweight markdown markers from a string.
///
/// Heading markers (`#`, `##`, `###` plus trailing whitespace) are removed
/// wherever they occur, not only at line starts, as a blanket replace. Bold
/// and italic markers are removed without checking pairing: every `**`
/// first, then every remaining `*`.
pub fn normalize(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    let text = HEADING_MARKERS.replace_all(raw, "");
    text.replace("**", "").replace('*', "").trim().to_string()
}

static CLOSE_P: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</p\s*>").expect("close-p regex"));
static OPEN_P: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<p[^>]*>").expect("open-p regex"));
static BR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("br regex"));
static CLOSE_LI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</li\s*>").expect("close-li regex"));
static OPEN_LI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<li[^>]*>").expect("open-li regex"));
static CLOSE_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</h[1-6]\s*>").expect("close-heading regex"));
static BOLD_TAGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?(?:strong|b)\s*>").expect("bold tag regex"));
static ANY_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("any-tag regex"));
static SPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("space run regex"));
static NEWLINE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("newline run regex"));

/// The fixed set of named entities the backend is known to emit.
const ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&rsquo;", "\u{2019}"),
    ("&lsquo;", "\u{2018}"),
    ("&rdquo;", "\u{201D}"),
    ("&ldquo;", "\u{201C}"),
];

/// Converts an HTML fragment to display-ready plain text.
///
/// Paragraph and heading closers become blank lines, `<br>` becomes a
/// newline, list items become `• ` bullets, bold tags are dropped keeping
/// their inner text, and every remaining tag is stripped. A fixed set of
/// named entities is decoded. Whitespace is then compacted: runs of
/// spaces/tabs to one space, three or more newlines to exactly two.
pub fn clean_html(raw: &str) -> String {
    let text = CLOSE_P.replace_all(raw, "\n\n");
    let text = OPEN_P.replace_all(&text, "");
    let text = BR.replace_all(&text, "\n");
    let text = CLOSE_LI.replace_all(&text, "\n");
    let text = OPEN_LI.replace_all(&text, "• ");
    let text = CLOSE_HEADING.replace_all(&text, "\n\n");
    let text = BOLD_TAGS.replace_all(&text, "");
    let text = ANY_TAG.replace_all(&text, "");

    let mut text = text.into_owned();
    for (entity, replacement) in ENTITIES {
        text = text.replace(entity, replacement);
    }

    let text = SPACE_RUNS.replace_all(&text, " ");
    let text = NEWLINE_RUNS.replace_all(&text, "\n\n");
    text.trim().to_string()
}
