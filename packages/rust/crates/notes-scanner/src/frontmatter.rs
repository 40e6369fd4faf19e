//! Bracket-List Frontmatter Parsing
//!
//! Extracts the handful of fields the index needs from a markdown note:
//!
//! ```text
//! ---
//! tags: [payments, x402]
//! related: [escrow-basics]
//! ---
//! # Title
//!
//! First paragraph becomes the description.
//! ```
//!
//! Parsing never fails. Anything that does not match degrades to an empty
//! list or an absent field, so a malformed note still yields a `Document`.

use std::sync::LazyLock;

use regex::Regex;

use crate::document::Document;

/// Line that opens and closes the metadata block.
pub const DELIMITER: &str = "---";

fn compile_regex(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(_compile_err) => match Regex::new(r"$^") {
            Ok(fallback) => fallback,
            Err(fallback_err) => panic!("hardcoded fallback regex must compile: {fallback_err}"),
        },
    }
}

static TITLE_REGEX: LazyLock<Regex> = LazyLock::new(|| compile_regex(r"^#[ \t]+(.+)"));
static PARAGRAPH_BREAK_REGEX: LazyLock<Regex> = LazyLock::new(|| compile_regex(r"\r?\n\r?\n"));
static LINE_BREAKS_REGEX: LazyLock<Regex> = LazyLock::new(|| compile_regex(r"(?:\r?\n)+"));
static LIST_FIELD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| compile_regex(r"(?m)^[ \t]*([\w-]+):[ \t]*\[([^\]\n]*)\]"));

/// Split content into the metadata block and everything after it.
///
/// The block must open on the very first line and close at the next line
/// that holds only the delimiter. Returns `None` when either is missing.
///
/// # Examples
///
/// ```ignore
/// let (block, rest) = split_frontmatter("---\ntags: [a]\n---\n# T\n").unwrap();
/// assert_eq!(block, "tags: [a]");
/// assert_eq!(rest, "# T\n");
/// ```
#[must_use]
pub fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let rest = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        let bare = line.trim_end_matches(['\n', '\r']);
        if bare == DELIMITER {
            let block = &rest[..offset];
            let block = block
                .strip_suffix('\n')
                .map_or(block, |b| b.strip_suffix('\r').unwrap_or(b));
            return Some((block, &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

/// Extract the raw metadata block, if the content has one.
#[must_use]
pub fn extract_frontmatter(content: &str) -> Option<&str> {
    split_frontmatter(content).map(|(block, _)| block)
}

/// Read a `key: [a, b, c]` line from a metadata block.
///
/// Tokens are split on commas and trimmed, and empty tokens keep their
/// position (`[a,,b]` has three). Blank brackets yield an empty list, as does
/// a missing key or a bracket that never closes on the same line.
#[must_use]
pub fn list_field(block: &str, key: &str) -> Vec<String> {
    LIST_FIELD_REGEX
        .captures_iter(block)
        .find(|caps| caps.get(1).is_some_and(|name| name.as_str() == key))
        .and_then(|caps| caps.get(2))
        .map(|inner| regex::Match::as_str(&inner))
        .filter(|inner| !inner.trim().is_empty())
        .map(|inner| inner.split(',').map(|token| token.trim().to_string()).collect())
        .unwrap_or_default()
}

/// Join a paragraph onto one line.
fn collapse_lines(text: &str) -> String {
    LINE_BREAKS_REGEX.replace_all(text, " ").trim().to_string()
}

/// Split a trimmed body into its leading `# Title` and the text after it.
fn split_title(body: &str) -> (Option<String>, &str) {
    let Some(caps) = TITLE_REGEX.captures(body) else {
        return (None, body);
    };
    let (Some(whole), Some(text)) = (caps.get(0), caps.get(1)) else {
        return (None, body);
    };

    let title = text.as_str().trim();
    if title.is_empty() {
        return (None, body);
    }
    (Some(title.to_string()), body[whole.end()..].trim())
}

/// First paragraph of `text` on a single line, or `None` if `text` is empty.
fn first_paragraph(text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }
    let paragraph = PARAGRAPH_BREAK_REGEX.split(text).next().unwrap_or(text);
    Some(collapse_lines(paragraph))
}

/// Build a `Document` from raw file content.
///
/// `path` and `slug` are supplied by the caller; everything else comes from
/// the content. Without a metadata block the whole trimmed content becomes
/// the description and no title is taken.
#[must_use]
pub fn parse_document(path: impl Into<String>, slug: impl Into<String>, content: &str) -> Document {
    let mut doc = Document::new(path, slug);

    let Some((block, rest)) = split_frontmatter(content) else {
        doc.description = Some(collapse_lines(content.trim()));
        return doc;
    };

    doc.tags = list_field(block, "tags");
    doc.related = list_field(block, "related");

    let (title, remainder) = split_title(rest.trim());
    doc.title = title;
    doc.description = first_paragraph(remainder);
    doc
}
