//! Grouped index (`INDEX.md`) rendering.

use notes_scanner::Document;

use crate::classify::GroupedNotes;

/// Top-level heading of the grouped index.
pub const INDEX_HEADING: &str = "Index";

/// Section heading for the ungrouped guides.
pub const GUIDES_HEADING: &str = "Guides";

/// One bullet line: `- [title or slug](path)`.
#[must_use]
pub fn index_entry(doc: &Document) -> String {
    format!("- [{}]({})\n", doc.display_name(), doc.path)
}

fn push_section<'d>(
    out: &mut String,
    heading: &str,
    docs: impl IntoIterator<Item = &'d Document>,
) {
    out.push_str(&format!("\n## {heading}\n"));
    for doc in docs {
        out.push_str(&index_entry(doc));
    }
}

/// Render the grouped index.
///
/// Groups appear in priority order and only when non-empty. Guides follow
/// under their own heading when there are any.
#[must_use]
pub fn render_index(grouped: &GroupedNotes<'_>, guides: &[Document]) -> String {
    let mut out = format!("# {INDEX_HEADING}\n");

    for (group, members) in grouped.iter() {
        push_section(&mut out, group.display_name(), members.iter().copied());
    }

    if !guides.is_empty() {
        push_section(&mut out, GUIDES_HEADING, guides);
    }

    out
}
