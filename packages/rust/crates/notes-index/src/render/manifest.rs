//! Flat manifest (`llms.txt`) rendering.
//!
//! The manifest lists every note, then every guide, one line each:
//!
//! ```text
//! - notes/escrow-flow.md: Escrow Flow — Funds are held until delivery.
//! ```
//!
//! Descriptions are cut at a fixed number of characters with no ellipsis.
//! Classification plays no part here.

use notes_scanner::Document;

/// Manifest title used when none is configured.
pub const DEFAULT_MANIFEST_TITLE: &str = "Research — Herbert McIntosh";

/// Manifest summary line used when none is configured.
pub const DEFAULT_MANIFEST_SUMMARY: &str = "Public research notes on crypto infrastructure, agent autonomy, and onchain operations. Maintained by an AI agent.";

/// Maximum description length in characters.
pub const DEFAULT_DESCRIPTION_LIMIT: usize = 120;

/// Static text at the top of the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestPreamble {
    /// Title line, rendered as `# <title>`
    pub title: String,
    /// Descriptive line, rendered as `> <summary>`
    pub summary: String,
    /// Navigation target for `Start:`
    pub start: String,
    /// Navigation target for `Agent instructions:`
    pub agent_instructions: String,
}

impl Default for ManifestPreamble {
    fn default() -> Self {
        Self {
            title: DEFAULT_MANIFEST_TITLE.to_string(),
            summary: DEFAULT_MANIFEST_SUMMARY.to_string(),
            start: "INDEX.md".to_string(),
            agent_instructions: "AGENTS.md".to_string(),
        }
    }
}

/// Cut `text` to at most `limit` characters.
///
/// Counts Unicode scalar values, so multi-byte characters are never split.
#[must_use]
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

/// Renders the flat manifest.
#[derive(Debug, Clone)]
pub struct ManifestRenderer {
    preamble: ManifestPreamble,
    description_limit: usize,
}

impl ManifestRenderer {
    /// Create a renderer with a custom preamble and the default limit.
    #[must_use]
    pub fn new(preamble: ManifestPreamble) -> Self {
        Self {
            preamble,
            description_limit: DEFAULT_DESCRIPTION_LIMIT,
        }
    }

    /// Override the description limit.
    #[must_use]
    pub fn with_description_limit(mut self, limit: usize) -> Self {
        self.description_limit = limit;
        self
    }

    /// Text after the em dash: truncated description, else title, else slug.
    #[must_use]
    pub fn describe<'d>(&self, doc: &'d Document) -> &'d str {
        doc.summary().map_or_else(
            || doc.display_name(),
            |summary| truncate_chars(summary, self.description_limit),
        )
    }

    /// One manifest line, without the leading newline.
    #[must_use]
    pub fn entry(&self, doc: &Document) -> String {
        format!(
            "- {}: {} — {}",
            doc.path,
            doc.display_name(),
            self.describe(doc)
        )
    }

    fn push_entries(&self, out: &mut String, docs: &[Document]) {
        for doc in docs {
            out.push('\n');
            out.push_str(&self.entry(doc));
        }
    }

    /// Render the manifest for notes followed by guides.
    #[must_use]
    pub fn render(&self, notes: &[Document], guides: &[Document]) -> String {
        let ManifestPreamble {
            title,
            summary,
            start,
            agent_instructions,
        } = &self.preamble;

        let mut out = format!(
            "# {title}\n\n> {summary}\n\n## Navigation\n\n- Start: {start}\n- Agent instructions: {agent_instructions}\n\n## Notes\n"
        );
        self.push_entries(&mut out, notes);

        out.push_str("\n\n## Guides\n");
        self.push_entries(&mut out, guides);

        out.push('\n');
        out
    }
}

impl Default for ManifestRenderer {
    fn default() -> Self {
        Self::new(ManifestPreamble::default())
    }
}
