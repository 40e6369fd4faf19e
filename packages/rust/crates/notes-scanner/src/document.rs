//! Document Types
//!
//! Defines the normalized record produced for every scanned note or guide.
//! Fields come from the bracket-list frontmatter plus the first heading and
//! paragraph of the body.

/// Represents one scanned markdown document.
///
/// Built once per file per run and never mutated afterwards. `path` is the
/// identity used for deduplication; `slug` is the display fallback.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    /// Collection-relative location, e.g. `notes/escrow-flow.md`
    pub path: String,
    /// File name without its extension
    pub slug: String,
    /// Values of the `tags: [...]` frontmatter line, in order
    pub tags: Vec<String>,
    /// Values of the `related: [...]` frontmatter line, in order
    pub related: Vec<String>,
    /// Text of the leading level-1 heading
    pub title: Option<String>,
    /// First paragraph after the title, on a single line
    pub description: Option<String>,
}

impl Document {
    /// Create a `Document` with identity fields only.
    #[must_use]
    pub fn new(path: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            slug: slug.into(),
            ..Self::default()
        }
    }

    /// Set the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add multiple tags.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Title if present, otherwise the slug.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.slug)
    }

    /// First tag, if any.
    #[must_use]
    pub fn primary_tag(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }

    /// Description when present and non-empty.
    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}
