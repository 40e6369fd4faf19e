//! Note classification by primary tag.
//!
//! Every note lands in exactly one [`Group`], decided by its first tag alone.
//! The lookup table is disjoint, so declaration order only matters for
//! readability. Adding a group is a one-line table edit plus a variant.

use std::collections::BTreeMap;
use std::fmt;

use notes_scanner::Document;

/// Primary tag used when a note has no tags at all.
pub const UNCATEGORIZED: &str = "uncategorized";

/// Named bucket in the grouped index.
///
/// Variant order is render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Group {
    /// Session keys, passkeys and autonomous agent operation
    AgentAutonomy,
    /// Payment and wire protocols
    Protocols,
    /// Accounts and signing infrastructure
    Infrastructure,
    /// Fallback for unknown or missing tags
    Other,
}

/// Primary tag to group lookup, checked top to bottom.
pub const GROUP_TABLE: &[(&[&str], Group)] = &[
    (&["x402", "payments", "protocols"], Group::Protocols),
    (
        &["smart-accounts", "signing", "erc-4337", "eip-1271"],
        Group::Infrastructure,
    ),
    (
        &[
            "agent-autonomy",
            "session-keys",
            "passkeys",
            "webauthn",
            "browser-automation",
        ],
        Group::AgentAutonomy,
    ),
];

impl Group {
    /// All groups in render order.
    pub const RENDER_ORDER: [Self; 4] = [
        Self::AgentAutonomy,
        Self::Protocols,
        Self::Infrastructure,
        Self::Other,
    ];

    /// Heading text used in the grouped index.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::AgentAutonomy => "Agent Autonomy",
            Self::Protocols => "Protocols",
            Self::Infrastructure => "Infrastructure",
            Self::Other => "Other",
        }
    }

    /// Look up the group for a primary tag. Unknown tags map to [`Group::Other`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        GROUP_TABLE
            .iter()
            .find(|(tags, _)| tags.contains(&tag))
            .map_or(Self::Other, |(_, group)| *group)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Primary tag of a document, or [`UNCATEGORIZED`] when it is missing or empty.
#[must_use]
pub fn primary_tag(doc: &Document) -> &str {
    doc.primary_tag()
        .filter(|tag| !tag.is_empty())
        .unwrap_or(UNCATEGORIZED)
}

/// Assign a document to its group.
#[must_use]
pub fn classify(doc: &Document) -> Group {
    Group::from_tag(primary_tag(doc))
}

/// Notes bucketed by group, in scan order within each bucket.
#[derive(Debug, Default, Clone)]
pub struct GroupedNotes<'a> {
    groups: BTreeMap<Group, Vec<&'a Document>>,
}

impl<'a> GroupedNotes<'a> {
    /// Create an empty grouping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify every document in order.
    #[must_use]
    pub fn from_documents(docs: impl IntoIterator<Item = &'a Document>) -> Self {
        let mut grouped = Self::new();
        for doc in docs {
            grouped.insert(doc);
        }
        grouped
    }

    /// Add a document to its group.
    ///
    /// Returns `false` and leaves the grouping untouched when the group
    /// already holds a document with the same path or slug.
    pub fn insert(&mut self, doc: &'a Document) -> bool {
        let group = classify(doc);
        let members = self.groups.entry(group).or_default();
        if members
            .iter()
            .any(|m| m.path == doc.path || m.slug == doc.slug)
        {
            tracing::debug!(path = %doc.path, %group, "skipping duplicate note");
            return false;
        }
        members.push(doc);
        true
    }

    /// Members of one group, in insertion order.
    #[must_use]
    pub fn members(&self, group: Group) -> &[&'a Document] {
        self.groups
            .get(&group)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Non-empty groups in render order.
    pub fn iter(&self) -> impl Iterator<Item = (Group, &[&'a Document])> + '_ {
        self.groups
            .iter()
            .filter(|(_, members)| !members.is_empty())
            .map(|(group, members)| (*group, members.as_slice()))
    }

    /// Total number of grouped documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Whether no document has been grouped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(slug: &str, tags: &[&str]) -> Document {
        Document::new(format!("notes/{slug}.md"), slug).with_tags(tags.iter().copied())
    }

    #[test]
    fn test_from_tag_table() {
        assert_eq!(Group::from_tag("payments"), Group::Protocols);
        assert_eq!(Group::from_tag("x402"), Group::Protocols);
        assert_eq!(Group::from_tag("erc-4337"), Group::Infrastructure);
        assert_eq!(Group::from_tag("passkeys"), Group::AgentAutonomy);
        assert_eq!(Group::from_tag("gardening"), Group::Other);
        assert_eq!(Group::from_tag(UNCATEGORIZED), Group::Other);
    }

    #[test]
    fn test_from_tag_is_case_sensitive() {
        assert_eq!(Group::from_tag("Payments"), Group::Other);
    }

    #[test]
    fn test_table_is_disjoint() {
        for (i, (tags, _)) in GROUP_TABLE.iter().enumerate() {
            for (other_tags, _) in &GROUP_TABLE[i + 1..] {
                assert!(
                    tags.iter().all(|t| !other_tags.contains(t)),
                    "overlapping tag sets: {tags:?} / {other_tags:?}"
                );
            }
        }
    }

    #[test]
    fn test_classify_uses_first_tag_only() {
        let doc = note("a", &["gardening", "payments"]);
        assert_eq!(classify(&doc), Group::Other);

        let doc = note("b", &["signing", "passkeys"]);
        assert_eq!(classify(&doc), Group::Infrastructure);
    }

    #[test]
    fn test_classify_without_tags() {
        let doc = note("a", &[]);
        assert_eq!(primary_tag(&doc), UNCATEGORIZED);
        assert_eq!(classify(&doc), Group::Other);
    }

    #[test]
    fn test_classify_empty_leading_tag() {
        let doc = note("a", &["", "payments"]);
        assert_eq!(primary_tag(&doc), UNCATEGORIZED);
        assert_eq!(classify(&doc), Group::Other);
    }

    #[test]
    fn test_grouped_notes_keep_scan_order() {
        let docs = vec![
            note("c", &["payments"]),
            note("a", &["passkeys"]),
            note("b", &["x402"]),
        ];
        let grouped = GroupedNotes::from_documents(&docs);

        let protocols: Vec<&str> = grouped
            .members(Group::Protocols)
            .iter()
            .map(|d| d.slug.as_str())
            .collect();
        assert_eq!(protocols, vec!["c", "b"]);
        assert_eq!(grouped.len(), 3);
    }

    #[test]
    fn test_grouped_notes_iterate_in_render_order() {
        let docs = vec![
            note("misc", &[]),
            note("sig", &["signing"]),
            note("pay", &["payments"]),
            note("keys", &["session-keys"]),
        ];
        let grouped = GroupedNotes::from_documents(&docs);

        let order: Vec<Group> = grouped.iter().map(|(g, _)| g).collect();
        assert_eq!(order, Group::RENDER_ORDER.to_vec());
    }

    #[test]
    fn test_grouped_notes_skip_empty_groups() {
        let docs = vec![note("pay", &["payments"])];
        let grouped = GroupedNotes::from_documents(&docs);

        let order: Vec<Group> = grouped.iter().map(|(g, _)| g).collect();
        assert_eq!(order, vec![Group::Protocols]);
        assert!(grouped.members(Group::Other).is_empty());
    }

    #[test]
    fn test_duplicates_first_wins() {
        let first = note("escrow", &["payments"]).with_title("First");
        let same_path = note("escrow", &["x402"]).with_title("Second");
        let same_slug = Document::new("guides/escrow.md", "escrow").with_tags(["protocols"]);

        let mut grouped = GroupedNotes::new();
        assert!(grouped.insert(&first));
        assert!(!grouped.insert(&same_path));
        assert!(!grouped.insert(&same_slug));

        let members = grouped.members(Group::Protocols);
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].title.as_deref(), Some("First"));
    }

    #[test]
    fn test_same_slug_in_other_group_is_kept() {
        let a = note("escrow", &["payments"]);
        let b = Document::new("guides/escrow.md", "escrow").with_tags(["signing"]);

        let grouped = GroupedNotes::from_documents([&a, &b]);
        assert_eq!(grouped.len(), 2);
    }
}
