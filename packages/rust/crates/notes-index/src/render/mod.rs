//! Artifact renderers.
//!
//! Both renderers are pure projections over the scanned documents and never
//! see each other's output.

mod index;
mod manifest;

pub use index::{GUIDES_HEADING, INDEX_HEADING, index_entry, render_index};
pub use manifest::{
    DEFAULT_DESCRIPTION_LIMIT, DEFAULT_MANIFEST_SUMMARY, DEFAULT_MANIFEST_TITLE, ManifestPreamble,
    ManifestRenderer, truncate_chars,
};
