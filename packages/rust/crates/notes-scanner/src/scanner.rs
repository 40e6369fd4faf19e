//! Note Scanner - Scans one collection directory into `Document`s.
//!
//! A collection is a flat directory (`notes/`, `guides/`) of markdown files.
//! Only the top level is read, files are visited in file-name order, and a
//! missing directory is an empty collection rather than an error.
//!
//! # Example
//!
//! ```ignore
//! use notes_scanner::NoteScanner;
//!
//! let scanner = NoteScanner::new();
//! let notes = scanner.scan_collection(Path::new("."), "notes")?;
//!
//! for doc in notes {
//!     println!("{}: {:?}", doc.path, doc.title);
//! }
//! ```

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::document::Document;
use crate::error::ScanError;
use crate::frontmatter::parse_document;

/// Extension scanned when none is configured.
pub const DEFAULT_EXTENSION: &str = ".md";

/// Note Scanner - Reads a collection directory in a stable order.
#[derive(Debug, Clone)]
pub struct NoteScanner {
    extension: String,
}

impl NoteScanner {
    /// Create a scanner for `.md` files.
    #[must_use]
    pub fn new() -> Self {
        Self::with_extension(DEFAULT_EXTENSION)
    }

    /// Create a scanner for a different file-name suffix (e.g. `.markdown`).
    #[must_use]
    pub fn with_extension(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }

    /// The file-name suffix this scanner accepts.
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// List matching file names in `dir`, sorted by their bytes.
    ///
    /// Returns an empty list when `dir` does not exist or cannot be listed.
    #[must_use]
    pub fn list_files(&self, dir: &Path) -> Vec<String> {
        if !dir.is_dir() {
            tracing::warn!(
                dir = %dir.display(),
                "collection directory not found; treating as empty"
            );
            return Vec::new();
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(error) if error.depth() == 0 => {
                    tracing::warn!(
                        dir = %dir.display(),
                        error = %error,
                        "failed to list collection directory; treating as empty"
                    );
                    return Vec::new();
                }
                Err(error) => {
                    tracing::warn!(error = %error, "skipping unreadable directory entry");
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }
            let Some(name) = entry.file_name().to_str() else {
                tracing::warn!(path = %entry.path().display(), "skipping non UTF-8 file name");
                continue;
            };
            if name.ends_with(&self.extension) {
                names.push(name.to_string());
            }
        }
        names
    }

    /// Read and parse a single file from a collection.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Read`] if the file cannot be read as UTF-8.
    pub fn scan_document(
        &self,
        dir: &Path,
        collection: &str,
        name: &str,
    ) -> Result<Document, ScanError> {
        let file_path = dir.join(name);
        let content = fs::read_to_string(&file_path).map_err(|source| ScanError::Read {
            path: file_path.clone(),
            source,
        })?;

        let slug = name.strip_suffix(&self.extension).unwrap_or(name);
        let doc = parse_document(format!("{collection}/{name}"), slug, &content);

        tracing::debug!(
            path = %doc.path,
            tags = doc.tags.len(),
            has_title = doc.title.is_some(),
            "scanned document"
        );
        Ok(doc)
    }

    /// Scan `<root>/<collection>` into documents, in file-name order.
    ///
    /// Document paths are `<collection>/<file name>`.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Read`] if a listed file cannot be read. A missing
    /// directory is not an error.
    pub fn scan_collection(
        &self,
        root: &Path,
        collection: &str,
    ) -> Result<Vec<Document>, ScanError> {
        let dir = root.join(collection);
        let docs = self
            .list_files(&dir)
            .iter()
            .map(|name| self.scan_document(&dir, collection, name))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(collection, count = docs.len(), "scanned collection");
        Ok(docs)
    }
}

impl Default for NoteScanner {
    fn default() -> Self {
        Self::new()
    }
}
