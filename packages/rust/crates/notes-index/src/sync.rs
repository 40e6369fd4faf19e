//! Index Sync - Regenerates the grouped index and manifest from disk.
//!
//! One run scans the notes and guides collections, renders both artifacts
//! from the same documents and overwrites them. Runs keep no state, so the
//! same input always produces byte-identical output.
//!
//! # Usage
//!
//! ```ignore
//! use notes_index::{IndexSettings, IndexSync};
//!
//! let sync = IndexSync::new(".", IndexSettings::default());
//! let report = sync.run()?;
//! println!("{} notes, {} guides", report.notes, report.guides);
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use notes_scanner::{Document, NoteScanner};
use serde::Serialize;

use crate::classify::GroupedNotes;
use crate::config::IndexSettings;
use crate::error::SyncError;
use crate::render::{ManifestRenderer, render_index};

/// Documents scanned from both collections, each in file-name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    /// Primary collection; these get classified.
    pub notes: Vec<Document>,
    /// Secondary collection; listed without grouping.
    pub guides: Vec<Document>,
}

impl Collection {
    /// Notes and guides together.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len() + self.guides.len()
    }

    /// Whether both collections are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Rendered artifact contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Grouped index text.
    pub index: String,
    /// Manifest text.
    pub manifest: String,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SyncReport {
    /// Notes scanned.
    pub notes: usize,
    /// Guides scanned.
    pub guides: usize,
    /// Lines written to the manifest.
    pub entries: usize,
    /// Grouped index file written.
    pub index_file: PathBuf,
    /// Manifest file written.
    pub manifest_file: PathBuf,
    /// Whether the agent instructions file exists. It is never modified.
    pub agents_present: bool,
}

/// Regenerates the artifacts for one collection root.
#[derive(Debug, Clone)]
pub struct IndexSync {
    root: PathBuf,
    settings: IndexSettings,
    scanner: NoteScanner,
}

impl IndexSync {
    /// Create a sync for `root` with the given settings.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, settings: IndexSettings) -> Self {
        let scanner = NoteScanner::with_extension(settings.extension.clone());
        Self {
            root: root.into(),
            settings,
            scanner,
        }
    }

    /// Collection root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Settings in effect.
    #[must_use]
    pub fn settings(&self) -> &IndexSettings {
        &self.settings
    }

    /// Path of the grouped index artifact.
    #[must_use]
    pub fn index_path(&self) -> PathBuf {
        self.root.join(&self.settings.index_file)
    }

    /// Path of the manifest artifact.
    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(&self.settings.manifest_file)
    }

    /// Scan both collections.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Scan`] if a document cannot be read. Missing
    /// collection directories are empty, not errors.
    pub fn collect(&self) -> Result<Collection, SyncError> {
        let notes = self
            .scanner
            .scan_collection(&self.root, &self.settings.notes_dir)?;
        let guides = self
            .scanner
            .scan_collection(&self.root, &self.settings.guides_dir)?;
        Ok(Collection { notes, guides })
    }

    /// Render both artifacts. Pure; touches no files.
    #[must_use]
    pub fn render(&self, collection: &Collection) -> Rendered {
        let grouped = GroupedNotes::from_documents(&collection.notes);
        let index = render_index(&grouped, &collection.guides);

        let manifest = ManifestRenderer::new(self.settings.manifest_preamble())
            .with_description_limit(self.settings.description_limit)
            .render(&collection.notes, &collection.guides);

        Rendered { index, manifest }
    }

    /// Whether the agent instructions file exists.
    ///
    /// The file is only looked at. Its content is left as is.
    #[must_use]
    pub fn agents_file_present(&self) -> bool {
        let path = self.root.join(&self.settings.agents_file);
        let present = path.is_file();
        if present {
            tracing::debug!(path = %path.display(), "agent instructions present; left unchanged");
        } else {
            tracing::warn!(path = %path.display(), "agent instructions file not found");
        }
        present
    }

    /// Scan, render and write both artifacts.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Scan`] on unreadable documents and
    /// [`SyncError::Write`] if an artifact cannot be written.
    pub fn run(&self) -> Result<SyncReport, SyncError> {
        let collection = self.collect()?;
        let rendered = self.render(&collection);

        write_artifact(&self.index_path(), &rendered.index)?;
        tracing::info!(
            file = %self.settings.index_file,
            notes = collection.notes.len(),
            guides = collection.guides.len(),
            "wrote grouped index"
        );

        write_artifact(&self.manifest_path(), &rendered.manifest)?;
        tracing::info!(
            file = %self.settings.manifest_file,
            entries = collection.len(),
            "wrote manifest"
        );

        Ok(SyncReport {
            notes: collection.notes.len(),
            guides: collection.guides.len(),
            entries: collection.len(),
            index_file: PathBuf::from(&self.settings.index_file),
            manifest_file: PathBuf::from(&self.settings.manifest_file),
            agents_present: self.agents_file_present(),
        })
    }

    /// Render without writing and list the artifacts that would change.
    ///
    /// A missing artifact counts as stale.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Scan`] on unreadable documents and
    /// [`SyncError::Read`] if an existing artifact cannot be read.
    pub fn check(&self) -> Result<Vec<PathBuf>, SyncError> {
        let rendered = self.render(&self.collect()?);

        let mut stale = Vec::new();
        for (path, expected) in [
            (self.index_path(), &rendered.index),
            (self.manifest_path(), &rendered.manifest),
        ] {
            if !artifact_matches(&path, expected)? {
                tracing::info!(path = %path.display(), "artifact is out of date");
                stale.push(path);
            }
        }
        Ok(stale)
    }
}

fn write_artifact(path: &Path, content: &str) -> Result<(), SyncError> {
    fs::write(path, content).map_err(|source| SyncError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn artifact_matches(path: &Path, expected: &str) -> Result<bool, SyncError> {
    match fs::read_to_string(path) {
        Ok(current) => Ok(current == expected),
        Err(error) if error.kind() == ErrorKind::NotFound => Ok(false),
        Err(source) => Err(SyncError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}
