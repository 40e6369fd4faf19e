//! Error types for the sync pipeline.
//!
//! Malformed notes never surface here; only I/O on the collection and on the
//! generated artifacts can fail a run.

use std::path::PathBuf;

use notes_scanner::ScanError;
use thiserror::Error;

/// Error types for regenerating the index artifacts.
#[derive(Error, Debug)]
pub enum SyncError {
    /// A note or guide could not be read.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// An artifact could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Artifact path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An existing artifact could not be read for comparison.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Artifact path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
