//! Error types for directory scanning.
//!
//! Library crates use `thiserror` for explicit error enums. Parsing itself
//! never fails, so the only failure mode here is reading a file.

use std::path::PathBuf;

use thiserror::Error;

/// Error types for scanning a note collection.
#[derive(Error, Debug)]
pub enum ScanError {
    /// A listed file could not be read as UTF-8 text.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
