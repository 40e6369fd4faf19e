//! Notes-Index - Grouped index and manifest generation for note collections.
//!
//! Reads the `notes/` and `guides/` collections through `notes-scanner`,
//! classifies notes by their first tag and renders two artifacts:
//! - `INDEX.md` - Notes grouped under fixed headings, then guides
//! - `llms.txt` - Flat manifest with one-line summaries
//!
//! # Architecture
//!
//! ```text
//! notes-index/src/
//! ├── lib.rs          # Main module and exports
//! ├── main.rs         # sync-index binary
//! ├── cli.rs          # Command-line arguments
//! ├── classify.rs     # Group, GROUP_TABLE, GroupedNotes
//! ├── config.rs       # sync-index.yaml settings
//! ├── error.rs        # SyncError enum
//! ├── sync.rs         # IndexSync pipeline
//! └── render/
//!     ├── mod.rs
//!     ├── index.rs     # Grouped index renderer
//!     └── manifest.rs  # Manifest renderer
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod classify;
pub mod config;
pub mod error;
pub mod render;
pub mod sync;

// ============================================================================
// Re-exports
// ============================================================================

pub use classify::{GROUP_TABLE, Group, GroupedNotes, UNCATEGORIZED, classify, primary_tag};
pub use config::{DEFAULT_SETTINGS_FILE, IndexSettings};
pub use error::SyncError;
pub use render::{ManifestPreamble, ManifestRenderer, render_index, truncate_chars};
pub use sync::{Collection, IndexSync, Rendered, SyncReport};

pub use notes_scanner::Document;
