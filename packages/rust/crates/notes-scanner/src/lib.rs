//! Notes-Scanner - Frontmatter extraction for markdown note collections.
//!
//! This crate turns a flat directory of markdown files into normalized
//! [`Document`] records:
//! - `frontmatter` - Bracket-list metadata, title and first paragraph
//! - `scanner` - One-level directory listing in file-name order
//!
//! # Architecture
//!
//! ```text
//! notes-scanner/src/
//! ├── lib.rs          # Main module and exports
//! ├── document.rs     # Document record
//! ├── error.rs        # ScanError enum
//! ├── frontmatter.rs  # Metadata extractor (never fails)
//! └── scanner.rs      # NoteScanner
//! ```
//!
//! # Frontmatter Support
//!
//! Only two list fields are read; everything else in the block is ignored:
//!
//! ```yaml
//! ---
//! tags: [payments, x402]
//! related: [escrow-basics, settlement]
//! ---
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod document;
pub mod error;
pub mod frontmatter;
pub mod scanner;

// ============================================================================
// Re-exports
// ============================================================================

pub use document::Document;
pub use error::ScanError;
pub use frontmatter::{extract_frontmatter, list_field, parse_document, split_frontmatter};
pub use scanner::{DEFAULT_EXTENSION, NoteScanner};

// ============================================================================
// Version
// ============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
