//! Tests for the sync pipeline.
//!
//! End-to-end runs against temporary note collections.

use std::fs;
use std::path::Path;

use notes_index::{IndexSettings, IndexSync, SyncError};
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

/// The escrow-flow note ends up under Protocols and in the manifest.
#[test]
fn test_escrow_flow_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(
        root,
        "notes/escrow-flow.md",
        "---\ntags: [payments]\n---\n\n# Escrow Flow\n\nBuyer funds sit in a contract until the seller delivers.\n",
    );

    let report = IndexSync::new(root, IndexSettings::default()).run().unwrap();
    assert_eq!(report.notes, 1);
    assert_eq!(report.guides, 0);
    assert_eq!(report.entries, 1);

    let index = read(root, "INDEX.md");
    assert_eq!(
        index,
        "# Index\n\n## Protocols\n- [Escrow Flow](notes/escrow-flow.md)\n"
    );

    let manifest = read(root, "llms.txt");
    assert!(manifest.contains(
        "\n- notes/escrow-flow.md: Escrow Flow — Buyer funds sit in a contract until the seller delivers.\n"
    ));
}

/// Full manifest layout for notes and guides.
#[test]
fn test_manifest_layout() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(
        root,
        "notes/a.md",
        "---\ntags: [signing]\n---\n# Alpha\n\nFirst note.\n",
    );
    write(root, "guides/setup.md", "# Setup\n\nInstall things.\n");

    IndexSync::new(root, IndexSettings::default()).run().unwrap();

    let expected = "# Research — Herbert McIntosh\n\
        \n\
        > Public research notes on crypto infrastructure, agent autonomy, and onchain operations. Maintained by an AI agent.\n\
        \n\
        ## Navigation\n\
        \n\
        - Start: INDEX.md\n\
        - Agent instructions: AGENTS.md\n\
        \n\
        ## Notes\n\
        \n\
        - notes/a.md: Alpha — First note.\n\
        \n\
        ## Guides\n\
        \n\
        - guides/setup.md: setup — # Setup Install things.\n";
    assert_eq!(read(root, "llms.txt"), expected);

    let index = read(root, "INDEX.md");
    assert_eq!(
        index,
        "# Index\n\n## Infrastructure\n- [Alpha](notes/a.md)\n\n## Guides\n- [setup](guides/setup.md)\n"
    );
}

/// A note with no tags and no guides directory still lists under Notes.
#[test]
fn test_untagged_note_without_guides() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, "notes/scratch.md", "---\nstatus: draft\n---\nLoose thoughts.\n");

    let report = IndexSync::new(root, IndexSettings::default()).run().unwrap();
    assert_eq!(report.guides, 0);

    let manifest = read(root, "llms.txt");
    assert!(manifest.contains("\n- notes/scratch.md: scratch — Loose thoughts.\n"));
    assert!(manifest.ends_with("## Guides\n\n"));

    let index = read(root, "INDEX.md");
    assert_eq!(index, "# Index\n\n## Other\n- [scratch](notes/scratch.md)\n");
}

/// Long descriptions are cut at exactly 120 characters.
#[test]
fn test_manifest_truncation() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let description = "d".repeat(200);
    write(
        root,
        "notes/long.md",
        &format!("---\ntags: [x402]\n---\n# Long\n\n{description}\n"),
    );

    IndexSync::new(root, IndexSettings::default()).run().unwrap();

    let manifest = read(root, "llms.txt");
    let expected_line = format!("- notes/long.md: Long — {}\n", "d".repeat(120));
    assert!(manifest.contains(&expected_line));
    assert!(!manifest.contains(&"d".repeat(121)));
}

/// Re-running on unchanged input produces identical bytes.
#[test]
fn test_rerun_is_byte_identical() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, "notes/b.md", "---\ntags: [passkeys, webauthn]\n---\n# B\n\nBee.\n");
    write(root, "notes/a.md", "---\ntags: [erc-4337]\n---\n# A\n\nAy.\n");
    write(root, "notes/c.md", "no metadata at all");
    write(root, "guides/g.md", "---\ntags: []\n---\n# G\n");

    let sync = IndexSync::new(root, IndexSettings::default());
    sync.run().unwrap();
    let first = (read(root, "INDEX.md"), read(root, "llms.txt"));

    sync.run().unwrap();
    let second = (read(root, "INDEX.md"), read(root, "llms.txt"));

    assert_eq!(first, second);
    assert!(sync.check().unwrap().is_empty());
}

/// Missing collections produce the bare artifacts.
#[test]
fn test_empty_root() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    let report = IndexSync::new(root, IndexSettings::default()).run().unwrap();
    assert_eq!(report.entries, 0);
    assert!(!report.agents_present);
    assert_eq!(read(root, "INDEX.md"), "# Index\n");
    assert!(read(root, "llms.txt").ends_with("## Notes\n\n\n## Guides\n\n"));
}

/// The agents file is detected and left untouched.
#[test]
fn test_agents_file_is_not_modified() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let agents = "# Agents\n\nHand-written structure section.\n";
    write(root, "AGENTS.md", agents);
    write(root, "notes/a.md", "---\ntags: [payments]\n---\n# A\n");

    let report = IndexSync::new(root, IndexSettings::default()).run().unwrap();
    assert!(report.agents_present);
    assert_eq!(read(root, "AGENTS.md"), agents);
}

/// `check` reports stale artifacts without writing.
#[test]
fn test_check_detects_stale_artifacts() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, "notes/a.md", "---\ntags: [payments]\n---\n# A\n");

    let sync = IndexSync::new(root, IndexSettings::default());
    assert_eq!(sync.check().unwrap().len(), 2);
    assert!(!root.join("INDEX.md").exists());

    sync.run().unwrap();
    write(root, "notes/b.md", "---\ntags: [signing]\n---\n# B\n");

    let stale = sync.check().unwrap();
    assert_eq!(stale, vec![sync.index_path(), sync.manifest_path()]);
}

/// Custom settings change directories, file names and the preamble.
#[test]
fn test_custom_settings() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(
        root,
        "sync-index.yaml",
        "notes_dir: research\nmanifest_file: MANIFEST.txt\ndescription_limit: 5\nmanifest:\n  title: Lab\n  summary: Experiments.\n",
    );
    write(root, "research/r.md", "---\ntags: [protocols]\n---\n# R\n\nResearch body.\n");

    let settings = IndexSettings::load(&root.join("sync-index.yaml"));
    IndexSync::new(root, settings).run().unwrap();

    let manifest = read(root, "MANIFEST.txt");
    assert!(manifest.starts_with("# Lab\n\n> Experiments.\n"));
    assert!(manifest.contains("\n- research/r.md: R — Resea\n"));
    assert!(read(root, "INDEX.md").contains("- [R](research/r.md)"));
}

/// Unreadable documents abort the run.
#[test]
fn test_unreadable_document_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join("notes")).unwrap();
    fs::write(root.join("notes/bad.md"), [0xc3, 0x28]).unwrap();

    let result = IndexSync::new(root, IndexSettings::default()).run();
    assert!(matches!(result, Err(SyncError::Scan(_))));
    assert!(!root.join("INDEX.md").exists());
}
