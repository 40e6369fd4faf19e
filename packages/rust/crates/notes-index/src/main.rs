//! sync-index: regenerate INDEX.md and llms.txt from notes/ and guides/.
//!
//! Run this before committing new notes. AGENTS.md is checked but never
//! rewritten.
//!
//! Logging: set `RUST_LOG=notes_index=debug` (or `warn`) to adjust stderr output.

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use notes_index::{DEFAULT_SETTINGS_FILE, IndexSettings, IndexSync};

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG overrides; --verbose => debug; else info
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose {
            "notes_index=debug,notes_scanner=debug"
        } else {
            "notes_index=info,notes_scanner=info"
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| cli.root.join(DEFAULT_SETTINGS_FILE));
    let settings = IndexSettings::load(&config_path);
    let sync = IndexSync::new(&cli.root, settings);

    if cli.check {
        let stale = sync.check().context("check index artifacts")?;
        if stale.is_empty() {
            println!("Up to date.");
            return Ok(());
        }
        for path in &stale {
            println!("stale: {}", path.display());
        }
        bail!("{} artifact(s) out of date; run sync-index", stale.len());
    }

    let report = sync.run().context("regenerate index artifacts")?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serialize sync report")?
        );
        return Ok(());
    }

    println!(
        "{}: {} notes, {} guides",
        report.index_file.display(),
        report.notes,
        report.guides
    );
    println!(
        "{}: {} entries",
        report.manifest_file.display(),
        report.entries
    );
    println!("Done.");
    Ok(())
}
