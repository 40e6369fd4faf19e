use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "sync-index")]
#[command(author, version)]
#[command(about = "Regenerate INDEX.md and llms.txt from the notes/ and guides/ directories.")]
pub(crate) struct Cli {
    /// Collection root containing notes/ and guides/ (default: current directory).
    #[arg(long, default_value = ".")]
    pub(crate) root: PathBuf,

    /// Settings file (default: <root>/sync-index.yaml).
    #[arg(long)]
    pub(crate) config: Option<PathBuf>,

    /// Only report artifacts that are out of date; write nothing.
    #[arg(long)]
    pub(crate) check: bool,

    /// Print the run report as JSON instead of the progress summary.
    #[arg(long)]
    pub(crate) json: bool,

    /// Debug logging (RUST_LOG takes precedence).
    #[arg(short, long)]
    pub(crate) verbose: bool,
}
