//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Reconcile session timelines and split session audio into per-group
/// WAV files.
#[derive(Debug, Parser)]
#[command(name = "sessionsplit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Session export file (defaults to the configured path).
    pub session: Option<PathBuf>,

    /// Common options for splitting.
    #[command(flatten)]
    pub split: SplitArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Arguments for a split run.
#[derive(Debug, Args)]
#[allow(clippy::struct_excessive_bools)]
pub struct SplitArgs {
    /// Session audio file to slice (default: configured path).
    #[arg(short, long, env = "SESSIONSPLIT_AUDIO")]
    pub audio: Option<PathBuf>,

    /// Name list file, one output name per line (default: configured
    /// path; a missing file selects ordinal names).
    #[arg(short, long, env = "SESSIONSPLIT_NAMES")]
    pub names: Option<PathBuf>,

    /// Output directory for extracted segments (default: configured
    /// path).
    #[arg(short, long, env = "SESSIONSPLIT_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Validate the timelines and stop; do not touch names or audio.
    #[arg(long)]
    pub check_only: bool,

    /// Abort on the first out-of-range segment instead of skipping it.
    #[arg(long)]
    pub fail_fast: bool,

    /// Emit progress events as NDJSON on stdout.
    #[arg(long)]
    pub json: bool,

    /// Suppress the progress bar.
    #[arg(long)]
    pub no_progress: bool,

    /// Suppress informational output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
