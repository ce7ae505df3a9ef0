//! sessionsplit - session timeline reconciliation and audio splitting.
//!
//! Reconciles the clip and group timelines of an audio-editing session
//! export, then slices the session audio into one WAV file per validated
//! group.

#![warn(missing_docs)]

pub mod audio;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod matcher;
pub mod names;
pub mod pipeline;
pub mod session;
pub mod slicer;
pub mod timecode;

use clap::Parser;
use cli::{Cli, Command, ConfigAction};
use config::Config;
use pipeline::{EventSink, JsonSink, LogSink, SplitOptions};
use tracing::{info, warn};

pub use error::{Error, Result};

/// Main entry point for the sessionsplit CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.split.verbose, cli.split.quiet);

    let config = config::load_default_config()?;

    if let Some(command) = cli.command {
        return handle_command(command, &config);
    }

    split_session(&cli, &config)
}

/// Run a split with CLI arguments resolved against the config defaults.
fn split_session(cli: &Cli, config: &Config) -> Result<()> {
    let defaults = &config.defaults;
    let opts = SplitOptions {
        session_file: cli
            .session
            .clone()
            .unwrap_or_else(|| defaults.session_file.clone()),
        names_file: cli
            .split
            .names
            .clone()
            .unwrap_or_else(|| defaults.names_file.clone()),
        audio_file: cli
            .split
            .audio
            .clone()
            .unwrap_or_else(|| defaults.audio_file.clone()),
        output_dir: cli
            .split
            .output_dir
            .clone()
            .unwrap_or_else(|| defaults.output_dir.clone()),
        check_only: cli.split.check_only,
        fail_fast: cli.split.fail_fast,
        progress_enabled: !cli.split.quiet && !cli.split.no_progress && !cli.split.json,
    };

    let mut sink: Box<dyn EventSink> = if cli.split.json {
        Box::new(JsonSink)
    } else {
        Box::new(LogSink)
    };

    let summary = pipeline::run_split(&opts, sink.as_mut())?;

    if cli.split.json
        && let Ok(line) = serde_json::to_string(&summary.validation)
    {
        println!("{line}");
    }

    let failed_groups = summary.validation.failed_indices();
    if !failed_groups.is_empty() {
        // Per-group detail was already emitted as events.
        return Err(Error::ValidationFailed {
            failed: failed_groups.len(),
        });
    }

    if opts.check_only {
        info!(
            "Validation passed: {} group(s) match clip boundaries",
            summary.validation.groups.len()
        );
        return Ok(());
    }

    if let Some(slices) = &summary.slices {
        let failed = slices.failed();
        if failed > 0 {
            warn!("{failed} segment(s) failed to extract");
            return Err(Error::SliceFailed { failed });
        }
        info!(
            "Split {} segment(s) into '{}'",
            slices.outcomes.len(),
            opts.output_dir.display()
        );
    }

    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt().with_env_filter(filter).init();
}

fn handle_command(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Config { action } => handle_config_command(action, config),
    }
}

fn handle_config_command(action: ConfigAction, config: &Config) -> Result<()> {
    match action {
        ConfigAction::Init => {
            let path = config::config_file_path()?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                let saved_path = config::save_default_config(&Config::default())?;
                println!("Created configuration file: {}", saved_path.display());
            }
            Ok(())
        }
        ConfigAction::Show => {
            println!("{config:#?}");
            Ok(())
        }
        ConfigAction::Path => {
            let path = config::config_file_path()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}
