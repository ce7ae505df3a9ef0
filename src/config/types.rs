//! Configuration type definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_AUDIO_FILE, DEFAULT_NAMES_FILE, DEFAULT_OUTPUT_DIR, DEFAULT_SESSION_FILE,
};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default input/output paths.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Default paths used when the CLI does not override them.
///
/// Relative paths resolve against the working directory, so one config
/// serves every session directory laid out the same way.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Session export file.
    pub session_file: PathBuf,
    /// Name list file.
    pub names_file: PathBuf,
    /// Session audio file.
    pub audio_file: PathBuf,
    /// Output directory for segments.
    pub output_dir: PathBuf,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
            names_file: PathBuf::from(DEFAULT_NAMES_FILE),
            audio_file: PathBuf::from(DEFAULT_AUDIO_FILE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}
