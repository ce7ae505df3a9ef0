//! Configuration handling.
//!
//! A small TOML file at the platform config dir supplies default input
//! paths so the common case is running `sessionsplit` with no arguments
//! from the session directory.

mod types;

pub use types::{Config, DefaultsConfig};

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::constants::APP_NAME;
use crate::error::{Error, Result};

/// Get the configuration directory for the current platform.
///
/// - Linux: `~/.config/sessionsplit/`
/// - macOS: `~/Library/Application Support/sessionsplit/`
/// - Windows: `%APPDATA%\sessionsplit\`
pub fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or(Error::ConfigDirNotFound)
}

/// Get the full path to the config file.
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Load configuration from a TOML file.
///
/// Returns default config if the file does not exist.
pub fn load_config_file(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load configuration from the default platform-specific path.
///
/// Returns default config if no config file exists.
pub fn load_default_config() -> Result<Config> {
    config_file_path().map_or_else(|_| Ok(Config::default()), |path| load_config_file(&path))
}

/// Save configuration to a TOML file.
pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::ConfigWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    let contents =
        toml::to_string_pretty(config).map_err(|e| Error::ConfigSerialize { source: e })?;

    std::fs::write(path, contents).map_err(|e| Error::ConfigWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Save configuration to the default platform-specific path.
pub fn save_default_config(config: &Config) -> Result<PathBuf> {
    let path = config_file_path()?;
    save_config(config, &path)?;
    Ok(path)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_nonexistent_file_returns_default() {
        let config = load_config_file(Path::new("/nonexistent/path/config.toml")).unwrap();
        assert_eq!(config.defaults.session_file, PathBuf::from("session.txt"));
        assert_eq!(config.defaults.output_dir, PathBuf::from("segments"));
    }

    #[test]
    fn test_load_valid_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[defaults]
session_file = "export.txt"
output_dir = "out"
"#
        )
        .unwrap();

        let config = load_config_file(file.path()).unwrap();
        assert_eq!(config.defaults.session_file, PathBuf::from("export.txt"));
        assert_eq!(config.defaults.output_dir, PathBuf::from("out"));
        // Unspecified fields keep their defaults.
        assert_eq!(config.defaults.audio_file, PathBuf::from("session.wav"));
    }

    #[test]
    fn test_load_invalid_toml_returns_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "this is not valid toml {{{{").unwrap();

        assert!(load_config_file(file.path()).is_err());
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.defaults.names_file = PathBuf::from("titles.txt");
        save_config(&config, &path).unwrap();

        let loaded = load_config_file(&path).unwrap();
        assert_eq!(loaded.defaults.names_file, PathBuf::from("titles.txt"));
    }
}
