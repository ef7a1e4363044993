// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading
//!
//! Search order:
//! 1. `ZONEWATCH_CONFIG_PATH` environment variable
//! 2. `./zonewatch.toml` in the working directory
//! 3. Parent directories, up to 5 levels (workspace roots)
//!
//! A file that is nowhere to be found yields the default configuration;
//! a file that exists but will not parse or validate is an error.

use crate::validation::validate_config;
use crate::{ConfigError, ConfigResult, ZonewatchConfig};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable overriding the config file location
pub const CONFIG_PATH_ENV: &str = "ZONEWATCH_CONFIG_PATH";

/// Default config file name searched for on disk
pub const CONFIG_FILE_NAME: &str = "zonewatch.toml";

/// Locate the configuration file, if any exists
///
/// # Errors
///
/// Returns [`ConfigError::FileNotFound`] when `ZONEWATCH_CONFIG_PATH`
/// points at a path that does not exist. An unset variable and no file on
/// the search path is `Ok(None)`, not an error.
pub fn find_config_file() -> ConfigResult<Option<PathBuf>> {
    if let Ok(env_path) = env::var(CONFIG_PATH_ENV) {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(Some(path));
        }
        return Err(ConfigError::FileNotFound(format!(
            "Config file specified by {} not found: {}",
            CONFIG_PATH_ENV,
            path.display()
        )));
    }

    let mut search_paths = Vec::new();
    if let Ok(cwd) = env::current_dir() {
        search_paths.push(cwd.join(CONFIG_FILE_NAME));

        let mut current = cwd;
        for _ in 0..5 {
            match current.parent() {
                Some(parent) => {
                    search_paths.push(parent.join(CONFIG_FILE_NAME));
                    current = parent.to_path_buf();
                }
                None => break,
            }
        }
    }

    Ok(search_paths.into_iter().find(|p| p.exists()))
}

/// Load the configuration
///
/// With `config_path = None` the file is searched for; no file anywhere
/// means defaults. An explicit path must exist.
///
/// # Errors
///
/// Returns error if an explicit path is missing, or if a file exists but
/// contains invalid TOML or fails validation
pub fn load_config(config_path: Option<&Path>) -> ConfigResult<ZonewatchConfig> {
    let path = match config_path {
        Some(explicit) => {
            if !explicit.exists() {
                return Err(ConfigError::FileNotFound(explicit.display().to_string()));
            }
            Some(explicit.to_path_buf())
        }
        None => find_config_file()?,
    };

    let config = match path {
        Some(path) => {
            info!(path = %path.display(), "loading configuration");
            let content = fs::read_to_string(&path)?;
            toml::from_str(&content)?
        }
        None => {
            debug!("no configuration file found, using defaults");
            ZonewatchConfig::default()
        }
    };

    validate_config(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_missing_path_is_an_error() {
        let err = load_config(Some(Path::new("/definitely/not/here.toml")));
        assert!(matches!(err, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[tracking]\nlog_interval_ticks = 40\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.tracking.log_interval_ticks, 40);
        assert!(config.tracking.enabled);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "tracking = not toml").unwrap();
        assert!(matches!(load_config(Some(&path)), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_bad_level_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[logging]\nlevel = \"verbose\"\n").unwrap();
        assert!(matches!(
            load_config(Some(&path)),
            Err(ConfigError::Validation(_))
        ));
    }
}
