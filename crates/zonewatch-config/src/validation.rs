// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration validation

use crate::{ConfigError, ConfigResult, ZonewatchConfig};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Check a loaded configuration for out-of-range values
///
/// # Errors
///
/// Returns [`ConfigError::Validation`] naming the offending field
pub fn validate_config(config: &ZonewatchConfig) -> ConfigResult<()> {
    if !LOG_LEVELS.contains(&config.logging.level.as_str()) {
        return Err(ConfigError::Validation(format!(
            "logging.level must be one of {:?}, got '{}'",
            LOG_LEVELS, config.logging.level
        )));
    }

    if config.storage.zones_file.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "storage.zones_file cannot be empty".to_string(),
        ));
    }

    Ok(())
}
