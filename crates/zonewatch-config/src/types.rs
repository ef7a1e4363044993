// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration type definitions
//!
//! Each struct maps to a section of `zonewatch.toml`. All fields default,
//! so a partial or absent file still produces a complete configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ZonewatchConfig {
    pub tracking: TrackingConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Sampling engine behavior
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TrackingConfig {
    /// Start with tracking active
    pub enabled: bool,
    /// Ticks between periodic debug lines; 0 disables them
    pub log_interval_ticks: u32,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_interval_ticks: 200,
        }
    }
}

/// Zone persistence locations
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    /// JSON document holding the zone set
    pub zones_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            zones_file: PathBuf::from("config/zonewatch/zones.json"),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of: trace, debug, info, warn, error
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
