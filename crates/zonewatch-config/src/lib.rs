// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # zonewatch-config
//!
//! TOML-based configuration for hosts embedding the zonewatch engine:
//! the tracking toggle and log cadence, the zones-file location, and the
//! logging level. A missing config file is not an error; every section
//! has usable defaults.

mod error;
mod loader;
mod types;
mod validation;

pub use error::{ConfigError, ConfigResult};
pub use loader::{find_config_file, load_config, CONFIG_FILE_NAME, CONFIG_PATH_ENV};
pub use types::{LoggingConfig, StorageConfig, TrackingConfig, ZonewatchConfig};
pub use validation::validate_config;
