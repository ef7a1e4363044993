// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;
use zonewatch_structures::ZoneError;

/// Errors from loading or saving the zones document
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed zones document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid zone record: {0}")]
    InvalidRecord(#[from] ZoneError),
}

/// Result type for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;
