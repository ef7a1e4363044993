// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Zone data error types.

Every variant is a recoverable, caller-visible condition; nothing here is
ever raised as a process-fatal fault. Lookups that miss return `Option` or
`bool` at the call site instead of an error variant.
*/

use thiserror::Error;

/// Errors produced while constructing or mutating zone data
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ZoneError {
    /// Degenerate or non-finite box coordinates
    #[error("Invalid bounds: {0}")]
    InvalidBounds(String),

    /// Zone name fails the length/content rules
    #[error("Invalid zone name: {0}")]
    InvalidName(String),

    /// Message template fails the length/content rules
    #[error("Invalid message template: {0}")]
    InvalidMessage(String),

    /// Name already bound to a different zone in the same registry
    #[error("Zone name already in use: '{name}'")]
    NameConflict { name: String },

    /// Building a zone from a selection that is missing a corner
    #[error("Selection incomplete: {0}")]
    SelectionIncomplete(&'static str),
}

/// Result type for zone data operations
pub type ZoneResult<T> = std::result::Result<T, ZoneError>;
