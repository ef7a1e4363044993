// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Validation of zone names and message templates before they are stored

use crate::{ZoneError, ZoneResult};

/// Longest accepted zone name
pub const MAX_NAME_LENGTH: usize = 50;

/// Longest accepted message template
pub const MAX_MESSAGE_LENGTH: usize = 1000;

/// A zone name must be non-empty and at most [`MAX_NAME_LENGTH`] characters
pub fn validate_zone_name(name: &str) -> ZoneResult<()> {
    if name.is_empty() {
        return Err(ZoneError::InvalidName("name cannot be empty".to_string()));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ZoneError::InvalidName(format!(
            "name exceeds {} characters",
            MAX_NAME_LENGTH
        )));
    }
    Ok(())
}

/// A message template must be non-empty and at most [`MAX_MESSAGE_LENGTH`] characters
pub fn validate_message(message: &str) -> ZoneResult<()> {
    if message.is_empty() {
        return Err(ZoneError::InvalidMessage(
            "message cannot be empty".to_string(),
        ));
    }
    if message.chars().count() > MAX_MESSAGE_LENGTH {
        return Err(ZoneError::InvalidMessage(format!(
            "message exceeds {} characters",
            MAX_MESSAGE_LENGTH
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_limits() {
        assert!(validate_zone_name("Spawn").is_ok());
        assert!(validate_zone_name("").is_err());
        assert!(validate_zone_name(&"x".repeat(50)).is_ok());
        assert!(validate_zone_name(&"x".repeat(51)).is_err());
    }

    #[test]
    fn test_message_limits() {
        assert!(validate_message("Welcome to [zone_name]").is_ok());
        assert!(validate_message("").is_err());
        assert!(validate_message(&"m".repeat(1000)).is_ok());
        assert!(validate_message(&"m".repeat(1001)).is_err());
    }
}
