// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # zonewatch-io
//!
//! The edge of the system: loading and saving the zone set as a JSON
//! document, and rendering transition message templates for delivery.
//! The engine never initiates I/O on its own; hosts call into this crate
//! at startup, at shutdown, and when dispatching transition events.

mod error;
pub mod messages;
pub mod notifier;
pub mod persistence;

pub use error::{StorageError, StorageResult};
pub use messages::{render_message, strip_color_codes, MessageContext};
pub use notifier::{MessageSink, RenderingNotifier};
pub use persistence::{load_zones, save_zones, ZoneRecord};
