// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # zonewatch-engine
//!
//! The runtime half of zonewatch: the dual-indexed zone registry and the
//! tick-driven sampling engine that drives every zone's state machine
//! against the latest position sample.
//!
//! Single-threaded by design. One logical thread owns the registry and
//! drives both sampling and administrative mutation; the `&mut self`
//! signatures serialize them at tick boundaries, so no locking is needed.
//! A multi-threaded host must wrap the whole registry + tracker pair in a
//! single mutual-exclusion boundary.

pub mod events;
pub mod registry;
pub mod tracker;

pub use events::{CollectingNotifier, ZoneEvent, ZoneNotifier};
pub use registry::{RegistryStats, ZoneRegistry};
pub use tracker::ZoneTracker;
