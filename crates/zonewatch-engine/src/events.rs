// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Transition events and the notifier boundary

use zonewatch_structures::{Point3, ZoneId, ZoneTransition};

/// One zone transition detected during a sampling tick
///
/// Carries the zone's message template for the transition kind and the
/// position sample that triggered it, so a notifier can render without
/// reaching back into the registry mid-tick.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneEvent {
    pub zone_id: ZoneId,
    pub zone_name: String,
    pub transition: ZoneTransition,
    /// The zone's enter or exit template, uninterpreted by the engine
    pub message_template: String,
    /// The sample that triggered the transition
    pub position: Point3,
}

impl std::fmt::Display for ZoneEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} zone '{}' at {}", self.transition, self.zone_name, self.position)
    }
}

/// Receiver for transition events
///
/// Implementations deliver, render, or record events. A notifier that fails
/// must swallow its own failure; the engine never retries and never rolls a
/// state transition back on delivery problems.
pub trait ZoneNotifier {
    fn notify(&mut self, event: &ZoneEvent);
}

/// Notifier that buffers every event, for tests and batch-style hosts
#[derive(Debug, Default)]
pub struct CollectingNotifier {
    pub events: Vec<ZoneEvent>,
}

impl CollectingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the buffered events, leaving the notifier empty
    pub fn take(&mut self) -> Vec<ZoneEvent> {
        std::mem::take(&mut self.events)
    }
}

impl ZoneNotifier for CollectingNotifier {
    fn notify(&mut self, event: &ZoneEvent) {
        self.events.push(event.clone());
    }
}
