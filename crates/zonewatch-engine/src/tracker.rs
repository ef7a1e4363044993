// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Tick-driven sampling engine.

An external clock owns the cadence: once per tick it hands the tracker one
position sample, and the tracker drives every registered zone through its
state machine and forwards each transition to the notifier. No cadence is
enforced here; correctness holds at any sampling rate, coarser sampling
only risks missing very brief zone visits.
*/

use crate::events::ZoneNotifier;
use crate::registry::ZoneRegistry;
use tracing::debug;
use zonewatch_structures::Point3;

/// Default number of ticks between periodic debug lines (10s at 20 tps)
pub const DEFAULT_LOG_INTERVAL: u32 = 200;

/// Per-tick driver over a zone registry
///
/// Owns no zones and keeps no spatial state of its own, just the enabled
/// flag and the periodic-log counter. Constructed once at startup by the
/// host and torn down with it.
#[derive(Debug)]
pub struct ZoneTracker {
    enabled: bool,
    log_interval: u32,
    tick_counter: u32,
}

impl Default for ZoneTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoneTracker {
    pub fn new() -> Self {
        Self::with_log_interval(DEFAULT_LOG_INTERVAL)
    }

    /// `log_interval` ticks between periodic debug lines; 0 disables them
    pub fn with_log_interval(log_interval: u32) -> Self {
        Self {
            enabled: true,
            log_interval,
            tick_counter: 0,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Pause or resume tracking. While paused, samples are dropped and no
    /// zone state changes.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Process one position sample: evaluate every zone, forward each
    /// transition to the notifier
    ///
    /// Notifier behavior never feeds back into zone state; a notifier that
    /// fails internally must handle that itself.
    pub fn sample(
        &mut self,
        registry: &mut ZoneRegistry,
        position: Point3,
        notifier: &mut dyn ZoneNotifier,
    ) {
        if !self.enabled {
            return;
        }

        for event in registry.evaluate_all(position) {
            notifier.notify(&event);
        }

        if self.log_interval > 0 {
            self.tick_counter += 1;
            if self.tick_counter >= self.log_interval {
                self.tick_counter = 0;
                debug!(
                    position = %position,
                    zones = registry.zone_count(),
                    "tracking tick"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::CollectingNotifier;
    use zonewatch_structures::ZoneTransition;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn spawn_registry() -> ZoneRegistry {
        let mut registry = ZoneRegistry::new();
        registry
            .create_zone("Spawn", p(0.0, 0.0, 0.0), p(20.0, 5.0, 20.0))
            .unwrap();
        registry
    }

    #[test]
    fn test_sample_forwards_transitions() {
        let mut registry = spawn_registry();
        let mut tracker = ZoneTracker::new();
        let mut notifier = CollectingNotifier::new();

        tracker.sample(&mut registry, p(10.0, 1.0, 10.0), &mut notifier);
        tracker.sample(&mut registry, p(10.0, 1.0, 10.0), &mut notifier);

        let events = notifier.take();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].transition, ZoneTransition::Entered);
        assert_eq!(events[0].zone_name, "Spawn");
        assert_eq!(events[0].position, p(10.0, 1.0, 10.0));
    }

    #[test]
    fn test_disabled_tracker_drops_samples() {
        let mut registry = spawn_registry();
        let mut tracker = ZoneTracker::new();
        let mut notifier = CollectingNotifier::new();

        tracker.set_enabled(false);
        tracker.sample(&mut registry, p(10.0, 1.0, 10.0), &mut notifier);
        assert!(notifier.events.is_empty());
        assert!(!registry.get_by_name("Spawn").unwrap().is_agent_inside());

        // Re-enabled: the entry fires on the next sample
        tracker.set_enabled(true);
        tracker.sample(&mut registry, p(10.0, 1.0, 10.0), &mut notifier);
        assert_eq!(notifier.events.len(), 1);
    }

    #[test]
    fn test_exit_requires_leaving_the_buffer() {
        let mut registry = spawn_registry();
        let mut tracker = ZoneTracker::new();
        let mut notifier = CollectingNotifier::new();

        // Spawn is 20x5x20: diagonal ~28.7, 10% clamps up to buffer = 5
        tracker.sample(&mut registry, p(10.0, 1.0, 10.0), &mut notifier);
        tracker.sample(&mut registry, p(25.0, 1.0, 10.0), &mut notifier); // dist 5, held
        tracker.sample(&mut registry, p(27.0, 1.0, 10.0), &mut notifier); // dist 7, exit

        let kinds: Vec<_> = notifier.take().into_iter().map(|e| e.transition).collect();
        assert_eq!(kinds, vec![ZoneTransition::Entered, ZoneTransition::Exited]);
    }
}
