// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Zone registry - the single source of truth for all zones.

Owns every zone and keeps two O(1) indices over the same set: the owning
`id -> Zone` map and a secondary `name -> id` index. Every mutation updates
both or neither.
*/

use crate::events::ZoneEvent;
use ahash::AHashMap;
use tracing::{info, warn};
use zonewatch_structures::{Point3, Zone, ZoneError, ZoneId, ZoneResult};

/// Registry counters, for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryStats {
    /// Zones currently registered
    pub zone_count: usize,
    /// Zones created or adopted over the registry's lifetime
    pub total_created: u64,
}

impl std::fmt::Display for RegistryStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} zone(s) registered, {} created in total",
            self.zone_count, self.total_created
        )
    }
}

/// Owning, dual-indexed collection of zones
///
/// Invariant: `names` maps exactly the names of the zones in `zones`, each
/// to the id of the zone carrying that name. All mutating operations are
/// all-or-nothing with respect to both indices.
#[derive(Debug, Default)]
pub struct ZoneRegistry {
    zones: AHashMap<ZoneId, Zone>,
    names: AHashMap<String, ZoneId>,
    total_created: u64,
}

impl ZoneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a zone from two corner points and register it
    ///
    /// # Errors
    ///
    /// [`ZoneError::NameConflict`] if the name is taken (nothing is
    /// created), or the construction error for bad bounds/name
    pub fn create_zone(&mut self, name: &str, corner_a: Point3, corner_b: Point3) -> ZoneResult<ZoneId> {
        let zone = Zone::new(name, corner_a, corner_b)?;
        let id = zone.id();
        self.adopt(zone)?;
        Ok(id)
    }

    /// Register an externally constructed zone (e.g. deserialized)
    ///
    /// # Errors
    ///
    /// [`ZoneError::NameConflict`] if the name is bound to another zone;
    /// neither index is touched in that case
    pub fn adopt(&mut self, zone: Zone) -> ZoneResult<()> {
        if self.names.contains_key(zone.name()) {
            return Err(ZoneError::NameConflict {
                name: zone.name().to_string(),
            });
        }

        info!(zone = %zone, "zone registered");
        self.names.insert(zone.name().to_string(), zone.id());
        self.zones.insert(zone.id(), zone);
        self.total_created += 1;
        Ok(())
    }

    /// Bulk-adopt zones, typically once at startup from persisted data
    ///
    /// Duplicate names among the input are skipped with a warning, not a
    /// fatal error. Returns how many zones were actually registered.
    pub fn load_many(&mut self, zones: Vec<Zone>) -> usize {
        let mut loaded = 0;
        for zone in zones {
            match self.adopt(zone) {
                Ok(()) => loaded += 1,
                Err(err) => warn!(%err, "skipping zone during bulk load"),
            }
        }
        info!(loaded, "bulk zone load finished");
        loaded
    }

    pub fn get_by_id(&self, id: &ZoneId) -> Option<&Zone> {
        self.zones.get(id)
    }

    pub fn get_by_name(&self, name: &str) -> Option<&Zone> {
        self.zones.get(self.names.get(name)?)
    }

    /// Remove a zone by id. Returns whether a zone was found and removed.
    pub fn delete_by_id(&mut self, id: &ZoneId) -> bool {
        match self.zones.remove(id) {
            Some(zone) => {
                self.names.remove(zone.name());
                info!(zone = %zone.name(), "zone deleted");
                true
            }
            None => false,
        }
    }

    /// Remove a zone by name. Returns whether a zone was found and removed.
    pub fn delete_by_name(&mut self, name: &str) -> bool {
        match self.names.remove(name) {
            Some(id) => {
                self.zones.remove(&id);
                info!(zone = %name, "zone deleted");
                true
            }
            None => false,
        }
    }

    /// Rename a zone, atomically updating the zone and the name index
    ///
    /// Returns false with no mutation if the zone does not exist, the new
    /// name is bound to a different zone, or the new name is invalid.
    /// Renaming a zone to its current name is a successful no-op.
    pub fn rename(&mut self, id: &ZoneId, new_name: &str) -> bool {
        if let Some(&holder) = self.names.get(new_name) {
            if holder != *id {
                warn!(name = new_name, "rename refused, name already in use");
                return false;
            }
            return true; // already carries this name
        }

        let Some(zone) = self.zones.get_mut(id) else {
            return false;
        };

        let old_name = zone.name().to_string();
        if let Err(err) = zone.set_name(new_name) {
            warn!(%err, "rename refused");
            return false;
        }

        self.names.remove(&old_name);
        self.names.insert(new_name.to_string(), *id);
        info!(from = %old_name, to = %new_name, "zone renamed");
        true
    }

    /// Replace a zone's bounds from two corner points
    ///
    /// Returns `Ok(false)` if no zone has this id. The buffer distance is
    /// recomputed by the zone itself.
    pub fn update_bounds(&mut self, id: &ZoneId, corner_a: Point3, corner_b: Point3) -> ZoneResult<bool> {
        match self.zones.get_mut(id) {
            Some(zone) => {
                zone.set_bounds(corner_a, corner_b)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Replace a zone's enter message template. `Ok(false)` if no such zone.
    pub fn set_enter_message(&mut self, id: &ZoneId, template: &str) -> ZoneResult<bool> {
        match self.zones.get_mut(id) {
            Some(zone) => {
                zone.set_enter_message(template)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Replace a zone's exit message template. `Ok(false)` if no such zone.
    pub fn set_exit_message(&mut self, id: &ZoneId, template: &str) -> ZoneResult<bool> {
        match self.zones.get_mut(id) {
            Some(zone) => {
                zone.set_exit_message(template)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Read-only view over all zones, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &Zone> {
        self.zones.values()
    }

    /// Drive every zone's state machine with one position sample
    ///
    /// This is the once-per-tick hot path: a linear scan, no allocation
    /// beyond the (usually empty) event list. Taking `&mut self` means no
    /// registry mutation can interleave with the scan.
    pub fn evaluate_all(&mut self, position: Point3) -> Vec<ZoneEvent> {
        let mut events = Vec::new();
        for zone in self.zones.values_mut() {
            if let Some(transition) = zone.evaluate(position) {
                events.push(ZoneEvent {
                    zone_id: zone.id(),
                    zone_name: zone.name().to_string(),
                    transition,
                    message_template: zone.message_for(transition).to_string(),
                    position,
                });
            }
        }
        events
    }

    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    /// Sorted list of all zone names
    pub fn zone_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.names.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            zone_count: self.zones.len(),
            total_created: self.total_created,
        }
    }

    /// Remove every zone
    pub fn clear(&mut self) {
        let dropped = self.zones.len();
        self.zones.clear();
        self.names.clear();
        warn!(dropped, "all zones cleared");
    }

    /// Force every zone's state machine back to Outside
    ///
    /// Driver-restart hook; emits nothing.
    pub fn reset_all_states(&mut self) {
        for zone in self.zones.values_mut() {
            zone.reset_state();
        }
        info!("all zone states reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zonewatch_structures::ZoneTransition;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    /// Both indices cover the same set, and every name maps to the zone
    /// actually carrying it
    fn assert_consistent(registry: &ZoneRegistry) {
        assert_eq!(registry.zones.len(), registry.names.len());
        for (name, id) in &registry.names {
            let zone = registry.zones.get(id).expect("name index points at a live zone");
            assert_eq!(zone.name(), name);
        }
    }

    #[test]
    fn test_create_and_lookup() {
        let mut registry = ZoneRegistry::new();
        let id = registry
            .create_zone("Spawn", p(0.0, 0.0, 0.0), p(20.0, 5.0, 20.0))
            .unwrap();

        assert_eq!(registry.zone_count(), 1);
        assert_eq!(registry.get_by_id(&id).unwrap().name(), "Spawn");
        assert_eq!(registry.get_by_name("Spawn").unwrap().id(), id);
        assert!(registry.get_by_name("Nether").is_none());
        assert_consistent(&registry);
    }

    #[test]
    fn test_create_rejects_duplicate_name() {
        let mut registry = ZoneRegistry::new();
        registry
            .create_zone("Spawn", p(0.0, 0.0, 0.0), p(10.0, 10.0, 10.0))
            .unwrap();

        let err = registry.create_zone("Spawn", p(50.0, 0.0, 50.0), p(60.0, 10.0, 60.0));
        assert!(matches!(err, Err(ZoneError::NameConflict { .. })));
        assert_eq!(registry.zone_count(), 1);
        assert_consistent(&registry);
    }

    #[test]
    fn test_delete_by_id_and_name() {
        let mut registry = ZoneRegistry::new();
        let id = registry
            .create_zone("Spawn", p(0.0, 0.0, 0.0), p(10.0, 10.0, 10.0))
            .unwrap();
        registry
            .create_zone("Market", p(30.0, 0.0, 30.0), p(50.0, 10.0, 50.0))
            .unwrap();

        assert!(registry.delete_by_id(&id));
        assert!(!registry.delete_by_id(&id));
        assert!(registry.get_by_name("Spawn").is_none());

        assert!(registry.delete_by_name("Market"));
        assert!(!registry.delete_by_name("Market"));
        assert_eq!(registry.zone_count(), 0);
        assert_consistent(&registry);
    }

    #[test]
    fn test_rename_atomicity() {
        let mut registry = ZoneRegistry::new();
        let spawn = registry
            .create_zone("Spawn", p(0.0, 0.0, 0.0), p(10.0, 10.0, 10.0))
            .unwrap();
        registry
            .create_zone("Market", p(30.0, 0.0, 30.0), p(50.0, 10.0, 50.0))
            .unwrap();

        // Conflict: nothing moves
        assert!(!registry.rename(&spawn, "Market"));
        assert_eq!(registry.get_by_id(&spawn).unwrap().name(), "Spawn");
        assert!(registry.get_by_name("Spawn").is_some());
        assert_consistent(&registry);

        // Rename to own name is a no-op success
        assert!(registry.rename(&spawn, "Spawn"));
        assert_consistent(&registry);

        // Clean rename updates both the zone and the index
        assert!(registry.rename(&spawn, "Hub"));
        assert!(registry.get_by_name("Spawn").is_none());
        assert_eq!(registry.get_by_name("Hub").unwrap().id(), spawn);
        assert_consistent(&registry);

        // Unknown id
        let ghost = ZoneId::generate();
        assert!(!registry.rename(&ghost, "Ghost"));

        // Invalid name leaves everything in place
        assert!(!registry.rename(&spawn, ""));
        assert_eq!(registry.get_by_id(&spawn).unwrap().name(), "Hub");
        assert_consistent(&registry);
    }

    #[test]
    fn test_index_consistency_across_mutation_sequences() {
        let mut registry = ZoneRegistry::new();
        let mut ids = Vec::new();
        for i in 0..8 {
            let offset = i as f64 * 100.0;
            let id = registry
                .create_zone(
                    &format!("zone-{}", i),
                    p(offset, 0.0, 0.0),
                    p(offset + 10.0, 10.0, 10.0),
                )
                .unwrap();
            ids.push(id);
            assert_consistent(&registry);
        }

        registry.rename(&ids[0], "renamed-0");
        assert_consistent(&registry);
        registry.delete_by_id(&ids[1]);
        assert_consistent(&registry);
        registry.delete_by_name("zone-2");
        assert_consistent(&registry);
        registry.rename(&ids[3], "zone-5"); // refused, taken
        assert_consistent(&registry);

        assert_eq!(registry.zone_count(), 6);
        assert_eq!(registry.stats().total_created, 8);
    }

    #[test]
    fn test_load_many_skips_duplicates() {
        let mut registry = ZoneRegistry::new();
        let zones = vec![
            Zone::new("A", p(0.0, 0.0, 0.0), p(10.0, 10.0, 10.0)).unwrap(),
            Zone::new("B", p(20.0, 0.0, 0.0), p(30.0, 10.0, 10.0)).unwrap(),
            Zone::new("A", p(40.0, 0.0, 0.0), p(50.0, 10.0, 10.0)).unwrap(),
        ];

        assert_eq!(registry.load_many(zones), 2);
        assert_eq!(registry.zone_count(), 2);
        assert_consistent(&registry);
    }

    #[test]
    fn test_evaluate_all_emits_rich_events() {
        let mut registry = ZoneRegistry::new();
        registry
            .create_zone("Spawn", p(0.0, 0.0, 0.0), p(20.0, 5.0, 20.0))
            .unwrap();
        registry
            .create_zone("Far", p(500.0, 0.0, 500.0), p(520.0, 10.0, 520.0))
            .unwrap();

        let events = registry.evaluate_all(p(10.0, 1.0, 10.0));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].zone_name, "Spawn");
        assert_eq!(events[0].transition, ZoneTransition::Entered);
        assert_eq!(events[0].message_template, "Welcome to [zone_name]");

        // Nothing changes while the agent stays put
        assert!(registry.evaluate_all(p(10.0, 1.0, 10.0)).is_empty());
    }

    #[test]
    fn test_reset_all_states() {
        let mut registry = ZoneRegistry::new();
        registry
            .create_zone("Spawn", p(0.0, 0.0, 0.0), p(20.0, 5.0, 20.0))
            .unwrap();
        registry.evaluate_all(p(10.0, 1.0, 10.0));
        assert!(registry.get_by_name("Spawn").unwrap().is_agent_inside());

        registry.reset_all_states();
        assert!(!registry.get_by_name("Spawn").unwrap().is_agent_inside());

        // Fresh entry after the reset
        let events = registry.evaluate_all(p(10.0, 1.0, 10.0));
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut registry = ZoneRegistry::new();
        registry
            .create_zone("Spawn", p(0.0, 0.0, 0.0), p(10.0, 10.0, 10.0))
            .unwrap();
        registry.clear();
        assert_eq!(registry.zone_count(), 0);
        assert_consistent(&registry);
    }

    #[test]
    fn test_zone_names_sorted() {
        let mut registry = ZoneRegistry::new();
        for name in ["Mine", "Arena", "Spawn"] {
            registry
                .create_zone(name, p(0.0, 0.0, 0.0), p(10.0, 10.0, 10.0))
                .ok();
        }
        // All three have distinct names, so all three register
        assert_eq!(registry.zone_names(), vec!["Arena", "Mine", "Spawn"]);
    }
}
