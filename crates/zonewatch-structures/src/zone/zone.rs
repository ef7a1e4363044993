// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Zone: an axis-aligned 3D region with identity, messages, and per-zone
enter/exit tracking state.

The hysteresis buffer scales with the zone's own diagonal. A fixed buffer
either spams small zones or under-protects huge ones; 10% of the diagonal,
clamped to [5, 200], keeps the band proportionate.
*/

use crate::geometry::Point3;
use crate::validation::{validate_message, validate_zone_name};
use crate::zone::{ZoneBounds, ZoneId, ZoneTransition};
use crate::ZoneResult;
use std::fmt::Display;
use tracing::debug;

/// Default enter message template
pub const DEFAULT_ENTER_MESSAGE: &str = "Welcome to [zone_name]";

/// Default exit message template
pub const DEFAULT_EXIT_MESSAGE: &str = "You left [zone_name]";

/// An axis-aligned 3D zone with enter/exit state
///
/// The shape is immutable between explicit `set_bounds` calls; metadata
/// (name, messages) is mutable. Name uniqueness is enforced by the owning
/// registry, not here.
#[derive(Debug, Clone)]
pub struct Zone {
    id: ZoneId,
    name: String,
    bounds: ZoneBounds,
    enter_message: String,
    exit_message: String,
    /// Derived from the bounds; recomputed on every bounds change
    buffer_distance: f64,
    /// Was the agent considered inside as of the last evaluation
    inside: bool,
}

impl Zone {
    /// Buffer is this fraction of the box diagonal
    pub const BUFFER_RATIO: f64 = 0.10;
    /// Smallest hysteresis band, protects small zones from flapping
    pub const MIN_BUFFER_DISTANCE: f64 = 5.0;
    /// Largest hysteresis band, keeps huge zones responsive
    pub const MAX_BUFFER_DISTANCE: f64 = 200.0;

    /// Create a zone from two arbitrary corner points
    ///
    /// Corners are normalized component-wise; a fresh id is allocated.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ZoneError::InvalidBounds`] for degenerate or
    /// non-finite corners, [`crate::ZoneError::InvalidName`] for a bad name
    pub fn new(name: &str, corner_a: Point3, corner_b: Point3) -> ZoneResult<Self> {
        Self::with_id(ZoneId::generate(), name, corner_a, corner_b)
    }

    /// Create a zone under a pre-assigned id (deserialized records)
    pub fn with_id(id: ZoneId, name: &str, corner_a: Point3, corner_b: Point3) -> ZoneResult<Self> {
        validate_zone_name(name)?;
        let bounds = ZoneBounds::new(corner_a, corner_b)?;
        let buffer_distance = Self::compute_buffer(&bounds);

        Ok(Self {
            id,
            name: name.to_string(),
            bounds,
            enter_message: DEFAULT_ENTER_MESSAGE.to_string(),
            exit_message: DEFAULT_EXIT_MESSAGE.to_string(),
            buffer_distance,
            inside: false,
        })
    }

    fn compute_buffer(bounds: &ZoneBounds) -> f64 {
        (bounds.diagonal() * Self::BUFFER_RATIO)
            .clamp(Self::MIN_BUFFER_DISTANCE, Self::MAX_BUFFER_DISTANCE)
    }

    // Getters

    pub fn id(&self) -> ZoneId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bounds(&self) -> &ZoneBounds {
        &self.bounds
    }

    /// Current hysteresis band width beyond the box boundary
    pub fn buffer_distance(&self) -> f64 {
        self.buffer_distance
    }

    pub fn enter_message(&self) -> &str {
        &self.enter_message
    }

    pub fn exit_message(&self) -> &str {
        &self.exit_message
    }

    /// Message template for the given transition kind
    pub fn message_for(&self, transition: ZoneTransition) -> &str {
        match transition {
            ZoneTransition::Entered => &self.enter_message,
            ZoneTransition::Exited => &self.exit_message,
        }
    }

    /// Was the agent inside as of the last evaluation
    pub fn is_agent_inside(&self) -> bool {
        self.inside
    }

    // Setters

    /// Rename the zone. Uniqueness against sibling zones is the registry's
    /// job; this only checks the name rules.
    pub fn set_name(&mut self, name: &str) -> ZoneResult<()> {
        validate_zone_name(name)?;
        self.name = name.to_string();
        Ok(())
    }

    /// Replace the box with one built from two arbitrary corners
    ///
    /// The buffer distance is recomputed from the new shape. On error the
    /// zone keeps its previous bounds.
    pub fn set_bounds(&mut self, corner_a: Point3, corner_b: Point3) -> ZoneResult<()> {
        let bounds = ZoneBounds::new(corner_a, corner_b)?;
        self.bounds = bounds;
        self.buffer_distance = Self::compute_buffer(&bounds);
        Ok(())
    }

    pub fn set_enter_message(&mut self, template: &str) -> ZoneResult<()> {
        validate_message(template)?;
        self.enter_message = template.to_string();
        Ok(())
    }

    pub fn set_exit_message(&mut self, template: &str) -> ZoneResult<()> {
        validate_message(template)?;
        self.exit_message = template.to_string();
        Ok(())
    }

    // State machine

    /// Inclusive containment test against the current bounds
    pub fn contains_point(&self, p: Point3) -> bool {
        self.bounds.contains(p)
    }

    /// Distance from a point to the nearest point on or in the box
    pub fn distance_to_point(&self, p: Point3) -> f64 {
        self.bounds.distance_to(p)
    }

    /// Advance the enter/exit state machine with one position sample
    ///
    /// Entry is immediate: any contained sample flips Outside to Inside.
    /// Exit is hysteresis-guarded: the agent must be strictly farther than
    /// `buffer_distance` from the box before Inside flips back to Outside.
    /// A sample outside the box but within the buffer changes nothing.
    pub fn evaluate(&mut self, position: Point3) -> Option<ZoneTransition> {
        let inside_now = self.bounds.contains(position);

        if inside_now && !self.inside {
            self.inside = true;
            debug!(zone = %self.name, "agent entered zone");
            return Some(ZoneTransition::Entered);
        }

        if !inside_now && self.inside {
            let distance = self.bounds.distance_to(position);
            if distance > self.buffer_distance {
                self.inside = false;
                debug!(zone = %self.name, distance, "agent exited zone");
                return Some(ZoneTransition::Exited);
            }
            // Still within the buffer band: hold the Inside state
        }

        None
    }

    /// Force the state machine back to Outside without emitting anything
    ///
    /// For driver re-initialization, not normal operation.
    pub fn reset_state(&mut self) {
        self.inside = false;
    }
}

impl Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let min = self.bounds.min();
        let max = self.bounds.max();
        write!(
            f,
            "Zone{{id='{}', name='{}', bounds=[{:.0},{:.0},{:.0} to {:.0},{:.0},{:.0}]}}",
            self.id, self.name, min.x, min.y, min.z, max.x, max.y, max.z
        )
    }
}
