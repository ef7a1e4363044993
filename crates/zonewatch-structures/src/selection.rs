// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Two-corner selection staging.

Holds the pair of corner points an external selection tool supplies while
the user marks out a region, and turns a completed pair into a validated
zone. Which input device or UI produces the corners is not this crate's
concern.
*/

use crate::geometry::Point3;
use crate::zone::Zone;
use crate::{ZoneError, ZoneResult};
use tracing::debug;

/// In-progress two-corner selection
#[derive(Debug, Clone, Default)]
pub struct Selection {
    corner_a: Option<Point3>,
    corner_b: Option<Point3>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the first corner, keeping any second corner already placed
    pub fn set_corner_a(&mut self, p: Point3) {
        debug!(corner = %p, "selection corner A set");
        self.corner_a = Some(p);
    }

    /// Set the second corner, keeping any first corner already placed
    pub fn set_corner_b(&mut self, p: Point3) {
        debug!(corner = %p, "selection corner B set");
        self.corner_b = Some(p);
    }

    /// Both corners are placed
    pub fn is_complete(&self) -> bool {
        self.corner_a.is_some() && self.corner_b.is_some()
    }

    pub fn corners(&self) -> Option<(Point3, Point3)> {
        Some((self.corner_a?, self.corner_b?))
    }

    /// Width/height/depth of the pending box, if complete
    pub fn dimensions(&self) -> Option<(f64, f64, f64)> {
        let (a, b) = self.corners()?;
        let min = a.component_min(&b);
        let max = a.component_max(&b);
        Some((max.x - min.x, max.y - min.y, max.z - min.z))
    }

    /// Volume of the pending box, if complete
    pub fn volume(&self) -> Option<f64> {
        let (w, h, d) = self.dimensions()?;
        Some(w * h * d)
    }

    /// Drop both corners
    pub fn clear(&mut self) {
        self.corner_a = None;
        self.corner_b = None;
    }

    /// Build a zone from the selection, leaving the selection intact
    ///
    /// # Errors
    ///
    /// Returns [`ZoneError::SelectionIncomplete`] if a corner is missing,
    /// or the underlying construction error for a degenerate box
    pub fn build_zone(&self, name: &str) -> ZoneResult<Zone> {
        let corner_a = self
            .corner_a
            .ok_or(ZoneError::SelectionIncomplete("corner A is not set"))?;
        let corner_b = self
            .corner_b
            .ok_or(ZoneError::SelectionIncomplete("corner B is not set"))?;

        Zone::new(name, corner_a, corner_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_selection_cannot_build() {
        let mut sel = Selection::new();
        assert!(!sel.is_complete());
        assert!(matches!(
            sel.build_zone("Spawn"),
            Err(ZoneError::SelectionIncomplete(_))
        ));

        sel.set_corner_a(Point3::new(0.0, 0.0, 0.0));
        assert!(!sel.is_complete());
        assert!(sel.build_zone("Spawn").is_err());
    }

    #[test]
    fn test_complete_selection_builds_normalized_zone() {
        let mut sel = Selection::new();
        sel.set_corner_a(Point3::new(20.0, 5.0, 20.0));
        sel.set_corner_b(Point3::new(0.0, 0.0, 0.0));
        assert!(sel.is_complete());
        assert_eq!(sel.dimensions(), Some((20.0, 5.0, 20.0)));
        assert_eq!(sel.volume(), Some(2000.0));

        let zone = sel.build_zone("Spawn").unwrap();
        assert_eq!(zone.bounds().min(), Point3::new(0.0, 0.0, 0.0));
        assert_eq!(zone.bounds().max(), Point3::new(20.0, 5.0, 20.0));
    }

    #[test]
    fn test_clear_resets_both_corners() {
        let mut sel = Selection::new();
        sel.set_corner_a(Point3::new(0.0, 0.0, 0.0));
        sel.set_corner_b(Point3::new(10.0, 10.0, 10.0));
        sel.clear();
        assert!(!sel.is_complete());
        assert_eq!(sel.corners(), None);
        assert_eq!(sel.volume(), None);
    }

    #[test]
    fn test_degenerate_selection_is_rejected_at_build() {
        let mut sel = Selection::new();
        sel.set_corner_a(Point3::new(0.0, 0.0, 0.0));
        sel.set_corner_b(Point3::new(10.0, 0.2, 10.0));
        assert!(matches!(
            sel.build_zone("Thin"),
            Err(ZoneError::InvalidBounds(_))
        ));
    }
}
