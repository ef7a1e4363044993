//! # Zonewatch - Geofencing Engine
//!
//! Zonewatch tracks a moving agent's position against a set of axis-aligned
//! 3D zones and emits exactly one event when the agent crosses from outside
//! to inside a zone, and exactly one when it moves from inside to durably
//! outside. "Durably" is the point: each zone derives a hysteresis buffer
//! from its own diagonal, so an agent lingering on a boundary never flaps
//! enter/exit events.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! zonewatch = "0.1"  # Default: core + io + config
//! ```
//!
//! ```rust
//! use zonewatch::prelude::*;
//!
//! # fn main() -> Result<(), zonewatch::structures::ZoneError> {
//! let mut registry = ZoneRegistry::new();
//! registry.create_zone(
//!     "Spawn",
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(20.0, 5.0, 20.0),
//! )?;
//!
//! let mut tracker = ZoneTracker::new();
//! let mut notifier = CollectingNotifier::new();
//!
//! // Once per external tick:
//! tracker.sample(&mut registry, Point3::new(10.0, 1.0, 10.0), &mut notifier);
//! assert_eq!(notifier.events.len(), 1); // Entered "Spawn"
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - **`io`** (default): JSON zone persistence + message rendering
//! - **`config`** (default): TOML host configuration loader
//!
//! ## Component Crates
//!
//! - [`structures`]: zones, geometry, the enter/exit state machine
//! - [`engine`]: the dual-indexed registry and the tick-driven tracker
//! - [`io`]: zones.json load/save, placeholder message rendering
//! - [`config`]: `zonewatch.toml` loading with environment override

pub use zonewatch_engine as engine;
pub use zonewatch_structures as structures;

#[cfg(feature = "config")]
pub use zonewatch_config as config;
#[cfg(feature = "io")]
pub use zonewatch_io as io;

/// Everything a typical host needs in scope
pub mod prelude {
    pub use zonewatch_engine::{
        CollectingNotifier, RegistryStats, ZoneEvent, ZoneNotifier, ZoneRegistry, ZoneTracker,
    };
    pub use zonewatch_structures::{
        Point3, Selection, Zone, ZoneBounds, ZoneError, ZoneId, ZoneResult, ZoneTransition,
    };

    #[cfg(feature = "config")]
    pub use zonewatch_config::{load_config, ZonewatchConfig};
    #[cfg(feature = "io")]
    pub use zonewatch_io::{load_zones, render_message, save_zones, RenderingNotifier};
}
