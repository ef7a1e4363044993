// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
JSON persistence of the zone set.

Document shape:

```json
{
  "zones": [
    {
      "id": "uuid",
      "name": "Spawn",
      "min": [0.0, 0.0, 0.0],
      "max": [20.0, 5.0, 20.0],
      "enterMsg": "Welcome to [zone_name]",
      "exitMsg": "You left [zone_name]"
    }
  ]
}
```

Loading is tolerant: a missing file is an empty zone set, and a record that
fails to parse or validate is reported and skipped rather than aborting the
load. Saving is strict and pretty-printed.
*/

use crate::{StorageError, StorageResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};
use zonewatch_structures::{Zone, ZoneId, ZoneResult};

/// Serialized form of one zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneRecord {
    /// Absent in hand-written files; a fresh id is allocated on load
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ZoneId>,
    pub name: String,
    pub min: [f64; 3],
    pub max: [f64; 3],
    #[serde(rename = "enterMsg")]
    pub enter_message: String,
    #[serde(rename = "exitMsg")]
    pub exit_message: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ZonesDocument {
    #[serde(default)]
    zones: Vec<serde_json::Value>,
}

impl ZoneRecord {
    /// Reconstruct a zone, preserving the stored id when present
    ///
    /// # Errors
    ///
    /// Propagates the zone's own bounds/name/message validation
    pub fn into_zone(self) -> ZoneResult<Zone> {
        let id = self.id.unwrap_or_else(ZoneId::generate);
        let mut zone = Zone::with_id(id, &self.name, self.min.into(), self.max.into())?;
        zone.set_enter_message(&self.enter_message)?;
        zone.set_exit_message(&self.exit_message)?;
        Ok(zone)
    }
}

impl From<&Zone> for ZoneRecord {
    fn from(zone: &Zone) -> Self {
        Self {
            id: Some(zone.id()),
            name: zone.name().to_string(),
            min: zone.bounds().min().into(),
            max: zone.bounds().max().into(),
            enter_message: zone.enter_message().to_string(),
            exit_message: zone.exit_message().to_string(),
        }
    }
}

/// Load all zones from a JSON document
///
/// A missing file yields an empty set. Records that fail to parse or
/// validate are skipped with a warning; only an unreadable file or a
/// malformed document is an error.
pub fn load_zones(path: &Path) -> StorageResult<Vec<Zone>> {
    if !path.exists() {
        info!(path = %path.display(), "no zones file, starting empty");
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    let document: ZonesDocument = serde_json::from_str(&content)?;

    let mut zones = Vec::with_capacity(document.zones.len());
    for value in document.zones {
        let zone = serde_json::from_value::<ZoneRecord>(value)
            .map_err(StorageError::from)
            .and_then(|record| record.into_zone().map_err(StorageError::from));
        match zone {
            Ok(zone) => zones.push(zone),
            Err(err) => warn!(%err, "skipping malformed zone record"),
        }
    }

    info!(count = zones.len(), path = %path.display(), "zones loaded");
    Ok(zones)
}

/// Save zones as a pretty-printed JSON document, creating parent
/// directories as needed
pub fn save_zones<'a>(path: &Path, zones: impl Iterator<Item = &'a Zone>) -> StorageResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let records: Vec<serde_json::Value> = zones
        .map(|zone| serde_json::to_value(ZoneRecord::from(zone)))
        .collect::<Result<_, _>>()?;
    let count = records.len();
    let document = ZonesDocument { zones: records };

    fs::write(path, serde_json::to_string_pretty(&document)?)?;
    info!(count, path = %path.display(), "zones saved");
    Ok(())
}
