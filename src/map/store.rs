//! Read-only campus map.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use tracing::{info, warn};

use super::waypoint::{Waypoint, WaypointRecord};
use crate::error::{NavError, Result};

/// Immutable mapping from location identifier to waypoint.
///
/// Built once and shared read-only between queries, usually as
/// `Arc<MapStore>`.
#[derive(Clone, Debug, Default)]
pub struct MapStore {
    waypoints: HashMap<String, Waypoint>,
}

impl MapStore {
    /// Load a map file, choosing the format from the extension.
    ///
    /// `.yaml` and `.yml` are parsed as YAML, everything else as JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let store = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(&contents)?,
            _ => Self::from_json(&contents)?,
        };
        info!("Loaded {} waypoints from {:?}", store.len(), path);
        Ok(store)
    }

    /// Parse from a JSON object keyed by identifier
    pub fn from_json(json: &str) -> Result<Self> {
        let records: BTreeMap<String, WaypointRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Parse from a YAML mapping keyed by identifier
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let records: BTreeMap<String, WaypointRecord> = serde_yaml::from_str(yaml)?;
        Self::from_records(records)
    }

    /// Build from parsed records, validating references.
    pub fn from_records(records: BTreeMap<String, WaypointRecord>) -> Result<Self> {
        Self::from_waypoints(
            records
                .into_iter()
                .map(|(id, record)| Waypoint::from_record(id, record)),
        )
    }

    /// Build from waypoint definitions, validating references.
    ///
    /// Fails with [`NavError::MapIntegrity`] on a duplicate identifier, a
    /// non-finite coordinate, a self-referencing neighbor or a neighbor that
    /// is not defined. One-way edges are accepted with a warning.
    pub fn from_waypoints<I: IntoIterator<Item = Waypoint>>(waypoints: I) -> Result<Self> {
        let mut map = HashMap::new();
        for waypoint in waypoints {
            if map.contains_key(&waypoint.id) {
                return Err(integrity(&waypoint.id, "duplicate identifier"));
            }
            map.insert(waypoint.id.clone(), waypoint);
        }

        let store = Self { waypoints: map };
        store.validate()?;
        Ok(store)
    }

    fn validate(&self) -> Result<()> {
        for id in self.ids() {
            let waypoint = &self.waypoints[id];

            if !waypoint.coord.is_finite() {
                return Err(integrity(id, "coordinates must be finite"));
            }

            for neighbor in &waypoint.neighbors {
                if neighbor == id {
                    return Err(integrity(id, "lists itself as a neighbor"));
                }
                let Some(other) = self.waypoints.get(neighbor) else {
                    return Err(integrity(
                        id,
                        &format!("neighbor '{}' does not exist", neighbor),
                    ));
                };
                if !other.neighbors.iter().any(|n| n == id) {
                    warn!("One-way edge: {} -> {} has no reverse entry", id, neighbor);
                }
            }
        }
        Ok(())
    }

    #[inline]
    pub fn get(&self, id: &str) -> Option<&Waypoint> {
        self.waypoints.get(id)
    }

    /// Look up a waypoint, failing with [`NavError::UnknownLocation`]
    pub fn require(&self, id: &str) -> Result<&Waypoint> {
        self.get(id).ok_or_else(|| NavError::unknown(id))
    }

    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.waypoints.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// All identifiers in sorted order
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.waypoints.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Iterate waypoints in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &Waypoint> {
        self.waypoints.values()
    }
}

fn integrity(id: &str, reason: &str) -> NavError {
    NavError::MapIntegrity {
        id: id.to_string(),
        reason: reason.to_string(),
    }
}
