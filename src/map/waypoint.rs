//! Waypoint definitions and their on-disk record form.

use serde::{Deserialize, Serialize};

use crate::core::{Coord, Tag, TagSet};

/// Record as written in a map file, keyed by the waypoint identifier.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WaypointRecord {
    /// Human description, appended to some instructions
    #[serde(default)]
    pub description: String,

    /// Plane position `[x, y]`
    pub coords: [f64; 2],

    /// Identifiers of directly reachable waypoints
    #[serde(default)]
    pub neighbors: Vec<String>,

    #[serde(default)]
    pub tags: TagSet,
}

/// A named location in the campus graph
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Waypoint {
    pub id: String,
    pub description: String,
    pub coord: Coord,
    pub neighbors: Vec<String>,
    pub tags: TagSet,
}

impl Waypoint {
    pub fn new(id: impl Into<String>, coord: Coord) -> Self {
        Self {
            id: id.into(),
            description: String::new(),
            coord,
            neighbors: Vec::new(),
            tags: TagSet::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_neighbors<I, S>(mut self, neighbors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.neighbors = neighbors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tags<I: IntoIterator<Item = Tag>>(mut self, tags: I) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    #[inline]
    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    pub(crate) fn from_record(id: String, record: WaypointRecord) -> Self {
        Self {
            id,
            description: record.description,
            coord: record.coords.into(),
            neighbors: record.neighbors,
            tags: record.tags,
        }
    }
}
