//! Route pipeline: search, turn classification, narration.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::NavConfig;
use crate::error::Result;
use crate::geometry::{Turns, classify_turns};
use crate::map::MapStore;
use crate::narration::Narrator;
use crate::search::{SearchEngine, SearchLimits, SolvedPath};

/// A solved, annotated and narrated route
#[derive(Clone, Debug, Serialize)]
pub struct Route {
    pub path: SolvedPath,
    pub turns: Turns,
    pub instructions: Vec<String>,
}

impl Route {
    /// Total walking distance
    pub fn cost(&self) -> f64 {
        self.path.cost()
    }

    pub fn waypoint_ids(&self) -> Vec<&str> {
        self.path.ids()
    }

    /// Instructions as one paragraph
    pub fn to_text(&self) -> String {
        self.instructions.join(" ")
    }
}

/// Query front end over a shared map.
///
/// Cheap to clone; clones share the map.
#[derive(Clone, Debug)]
pub struct Navigator {
    engine: SearchEngine,
    narrator: Narrator,
}

impl Navigator {
    pub fn new(map: Arc<MapStore>, config: &NavConfig) -> Self {
        Self {
            engine: SearchEngine::new(Arc::clone(&map), config.search_config()),
            narrator: Narrator::new(map),
        }
    }

    pub fn map(&self) -> &Arc<MapStore> {
        self.engine.map()
    }

    /// Route from `start` to `end` with no caller limits
    pub fn route(&self, start: &str, end: &str) -> Result<Route> {
        self.route_with(start, end, &SearchLimits::none())
    }

    /// Route from `start` to `end`, honoring `limits` during the search
    pub fn route_with(&self, start: &str, end: &str, limits: &SearchLimits) -> Result<Route> {
        let path = self.engine.find_path_with(start, end, limits)?;
        let turns = classify_turns(&path)?;
        debug!("{} -> {}: {} turns classified", start, end, turns.len());

        let instructions = self.narrator.narrate(&path, &turns)?;
        info!(
            "Route {} -> {}: {} waypoints, {:.1}m, {} instructions",
            start,
            end,
            path.len(),
            path.cost(),
            instructions.len()
        );

        Ok(Route {
            path,
            turns,
            instructions,
        })
    }
}
