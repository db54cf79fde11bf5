//! Search types.

use serde::Serialize;

use crate::map::Waypoint;

/// Search engine configuration
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Maximum number of nodes to expand before giving up (`None` = unbounded)
    pub max_expansions: Option<usize>,
    /// Deadline applied when the caller supplies none (`None` = no deadline)
    pub default_timeout: Option<std::time::Duration>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_expansions: Some(100_000),
            default_timeout: None,
        }
    }
}

impl SearchConfig {
    /// No expansion cap and no default deadline
    pub fn unbounded() -> Self {
        Self {
            max_expansions: None,
            default_timeout: None,
        }
    }
}

/// One waypoint of a solved path
#[derive(Clone, Debug, Serialize)]
pub struct PathStep {
    pub waypoint: Waypoint,
    /// Accumulated Euclidean distance from the start
    pub cost: f64,
}

impl PathStep {
    #[inline]
    pub fn id(&self) -> &str {
        &self.waypoint.id
    }
}

/// Counters collected during one search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Nodes removed from the frontier
    pub nodes_expanded: usize,
    /// Nodes ever inserted into the frontier, start included
    pub nodes_discovered: usize,
}

/// Ordered path from start to goal, both inclusive
#[derive(Clone, Debug, Serialize)]
pub struct SolvedPath {
    pub steps: Vec<PathStep>,
    pub stats: SearchStats,
}

impl SolvedPath {
    /// Total cost (cost of the final step)
    pub fn cost(&self) -> f64 {
        self.steps.last().map(|s| s.cost).unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.steps.iter().map(PathStep::id).collect()
    }

    /// Length measured along the waypoints' coordinates
    pub fn geometric_length(&self) -> f64 {
        self.steps
            .windows(2)
            .map(|w| w[0].waypoint.coord.distance(&w[1].waypoint.coord))
            .sum()
    }
}
