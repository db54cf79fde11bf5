//! Best-first route search over the campus graph.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, trace, warn};

use super::frontier::{Frontier, NodeArena, SearchNode};
use super::limits::SearchLimits;
use super::types::{PathStep, SearchConfig, SearchStats, SolvedPath};
use crate::error::{NavError, Result};
use crate::map::MapStore;

/// Route search engine.
///
/// Expands the frontier node with the lowest `cost + distance(coord, goal)`.
/// A node's cost is fixed when it is first discovered and an explored node is
/// never reopened, so the result is optimal only when first discovery happens
/// through the cheapest predecessor. Maps whose edge lengths are consistent
/// with their coordinates satisfy this.
#[derive(Clone, Debug)]
pub struct SearchEngine {
    map: Arc<MapStore>,
    config: SearchConfig,
}

impl SearchEngine {
    /// Create a new engine over a shared map
    pub fn new(map: Arc<MapStore>, config: SearchConfig) -> Self {
        Self { map, config }
    }

    /// Create with default configuration
    pub fn with_defaults(map: Arc<MapStore>) -> Self {
        Self::new(map, SearchConfig::default())
    }

    pub fn map(&self) -> &Arc<MapStore> {
        &self.map
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Find a path from `start` to `end`.
    ///
    /// The configured `max_expansions` cap (100 000 by default) still applies:
    /// a reachable pair that needs more expansions fails with
    /// [`NavError::ExpansionLimitExceeded`]. Use [`SearchConfig::unbounded`]
    /// to search without a cap.
    pub fn find_path(&self, start: &str, end: &str) -> Result<SolvedPath> {
        self.find_path_with(start, end, &SearchLimits::none())
    }

    /// Find a path, aborting on cancellation or deadline.
    ///
    /// Without a deadline in `limits`, the configured default timeout (if
    /// any) applies.
    pub fn find_path_with(
        &self,
        start: &str,
        end: &str,
        limits: &SearchLimits,
    ) -> Result<SolvedPath> {
        trace!("find_path: start={} end={}", start, end);

        let map: &MapStore = &self.map;
        let start_wp = map.require(start)?;
        let goal_wp = map.require(end)?;
        let goal = goal_wp.coord;

        let started = Instant::now();
        let limits = match (limits.deadline, self.config.default_timeout) {
            (None, Some(timeout)) => limits.clone().with_deadline(started + timeout),
            _ => limits.clone(),
        };

        let mut arena = NodeArena::new();
        let mut frontier = Frontier::new();
        let mut explored: HashSet<&str> = HashSet::new();
        let mut stats = SearchStats::default();

        let root = arena.push(SearchNode {
            waypoint: start_wp,
            parent: None,
            cost: 0.0,
        });
        frontier.add(&start_wp.id, root, start_wp.coord.distance(&goal));
        stats.nodes_discovered = 1;

        loop {
            limits.check(started).inspect_err(|e| {
                warn!("Search {} -> {} aborted: {}", start, end, e);
            })?;

            let Some(current_id) = frontier.pop(&arena) else {
                debug!(
                    "No path {} -> {} after expanding {} nodes",
                    start, end, stats.nodes_expanded
                );
                return Err(NavError::NoPath {
                    start: start.to_string(),
                    end: end.to_string(),
                });
            };

            stats.nodes_expanded += 1;
            if let Some(limit) = self.config.max_expansions
                && stats.nodes_expanded > limit
            {
                warn!("Search {} -> {} exceeded {} expansions", start, end, limit);
                return Err(NavError::ExpansionLimitExceeded { limit });
            }

            let current = arena.get(current_id);
            let (current_wp, current_cost) = (current.waypoint, current.cost);
            trace!("expand {} (cost {:.2})", current_wp.id, current_cost);

            // Goal reached
            if current_wp.id == end {
                let steps: Vec<PathStep> = arena
                    .path_to(current_id)
                    .into_iter()
                    .map(|node| PathStep {
                        waypoint: node.waypoint.clone(),
                        cost: node.cost,
                    })
                    .collect();

                debug!(
                    "Path {} -> {}: {} waypoints, cost={:.2}, expanded={}, discovered={}",
                    start,
                    end,
                    steps.len(),
                    current_cost,
                    stats.nodes_expanded,
                    stats.nodes_discovered
                );
                return Ok(SolvedPath { steps, stats });
            }

            explored.insert(current_wp.id.as_str());

            for neighbor_id in &current_wp.neighbors {
                if frontier.contains(neighbor_id) || explored.contains(neighbor_id.as_str()) {
                    continue;
                }

                // Loader guarantees neighbor references resolve
                let Some(neighbor) = map.get(neighbor_id) else {
                    return Err(NavError::MapIntegrity {
                        id: current_wp.id.clone(),
                        reason: format!("neighbor '{}' does not exist", neighbor_id),
                    });
                };

                let cost = current_cost + current_wp.coord.distance(&neighbor.coord);
                let child = arena.push(SearchNode {
                    waypoint: neighbor,
                    parent: Some(current_id),
                    cost,
                });
                frontier.add(&neighbor.id, child, cost + neighbor.coord.distance(&goal));
                stats.nodes_discovered += 1;
            }
        }
    }

    /// Check whether `end` is reachable from `start`
    pub fn path_exists(&self, start: &str, end: &str) -> bool {
        self.find_path(start, end).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Coord, Tag};
    use crate::map::Waypoint;
    use crate::search::CancelToken;
    use approx::assert_relative_eq;

    fn wp(id: &str, x: f64, y: f64, neighbors: &[&str]) -> Waypoint {
        Waypoint::new(id, Coord::new(x, y)).with_neighbors(neighbors.iter().copied())
    }

    fn engine_for(waypoints: Vec<Waypoint>) -> SearchEngine {
        SearchEngine::with_defaults(Arc::new(MapStore::from_waypoints(waypoints).unwrap()))
    }

    /// A-B-C-D square walk from the narration scenario
    fn square() -> SearchEngine {
        engine_for(vec![
            wp("A", 0.0, 0.0, &["B"]).with_tags([Tag::Outside, Tag::Crossway]),
            wp("B", 2.0, 0.0, &["A", "C"]).with_tags([Tag::Outside, Tag::Crossway]),
            wp("C", 2.0, 2.0, &["B", "D"]).with_tags([Tag::Outside, Tag::Crossway]),
            wp("D", 4.0, 2.0, &["C"]).with_tags([Tag::Building]),
        ])
    }

    #[test]
    fn test_simple_path() {
        let path = square().find_path("A", "D").unwrap();

        assert_eq!(path.ids(), vec!["A", "B", "C", "D"]);
        assert_relative_eq!(path.cost(), 6.0);
        assert_relative_eq!(path.cost(), path.geometric_length());
        assert_eq!(path.steps[0].cost, 0.0);
        assert_eq!(path.stats.nodes_expanded, 4);
    }

    #[test]
    fn test_start_equals_end() {
        let path = square().find_path("C", "C").unwrap();
        assert_eq!(path.ids(), vec!["C"]);
        assert_eq!(path.cost(), 0.0);
        assert_eq!(path.stats.nodes_expanded, 1);
    }

    #[test]
    fn test_unknown_location() {
        let engine = square();
        assert!(matches!(
            engine.find_path("A", "Z"),
            Err(NavError::UnknownLocation { id }) if id == "Z"
        ));
        assert!(matches!(
            engine.find_path("Z", "A"),
            Err(NavError::UnknownLocation { id }) if id == "Z"
        ));
    }

    #[test]
    fn test_no_path_between_components() {
        let engine = engine_for(vec![
            wp("a1", 0.0, 0.0, &["a2"]),
            wp("a2", 1.0, 0.0, &["a1"]),
            wp("b1", 5.0, 0.0, &["b2"]),
            wp("b2", 6.0, 0.0, &["b1"]),
        ]);

        let err = engine.find_path("a1", "b2").unwrap_err();
        assert!(matches!(err, NavError::NoPath { .. }));
        assert!(!engine.path_exists("a1", "b2"));
        assert!(engine.path_exists("b2", "b1"));
    }

    #[test]
    fn test_prefers_shorter_route() {
        // Two routes from s to g: via the short detour m1 or the long one m2
        let engine = engine_for(vec![
            wp("s", 0.0, 0.0, &["m2", "m1"]),
            wp("m1", 2.0, 1.0, &["s", "g"]),
            wp("m2", 2.0, 6.0, &["s", "g"]),
            wp("g", 4.0, 0.0, &["m1", "m2"]),
        ]);

        let path = engine.find_path("s", "g").unwrap();
        assert_eq!(path.ids(), vec!["s", "m1", "g"]);
        assert_relative_eq!(path.cost(), 2.0 * 5.0_f64.sqrt());
    }

    #[test]
    fn test_tie_goes_to_first_discovered() {
        // up and down are mirror images, so both routes cost the same
        let engine = engine_for(vec![
            wp("s", 0.0, 0.0, &["up", "down"]),
            wp("up", 1.0, 1.0, &["s", "g"]),
            wp("down", 1.0, -1.0, &["s", "g"]),
            wp("g", 2.0, 0.0, &["up", "down"]),
        ]);
        assert_eq!(engine.find_path("s", "g").unwrap().ids(), vec!["s", "up", "g"]);

        let engine = engine_for(vec![
            wp("s", 0.0, 0.0, &["down", "up"]),
            wp("up", 1.0, 1.0, &["s", "g"]),
            wp("down", 1.0, -1.0, &["s", "g"]),
            wp("g", 2.0, 0.0, &["up", "down"]),
        ]);
        assert_eq!(engine.find_path("s", "g").unwrap().ids(), vec!["s", "down", "g"]);
    }

    #[test]
    fn test_first_discovery_cost_is_kept() {
        // x is first discovered through p1; the cheaper route through p2 is
        // seen later but x is already in the frontier and keeps its cost
        let engine = engine_for(vec![
            wp("s", 0.0, 0.0, &["p1", "p2"]),
            wp("p1", 4.0, 3.0, &["s", "x"]),
            wp("p2", 3.0, -3.0, &["s", "x"]),
            wp("x", 5.0, -3.0, &["p1", "p2", "g"]),
            wp("g", 10.0, 0.0, &["x"]),
        ]);

        let path = engine.find_path("s", "g").unwrap();
        assert_eq!(path.ids(), vec!["s", "p1", "x", "g"]);
        assert_relative_eq!(path.cost(), 5.0 + 37.0_f64.sqrt() + 34.0_f64.sqrt());
    }

    #[test]
    fn test_cycle_terminates() {
        let engine = engine_for(vec![
            wp("a", 0.0, 0.0, &["b", "c"]),
            wp("b", 1.0, 0.0, &["a", "c"]),
            wp("c", 0.5, 1.0, &["a", "b"]),
            wp("island", 9.0, 9.0, &[]),
        ]);

        let err = engine.find_path("a", "island").unwrap_err();
        assert_eq!(err.code(), "NO_PATH");
    }

    #[test]
    fn test_cancelled_search() {
        let token = CancelToken::new();
        token.cancel();
        let limits = SearchLimits::none().with_cancel(token);

        let err = square().find_path_with("A", "D", &limits).unwrap_err();
        assert!(matches!(err, NavError::Cancelled));
    }

    #[test]
    fn test_expired_deadline() {
        let limits = SearchLimits::none().with_deadline(Instant::now());
        let err = square().find_path_with("A", "D", &limits).unwrap_err();
        assert!(matches!(err, NavError::DeadlineExceeded { .. }));
    }

    #[test]
    fn test_expansion_limit() {
        let map = square().map().clone();
        let engine = SearchEngine::new(
            map,
            SearchConfig {
                max_expansions: Some(2),
                ..Default::default()
            },
        );

        let err = engine.find_path("A", "D").unwrap_err();
        assert!(matches!(err, NavError::ExpansionLimitExceeded { limit: 2 }));
        assert!(engine.find_path("A", "B").is_ok());
    }

    #[test]
    fn test_one_way_edge_followed_forward_only() {
        let engine = engine_for(vec![wp("a", 0.0, 0.0, &["b"]), wp("b", 1.0, 0.0, &[])]);
        assert!(engine.find_path("a", "b").is_ok());
        assert!(matches!(
            engine.find_path("b", "a"),
            Err(NavError::NoPath { .. })
        ));
    }
}
