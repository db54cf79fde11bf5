//! Route search.
//!
//! Best-first search over the waypoint graph, ranking frontier entries by
//! accumulated walking distance plus straight-line distance to the goal.
//!
//! ```rust,ignore
//! use campus_nav::search::SearchEngine;
//!
//! let engine = SearchEngine::with_defaults(map.clone());
//! let path = engine.find_path("build_c", "build_g")?;
//! println!("{} waypoints, {:.1}m", path.len(), path.cost());
//! ```
//!
//! Frontier ties are broken by discovery order: among entries with equal
//! priority, the one inserted first is expanded first. Together with the
//! neighbor order of the map file this makes every search reproducible.

mod engine;
mod frontier;
mod limits;
mod types;

pub use engine::SearchEngine;
pub use limits::{CancelToken, SearchLimits};
pub use types::{PathStep, SearchConfig, SearchStats, SolvedPath};
