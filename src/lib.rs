//! # Campus-Nav: Walking Directions on a Campus Graph
//!
//! Finds a short walking route between two named locations on a campus map
//! and turns it into plain-language instructions.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use std::sync::Arc;
//! use campus_nav::{MapStore, NavConfig, Navigator};
//!
//! let map = Arc::new(MapStore::load(Path::new("maps/campus.json"))?);
//! let navigator = Navigator::new(map, &NavConfig::default());
//!
//! let route = navigator.route("Computer Science", "Sports Centre")?;
//! for line in &route.instructions {
//!     println!("{}", line);
//! }
//! # Ok::<(), campus_nav::NavError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: Coordinates and waypoint tags
//! - [`map`]: Map loading and validation
//! - [`search`]: Best-first route search with cancellation and deadlines
//! - [`geometry`]: Turn classification at each waypoint
//! - [`narration`]: Rule tables that produce instructions
//! - [`navigator`]: The three stages chained behind one call
//! - [`config`]: TOML configuration
//!
//! ## Data Flow
//!
//! ```text
//!   map file ──► MapStore ──► SearchEngine::find_path ──► SolvedPath
//!                                                             │
//!                                         classify_turns ◄────┤
//!                                               │             │
//!                                               ▼             ▼
//!                                             Turns ──► Narrator::narrate
//!                                                             │
//!                                                             ▼
//!                                                    Vec<String> instructions
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod geometry;
pub mod map;
pub mod narration;
pub mod navigator;
pub mod search;

pub use config::NavConfig;
pub use core::{Coord, Tag, TagSet};
pub use error::{NavError, Result};
pub use geometry::{Direction, Turn, Turns, classify_turns};
pub use map::{MapStore, Waypoint};
pub use narration::Narrator;
pub use navigator::{Navigator, Route};
pub use search::{CancelToken, SearchConfig, SearchEngine, SearchLimits, SolvedPath};
