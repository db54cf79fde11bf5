//! Campus map storage.
//!
//! The map is a keyed collection of waypoints. Each record carries a
//! description, a plane coordinate, the identifiers of its neighbors and a
//! tag set:
//!
//! ```json
//! {
//!   "library": {
//!     "description": "The big glass building",
//!     "coords": [12.0, 40.5],
//!     "neighbors": ["library_door"],
//!     "tags": ["building"]
//!   }
//! }
//! ```
//!
//! YAML files with the same shape are accepted as well.

mod store;
mod waypoint;

pub use store::MapStore;
pub use waypoint::{Waypoint, WaypointRecord};
