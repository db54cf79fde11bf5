//! Core types shared by the map, search and narration modules:
//! - [`Coord`]: plane position with distance and cross-product helpers
//! - [`Tag`] and [`TagSet`]: semantic waypoint labels

mod point;
mod tag;

pub use point::Coord;
pub use tag::{Tag, TagSet};
