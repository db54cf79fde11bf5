//! Plane coordinate type.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Position of a waypoint on the campus plane
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Coord {
    /// X coordinate (east)
    pub x: f64,
    /// Y coordinate (north)
    pub y: f64,
}

impl Coord {
    /// Create a new coordinate
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Origin
    pub const ZERO: Coord = Coord { x: 0.0, y: 0.0 };

    /// Euclidean distance to another coordinate
    #[inline]
    pub fn distance(&self, other: &Coord) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Squared distance (avoids sqrt)
    #[inline]
    pub fn distance_squared(&self, other: &Coord) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Z component of the 2-D cross product `self × other`.
    ///
    /// Positive when `other` lies counter-clockwise of `self` as seen from
    /// the origin.
    #[inline]
    pub fn cross(&self, other: &Coord) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Both components are finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for Coord {
    fn from(c: [f64; 2]) -> Self {
        Coord::new(c[0], c[1])
    }
}

impl From<Coord> for [f64; 2] {
    fn from(c: Coord) -> Self {
        [c.x, c.y]
    }
}

impl Add for Coord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Coord::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Coord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Coord::new(self.x - other.x, self.y - other.y)
    }
}
