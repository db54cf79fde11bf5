//! Direction labels.

use serde::Serialize;
use std::fmt;

/// How the path bends at a waypoint
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Straight,
    Left,
    Right,
    Backwards,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Straight => "straight",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Backwards => "backwards",
        }
    }

    #[inline]
    pub fn is_straight(&self) -> bool {
        matches!(self, Direction::Straight)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
