//! Turn classification along a solved path.

use serde::Serialize;
use std::collections::HashMap;
use std::f64::consts::PI;

use super::direction::Direction;
use crate::core::Coord;
use crate::error::{NavError, Result};
use crate::search::SolvedPath;

/// Above this angle at a waypoint the path counts as straight
pub const STRAIGHT_THRESHOLD: f64 = 5.0 * PI / 6.0;

/// At or below this angle the path nearly reverses
pub const BACKWARDS_THRESHOLD: f64 = PI / 6.0;

/// Classified bend at one interior waypoint
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Turn {
    /// Interior angle at the waypoint in radians (π = straight through)
    pub angle: f64,
    pub direction: Direction,
}

/// Turn annotation for the interior waypoints of a path, keyed by identifier
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Turns(HashMap<String, Turn>);

impl Turns {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, turn: Turn) {
        self.0.insert(id.into(), turn);
    }

    pub fn get(&self, id: &str) -> Option<&Turn> {
        self.0.get(id)
    }

    pub fn direction(&self, id: &str) -> Option<Direction> {
        self.0.get(id).map(|t| t.direction)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Direction)> for Turns {
    /// Build from bare directions; angles are set to the nominal value of
    /// each class.
    fn from_iter<I: IntoIterator<Item = (S, Direction)>>(iter: I) -> Self {
        let mut turns = Turns::new();
        for (id, direction) in iter {
            let angle = match direction {
                Direction::Straight => PI,
                Direction::Left | Direction::Right => PI / 2.0,
                Direction::Backwards => 0.0,
            };
            turns.insert(id, Turn { angle, direction });
        }
        turns
    }
}

/// Annotate every interior waypoint of `path` with its turn.
///
/// Paths shorter than three waypoints have no interior and yield an empty
/// annotation.
pub fn classify_turns(path: &SolvedPath) -> Result<Turns> {
    let mut turns = Turns::new();

    for w in path.steps.windows(3) {
        let (a, b, c) = (&w[0].waypoint, &w[1].waypoint, &w[2].waypoint);
        let turn = classify_turn(a.coord, b.coord, c.coord)
            .ok_or_else(|| NavError::DegenerateGeometry { id: b.id.clone() })?;
        turns.insert(b.id.clone(), turn);
    }

    Ok(turns)
}

/// Classify the bend at `b` when walking `a -> b -> c`.
///
/// Returns `None` when `a` or `c` coincides with `b`.
pub fn classify_turn(a: Coord, b: Coord, c: Coord) -> Option<Turn> {
    let angle = turn_angle(a, b, c)?;

    let direction = if angle > STRAIGHT_THRESHOLD {
        Direction::Straight
    } else if angle > BACKWARDS_THRESHOLD {
        side_of(b - a, c - a)
    } else {
        Direction::Backwards
    };

    Some(Turn { angle, direction })
}

/// Interior angle at `b` from the law of cosines, in `[0, π]`.
pub fn turn_angle(a: Coord, b: Coord, c: Coord) -> Option<f64> {
    let ab = a.distance(&b);
    let bc = b.distance(&c);
    if ab == 0.0 || bc == 0.0 {
        return None;
    }
    let ac = a.distance(&c);

    // Rounding can push collinear triples just outside acos' domain
    let cos = ((ab * ab + bc * bc - ac * ac) / (2.0 * ab * bc)).clamp(-1.0, 1.0);
    Some(cos.acos())
}

/// Side of the line through the origin and `b` on which `c` lies.
///
/// `b` and `c` are offsets from the segment start. Counter-clockwise is left.
/// Points exactly on the line resolve by the direction of `b`: heading
/// east-ish or due south gives right, west-ish or due north gives left.
pub fn side_of(b: Coord, c: Coord) -> Direction {
    let cross = b.cross(&c);
    if cross > 0.0 {
        Direction::Left
    } else if cross < 0.0 {
        Direction::Right
    } else if b.x > 0.0 {
        Direction::Right
    } else if b.x < 0.0 || b.y > 0.0 {
        Direction::Left
    } else {
        Direction::Right
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::Waypoint;
    use crate::search::{PathStep, SearchStats};
    use approx::assert_relative_eq;

    fn path(points: &[(&str, f64, f64)]) -> SolvedPath {
        SolvedPath {
            steps: points
                .iter()
                .map(|&(id, x, y)| PathStep {
                    waypoint: Waypoint::new(id, Coord::new(x, y)),
                    cost: 0.0,
                })
                .collect(),
            stats: SearchStats::default(),
        }
    }

    /// Slope-based case table the cross product has to reproduce
    fn slope_table_side(b: Coord, c: Coord) -> Direction {
        if b.x > 0.0 {
            let slope = b.y / b.x;
            if c.y > c.x * slope {
                Direction::Left
            } else {
                Direction::Right
            }
        } else if b.x < 0.0 {
            let slope = b.y / b.x;
            if c.y > c.x * slope {
                Direction::Right
            } else {
                Direction::Left
            }
        } else if b.y > 0.0 {
            if c.x > 0.0 {
                Direction::Right
            } else {
                Direction::Left
            }
        } else if c.x > 0.0 {
            Direction::Left
        } else {
            Direction::Right
        }
    }

    #[test]
    fn test_straight() {
        let turns = classify_turns(&path(&[("a", 0.0, 0.0), ("b", 1.0, 0.0), ("c", 2.0, 0.0)]))
            .unwrap();
        let turn = turns.get("b").unwrap();
        assert_eq!(turn.direction, Direction::Straight);
        assert_relative_eq!(turn.angle, PI);
    }

    #[test]
    fn test_left_and_right() {
        let left = classify_turns(&path(&[("a", 0.0, 0.0), ("b", 1.0, 0.0), ("c", 1.0, 1.0)]))
            .unwrap();
        assert_eq!(left.direction("b"), Some(Direction::Left));
        assert_relative_eq!(left.get("b").unwrap().angle, PI / 2.0, epsilon = 1e-12);

        let right = classify_turns(&path(&[("a", 0.0, 0.0), ("b", 1.0, 0.0), ("c", 1.0, -1.0)]))
            .unwrap();
        assert_eq!(right.direction("b"), Some(Direction::Right));
    }

    #[test]
    fn test_backwards() {
        let turns = classify_turns(&path(&[("a", 0.0, 0.0), ("b", 4.0, 0.0), ("c", 0.0, 0.5)]))
            .unwrap();
        assert_eq!(turns.direction("b"), Some(Direction::Backwards));
    }

    #[test]
    fn test_threshold_boundaries() {
        let a = Coord::new(-1.0, 0.0);
        let b = Coord::ZERO;

        // c sits `deg` degrees clockwise of straight ahead
        let at = |deg: f64| {
            let rad = deg.to_radians();
            Coord::new(rad.cos(), -rad.sin())
        };
        assert_eq!(classify_turn(a, b, at(10.0)).unwrap().direction, Direction::Straight);
        assert_eq!(classify_turn(a, b, at(45.0)).unwrap().direction, Direction::Right);
        assert_eq!(classify_turn(a, b, at(140.0)).unwrap().direction, Direction::Right);
        assert_eq!(classify_turn(a, b, at(160.0)).unwrap().direction, Direction::Backwards);
    }

    #[test]
    fn test_every_interior_waypoint_annotated() {
        let turns = classify_turns(&path(&[
            ("a", 0.0, 0.0),
            ("b", 2.0, 0.0),
            ("c", 2.0, 2.0),
            ("d", 4.0, 2.0),
        ]))
        .unwrap();

        assert_eq!(turns.len(), 2);
        assert_eq!(turns.direction("b"), Some(Direction::Left));
        assert_eq!(turns.direction("c"), Some(Direction::Right));
        assert!(turns.get("a").is_none());
        assert!(turns.get("d").is_none());
    }

    #[test]
    fn test_short_paths_have_no_turns() {
        assert!(classify_turns(&path(&[("a", 0.0, 0.0)])).unwrap().is_empty());
        assert!(
            classify_turns(&path(&[("a", 0.0, 0.0), ("b", 1.0, 1.0)]))
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_coincident_waypoints_rejected() {
        let err = classify_turns(&path(&[("a", 1.0, 1.0), ("b", 1.0, 1.0), ("c", 2.0, 0.0)]))
            .unwrap_err();
        assert!(matches!(err, NavError::DegenerateGeometry { id } if id == "b"));

        let err = classify_turns(&path(&[("a", 0.0, 0.0), ("b", 1.0, 1.0), ("c", 1.0, 1.0)]))
            .unwrap_err();
        assert_eq!(err.code(), "DEGENERATE_GEOMETRY");
    }

    #[test]
    fn test_collinear_rounding_is_straight() {
        let turn = classify_turn(
            Coord::new(0.1, 0.1),
            Coord::new(0.2, 0.2),
            Coord::new(0.3, 0.3),
        )
        .unwrap();
        assert!(!turn.angle.is_nan());
        assert_eq!(turn.direction, Direction::Straight);
    }

    #[test]
    fn test_cross_product_matches_slope_table() {
        for bx in -3..=3 {
            for by in -3..=3 {
                if bx == 0 && by == 0 {
                    continue;
                }
                for cx in -3..=3 {
                    for cy in -3..=3 {
                        let b = Coord::new(bx as f64, by as f64);
                        let c = Coord::new(cx as f64, cy as f64);
                        if b.cross(&c) == 0.0 {
                            continue;
                        }
                        assert_eq!(
                            side_of(b, c),
                            slope_table_side(b, c),
                            "b=({bx},{by}) c=({cx},{cy})"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_points_on_the_line() {
        let cases = [
            (Coord::new(1.0, 0.0), Coord::new(2.0, 0.0)),
            (Coord::new(-1.0, 0.0), Coord::new(-2.0, 0.0)),
            (Coord::new(2.0, 1.0), Coord::new(-4.0, -2.0)),
            (Coord::new(0.0, 1.0), Coord::new(0.0, 2.0)),
            (Coord::new(0.0, -1.0), Coord::new(0.0, -3.0)),
        ];
        for (b, c) in cases {
            assert_eq!(side_of(b, c), slope_table_side(b, c), "b={b:?} c={c:?}");
        }
        assert_eq!(side_of(Coord::new(1.0, 0.0), Coord::new(2.0, 0.0)), Direction::Right);
        assert_eq!(side_of(Coord::new(0.0, 1.0), Coord::new(0.0, 2.0)), Direction::Left);
    }

    #[test]
    fn test_vertical_first_leg() {
        // Heading north, then east is a right turn
        let turn = classify_turn(Coord::ZERO, Coord::new(0.0, 1.0), Coord::new(1.0, 1.0)).unwrap();
        assert_eq!(turn.direction, Direction::Right);

        // Heading south, then east is a left turn
        let turn = classify_turn(Coord::ZERO, Coord::new(0.0, -1.0), Coord::new(1.0, -1.0)).unwrap();
        assert_eq!(turn.direction, Direction::Left);
    }

    #[test]
    fn test_translation_invariant() {
        let offset = Coord::new(120.5, -33.25);
        let base = classify_turn(Coord::ZERO, Coord::new(3.0, 1.0), Coord::new(2.0, 4.0)).unwrap();
        let moved = classify_turn(
            offset,
            Coord::new(3.0, 1.0) + offset,
            Coord::new(2.0, 4.0) + offset,
        )
        .unwrap();
        assert_eq!(base.direction, moved.direction);
        assert_relative_eq!(base.angle, moved.angle, epsilon = 1e-9);
    }
}
