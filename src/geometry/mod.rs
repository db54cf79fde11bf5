//! Turn geometry.
//!
//! For each interior waypoint B of a path A → B → C the interior angle at B
//! comes from the law of cosines:
//!
//! ```text
//! angle = acos((|AB|² + |BC|² − |AC|²) / (2·|AB|·|BC|))
//!
//!   angle > 5π/6          straight
//!   π/6 < angle ≤ 5π/6    left / right (sign of AB × AC)
//!   angle ≤ π/6           backwards
//! ```

mod direction;
mod turns;

pub use direction::Direction;
pub use turns::{
    BACKWARDS_THRESHOLD, STRAIGHT_THRESHOLD, Turn, Turns, classify_turn, classify_turns, side_of,
    turn_angle,
};
