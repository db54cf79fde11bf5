//! Natural-language directions.
//!
//! Every waypoint except the destination is matched against the decision
//! table of its position class (start, interior, penultimate). Rules inspect
//! the waypoint's tags, its turn direction and the direction at the next
//! waypoint:
//!
//! ```text
//! gate ──► Library door ──► corner ──► pond
//!  │            │              │
//!  start        interior       penultimate
//!  "Go towards  "Walk past     "At the next crossway, turn on
//!   the ..."     the Library."  the left and ..."
//! ```

mod context;
mod narrator;
mod rules;

pub use context::{Position, StepContext};
pub use narrator::{ALREADY_THERE, Narrator};
pub use rules::{
    Decision, INTERIOR_RULES, PENULTIMATE_RULES, Rule, START_RULES, evaluate, rules_for,
};
