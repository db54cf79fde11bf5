//! Turns a solved path into walking instructions.

use std::sync::Arc;

use tracing::trace;

use super::context::{Position, StepContext};
use super::rules::{Decision, evaluate, rules_for};
use crate::error::{NavError, Result};
use crate::geometry::{Direction, Turns};
use crate::map::MapStore;
use crate::search::{PathStep, SolvedPath};

/// Instruction for a path that starts at its destination
pub const ALREADY_THERE: &str = "You are already at your destination!";

/// Narration generator.
///
/// Needs the map to look up neighbors that are not on the path (for
/// "walk past" hints).
#[derive(Clone, Debug)]
pub struct Narrator {
    map: Arc<MapStore>,
}

impl Narrator {
    pub fn new(map: Arc<MapStore>) -> Self {
        Self { map }
    }

    /// Produce instructions for `path` in path order.
    ///
    /// `turns` must hold a direction for every interior waypoint, normally
    /// the output of [`classify_turns`](crate::geometry::classify_turns).
    pub fn narrate(&self, path: &SolvedPath, turns: &Turns) -> Result<Vec<String>> {
        self.narrate_steps(&path.steps, turns)
    }

    /// Same as [`narrate`](Self::narrate) on a bare slice of steps.
    pub fn narrate_steps(&self, steps: &[PathStep], turns: &Turns) -> Result<Vec<String>> {
        match steps.len() {
            0 => return Err(NavError::EmptyPath),
            1 => return Ok(vec![ALREADY_THERE.to_string()]),
            _ => {}
        }

        let direction_at = |i: usize| -> Result<Direction> {
            let id = &steps[i].waypoint.id;
            turns
                .direction(id)
                .ok_or_else(|| NavError::MissingDirection { id: id.clone() })
        };

        let mut instructions = Vec::new();

        for index in 0..steps.len() {
            let Some(position) = Position::classify(index, steps.len()) else {
                continue;
            };

            let (direction, next_direction) = match position {
                Position::Start => {
                    let next = &steps[index + 1].waypoint.id;
                    (None, turns.direction(next))
                }
                Position::Interior => (Some(direction_at(index)?), Some(direction_at(index + 1)?)),
                Position::Penultimate => (Some(direction_at(index)?), None),
            };

            let ctx = StepContext {
                index,
                steps,
                map: &self.map,
                direction,
                next_direction,
            };

            match evaluate(rules_for(position), &ctx) {
                Decision::Emit { rule, text } => {
                    trace!("{} [{:?}/{}]: {}", ctx.current().id, position, rule, text);
                    instructions.push(text);
                }
                Decision::Suppressed { rule } => {
                    trace!("{} [{:?}/{}]: suppressed", ctx.current().id, position, rule);
                }
                Decision::NoMatch => {
                    trace!("{} [{:?}]: no rule", ctx.current().id, position);
                }
            }
        }

        Ok(instructions)
    }
}
