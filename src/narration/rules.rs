//! Instruction decision tables.
//!
//! Each position class owns an ordered table. The first rule whose predicate
//! holds fires; its render may return `None` to deliberately say nothing for
//! that waypoint (e.g. a straight stretch continuing into another straight
//! stretch). When no rule matches the waypoint is skipped.

use super::context::{Position, StepContext};
use crate::core::Tag;
use crate::geometry::Direction;

/// One row of a decision table
pub struct Rule {
    pub name: &'static str,
    pub applies: fn(&StepContext<'_>) -> bool,
    pub render: fn(&StepContext<'_>) -> Option<String>,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// Outcome of evaluating a table for one waypoint
#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Emit { rule: &'static str, text: String },
    Suppressed { rule: &'static str },
    NoMatch,
}

/// Rules for the first waypoint
pub static START_RULES: &[Rule] = &[
    Rule {
        name: "leave_building",
        applies: |ctx| ctx.has(&Tag::Building),
        render: |ctx| {
            let tail = match ctx.next_direction {
                Some(Direction::Right) => "and turn right",
                Some(Direction::Left) => "and turn left",
                _ => "and walk straight ahead",
            };
            Some(format!(
                "Start by leaving the building through the main door, {}.",
                tail
            ))
        },
    },
    Rule {
        name: "head_towards_next",
        applies: |ctx| ctx.has(&Tag::Outside),
        render: |ctx| {
            let next = ctx.next()?;
            let description = next.description.trim().trim_end_matches('.');
            Some(if description.is_empty() {
                format!("Go towards the {}.", next.id)
            } else {
                format!("Go towards the {}. {}.", next.id, description)
            })
        },
    },
];

/// Rules for waypoints between the start and the penultimate waypoint
pub static INTERIOR_RULES: &[Rule] = &[
    Rule {
        name: "front_door_of_start_building",
        applies: |ctx| {
            ctx.index == 1 && ctx.has(&Tag::FrontDoor) && ctx.previous_has(&Tag::Building)
        },
        render: |_| None,
    },
    Rule {
        name: "through_building",
        applies: |ctx| ctx.has_all(&[Tag::Building, Tag::ThroughBuilding]),
        render: |ctx| {
            Some(format!(
                "Enter the {} and go through it until you're out again.",
                ctx.current().id
            ))
        },
    },
    Rule {
        name: "inside_building",
        applies: |ctx| ctx.has(&Tag::Building),
        render: |_| None,
    },
    Rule {
        name: "pass_front_door",
        applies: |ctx| {
            ctx.has_all(&[Tag::Outside, Tag::Crossway, Tag::FrontDoor]) && ctx.is_straight()
        },
        render: |ctx| {
            if ctx.next_is_straight() {
                return None;
            }
            let building = ctx.neighboring_building()?;
            Some(format!("Walk past the {}.", building.id))
        },
    },
    Rule {
        name: "turn_at_front_door",
        applies: |ctx| ctx.has_all(&[Tag::Outside, Tag::Crossway, Tag::FrontDoor]),
        render: turn_at_crossway,
    },
    Rule {
        name: "straight_through_crossway",
        applies: |ctx| ctx.has_all(&[Tag::Outside, Tag::Crossway]) && ctx.is_straight(),
        render: keep_straight_until_next,
    },
    Rule {
        name: "turn_at_crossway",
        applies: |ctx| ctx.has_all(&[Tag::Outside, Tag::Crossway]),
        render: turn_at_crossway,
    },
    Rule {
        name: "follow_walkway_turn",
        applies: |ctx| ctx.has(&Tag::Outside) && !ctx.is_straight(),
        render: |ctx| {
            Some(format!(
                "Turn {}, so that you stay on the same walkway.",
                ctx.turn_word()
            ))
        },
    },
    Rule {
        name: "archway",
        applies: |ctx| ctx.has_all(&[Tag::Outside, Tag::UnderBuilding]),
        render: |_| Some("Walk through the archway in front of you.".to_string()),
    },
    Rule {
        name: "straight_on_walkway",
        applies: |ctx| ctx.has(&Tag::Outside),
        render: keep_straight_until_next,
    },
];

/// Rules for the second-to-last waypoint
pub static PENULTIMATE_RULES: &[Rule] = &[
    Rule {
        name: "through_final_building",
        applies: |ctx| ctx.has_all(&[Tag::Building, Tag::ThroughBuilding]),
        render: |ctx| {
            Some(format!(
                "Finally, go through the {}, your destination is right on the other side!",
                ctx.current().id
            ))
        },
    },
    Rule {
        name: "inside_final_building",
        applies: |ctx| ctx.has(&Tag::Building),
        render: |_| None,
    },
    Rule {
        name: "building_straight_ahead",
        applies: |ctx| {
            ctx.has(&Tag::Crossway) && ctx.destination_has(&Tag::Building) && ctx.is_straight()
        },
        render: |_| Some("Your destination is the building straight ahead, go in!".to_string()),
    },
    Rule {
        name: "building_to_the_side",
        applies: |ctx| ctx.has(&Tag::Crossway) && ctx.destination_has(&Tag::Building),
        render: |ctx| {
            Some(format!(
                "Your destination is the building on the {}, go in!",
                ctx.turn_word()
            ))
        },
    },
    Rule {
        name: "straight_to_destination",
        applies: |ctx| ctx.is_straight(),
        render: |_| {
            Some("Keep going straight ahead and you will reach your destination!".to_string())
        },
    },
    Rule {
        name: "turn_at_last_crossway",
        applies: |ctx| ctx.has(&Tag::Crossway),
        render: |ctx| {
            Some(format!(
                "At the next crossway, turn on the {} and you will reach your destination!",
                ctx.turn_word()
            ))
        },
    },
    Rule {
        name: "turn_onto_last_walkway",
        applies: |_| true,
        render: |ctx| {
            Some(format!(
                "Turn on the {} so that you stay on the same walkway, and you will reach your destination!",
                ctx.turn_word()
            ))
        },
    },
];

fn turn_at_crossway(ctx: &StepContext<'_>) -> Option<String> {
    Some(format!(
        "Once you reach the {}, turn {} towards the {}.",
        ctx.current().id,
        ctx.turn_word(),
        ctx.next_id()
    ))
}

fn keep_straight_until_next(ctx: &StepContext<'_>) -> Option<String> {
    if ctx.next_is_straight() {
        return None;
    }
    Some(format!(
        "Keep walking straight until you reach {}.",
        ctx.next_id()
    ))
}

/// Decision table for a position class
pub fn rules_for(position: Position) -> &'static [Rule] {
    match position {
        Position::Start => START_RULES,
        Position::Interior => INTERIOR_RULES,
        Position::Penultimate => PENULTIMATE_RULES,
    }
}

/// Evaluate `rules` first-match against `ctx`.
pub fn evaluate(rules: &[Rule], ctx: &StepContext<'_>) -> Decision {
    match rules.iter().find(|rule| (rule.applies)(ctx)) {
        Some(rule) => match (rule.render)(ctx) {
            Some(text) => Decision::Emit {
                rule: rule.name,
                text,
            },
            None => Decision::Suppressed { rule: rule.name },
        },
        None => Decision::NoMatch,
    }
}
