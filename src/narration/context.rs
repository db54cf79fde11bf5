//! What a narration rule can see about one waypoint of the path.

use crate::core::Tag;
use crate::geometry::Direction;
use crate::map::{MapStore, Waypoint};
use crate::search::PathStep;

/// Role of a waypoint within the path
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    /// First waypoint
    Start,
    /// Any waypoint between the start and the penultimate one
    Interior,
    /// Second-to-last waypoint, the step leading to the destination
    Penultimate,
}

impl Position {
    /// Position class of `index` in a path of `len` waypoints.
    ///
    /// Returns `None` for the destination, which never narrates on its own.
    pub fn classify(index: usize, len: usize) -> Option<Position> {
        if index + 1 >= len {
            None
        } else if index == 0 {
            Some(Position::Start)
        } else if index + 2 == len {
            Some(Position::Penultimate)
        } else {
            Some(Position::Interior)
        }
    }
}

/// View of one path waypoint handed to the rule tables
#[derive(Clone, Copy, Debug)]
pub struct StepContext<'a> {
    pub index: usize,
    pub steps: &'a [PathStep],
    pub map: &'a MapStore,
    /// Direction at this waypoint (`None` at the start)
    pub direction: Option<Direction>,
    /// Direction at the following waypoint (`None` when it is the destination)
    pub next_direction: Option<Direction>,
}

impl<'a> StepContext<'a> {
    #[inline]
    pub fn current(&self) -> &'a Waypoint {
        &self.steps[self.index].waypoint
    }

    pub fn previous(&self) -> Option<&'a Waypoint> {
        self.index
            .checked_sub(1)
            .map(|i| &self.steps[i].waypoint)
    }

    pub fn next(&self) -> Option<&'a Waypoint> {
        self.steps.get(self.index + 1).map(|s| &s.waypoint)
    }

    pub fn destination(&self) -> &'a Waypoint {
        &self.steps[self.steps.len() - 1].waypoint
    }

    /// Identifier of the following waypoint, empty at the destination
    pub fn next_id(&self) -> &'a str {
        self.next().map(|w| w.id.as_str()).unwrap_or_default()
    }

    #[inline]
    pub fn has(&self, tag: &Tag) -> bool {
        self.current().has_tag(tag)
    }

    pub fn has_all(&self, tags: &[Tag]) -> bool {
        self.current().tags.has_all(tags)
    }

    pub fn previous_has(&self, tag: &Tag) -> bool {
        self.previous().is_some_and(|w| w.has_tag(tag))
    }

    pub fn destination_has(&self, tag: &Tag) -> bool {
        self.destination().has_tag(tag)
    }

    pub fn is_straight(&self) -> bool {
        self.direction.is_some_and(|d| d.is_straight())
    }

    pub fn next_is_straight(&self) -> bool {
        self.next_direction.is_some_and(|d| d.is_straight())
    }

    /// Direction word for this waypoint
    pub fn turn_word(&self) -> &'static str {
        self.direction.map(|d| d.as_str()).unwrap_or("straight")
    }

    /// First neighbor of this waypoint that is tagged as a building
    pub fn neighboring_building(&self) -> Option<&'a Waypoint> {
        self.current()
            .neighbors
            .iter()
            .filter_map(|id| self.map.get(id))
            .find(|w| w.has_tag(&Tag::Building))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_classes() {
        assert_eq!(Position::classify(0, 1), None);

        assert_eq!(Position::classify(0, 2), Some(Position::Start));
        assert_eq!(Position::classify(1, 2), None);

        assert_eq!(Position::classify(0, 5), Some(Position::Start));
        assert_eq!(Position::classify(1, 5), Some(Position::Interior));
        assert_eq!(Position::classify(2, 5), Some(Position::Interior));
        assert_eq!(Position::classify(3, 5), Some(Position::Penultimate));
        assert_eq!(Position::classify(4, 5), None);
    }
}
