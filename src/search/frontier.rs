//! Search node arena and frontier.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use crate::map::Waypoint;

/// Handle of a node in the [`NodeArena`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(super) struct NodeId(usize);

/// A node in the search tree
#[derive(Clone, Debug)]
pub(super) struct SearchNode<'m> {
    pub waypoint: &'m Waypoint,
    pub parent: Option<NodeId>,
    pub cost: f64, // Cost from start, fixed at discovery
}

/// Owns every node created during one search.
///
/// Parents are stored as handles, so the tree rooted at the start node never
/// forms an ownership cycle.
#[derive(Debug, Default)]
pub(super) struct NodeArena<'m> {
    nodes: Vec<SearchNode<'m>>,
}

impl<'m> NodeArena<'m> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn push(&mut self, node: SearchNode<'m>) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &SearchNode<'m> {
        &self.nodes[id.0]
    }

    /// Follow parent links from `goal` back to the root, then reverse.
    pub fn path_to(&self, goal: NodeId) -> Vec<&SearchNode<'m>> {
        let mut path = Vec::new();
        let mut current = Some(goal);

        while let Some(id) = current {
            let node = self.get(id);
            path.push(node);
            current = node.parent;
        }

        path.reverse();
        path
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

/// Frontier entry ordered by priority, then by discovery sequence
#[derive(Clone, Debug)]
struct FrontierEntry {
    priority: f64, // cost + straight-line distance to goal
    seq: u64,
    node: NodeId,
}

impl Eq for FrontierEntry {}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior; on equal priority the
        // earlier discovery wins
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Discovered but not yet expanded nodes.
///
/// Holds at most one entry per identifier. Priorities are computed once at
/// insertion, since node costs never change after discovery.
#[derive(Debug, Default)]
pub(super) struct Frontier<'m> {
    heap: BinaryHeap<FrontierEntry>,
    members: HashSet<&'m str>,
    next_seq: u64,
}

impl<'m> Frontier<'m> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            members: HashSet::new(),
            next_seq: 0,
        }
    }

    pub fn add(&mut self, id: &'m str, node: NodeId, priority: f64) {
        debug_assert!(!self.members.contains(id), "{id} already in frontier");
        self.members.insert(id);
        self.heap.push(FrontierEntry {
            priority,
            seq: self.next_seq,
            node,
        });
        self.next_seq += 1;
    }

    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.members.contains(id)
    }

    /// Remove the most promising node.
    pub fn pop(&mut self, arena: &NodeArena<'m>) -> Option<NodeId> {
        let entry = self.heap.pop()?;
        self.members.remove(arena.get(entry.node).waypoint.id.as_str());
        Some(entry.node)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
