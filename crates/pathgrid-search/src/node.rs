use std::hash::{Hash, Hasher};

use pathgrid_core::Point;

use crate::distance;

/// Sentinel cost meaning "not reached yet".
pub const UNREACHABLE: i32 = i32::MAX;

/// Where a node stands in the current run. Only observers care about this;
/// the algorithms use it as their open/closed bookkeeping.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeState {
    /// Not discovered.
    #[default]
    Unvisited,
    /// Discovered and waiting in the frontier.
    Open,
    /// Finalized; never expanded again.
    Closed,
    /// Part of the returned path.
    Path,
}

impl NodeState {
    /// Whether the node has been finalized (path nodes are finalized too).
    #[inline]
    pub fn is_closed(self) -> bool {
        matches!(self, Self::Closed | Self::Path)
    }
}

/// Per-run search state of one grid cell.
///
/// Two nodes compare and hash equal iff their positions match.
#[derive(Copy, Clone, Debug)]
pub struct Node {
    pub pos: Point,
    /// Best known cost from the start.
    pub g: i32,
    /// Heuristic estimate to the target.
    pub h: i32,
    /// `g + h`.
    pub f: i32,
    /// Predecessor on the best path found so far.
    pub parent: Option<Point>,
    pub state: NodeState,
}

impl Node {
    /// A node in its initial state.
    pub const fn new(pos: Point) -> Self {
        Self {
            pos,
            g: UNREACHABLE,
            h: 0,
            f: 0,
            parent: None,
            state: NodeState::Unvisited,
        }
    }

    /// Restore the initial search state, keeping the position.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::new(self.pos);
    }

    /// Manhattan distance to `target`.
    #[inline]
    pub fn manhattan(&self, target: Point) -> i32 {
        distance::manhattan(self.pos, target)
    }

    /// Euclidean distance to `target`, truncated.
    #[inline]
    pub fn euclidean(&self, target: Point) -> i32 {
        distance::euclidean(self.pos, target)
    }

    /// Whether this node has been given a cost in the current run.
    #[inline]
    pub fn is_reached(&self) -> bool {
        self.g != UNREACHABLE
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pos.hash(state);
    }
}
