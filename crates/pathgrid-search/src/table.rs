use pathgrid_core::{Point, Range};

use crate::node::{Node, NodeState};

// ---------------------------------------------------------------------------
// Frontier entry for priority-queue searches
// ---------------------------------------------------------------------------

/// Reference into the node table, ordered by `key` for use in `BinaryHeap`.
///
/// Ties on `key` go to the entry pushed first (`seq`).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) key: i32,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest key first.
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// NodeTable
// ---------------------------------------------------------------------------

/// Dense per-run table of [`Node`]s, one per cell of a grid rectangle,
/// indexed directly by coordinate.
///
/// Each search run owns its table, so the graph itself stays read-only. A
/// finished run can hand its table back (see
/// [`Search::into_table`](crate::Search::into_table)) for the next run to
/// reuse after a [`reset`](Self::reset).
#[derive(Debug, Clone)]
pub struct NodeTable {
    range: Range,
    nodes: Vec<Node>,
}

impl NodeTable {
    /// Create a table for every cell in `range`, all in their initial state.
    pub fn new(range: Range) -> Self {
        Self {
            range,
            nodes: range.iter().map(Node::new).collect(),
        }
    }

    /// The grid rectangle covered by this table.
    #[inline]
    pub fn range(&self) -> Range {
        self.range
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the table covers no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Restore every node to its initial state.
    pub fn reset(&mut self) {
        for n in self.nodes.iter_mut() {
            n.reset();
        }
    }

    /// Point the table at a new rectangle, reallocating only when it grows.
    /// All nodes end up in their initial state.
    pub fn set_range(&mut self, range: Range) {
        if range == self.range {
            self.reset();
            return;
        }
        self.range = range;
        self.nodes.clear();
        self.nodes.extend(range.iter().map(Node::new));
    }

    /// The node at `p`, or `None` outside the table.
    #[inline]
    pub fn get(&self, p: Point) -> Option<&Node> {
        self.idx(p).map(|i| &self.nodes[i])
    }

    /// All nodes, row-major.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Cells currently waiting in the frontier, row-major.
    pub fn open_cells(&self) -> Vec<Point> {
        self.cells_where(|s| s == NodeState::Open)
    }

    /// Cells already finalized, row-major.
    pub fn closed_cells(&self) -> Vec<Point> {
        self.cells_where(NodeState::is_closed)
    }

    fn cells_where(&self, keep: impl Fn(NodeState) -> bool) -> Vec<Point> {
        self.nodes
            .iter()
            .filter(|n| keep(n.state))
            .map(|n| n.pos)
            .collect()
    }

    // -----------------------------------------------------------------------
    // Index helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        self.range.index_of(p)
    }

    #[inline]
    pub(crate) fn node(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, idx: usize) -> &mut Node {
        &mut self.nodes[idx]
    }

    #[inline]
    pub fn get_mut(&mut self, p: Point) -> Option<&mut Node> {
        self.idx(p).map(|i| &mut self.nodes[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn new_table_is_pristine() {
        let t = NodeTable::new(Range::with_size(4, 3));
        assert_eq!(t.len(), 12);
        assert!(t.iter().all(|n| !n.is_reached() && n.parent.is_none()));
        assert_eq!(t.get(Point::new(3, 2)).map(|n| n.pos), Some(Point::new(3, 2)));
        assert!(t.get(Point::new(4, 0)).is_none());
    }

    #[test]
    fn reset_restores_every_node() {
        let mut t = NodeTable::new(Range::with_size(3, 3));
        if let Some(n) = t.get_mut(Point::new(1, 1)) {
            n.g = 2;
            n.h = 1;
            n.f = 3;
            n.parent = Some(Point::new(0, 1));
            n.state = NodeState::Closed;
        }
        assert_eq!(t.closed_cells(), vec![Point::new(1, 1)]);
        t.reset();
        assert!(t.closed_cells().is_empty());
        let n = t.get(Point::new(1, 1)).unwrap();
        assert!(!n.is_reached());
        assert_eq!(n.parent, None);
    }

    #[test]
    fn set_range_reshapes() {
        let mut t = NodeTable::new(Range::with_size(5, 5));
        let small = Range::new(2, 2, 4, 5);
        t.set_range(small);
        assert_eq!(t.range(), small);
        assert_eq!(t.len(), 6);
        assert_eq!(t.get(Point::new(2, 2)).map(|n| n.pos), Some(Point::new(2, 2)));
        assert!(t.get(Point::new(0, 0)).is_none());
    }

    #[test]
    fn open_and_closed_snapshots() {
        let mut t = NodeTable::new(Range::with_size(3, 1));
        t.node_mut(0).state = NodeState::Closed;
        t.node_mut(1).state = NodeState::Open;
        t.node_mut(2).state = NodeState::Path;
        assert_eq!(t.open_cells(), vec![Point::new(1, 0)]);
        assert_eq!(t.closed_cells(), vec![Point::new(0, 0), Point::new(2, 0)]);
    }

    #[test]
    fn heap_pops_smallest_key_then_oldest() {
        let mut heap = BinaryHeap::new();
        heap.push(NodeRef { idx: 0, key: 5, seq: 0 });
        heap.push(NodeRef { idx: 1, key: 3, seq: 1 });
        heap.push(NodeRef { idx: 2, key: 3, seq: 2 });
        heap.push(NodeRef { idx: 3, key: 1, seq: 3 });
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|r| r.idx)).collect();
        assert_eq!(order, vec![3, 1, 2, 0]);
    }
}
