use pathgrid_core::{GridGraph, Point, Range};

/// Minimal search interface: bounds and neighbor enumeration.
///
/// Every edge has unit cost; there is no weighted or diagonal variant.
pub trait Pather {
    /// The rectangle that contains every walkable cell.
    fn bounds(&self) -> Range;

    /// Append neighbors of `p` into `buf`. The caller clears `buf` before
    /// calling. The order of appended cells is the expansion order.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

impl Pather for GridGraph {
    #[inline]
    fn bounds(&self) -> Range {
        GridGraph::bounds(self)
    }

    #[inline]
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(GridGraph::neighbors(self, p));
    }
}
