//! Path reconstruction from parent links.

use std::fmt;

use pathgrid_core::Point;

use crate::node::NodeState;
use crate::table::NodeTable;

/// An ordered cell sequence from start to target, both inclusive.
///
/// A path always holds at least one cell; a single-cell path (start equals
/// target) has zero steps.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Path(Vec<Point>);

impl Path {
    /// Walk `parent` links from `target` back to the node without a parent,
    /// then reverse.
    ///
    /// Returns `None` if `target` lies outside the table or was never
    /// reached in the run that filled it.
    pub fn reconstruct(table: &NodeTable, target: Point) -> Option<Self> {
        let node = table.get(target)?;
        if !node.is_reached() {
            return None;
        }
        let mut cells = vec![target];
        let mut cur = node.parent;
        while let Some(p) = cur {
            cells.push(p);
            cur = table.get(p).and_then(|n| n.parent);
        }
        cells.reverse();
        Some(Self(cells))
    }

    /// The cells, start first.
    #[inline]
    pub fn cells(&self) -> &[Point] {
        &self.0
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a reconstructed path.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of moves, one less than the number of cells.
    #[inline]
    pub fn steps(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// First cell.
    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.0.first().copied()
    }

    /// Last cell.
    #[inline]
    pub fn target(&self) -> Option<Point> {
        self.0.last().copied()
    }

    /// Whether `p` is on the path.
    pub fn contains(&self, p: Point) -> bool {
        self.0.contains(&p)
    }

    /// Whether each consecutive pair of cells is one orthogonal step apart.
    pub fn is_contiguous(&self) -> bool {
        self.0.windows(2).all(|w| w[0].is_adjacent(w[1]))
    }

    /// Iterator over the cells, start first.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.0.iter()
    }

    /// Consume the path, returning its cells.
    pub fn into_vec(self) -> Vec<Point> {
        self.0
    }

    /// Tag every node on the path as [`NodeState::Path`].
    pub(crate) fn mark(&self, table: &mut NodeTable) {
        for &p in &self.0 {
            if let Some(n) = table.get_mut(p) {
                n.state = NodeState::Path;
            }
        }
    }
}

impl From<Vec<Point>> for Path {
    fn from(cells: Vec<Point>) -> Self {
        Self(cells)
    }
}

impl From<Path> for Vec<Point> {
    fn from(path: Path) -> Self {
        path.0
    }
}

impl IntoIterator for Path {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{p}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathgrid_core::Range;

    fn link(table: &mut NodeTable, p: Point, g: i32, parent: Option<Point>) {
        let n = table.get_mut(p).unwrap();
        n.g = g;
        n.parent = parent;
    }

    #[test]
    fn follows_parents_and_reverses() {
        let mut t = NodeTable::new(Range::with_size(3, 3));
        link(&mut t, Point::new(0, 0), 0, None);
        link(&mut t, Point::new(1, 0), 1, Some(Point::new(0, 0)));
        link(&mut t, Point::new(1, 1), 2, Some(Point::new(1, 0)));
        link(&mut t, Point::new(2, 1), 3, Some(Point::new(1, 1)));

        let path = Path::reconstruct(&t, Point::new(2, 1)).unwrap();
        assert_eq!(
            path.cells(),
            &[
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(1, 1),
                Point::new(2, 1)
            ]
        );
        assert_eq!(path.steps(), 3);
        assert_eq!(path.start(), Some(Point::new(0, 0)));
        assert_eq!(path.target(), Some(Point::new(2, 1)));
        assert!(path.is_contiguous());
        assert_eq!(
            path.to_string(),
            "(0, 0) -> (1, 0) -> (1, 1) -> (2, 1)"
        );
    }

    #[test]
    fn start_only_path_has_zero_steps() {
        let mut t = NodeTable::new(Range::with_size(2, 2));
        link(&mut t, Point::new(1, 1), 0, None);
        let path = Path::reconstruct(&t, Point::new(1, 1)).unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path.steps(), 0);
    }

    #[test]
    fn unreached_target_has_no_path() {
        let t = NodeTable::new(Range::with_size(2, 2));
        assert!(Path::reconstruct(&t, Point::new(1, 1)).is_none());
        assert!(Path::reconstruct(&t, Point::new(5, 5)).is_none());
    }

    #[test]
    fn mark_tags_path_nodes() {
        let mut t = NodeTable::new(Range::with_size(2, 1));
        let path = Path::from(vec![Point::new(0, 0), Point::new(1, 0)]);
        path.mark(&mut t);
        assert!(t.iter().all(|n| n.state == NodeState::Path));
    }

    #[test]
    fn gaps_are_not_contiguous() {
        let path = Path::from(vec![Point::new(0, 0), Point::new(1, 1)]);
        assert!(!path.is_contiguous());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_serializes_as_cell_list() {
        let path = Path::from(vec![Point::new(0, 0), Point::new(1, 0)]);
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, r#"[{"x":0,"y":0},{"x":1,"y":0}]"#);
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
    }
}
