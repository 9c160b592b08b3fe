use crate::search::Search;
use crate::traits::Pather;

impl<P: Pather> Search<'_, P> {
    /// Take the most recently discovered cell and push its undiscovered
    /// neighbors. Shares BFS's discovery rule; only the pop end differs.
    pub(crate) fn dfs_step(&mut self) -> Option<usize> {
        let ci = self.queue.pop_back()?;
        let current = *self.table.node(ci);
        if !self.close(ci) {
            self.discover_neighbors(&current);
        }
        Some(ci)
    }
}

#[cfg(test)]
mod tests {
    use crate::search::{Algorithm, Outcome, SearchExt};
    use pathgrid_core::{GridGraph, Point};

    #[test]
    fn dfs_wanders_past_a_neighboring_target() {
        let g: GridGraph = "
            ...
            ...
            ...
        "
        .parse()
        .unwrap();
        let start = Point::new(0, 0);
        let target = Point::new(2, 0);
        let path = g
            .find_path(Algorithm::Dfs, start, target)
            .into_path()
            .unwrap();
        // Down the left column, along the bottom, up the right column.
        assert_eq!(
            path.cells(),
            &[
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(0, 2),
                Point::new(1, 2),
                Point::new(2, 2),
                Point::new(2, 1),
                Point::new(2, 0),
            ]
        );
        assert!(path.is_contiguous());
        let best = g.find_path(Algorithm::Bfs, start, target).into_path().unwrap();
        assert_eq!(best.steps(), 2);
        assert!(path.steps() > best.steps());
    }

    #[test]
    fn dfs_expands_last_discovered_first() {
        let g: GridGraph = "...\n...".parse().unwrap();
        let mut s = g.search(Algorithm::Dfs, Point::new(0, 0), Point::new(2, 1));
        assert_eq!(s.step(), Some(Point::new(0, 0)));
        // Neighbors of (0, 0) are pushed right then down; down pops first.
        assert_eq!(s.step(), Some(Point::new(0, 1)));
    }

    #[test]
    fn dfs_walled_in_start() {
        let g: GridGraph = "
            .#.
            #.#
            .#.
        "
        .parse()
        .unwrap();
        assert_eq!(
            g.find_path(Algorithm::Dfs, Point::new(1, 1), Point::new(0, 0)),
            Outcome::NoPathFound
        );
    }
}
