use crate::node::NodeState;
use crate::search::Search;
use crate::traits::Pather;

impl<P: Pather> Search<'_, P> {
    pub(crate) fn dijkstra_seed(&mut self) {
        if let Some(si) = self.seed(0) {
            self.push_heap(si, 0);
        }
    }

    /// Pop the cheapest entry, skipping cells already finalized (lazy
    /// deletion), then push every neighbor whose `g` strictly improves.
    pub(crate) fn dijkstra_step(&mut self) -> Option<usize> {
        let ci = loop {
            let entry = self.heap.pop()?;
            if !self.table.node(entry.idx).state.is_closed() {
                break entry.idx;
            }
        };

        let current = *self.table.node(ci);
        if self.close(ci) {
            return Some(ci);
        }

        let nbuf = self.take_neighbors(current.pos);
        for &np in nbuf.iter() {
            let Some(ni) = self.table.idx(np) else {
                continue;
            };
            let tentative = current.g + 1;

            let n = self.table.node_mut(ni);
            if n.state.is_closed() || tentative >= n.g {
                continue;
            }
            n.g = tentative;
            n.f = tentative;
            n.parent = Some(current.pos);
            n.state = NodeState::Open;
            self.push_heap(ni, tentative);
        }
        self.nbuf = nbuf;

        Some(ci)
    }
}

#[cfg(test)]
mod tests {
    use crate::search::{Algorithm, SearchExt};
    use pathgrid_core::{GridGraph, Point};

    #[test]
    fn dijkstra_matches_bfs_on_unit_costs() {
        let g: GridGraph = "
            ......
            .####.
            ....#.
            ###.#.
            ......
        "
        .parse()
        .unwrap();
        let start = Point::new(0, 0);
        let target = Point::new(0, 4);
        let d = g.find_path(Algorithm::Dijkstra, start, target).into_path().unwrap();
        let b = g.find_path(Algorithm::Bfs, start, target).into_path().unwrap();
        assert_eq!(d.steps(), b.steps());
        assert_eq!(d.steps(), 10);
        assert!(d.is_contiguous());
    }

    #[test]
    fn dijkstra_costs_are_exact_distances() {
        let g: GridGraph = "...\n.#.\n...".parse().unwrap();
        let mut s = g.search(Algorithm::Dijkstra, Point::new(0, 0), Point::new(2, 2));
        s.run();
        let cost = |x, y| s.table().get(Point::new(x, y)).map(|n| n.g);
        assert_eq!(cost(0, 0), Some(0));
        assert_eq!(cost(2, 0), Some(2));
        assert_eq!(cost(0, 2), Some(2));
        assert_eq!(cost(2, 2), Some(4));
    }

    #[test]
    fn each_cell_is_finalized_once() {
        let g: GridGraph = "....\n....\n....".parse().unwrap();
        let mut s = g.search(Algorithm::Dijkstra, Point::new(0, 0), Point::new(9, 9));
        let mut seen = std::collections::HashSet::new();
        while let Some(p) = s.step() {
            assert!(seen.insert(p), "{p} expanded twice");
        }
        assert_eq!(seen.len(), 12);
    }
}
