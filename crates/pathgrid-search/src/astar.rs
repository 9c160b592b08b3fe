use crate::node::NodeState;
use crate::search::Search;
use crate::traits::Pather;

impl<P: Pather> Search<'_, P> {
    pub(crate) fn astar_seed(&mut self) {
        let h = self.heuristic.estimate(self.start, self.target);
        if let Some(si) = self.seed(h) {
            self.push_heap(si, h);
        }
    }

    /// Pop the open node with the smallest `f`, close it, and relax its
    /// neighbors.
    ///
    /// A neighbor is (re)inserted when it is unseen or when going through
    /// the current node lowers its `g`. Superseded heap entries are skipped
    /// once their node is closed.
    pub(crate) fn astar_step(&mut self) -> Option<usize> {
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
            let tentative_g = current.g + 1;
            let h = self.heuristic.estimate(np, self.target);

            let n = self.table.node_mut(ni);
            match n.state {
                NodeState::Closed | NodeState::Path => continue,
                NodeState::Open if tentative_g >= n.g => continue,
                _ => {}
            }

            n.parent = Some(current.pos);
            n.g = tentative_g;
            n.h = h;
            n.f = tentative_g.saturating_add(h);
            n.state = NodeState::Open;
            let f = n.f;
            self.push_heap(ni, f);
        }
        self.nbuf = nbuf;

        Some(ci)
    }
}
