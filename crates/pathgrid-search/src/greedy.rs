use crate::node::NodeState;
use crate::search::Search;
use crate::traits::Pather;

impl<P: Pather> Search<'_, P> {
    pub(crate) fn greedy_seed(&mut self) {
        let h = self.heuristic.estimate(self.start, self.target);
        if let Some(si) = self.seed(h) {
            self.push_heap(si, h);
        }
    }

    /// Pop the open cell that looks closest to the target (smallest `h`),
    /// close it, and open its unseen neighbors.
    ///
    /// Parent and `h` are set on first encounter only; an open cell is never
    /// pushed twice, so every heap entry is live.
    pub(crate) fn greedy_step(&mut self) -> Option<usize> {
        let ci = self.heap.pop()?.idx;

        let current = *self.table.node(ci);
        if self.close(ci) {
            return Some(ci);
        }

        let nbuf = self.take_neighbors(current.pos);
        for &np in nbuf.iter() {
            let Some(ni) = self.table.idx(np) else {
                continue;
            };
            let h = self.heuristic.estimate(np, self.target);

            let n = self.table.node_mut(ni);
            if n.state != NodeState::Unvisited {
                continue;
            }
            n.parent = Some(current.pos);
            n.g = current.g + 1;
            n.h = h;
            n.f = h;
            n.state = NodeState::Open;
            self.push_heap(ni, h);
        }
        self.nbuf = nbuf;

        Some(ci)
    }
}
