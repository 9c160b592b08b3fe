use crate::node::{Node, NodeState};
use crate::search::Search;
use crate::traits::Pather;

impl<P: Pather> Search<'_, P> {
    /// Seed for BFS and DFS: the start is marked discovered as it enters
    /// the queue.
    pub(crate) fn unweighted_seed(&mut self) {
        if let Some(si) = self.seed(0) {
            self.queue.push_back(si);
        }
    }

    /// Take the oldest discovered cell and enqueue its undiscovered
    /// neighbors.
    pub(crate) fn bfs_step(&mut self) -> Option<usize> {
        let ci = self.queue.pop_front()?;
        let current = *self.table.node(ci);
        if !self.close(ci) {
            self.discover_neighbors(&current);
        }
        Some(ci)
    }

    /// Mark every undiscovered neighbor of `current` as discovered at
    /// enqueue time so it can never be queued twice.
    pub(crate) fn discover_neighbors(&mut self, current: &Node) {
        let nbuf = self.take_neighbors(current.pos);
        for &np in nbuf.iter() {
            let Some(ni) = self.table.idx(np) else {
                continue;
            };
            let n = self.table.node_mut(ni);
            if n.state != NodeState::Unvisited {
                continue;
            }
            n.parent = Some(current.pos);
            n.g = current.g + 1;
            n.f = n.g;
            n.state = NodeState::Open;
            self.queue.push_back(ni);
        }
        self.nbuf = nbuf;
    }
}
