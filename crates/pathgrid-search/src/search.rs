//! The search driver shared by every algorithm.
//!
//! A [`Search`] is one run of one [`Algorithm`] from a start cell to a target
//! cell. It owns its [`NodeTable`] and frontier, borrows the graph read-only,
//! and advances one expansion per [`step`](Search::step). Callers either
//! drive it to completion with [`run`](Search::run) or pull [`Step`] events
//! from [`steps`](Search::steps) and pace them however they like.

use std::collections::{BinaryHeap, VecDeque};
use std::fmt;
use std::str::FromStr;

use pathgrid_core::Point;

use crate::distance::Heuristic;
use crate::node::NodeState;
use crate::path::Path;
use crate::step::{Step, Steps};
use crate::table::{NodeRef, NodeTable};
use crate::traits::Pather;

// ---------------------------------------------------------------------------
// Algorithm
// ---------------------------------------------------------------------------

/// The five search strategies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Frontier ordered by `f = g + h`; optimal.
    AStar,
    /// FIFO frontier; optimal in step count.
    Bfs,
    /// LIFO frontier; finds a path, not necessarily a short one.
    Dfs,
    /// Frontier ordered by `g`; optimal.
    Dijkstra,
    /// Frontier ordered by `h` only; fast, not optimal.
    Greedy,
}

impl Algorithm {
    /// Every algorithm, in the order the demo runs them.
    pub const ALL: [Algorithm; 5] = [
        Self::AStar,
        Self::Greedy,
        Self::Dijkstra,
        Self::Bfs,
        Self::Dfs,
    ];

    /// Human readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::AStar => "A* Search",
            Self::Bfs => "Breadth-First Search",
            Self::Dfs => "Depth-First Search",
            Self::Dijkstra => "Dijkstra's Algorithm",
            Self::Greedy => "Greedy Best-First Search",
        }
    }

    /// Whether the returned path is guaranteed to be shortest.
    pub fn is_optimal(self) -> bool {
        matches!(self, Self::AStar | Self::Bfs | Self::Dijkstra)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(pub String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm \u{201c}{}\u{201d} (expected astar, bfs, dfs, dijkstra or greedy)",
            self.0
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "astar" | "a*" | "a-star" => Ok(Self::AStar),
            "bfs" | "breadth-first" => Ok(Self::Bfs),
            "dfs" | "depth-first" => Ok(Self::Dfs),
            "dijkstra" | "ucs" => Ok(Self::Dijkstra),
            "greedy" | "best-first" => Ok(Self::Greedy),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Configuration and results
// ---------------------------------------------------------------------------

/// Tunables for a search run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Estimate used by A* and greedy best-first search.
    pub heuristic: Heuristic,
}

/// Progress of a run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    /// The frontier may still hold cells to expand.
    Running,
    /// The target was finalized.
    Found,
    /// The frontier emptied without reaching the target.
    Exhausted,
}

/// Result of a finished run.
///
/// `NoPathFound` is a normal answer, not an error, and is distinct from a
/// zero-step path (start equals target).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Found(Path),
    NoPathFound,
}

impl Outcome {
    /// The path, if one was found.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Found(p) => Some(p),
            Self::NoPathFound => None,
        }
    }

    /// Consume the outcome, returning the path if one was found.
    pub fn into_path(self) -> Option<Path> {
        match self {
            Self::Found(p) => Some(p),
            Self::NoPathFound => None,
        }
    }

    /// Whether a path was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// One run of one algorithm over a borrowed graph.
pub struct Search<'a, P: Pather> {
    pub(crate) pather: &'a P,
    pub(crate) algorithm: Algorithm,
    pub(crate) heuristic: Heuristic,
    pub(crate) start: Point,
    pub(crate) target: Point,
    pub(crate) table: NodeTable,
    // priority frontier (A*, Dijkstra, greedy)
    pub(crate) heap: BinaryHeap<NodeRef>,
    // FIFO (BFS) or LIFO (DFS) frontier
    pub(crate) queue: VecDeque<usize>,
    pub(crate) seq: u64,
    // scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
    status: Status,
    expanded: usize,
    path: Option<Path>,
}

impl<'a, P: Pather> Search<'a, P> {
    /// Prepare a run with the default configuration.
    pub fn new(pather: &'a P, algorithm: Algorithm, start: Point, target: Point) -> Self {
        Self::with_config(pather, algorithm, start, target, SearchConfig::default())
    }

    /// Prepare a run with an explicit configuration.
    pub fn with_config(
        pather: &'a P,
        algorithm: Algorithm,
        start: Point,
        target: Point,
        config: SearchConfig,
    ) -> Self {
        let table = NodeTable::new(pather.bounds());
        Self::with_table(pather, table, algorithm, start, target, config)
    }

    /// Prepare a run that recycles `table` from an earlier run.
    ///
    /// The table is reset (and reshaped if the graph's bounds differ), so no
    /// state leaks from the previous run.
    pub fn with_table(
        pather: &'a P,
        mut table: NodeTable,
        algorithm: Algorithm,
        start: Point,
        target: Point,
        config: SearchConfig,
    ) -> Self {
        table.set_range(pather.bounds());
        let mut search = Self {
            pather,
            algorithm,
            heuristic: config.heuristic,
            start,
            target,
            table,
            heap: BinaryHeap::new(),
            queue: VecDeque::new(),
            seq: 0,
            nbuf: Vec::with_capacity(4),
            status: Status::Running,
            expanded: 0,
            path: None,
        };
        match algorithm {
            Algorithm::AStar => search.astar_seed(),
            Algorithm::Bfs | Algorithm::Dfs => search.unweighted_seed(),
            Algorithm::Dijkstra => search.dijkstra_seed(),
            Algorithm::Greedy => search.greedy_seed(),
        }
        log::debug!(
            "{}: searching {} -> {} on {}",
            algorithm,
            start,
            target,
            search.table.range()
        );
        search
    }

    /// Expand one cell. Returns the cell taken from the frontier, or `None`
    /// once the run is finished.
    pub fn step(&mut self) -> Option<Point> {
        if self.status != Status::Running {
            return None;
        }

        let popped = match self.algorithm {
            Algorithm::AStar => self.astar_step(),
            Algorithm::Bfs => self.bfs_step(),
            Algorithm::Dfs => self.dfs_step(),
            Algorithm::Dijkstra => self.dijkstra_step(),
            Algorithm::Greedy => self.greedy_step(),
        };

        let Some(ci) = popped else {
            self.status = Status::Exhausted;
            log::debug!(
                "{}: no path from {} to {} after {} expansions",
                self.algorithm,
                self.start,
                self.target,
                self.expanded
            );
            return None;
        };

        self.expanded += 1;
        let node = *self.table.node(ci);
        log::trace!(
            "{}: expanding {} (g={}, h={}, f={})",
            self.algorithm,
            node.pos,
            node.g,
            node.h,
            node.f
        );

        if self.status == Status::Found {
            if let Some(path) = Path::reconstruct(&self.table, self.target) {
                path.mark(&mut self.table);
                log::debug!(
                    "{}: path of {} steps found after {} expansions",
                    self.algorithm,
                    path.steps(),
                    self.expanded
                );
                self.path = Some(path);
            }
        }
        Some(node.pos)
    }

    /// Drive the run to completion.
    pub fn run(&mut self) -> Outcome {
        while self.step().is_some() {}
        self.finished_outcome()
    }

    /// Lazy, pull-based sequence of [`Step`] events, one per expansion.
    ///
    /// The iterator ends when the run finishes; [`outcome`](Self::outcome)
    /// then reports the result.
    pub fn steps(&mut self) -> Steps<'_, 'a, P> {
        Steps::new(self)
    }

    /// The result, or `None` while the run is still going.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            Status::Running => None,
            _ => Some(self.finished_outcome()),
        }
    }

    fn finished_outcome(&self) -> Outcome {
        match &self.path {
            Some(p) => Outcome::Found(p.clone()),
            None => Outcome::NoPathFound,
        }
    }

    /// Snapshot of the current frontier and closed set around `current`.
    pub(crate) fn snapshot(&self, current: Point) -> Step {
        Step {
            current,
            open: self.table.open_cells(),
            closed: self.table.closed_cells(),
            path: self.path.clone(),
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn target(&self) -> Point {
        self.target
    }

    /// Number of cells taken from the frontier so far.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Per-cell state of this run.
    pub fn table(&self) -> &NodeTable {
        &self.table
    }

    /// Give the table back for reuse by a later run.
    pub fn into_table(self) -> NodeTable {
        self.table
    }

    // -----------------------------------------------------------------------
    // Helpers shared by the algorithm files
    // -----------------------------------------------------------------------

    /// Initialise the start node with `g = 0` and estimate `h`, mark it
    /// open, and return its index. `None` if the start is off the grid.
    pub(crate) fn seed(&mut self, h: i32) -> Option<usize> {
        let si = self.table.idx(self.start)?;
        let n = self.table.node_mut(si);
        n.g = 0;
        n.h = h;
        n.f = h;
        n.parent = None;
        n.state = NodeState::Open;
        Some(si)
    }

    /// Push onto the priority frontier; equal keys pop in push order.
    pub(crate) fn push_heap(&mut self, idx: usize, key: i32) {
        self.heap.push(NodeRef {
            idx,
            key,
            seq: self.seq,
        });
        self.seq += 1;
    }

    /// Finalize `ci`. Returns `true` if it is the target, which ends the run.
    pub(crate) fn close(&mut self, ci: usize) -> bool {
        let n = self.table.node_mut(ci);
        n.state = NodeState::Closed;
        if n.pos == self.target {
            self.status = Status::Found;
            return true;
        }
        false
    }

    /// Collect the neighbors of `p` into the scratch buffer, which the
    /// caller must hand back through `self.nbuf` when done.
    pub(crate) fn take_neighbors(&mut self, p: Point) -> Vec<Point> {
        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        self.pather.neighbors(p, &mut nbuf);
        nbuf
    }
}

/// Run `algorithm` from `start` to `target` to completion.
pub fn find_path<P: Pather>(pather: &P, algorithm: Algorithm, start: Point, target: Point) -> Outcome {
    Search::new(pather, algorithm, start, target).run()
}

/// Search entry points on any [`Pather`], such as a
/// [`GridGraph`](pathgrid_core::GridGraph).
pub trait SearchExt: Pather + Sized {
    /// Prepare a run without starting it.
    fn search(&self, algorithm: Algorithm, start: Point, target: Point) -> Search<'_, Self> {
        Search::new(self, algorithm, start, target)
    }

    /// Run `algorithm` to completion.
    fn find_path(&self, algorithm: Algorithm, start: Point, target: Point) -> Outcome {
        self.search(algorithm, start, target).run()
    }
}

impl<P: Pather> SearchExt for P {}

#[cfg(test)]
mod tests {
    use super::*;
    use pathgrid_core::GridGraph;

    #[test]
    fn parse_algorithm_names() {
        assert_eq!("A*".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert_eq!("astar".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert_eq!("BFS".parse::<Algorithm>(), Ok(Algorithm::Bfs));
        assert_eq!(" dfs ".parse::<Algorithm>(), Ok(Algorithm::Dfs));
        assert_eq!("Dijkstra".parse::<Algorithm>(), Ok(Algorithm::Dijkstra));
        assert_eq!("greedy".parse::<Algorithm>(), Ok(Algorithm::Greedy));
        let err = "jps".parse::<Algorithm>().unwrap_err();
        assert!(err.to_string().contains("jps"));
    }

    #[test]
    fn all_lists_each_algorithm_once() {
        let mut names: Vec<_> = Algorithm::ALL.iter().map(|a| a.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 5);
    }

    #[test]
    fn run_reports_status_and_counts() {
        let g: GridGraph = "...\n...".parse().unwrap();
        let mut s = g.search(Algorithm::Bfs, Point::new(0, 0), Point::new(2, 1));
        assert_eq!(s.status(), Status::Running);
        assert!(s.outcome().is_none());
        let out = s.run();
        assert_eq!(s.status(), Status::Found);
        assert!(s.expanded() > 0);
        assert_eq!(out.path().map(Path::steps), Some(3));
        assert_eq!(s.outcome(), Some(out));
        // Finished runs stay finished.
        assert_eq!(s.step(), None);
    }

    #[test]
    fn start_off_grid_is_exhausted_immediately() {
        let g: GridGraph = "..\n..".parse().unwrap();
        let mut s = g.search(Algorithm::AStar, Point::new(-1, 0), Point::new(1, 1));
        assert_eq!(s.step(), None);
        assert_eq!(s.status(), Status::Exhausted);
        assert_eq!(s.expanded(), 0);
        assert_eq!(s.outcome(), Some(Outcome::NoPathFound));
    }

    #[test]
    fn target_off_grid_is_not_found() {
        let g: GridGraph = "..\n..".parse().unwrap();
        for algo in Algorithm::ALL {
            assert_eq!(
                g.find_path(algo, Point::new(0, 0), Point::new(9, 9)),
                Outcome::NoPathFound,
                "{algo}"
            );
        }
    }

    #[test]
    fn extreme_targets_are_not_found() {
        let g: GridGraph = "...\n...".parse().unwrap();
        for target in [Point::new(i32::MIN, 0), Point::new(i32::MAX, i32::MAX)] {
            for algo in Algorithm::ALL {
                let config = SearchConfig {
                    heuristic: Heuristic::Euclidean,
                };
                assert_eq!(
                    g.find_path(algo, Point::new(0, 0), target),
                    Outcome::NoPathFound,
                    "{algo} to {target}"
                );
                assert_eq!(
                    Search::with_config(&g, algo, Point::new(0, 0), target, config).run(),
                    Outcome::NoPathFound,
                    "{algo} to {target} (euclidean)"
                );
            }
        }
    }

    #[test]
    fn recycled_table_starts_clean() {
        let g: GridGraph = ".#.\n...".parse().unwrap();
        let mut first = Search::new(&g, Algorithm::Dijkstra, Point::new(0, 0), Point::new(2, 0));
        let a = first.run();
        let table = first.into_table();
        assert!(!table.closed_cells().is_empty());

        let mut second = Search::with_table(
            &g,
            table,
            Algorithm::Dijkstra,
            Point::new(0, 0),
            Point::new(2, 0),
            SearchConfig::default(),
        );
        assert_eq!(second.table().closed_cells(), Vec::<Point>::new());
        assert_eq!(second.run(), a);
    }

    #[test]
    fn free_function_matches_extension() {
        let g: GridGraph = "....\n.##.\n....".parse().unwrap();
        let a = find_path(&g, Algorithm::AStar, Point::new(0, 0), Point::new(3, 2));
        let b = g.find_path(Algorithm::AStar, Point::new(0, 0), Point::new(3, 2));
        assert_eq!(a, b);
        assert_eq!(a.path().map(Path::steps), Some(5));
    }
}
