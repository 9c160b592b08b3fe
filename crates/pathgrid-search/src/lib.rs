//! Classical path search on occupancy grids.
//!
//! This crate implements five search strategies over any [`Pather`] (most
//! commonly a [`GridGraph`](pathgrid_core::GridGraph)):
//!
//! - **A\***: frontier ordered by `f = g + h`; shortest path
//! - **Breadth-first search**: FIFO frontier; shortest path in steps
//! - **Depth-first search**: LIFO frontier; some path
//! - **Dijkstra**: frontier ordered by `g`; shortest path
//! - **Greedy best-first search**: frontier ordered by `h`; some path, fast
//!
//! Pick one with [`Algorithm`] and run it through a [`Search`]. Every run
//! owns a private [`NodeTable`] keyed by coordinate, so the graph is never
//! mutated and repeated or concurrent runs over one graph are independent.
//!
//! ```
//! use pathgrid_core::{GridGraph, Point};
//! use pathgrid_search::{Algorithm, SearchExt};
//!
//! let grid: GridGraph = "
//!     .....
//!     .###.
//!     .....
//!     .###.
//!     .....
//! ".parse().unwrap();
//! let out = grid.find_path(Algorithm::AStar, Point::new(0, 0), Point::new(4, 4));
//! assert_eq!(out.path().map(|p| p.steps()), Some(8));
//! ```
//!
//! Observers that want to watch a run call [`Search::steps`] and pull one
//! [`Step`] event per expansion; pacing and drawing are theirs to do.

mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod greedy;
mod node;
mod path;
mod search;
mod step;
mod table;
mod traits;

pub use distance::{Heuristic, ParseHeuristicError, euclidean, manhattan};
pub use node::{Node, NodeState, UNREACHABLE};
pub use path::Path;
pub use search::{
    Algorithm, Outcome, ParseAlgorithmError, Search, SearchConfig, SearchExt, Status, find_path,
};
pub use step::{Step, Steps};
pub use table::NodeTable;
pub use traits::Pather;
