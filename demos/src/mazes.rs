//! Built-in mazes and a seeded random grid generator.
//!
//! Every maze is searched from its top-left corner to its bottom-right
//! corner. Markers follow [`Cell`](pathgrid_core::Cell): `0` is free, `1`
//! is a wall.

use pathgrid_core::{GridGraph, InvalidGrid, Point};
use rand::{RngExt, SeedableRng};

/// A named grid layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Maze {
    pub name: &'static str,
    pub layout: &'static [&'static [i32]],
}

impl Maze {
    /// Build the graph for this layout.
    pub fn graph(&self) -> Result<GridGraph, InvalidGrid> {
        GridGraph::new(self.layout)
    }
}

/// Two corridors split by two wall bars.
pub const SIMPLE: Maze = Maze {
    name: "Simple Maze",
    layout: &[
        &[0, 0, 0, 0, 0],
        &[0, 1, 1, 1, 0],
        &[0, 0, 0, 0, 0],
        &[0, 1, 1, 1, 0],
        &[0, 0, 0, 0, 0],
    ],
};

pub const COMPLEX: Maze = Maze {
    name: "Complex Maze",
    layout: &[
        &[0, 0, 0, 0, 0, 0, 0],
        &[0, 1, 1, 1, 0, 1, 0],
        &[0, 0, 0, 0, 0, 0, 0],
        &[0, 1, 1, 1, 1, 1, 0],
        &[0, 0, 0, 0, 0, 1, 0],
        &[0, 1, 1, 1, 0, 1, 0],
        &[0, 0, 0, 0, 0, 0, 0],
    ],
};

/// Alternating wall bars force a walk through every row.
pub const SPIRAL: Maze = Maze {
    name: "Spiral Maze",
    layout: &[
        &[0, 0, 0, 0, 0, 0, 0],
        &[1, 1, 1, 1, 1, 1, 0],
        &[0, 0, 0, 0, 0, 0, 0],
        &[0, 1, 1, 1, 1, 1, 1],
        &[0, 0, 0, 0, 0, 0, 0],
        &[1, 1, 1, 1, 1, 1, 0],
        &[0, 0, 0, 0, 0, 0, 0],
    ],
};

pub const MAZES: [Maze; 3] = [SIMPLE, COMPLEX, SPIRAL];

/// Look up a built-in maze by a short key (`simple`, `complex`, `spiral`)
/// or by its full name, ignoring case.
pub fn find(key: &str) -> Option<Maze> {
    let key = key.trim().to_ascii_lowercase();
    MAZES.into_iter().find(|m| {
        let name = m.name.to_ascii_lowercase();
        name == key || name.split_whitespace().next() == Some(key.as_str())
    })
}

/// The cell every demo run starts from.
pub fn start() -> Point {
    Point::new(0, 0)
}

/// The bottom-right cell of `graph`.
pub fn goal(graph: &GridGraph) -> Point {
    Point::new(graph.width() - 1, graph.height() - 1)
}

/// A `width` x `height` grid where each cell is a wall with probability
/// `wall_pct` percent. The two corners used as endpoints are always free,
/// which does not mean they are connected.
pub fn random(seed: u64, width: usize, height: usize, wall_pct: u32) -> Result<GridGraph, InvalidGrid> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut rows: Vec<Vec<i32>> = (0..height)
        .map(|_| {
            (0..width)
                .map(|_| i32::from(rng.random_range(0..100u32) < wall_pct))
                .collect()
        })
        .collect();
    if let Some(cell) = rows.first_mut().and_then(|r| r.first_mut()) {
        *cell = 0;
    }
    if let Some(cell) = rows.last_mut().and_then(|r| r.last_mut()) {
        *cell = 0;
    }
    log::debug!("generated {width}x{height} grid from seed {seed}");
    GridGraph::new(&rows)
}
