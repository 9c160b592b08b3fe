//! **pathgrid-core**: occupancy grids for classical grid search.
//!
//! This crate provides the static side of pathfinding: geometry primitives,
//! the free/blocked [`Cell`] marker, and [`GridGraph`], a validated
//! rectangular occupancy grid that answers walkability and neighbour
//! queries. Search state lives elsewhere (see `pathgrid-search`).

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::Cell;
pub use error::InvalidGrid;
pub use geom::{Point, Range};
pub use grid::GridGraph;
