use std::fmt;

use crate::geom::Point;

/// Errors that can occur when building a [`GridGraph`](crate::GridGraph).
///
/// Construction either succeeds completely or fails with one of these; no
/// partially built graph is ever returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidGrid {
    /// The grid has no rows, or its first row has no cells.
    Empty,
    /// A row's length differs from the first row's.
    NotRectangular {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A cell value is neither the free nor the blocked marker.
    InvalidMarker { value: i32, pos: Point },
    /// A character in the ASCII form is neither `.` nor `#`.
    InvalidChar { ch: char, pos: Point },
    /// The grid does not fit in `i32` coordinates.
    TooLarge { width: usize, height: usize },
}

impl fmt::Display for InvalidGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "invalid grid: grid cannot be empty"),
            Self::NotRectangular {
                row,
                expected,
                found,
            } => write!(
                f,
                "invalid grid: row {row} has {found} cells, expected {expected}"
            ),
            Self::InvalidMarker { value, pos } => write!(
                f,
                "invalid grid: cell {pos} has value {value}, expected 0 or 1"
            ),
            Self::InvalidChar { ch, pos } => write!(
                f,
                "invalid grid: cell {pos} has character \u{201c}{ch}\u{201d}, expected '.' or '#'"
            ),
            Self::TooLarge { width, height } => {
                write!(f, "invalid grid: {width}x{height} exceeds coordinate range")
            }
        }
    }
}

impl std::error::Error for InvalidGrid {}
