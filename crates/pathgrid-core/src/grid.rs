//! The [`GridGraph`] type, an immutable occupancy grid.
//!
//! A `GridGraph` owns the free/blocked map and answers bounds, walkability
//! and neighbour queries. It carries no search state: every search run keeps
//! its own per-cell table, so one graph can be shared by any number of runs.

use std::fmt;
use std::str::FromStr;

use crate::cell::Cell;
use crate::error::InvalidGrid;
use crate::geom::{Point, Range};

/// A validated, rectangular occupancy grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridGraph {
    cells: Vec<Cell>,
    bounds: Range,
}

impl GridGraph {
    /// Build a graph from rows of integer markers (`0` free, `1` blocked).
    ///
    /// Fails if there are no rows, the first row is empty, a row's length
    /// differs from the first one, or a value is not one of the two markers.
    pub fn new<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self, InvalidGrid> {
        let width = match rows.first() {
            Some(r) if !r.as_ref().is_empty() => r.as_ref().len(),
            _ => return Err(InvalidGrid::Empty),
        };
        let height = rows.len();
        let bounds = checked_bounds(width, height)?;

        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(InvalidGrid::NotRectangular {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            for (x, &value) in row.iter().enumerate() {
                let cell = Cell::try_from(value).map_err(|value| InvalidGrid::InvalidMarker {
                    value,
                    pos: Point::new(x as i32, y as i32),
                })?;
                cells.push(cell);
            }
        }

        Ok(Self { cells, bounds })
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// The rectangle covered by the grid, anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Total number of cells, free or blocked.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: construction rejects empty grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Cell> {
        self.bounds.index_of(p).map(|i| self.cells[i])
    }

    /// Whether `p` is inside the grid and free.
    #[inline]
    pub fn is_valid(&self, p: Point) -> bool {
        self.at(p).is_some_and(Cell::is_free)
    }

    /// Walkable orthogonal neighbours of `p`, in the order right, down,
    /// left, up.
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.neighbors_4().into_iter().filter(move |&q| self.is_valid(q))
    }

    /// Row-major iterator over every cell with its position.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// Number of free cells.
    pub fn free_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_free()).count()
    }

    /// A copy of the occupancy markers, one `Vec` per row.
    pub fn rows(&self) -> Vec<Vec<i32>> {
        self.cells
            .chunks(self.width() as usize)
            .map(|row| row.iter().map(|&c| c.marker()).collect())
            .collect()
    }
}

fn checked_bounds(width: usize, height: usize) -> Result<Range, InvalidGrid> {
    match (i32::try_from(width), i32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok(Range::with_size(w, h)),
        _ => Err(InvalidGrid::TooLarge { width, height }),
    }
}

impl FromStr for GridGraph {
    type Err = InvalidGrid;

    /// Parse the ASCII form: one line per row, `.` free and `#` blocked.
    ///
    /// Leading and trailing whitespace is trimmed from the whole string and
    /// from each line.
    fn from_str(s: &str) -> Result<Self, InvalidGrid> {
        let mut rows: Vec<Vec<i32>> = Vec::new();
        for (y, line) in s.trim().lines().enumerate() {
            let row = line
                .trim()
                .chars()
                .enumerate()
                .map(|(x, ch)| {
                    Cell::from_char(ch).map(Cell::marker).ok_or(InvalidGrid::InvalidChar {
                        ch,
                        pos: Point::new(x as i32, y as i32),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
        Self::new(&rows)
    }
}

impl fmt::Display for GridGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}:", self.width(), self.height())?;
        for row in self.cells.chunks(self.width() as usize) {
            for c in row {
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for GridGraph {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rows().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for GridGraph {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<i32>>::deserialize(deserializer)?;
        GridGraph::new(&rows).map_err(serde::de::Error::custom)
    }
}
