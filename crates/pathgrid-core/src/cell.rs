//! The [`Cell`] type, one occupancy marker.

use std::fmt;

/// Occupancy of a single grid position.
///
/// The integer markers are `0` for [`Free`](Cell::Free) and `1` for
/// [`Blocked`](Cell::Blocked); the ASCII form uses `.` and `#`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Free,
    Blocked,
}

impl Cell {
    /// Integer marker for a free cell.
    pub const FREE_MARKER: i32 = 0;
    /// Integer marker for a blocked cell.
    pub const BLOCKED_MARKER: i32 = 1;

    /// Whether the cell can be walked on.
    #[inline]
    pub const fn is_free(self) -> bool {
        matches!(self, Self::Free)
    }

    /// Integer marker of this cell.
    #[inline]
    pub const fn marker(self) -> i32 {
        match self {
            Self::Free => Self::FREE_MARKER,
            Self::Blocked => Self::BLOCKED_MARKER,
        }
    }

    /// ASCII character of this cell.
    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Self::Free => '.',
            Self::Blocked => '#',
        }
    }

    /// Parse the ASCII form, or `None` for any other character.
    #[inline]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Free),
            '#' => Some(Self::Blocked),
            _ => None,
        }
    }
}

impl TryFrom<i32> for Cell {
    type Error = i32;

    /// Fails with the offending value if it is not one of the two markers.
    fn try_from(v: i32) -> Result<Self, i32> {
        match v {
            Self::FREE_MARKER => Ok(Self::Free),
            Self::BLOCKED_MARKER => Ok(Self::Blocked),
            other => Err(other),
        }
    }
}

impl From<Cell> for i32 {
    fn from(c: Cell) -> Self {
        c.marker()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
