use std::fmt;
use std::str::FromStr;

use pathgrid_core::Point;

/// Manhattan (L1) distance between two points, saturating at `i32::MAX`.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    let d = a.x.abs_diff(b.x).saturating_add(a.y.abs_diff(b.y));
    i32::try_from(d).unwrap_or(i32::MAX)
}

/// Euclidean (L2) distance between two points, truncated toward zero and
/// saturating at `i32::MAX`.
#[inline]
pub fn euclidean(a: Point, b: Point) -> i32 {
    let dx = f64::from(a.x.abs_diff(b.x));
    let dy = f64::from(a.y.abs_diff(b.y));
    // Float-to-int `as` saturates.
    dx.hypot(dy) as i32
}

/// Remaining-cost estimate used by A* and greedy best-first search.
///
/// Both variants are admissible and consistent on a 4-connected unit-cost
/// grid, so A* stays optimal with either.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    #[default]
    Manhattan,
    Euclidean,
}

impl Heuristic {
    /// Estimated cost from `from` to `to`.
    #[inline]
    pub fn estimate(self, from: Point, to: Point) -> i32 {
        match self {
            Self::Manhattan => manhattan(from, to),
            Self::Euclidean => euclidean(from, to),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Manhattan => "manhattan",
            Self::Euclidean => "euclidean",
        })
    }
}

/// Error returned when parsing an unknown heuristic name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseHeuristicError(pub String);

impl fmt::Display for ParseHeuristicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown heuristic \u{201c}{}\u{201d} (expected manhattan or euclidean)",
            self.0
        )
    }
}

impl std::error::Error for ParseHeuristicError {}

impl FromStr for Heuristic {
    type Err = ParseHeuristicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manhattan" | "l1" => Ok(Self::Manhattan),
            "euclidean" | "l2" => Ok(Self::Euclidean),
            _ => Err(ParseHeuristicError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance() {
        assert_eq!(manhattan(Point::new(0, 0), Point::new(4, 4)), 8);
        assert_eq!(manhattan(Point::new(3, 1), Point::new(1, 3)), 4);
        assert_eq!(manhattan(Point::new(2, 2), Point::new(2, 2)), 0);
    }

    #[test]
    fn euclidean_truncates() {
        assert_eq!(euclidean(Point::new(0, 0), Point::new(3, 4)), 5);
        // sqrt(2) = 1.41..
        assert_eq!(euclidean(Point::new(0, 0), Point::new(1, 1)), 1);
        // sqrt(32) = 5.65..
        assert_eq!(euclidean(Point::new(0, 0), Point::new(4, 4)), 5);
        assert_eq!(euclidean(Point::new(-2, 0), Point::new(0, 0)), 2);
    }

    #[test]
    fn far_apart_points_saturate() {
        let lo = Point::new(i32::MIN, i32::MIN);
        let hi = Point::new(i32::MAX, i32::MAX);
        assert_eq!(manhattan(lo, hi), i32::MAX);
        assert_eq!(euclidean(lo, hi), i32::MAX);
        assert_eq!(manhattan(Point::new(0, 0), Point::new(i32::MIN, 0)), i32::MAX);
        assert_eq!(euclidean(Point::new(0, 0), Point::new(i32::MIN, 0)), i32::MAX);
        assert_eq!(manhattan(Point::new(-1, 0), Point::new(i32::MAX, 0)), i32::MAX);
    }

    #[test]
    fn euclidean_never_exceeds_manhattan() {
        for x in -6..=6 {
            for y in -6..=6 {
                let p = Point::new(x, y);
                assert!(euclidean(Point::new(0, 0), p) <= manhattan(Point::new(0, 0), p));
            }
        }
    }

    #[test]
    fn parse_heuristic() {
        assert_eq!("Manhattan".parse::<Heuristic>(), Ok(Heuristic::Manhattan));
        assert_eq!("euclidean".parse::<Heuristic>(), Ok(Heuristic::Euclidean));
        assert!("chebyshev".parse::<Heuristic>().is_err());
        assert_eq!(Heuristic::default().to_string(), "manhattan");
    }
}
