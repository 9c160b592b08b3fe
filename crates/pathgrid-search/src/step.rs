use std::iter::FusedIterator;

use pathgrid_core::Point;

use crate::path::Path;
use crate::search::Search;
use crate::traits::Pather;

/// What an observer sees after one expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    /// The cell just taken from the frontier.
    pub current: Point,
    /// Cells waiting in the frontier, row-major.
    pub open: Vec<Point>,
    /// Finalized cells, row-major.
    pub closed: Vec<Point>,
    /// The final path, present only on the step that reached the target.
    pub path: Option<Path>,
}

impl Step {
    /// Whether this step reached the target.
    pub fn is_final(&self) -> bool {
        self.path.is_some()
    }
}

/// Iterator of [`Step`] events, returned by [`Search::steps`].
///
/// Each call to `next` performs exactly one expansion; nothing runs ahead of
/// the consumer.
pub struct Steps<'s, 'a, P: Pather> {
    search: &'s mut Search<'a, P>,
}

impl<'s, 'a, P: Pather> Steps<'s, 'a, P> {
    pub(crate) fn new(search: &'s mut Search<'a, P>) -> Self {
        Self { search }
    }

    /// The run being stepped.
    pub fn search(&self) -> &Search<'a, P> {
        self.search
    }
}

impl<P: Pather> Iterator for Steps<'_, '_, P> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let current = self.search.step()?;
        Some(self.search.snapshot(current))
    }
}

impl<P: Pather> FusedIterator for Steps<'_, '_, P> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{Algorithm, Outcome, SearchExt};
    use pathgrid_core::GridGraph;

    #[test]
    fn one_event_per_expansion() {
        let g: GridGraph = "...\n.#.\n...".parse().unwrap();
        let mut s = g.search(Algorithm::Bfs, Point::new(0, 0), Point::new(2, 2));
        let events: Vec<Step> = s.steps().collect();
        assert_eq!(events.len(), s.expanded());
        assert_eq!(events[0].current, Point::new(0, 0));
        // Only the last event carries the path.
        let (last, rest) = events.split_last().unwrap();
        assert!(last.is_final());
        assert!(rest.iter().all(|e| e.path.is_none()));
        assert_eq!(last.current, Point::new(2, 2));
        assert_eq!(last.path.as_ref().map(Path::steps), Some(4));
        assert!(matches!(s.outcome(), Some(Outcome::Found(_))));
    }

    #[test]
    fn snapshots_track_frontier_and_closed_set() {
        let g: GridGraph = "...".parse().unwrap();
        let mut s = g.search(Algorithm::Bfs, Point::new(0, 0), Point::new(2, 0));
        let mut steps = s.steps();

        let first = steps.next().unwrap();
        assert_eq!(first.current, Point::new(0, 0));
        assert_eq!(first.closed, vec![Point::new(0, 0)]);
        assert_eq!(first.open, vec![Point::new(1, 0)]);

        let second = steps.next().unwrap();
        assert_eq!(second.closed, vec![Point::new(0, 0), Point::new(1, 0)]);
        assert_eq!(second.open, vec![Point::new(2, 0)]);

        let third = steps.next().unwrap();
        assert!(third.is_final());
        assert!(third.open.is_empty());
        assert_eq!(third.closed.len(), 3);

        assert!(steps.next().is_none());
        assert!(steps.next().is_none());
    }

    #[test]
    fn exhausted_run_ends_without_final_event() {
        let g: GridGraph = ".#.".parse().unwrap();
        let mut s = g.search(Algorithm::Dfs, Point::new(0, 0), Point::new(2, 0));
        let events: Vec<Step> = s.steps().collect();
        assert_eq!(events.len(), 1);
        assert!(!events[0].is_final());
        assert_eq!(s.outcome(), Some(Outcome::NoPathFound));
    }

    #[test]
    fn steps_are_lazy() {
        let g: GridGraph = ".....".parse().unwrap();
        let mut s = g.search(Algorithm::AStar, Point::new(0, 0), Point::new(4, 0));
        let taken: Vec<_> = s.steps().take(2).collect();
        assert_eq!(taken.len(), 2);
        assert_eq!(s.expanded(), 2);
        assert!(s.outcome().is_none());
    }
}
