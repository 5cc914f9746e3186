use core::fmt;
use grid_util::Point;
use smallvec::SmallVec;

use crate::N_SMALLVEC_SIZE;

/// Shortest known number of unit steps from the start cell.
pub type Distance = u32;

/// Distance of a cell the search has not reached (yet).
pub const INFINITY: Distance = Distance::MAX;

/// Stable index of a [Cell] inside the [Grid](crate::grid::Grid) that owns it. Predecessor
/// links and the frontier refer to cells through this index rather than through references.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellId(pub(crate) usize);

impl CellId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single grid position together with its paint state (wall, start, target) and its search
/// state (visited, queued, distance, predecessor).
#[derive(Clone, Debug)]
pub struct Cell {
    pub(crate) position: Point,
    pub(crate) wall: bool,
    pub(crate) start: bool,
    pub(crate) target: bool,
    pub(crate) visited: bool,
    pub(crate) queued: bool,
    pub(crate) distance: Distance,
    pub(crate) predecessor: Option<CellId>,
    pub(crate) neighbours: SmallVec<[CellId; N_SMALLVEC_SIZE]>,
}

impl Cell {
    pub(crate) fn new(position: Point) -> Cell {
        Cell {
            position,
            wall: false,
            start: false,
            target: false,
            visited: false,
            queued: false,
            distance: INFINITY,
            predecessor: None,
            neighbours: SmallVec::new(),
        }
    }
    pub fn position(&self) -> Point {
        self.position
    }
    pub fn is_wall(&self) -> bool {
        self.wall
    }
    pub fn is_start(&self) -> bool {
        self.start
    }
    pub fn is_target(&self) -> bool {
        self.target
    }
    /// True once the cell was expanded; its distance is final from then on.
    pub fn is_visited(&self) -> bool {
        self.visited
    }
    /// True once the cell was ever pushed onto the frontier.
    pub fn is_queued(&self) -> bool {
        self.queued
    }
    pub fn distance(&self) -> Distance {
        self.distance
    }
    /// The distance, or [None] while the cell is unreached.
    pub fn finite_distance(&self) -> Option<Distance> {
        (self.distance != INFINITY).then_some(self.distance)
    }
    pub fn predecessor(&self) -> Option<CellId> {
        self.predecessor
    }
    /// Orthogonal neighbours in west, east, north, south order.
    pub fn neighbours(&self) -> &[CellId] {
        &self.neighbours
    }
    /// Start and target cells may not be painted over.
    pub fn is_endpoint(&self) -> bool {
        self.start || self.target
    }

    pub(crate) fn clear_search(&mut self) {
        self.visited = false;
        self.queued = false;
        self.distance = INFINITY;
        self.predecessor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_cell_is_unreached() {
        let cell = Cell::new(Point::new(3, 4));
        assert_eq!(cell.distance(), INFINITY);
        assert_eq!(cell.finite_distance(), None);
        assert!(cell.predecessor().is_none());
        assert!(!cell.is_visited() && !cell.is_queued() && !cell.is_endpoint());
    }

    #[test]
    fn clear_search_keeps_paint() {
        let mut cell = Cell::new(Point::new(0, 0));
        cell.start = true;
        cell.visited = true;
        cell.queued = true;
        cell.distance = 0;
        cell.predecessor = Some(CellId(7));
        cell.clear_search();
        assert!(cell.is_start());
        assert!(!cell.is_visited());
        assert_eq!(cell.finite_distance(), None);
        assert!(cell.predecessor().is_none());
    }
}
