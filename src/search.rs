use core::fmt;
use fxhash::FxBuildHasher;
use grid_util::Point;
use indexmap::IndexSet;
use itertools::Itertools;
use log::{info, trace, warn};

use crate::cell::{CellId, Distance};
use crate::frontier::{Frontier, TieBreak};
use crate::grid::Grid;

type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// Outcome of a single [SearchEngine::step].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult {
    /// One cell was expanded; more work remains.
    Continue,
    /// The target was popped from the frontier and finalized.
    TargetReached,
    /// The frontier ran dry before the target was reached.
    Exhausted,
}

/// Incremental uniform-cost (Dijkstra) search over a [Grid]. Instead of running to completion,
/// each call to [step](Self::step) performs one productive expansion so a caller can draw the
/// frontier between calls. The engine borrows the grid per call and keeps only the frontier and
/// bookkeeping itself; all distances and predecessors live in the cells.
#[derive(Debug)]
pub struct SearchEngine {
    frontier: Frontier<Distance, CellId>,
    target: Option<CellId>,
    expanded: Vec<CellId>,
    steps: usize,
}

impl Default for SearchEngine {
    fn default() -> Self {
        SearchEngine::new(TieBreak::default())
    }
}

impl SearchEngine {
    pub fn new(tie_break: TieBreak) -> SearchEngine {
        SearchEngine {
            frontier: Frontier::new(tie_break),
            target: None,
            expanded: Vec::new(),
            steps: 0,
        }
    }
    /// Makes `start` a source: distance zero, queued, pushed onto the frontier.
    pub fn seed(&mut self, grid: &mut Grid, start: CellId) {
        let cell = grid.cell_mut(start);
        cell.distance = 0;
        cell.queued = true;
        self.frontier.seed(start);
    }
    pub fn set_target(&mut self, target: CellId) {
        self.target = Some(target);
    }
    pub fn target(&self) -> Option<CellId> {
        self.target
    }
    pub fn tie_break(&self) -> TieBreak {
        self.frontier.tie_break()
    }
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }
    /// Cells in the order they were finalized.
    pub fn expansion_order(&self) -> &[CellId] {
        &self.expanded
    }
    /// Number of [step](Self::step) calls so far.
    pub fn steps(&self) -> usize {
        self.steps
    }
    /// Drops the frontier and bookkeeping. Cell state is reset separately through
    /// [Grid::reset_search].
    pub fn reset(&mut self) {
        self.frontier.clear();
        self.target = None;
        self.expanded.clear();
        self.steps = 0;
    }

    /// Pops the closest unfinalized cell and relaxes its neighbours.
    ///
    /// Entries for cells that are already visited are stale duplicates and are skipped within the
    /// same call, as are entries for cells that were painted into walls after being queued. Walls
    /// are only checked here, at expansion time: painting during a search blocks cells that are not
    /// finalized yet but never undoes an earlier relaxation.
    pub fn step(&mut self, grid: &mut Grid) -> StepResult {
        self.steps += 1;
        let current = loop {
            let Some((cost, id)) = self.frontier.pop_min() else {
                info!(
                    "Frontier exhausted after {} expansions, target unreachable",
                    self.expanded.len()
                );
                return StepResult::Exhausted;
            };
            let cell = &grid[id];
            if cell.visited {
                trace!("Discarding stale entry for {} at cost {}", cell.position, cost);
                continue;
            }
            if cell.wall {
                trace!("Discarding {} which was walled off while queued", cell.position);
                continue;
            }
            debug_assert_eq!(cost, cell.distance);
            break id;
        };

        if Some(current) == self.target {
            let cell = grid.cell_mut(current);
            cell.visited = true;
            info!(
                "Reached target {} at distance {} after {} expansions",
                cell.position,
                cell.distance,
                self.expanded.len()
            );
            self.expanded.push(current);
            return StepResult::TargetReached;
        }

        let candidate = grid[current].distance + 1;
        let neighbours = grid[current].neighbours.clone();
        for n in neighbours {
            let neighbour = grid.cell_mut(n);
            if neighbour.wall || neighbour.visited {
                continue;
            }
            if candidate < neighbour.distance {
                neighbour.distance = candidate;
                neighbour.predecessor = Some(current);
                neighbour.queued = true;
                self.frontier.push(candidate, n);
            }
        }
        grid.cell_mut(current).visited = true;
        self.expanded.push(current);
        trace!("Expanded {} at distance {}", grid[current].position, candidate - 1);
        StepResult::Continue
    }

    /// Calls [step](Self::step) until it stops returning [StepResult::Continue]. Meant for tests
    /// and batch use; interactive callers step once per frame.
    pub fn run_to_end(&mut self, grid: &mut Grid) -> StepResult {
        loop {
            match self.step(grid) {
                StepResult::Continue => {}
                done => return done,
            }
        }
    }
}

/// An ordered start-to-end sequence of cells that also answers membership queries in constant
/// time, which the renderer needs for every cell of every frame.
#[derive(Clone, Debug, Default)]
pub struct Path {
    cells: FxIndexSet<CellId>,
}

impl Path {
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
    pub fn contains(&self, id: CellId) -> bool {
        self.cells.contains(&id)
    }
    pub fn first(&self) -> Option<CellId> {
        self.cells.first().copied()
    }
    pub fn last(&self) -> Option<CellId> {
        self.cells.last().copied()
    }
    pub fn iter(&self) -> impl Iterator<Item = CellId> + '_ {
        self.cells.iter().copied()
    }
    pub fn positions(&self, grid: &Grid) -> Vec<Point> {
        self.iter().map(|id| grid[id].position).collect()
    }
    /// Checks that every consecutive pair of cells is orthogonally adjacent.
    pub fn is_contiguous(&self, grid: &Grid) -> bool {
        self.iter()
            .tuple_windows()
            .all(|(a, b)| grid[a].position.manhattan_distance(&grid[b].position) == 1)
    }
    pub fn clear(&mut self) {
        self.cells.clear();
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.cells.iter().eq(other.cells.iter())
    }
}

impl Eq for Path {}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}]", self.cells.iter().join(", "))
    }
}

/// Follows predecessor links back from `end` to the cell without one and returns the cells in
/// start-to-end order. The chain must end on the start cell; anything else means the search state
/// is corrupt, which fails loudly in debug builds.
pub fn reconstruct_path(grid: &Grid, end: CellId) -> Path {
    let mut cells = std::iter::successors(Some(end), |&id| grid[id].predecessor)
        .take(grid.len())
        .collect::<Vec<CellId>>();
    cells.reverse();
    let reaches_start = cells.first().is_some_and(|&id| grid[id].start);
    debug_assert!(
        reaches_start,
        "predecessor chain from {} does not lead back to the start cell",
        grid[end].position
    );
    if !reaches_start {
        warn!(
            "Degenerate path: {} has no predecessor chain to the start cell",
            grid[end].position
        );
    }
    Path {
        cells: cells.into_iter().collect(),
    }
}
