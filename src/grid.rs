use core::fmt;
use core::ops::Index;
use grid_util::Point;
use itertools::iproduct;
use log::debug;
use petgraph::unionfind::UnionFind;

use crate::cell::{Cell, CellId};
use crate::error::PlacementError;
use crate::NEIGHBOUR_OFFSETS;

/// [Grid] owns every [Cell] of a fixed `columns x rows` board, stored row by row. Adjacency is
/// wired once on construction; walls only change whether a neighbour may be entered. Connected
/// components of the open cells are tracked in a [UnionFind]; after walls were added, call
/// [update](Self::update) before asking [reachable](Self::reachable).
#[derive(Clone, Debug)]
pub struct Grid {
    columns: usize,
    rows: usize,
    cells: Vec<Cell>,
    start: Option<CellId>,
    target: Option<CellId>,
    components: UnionFind<usize>,
    components_dirty: bool,
}

impl Grid {
    /// Allocates all cells and links each one to its orthogonal neighbours. Sides falling outside
    /// the grid are omitted.
    pub fn new(columns: usize, rows: usize) -> Grid {
        let cells = iproduct!(0..rows, 0..columns)
            .map(|(y, x)| Cell::new(Point::new(x as i32, y as i32)))
            .collect::<Vec<Cell>>();
        let mut grid = Grid {
            columns,
            rows,
            cells,
            start: None,
            target: None,
            components: UnionFind::new(columns * rows),
            components_dirty: false,
        };
        for ix in 0..grid.cells.len() {
            let p = grid.cells[ix].position;
            let neighbours = NEIGHBOUR_OFFSETS
                .iter()
                .filter_map(|(dx, dy)| grid.id(Point::new(p.x + dx, p.y + dy)))
                .collect();
            grid.cells[ix].neighbours = neighbours;
        }
        grid.generate_components();
        grid
    }
    pub fn columns(&self) -> usize {
        self.columns
    }
    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
    pub fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.columns
            && (point.y as usize) < self.rows
    }
    /// Maps a position to the id of the cell there, if it lies on the grid.
    pub fn id(&self, point: Point) -> Option<CellId> {
        self.in_bounds(point)
            .then(|| CellId(point.y as usize * self.columns + point.x as usize))
    }
    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.0]
    }
    pub(crate) fn cell_mut(&mut self, id: CellId) -> &mut Cell {
        &mut self.cells[id.0]
    }
    pub fn cell_at(&self, point: Point) -> Option<&Cell> {
        self.id(point).map(|id| self.cell(id))
    }
    pub fn cells(&self) -> impl Iterator<Item = (CellId, &Cell)> {
        self.cells.iter().enumerate().map(|(ix, c)| (CellId(ix), c))
    }
    pub fn neighbours(&self, id: CellId) -> &[CellId] {
        &self.cells[id.0].neighbours
    }
    pub fn start(&self) -> Option<CellId> {
        self.start
    }
    pub fn target(&self) -> Option<CellId> {
        self.target
    }

    fn checked_id(&self, point: Point) -> Result<CellId, PlacementError> {
        self.id(point).ok_or(PlacementError::OutOfBounds(point))
    }
    /// Paints a wall. Start and target cells cannot be painted over; painting an existing wall is
    /// a no-op that still succeeds. Walls may split components, so those are marked dirty.
    pub fn set_wall(&mut self, point: Point) -> Result<CellId, PlacementError> {
        let id = self.checked_id(point)?;
        let cell = &mut self.cells[id.0];
        if cell.is_endpoint() {
            return Err(PlacementError::Endpoint(point));
        }
        if !cell.wall {
            cell.wall = true;
            self.components_dirty = true;
        }
        Ok(id)
    }
    /// Marks the single start cell. Walls cannot become the start.
    pub fn set_start(&mut self, point: Point) -> Result<CellId, PlacementError> {
        if self.start.is_some() {
            return Err(PlacementError::StartAlreadySet);
        }
        let id = self.checked_id(point)?;
        if self.cells[id.0].wall {
            return Err(PlacementError::Wall(point));
        }
        self.cells[id.0].start = true;
        self.start = Some(id);
        Ok(id)
    }
    /// Marks the single target cell. Walls cannot become the target.
    pub fn set_target(&mut self, point: Point) -> Result<CellId, PlacementError> {
        if self.target.is_some() {
            return Err(PlacementError::TargetAlreadySet);
        }
        let id = self.checked_id(point)?;
        if self.cells[id.0].wall {
            return Err(PlacementError::Wall(point));
        }
        self.cells[id.0].target = true;
        self.target = Some(id);
        Ok(id)
    }

    /// Forgets all search state while keeping walls, start and target.
    pub fn reset_search(&mut self) {
        self.cells.iter_mut().for_each(Cell::clear_search);
    }
    /// Returns the grid to its freshly constructed state.
    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.clear_search();
            cell.wall = false;
            cell.start = false;
            cell.target = false;
        }
        self.start = None;
        self.target = None;
        self.generate_components();
    }

    /// Retrieves the component id a given cell belongs to.
    pub fn get_component(&self, id: CellId) -> usize {
        self.components.find(id.0)
    }
    /// Checks if both cells are open and on the same component.
    pub fn reachable(&self, a: CellId, b: CellId) -> bool {
        !self.unreachable(a, b)
    }
    /// Checks if a wall separates the cells (or is one of them).
    pub fn unreachable(&self, a: CellId, b: CellId) -> bool {
        self.cells[a.0].wall || self.cells[b.0].wall || !self.components.equiv(a.0, b.0)
    }
    /// All open cells sharing a component with `id`, in storage order.
    pub fn component_members(&self, id: CellId) -> Vec<CellId> {
        if self.cells[id.0].wall {
            return Vec::new();
        }
        let root = self.get_component(id);
        self.cells()
            .filter(|(other, cell)| !cell.wall && self.get_component(*other) == root)
            .map(|(other, _)| other)
            .collect()
    }
    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            debug!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }
    /// Generates a new [UnionFind] structure and links up open neighbours to the same components.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.cells.len());
        self.components_dirty = false;
        for (ix, cell) in self.cells.iter().enumerate() {
            if cell.wall {
                continue;
            }
            for n in &cell.neighbours {
                if !self.cells[n.0].wall {
                    self.components.union(ix, n.0);
                }
            }
        }
    }
}

impl Index<CellId> for Grid {
    type Output = Cell;

    fn index(&self, id: CellId) -> &Cell {
        self.cell(id)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.columns.max(1)) {
            let line = row
                .iter()
                .map(|cell| {
                    if cell.start {
                        'S'
                    } else if cell.target {
                        'G'
                    } else if cell.wall {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
