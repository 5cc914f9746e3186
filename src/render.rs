use grid_util::Point;

use crate::cell::{Cell, CellId};
use crate::grid::Grid;
use crate::search::Path;

/// Visual classification of a cell. Several flags can hold at once (the start cell also lies on
/// the final path, a visited cell may have been walled over), so [classify] resolves them with a
/// fixed precedence: wall, target, start, path, visited, queued, empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellColor {
    Empty,
    Queued,
    Visited,
    Path,
    Start,
    Target,
    Wall,
}

impl CellColor {
    pub fn rgb(self) -> [u8; 3] {
        match self {
            CellColor::Empty => [100, 100, 100],
            CellColor::Queued => [200, 0, 0],
            CellColor::Visited => [0, 200, 0],
            CellColor::Path => [0, 0, 200],
            CellColor::Start => [0, 200, 200],
            CellColor::Target => [200, 200, 0],
            CellColor::Wall => [10, 10, 10],
        }
    }
    pub fn glyph(self) -> char {
        match self {
            CellColor::Empty => '.',
            CellColor::Queued => 'o',
            CellColor::Visited => ',',
            CellColor::Path => '*',
            CellColor::Start => 'S',
            CellColor::Target => 'G',
            CellColor::Wall => '#',
        }
    }
}

pub fn classify(id: CellId, cell: &Cell, path: &Path) -> CellColor {
    if cell.is_wall() {
        CellColor::Wall
    } else if cell.is_target() {
        CellColor::Target
    } else if cell.is_start() {
        CellColor::Start
    } else if path.contains(id) {
        CellColor::Path
    } else if cell.is_visited() {
        CellColor::Visited
    } else if cell.is_queued() {
        CellColor::Queued
    } else {
        CellColor::Empty
    }
}

/// Drawing surface fed one full frame at a time.
pub trait Renderer {
    fn draw_cell(&mut self, position: Point, color: CellColor);
    /// Called once after every cell of a frame was drawn.
    fn present(&mut self) {}
}

/// Receives the user-facing "no solution" message.
pub trait Notifier {
    fn no_solution(&mut self);
}

/// Draws every cell of `grid` and presents the frame.
pub fn render_frame<R: Renderer + ?Sized>(grid: &Grid, path: &Path, renderer: &mut R) {
    for (id, cell) in grid.cells() {
        renderer.draw_cell(cell.position(), classify(id, cell, path));
    }
    renderer.present();
}

/// Collects frames as text, one [CellColor::glyph] per cell and one line per row.
#[derive(Clone, Debug, Default)]
pub struct AsciiRenderer {
    columns: usize,
    rows: usize,
    buffer: Vec<char>,
    pub frames: Vec<String>,
}

impl AsciiRenderer {
    pub fn new(columns: usize, rows: usize) -> AsciiRenderer {
        AsciiRenderer {
            columns,
            rows,
            buffer: vec![CellColor::Empty.glyph(); columns * rows],
            frames: Vec::new(),
        }
    }
    pub fn last_frame(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }
}

impl Renderer for AsciiRenderer {
    fn draw_cell(&mut self, position: Point, color: CellColor) {
        if position.x < 0 || position.y < 0 {
            return;
        }
        let (x, y) = (position.x as usize, position.y as usize);
        if x < self.columns && y < self.rows {
            self.buffer[y * self.columns + x] = color.glyph();
        }
    }
    fn present(&mut self) {
        let mut frame = String::with_capacity((self.columns + 1) * self.rows);
        for row in self.buffer.chunks(self.columns.max(1)) {
            frame.extend(row);
            frame.push('\n');
        }
        self.frames.push(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{reconstruct_path, SearchEngine, StepResult};

    #[test]
    fn precedence_of_overlapping_flags() {
        let mut grid = Grid::new(4, 1);
        let s = grid.set_start(Point::new(0, 0)).unwrap();
        let t = grid.set_target(Point::new(3, 0)).unwrap();
        let mut engine = SearchEngine::default();
        engine.seed(&mut grid, s);
        engine.set_target(t);
        assert_eq!(engine.run_to_end(&mut grid), StepResult::TargetReached);
        let path = reconstruct_path(&grid, t);
        // Every cell is on the path; start and target still win.
        let colors = grid
            .cells()
            .map(|(id, c)| classify(id, c, &path))
            .collect::<Vec<_>>();
        assert_eq!(
            colors,
            vec![CellColor::Start, CellColor::Path, CellColor::Path, CellColor::Target]
        );
        // A wall painted over a path cell outranks the path.
        grid.set_wall(Point::new(1, 0)).unwrap();
        let id = grid.id(Point::new(1, 0)).unwrap();
        assert_eq!(classify(id, &grid[id], &path), CellColor::Wall);
    }

    #[test]
    fn visited_outranks_queued() {
        let mut grid = Grid::new(3, 1);
        let s = grid.set_start(Point::new(0, 0)).unwrap();
        let mut engine = SearchEngine::default();
        engine.seed(&mut grid, s);
        engine.step(&mut grid);
        engine.step(&mut grid);
        let empty = Path::default();
        let colors = grid
            .cells()
            .map(|(id, c)| classify(id, c, &empty).glyph())
            .collect::<String>();
        assert_eq!(colors, "S,o");
    }

    #[test]
    fn ascii_frames() {
        let mut grid = Grid::new(2, 2);
        grid.set_wall(Point::new(1, 0)).unwrap();
        grid.set_target(Point::new(1, 1)).unwrap();
        let mut renderer = AsciiRenderer::new(2, 2);
        render_frame(&grid, &Path::default(), &mut renderer);
        assert_eq!(renderer.last_frame(), Some(".#\n.G\n"));
        assert_eq!(renderer.frames.len(), 1);
    }

    #[test]
    fn palette_matches_classic_colors() {
        assert_eq!(CellColor::Empty.rgb(), [100, 100, 100]);
        assert_eq!(CellColor::Target.rgb(), [200, 200, 0]);
        assert_eq!(CellColor::Wall.rgb(), [10, 10, 10]);
    }
}
