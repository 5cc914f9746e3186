use grid_util::Point;
use log::{debug, info};

use crate::frontier::TieBreak;
use crate::grid::Grid;
use crate::search::{reconstruct_path, Path, SearchEngine, StepResult};

/// Abstract input, already mapped from pixels to cell coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// Primary button pressed over a cell: places the start.
    PrimaryPress(Point),
    /// Pointer moved over a cell with the primary button held: paints a wall.
    PrimaryDrag(Point),
    /// Secondary button pressed or held over a cell: places the target.
    SecondaryInteract(Point),
    /// Any key: begins the search once start and target exist.
    KeyPress,
    Quit,
}

/// Input phase of a run. `PathFound` and `NoPathFound` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingStart,
    AwaitingTarget,
    ReadyToSearch,
    Searching,
    PathFound,
    NoPathFound,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::PathFound | Phase::NoPathFound)
    }
}

/// Whether the caller should keep ticking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// What [InteractionController::advance] did during a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// Not searching; nothing happened.
    Idle,
    /// One search step was taken.
    Stepped(StepResult),
}

/// State machine mapping input events onto grid mutations and the search lifecycle. It borrows the
/// [Grid] for every call and owns the [SearchEngine] plus the reconstructed [Path].
#[derive(Debug)]
pub struct InteractionController {
    phase: Phase,
    engine: SearchEngine,
    path: Path,
    dirty: bool,
}

impl Default for InteractionController {
    fn default() -> Self {
        InteractionController::new(TieBreak::default())
    }
}

impl InteractionController {
    pub fn new(tie_break: TieBreak) -> InteractionController {
        InteractionController {
            phase: Phase::AwaitingStart,
            engine: SearchEngine::new(tie_break),
            path: Path::default(),
            // The very first frame always needs drawing.
            dirty: true,
        }
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }
    /// The final path; empty until the target was reached.
    pub fn path(&self) -> &Path {
        &self.path
    }
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
    /// Returns whether a render is due and clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    /// Applies one input event. Invalid placements are dropped without changing anything.
    pub fn handle_event(&mut self, grid: &mut Grid, event: InputEvent) -> Control {
        match event {
            InputEvent::Quit => return Control::Quit,
            _ if self.phase.is_terminal() => {
                debug!("Ignoring {:?} after the search finished", event);
            }
            InputEvent::PrimaryPress(p) => self.place_start(grid, p),
            InputEvent::PrimaryDrag(p) => self.paint_wall(grid, p),
            InputEvent::SecondaryInteract(p) => self.place_target(grid, p),
            InputEvent::KeyPress => self.begin_search(),
        }
        Control::Continue
    }

    fn place_start(&mut self, grid: &mut Grid, p: Point) {
        if self.phase != Phase::AwaitingStart {
            return;
        }
        match grid.set_start(p) {
            Ok(id) => {
                self.engine.seed(grid, id);
                self.phase = if grid.target().is_some() {
                    Phase::ReadyToSearch
                } else {
                    Phase::AwaitingTarget
                };
                self.dirty = true;
                debug!("Start placed at {}", p);
            }
            Err(e) => debug!("Ignoring start placement: {}", e),
        }
    }

    fn place_target(&mut self, grid: &mut Grid, p: Point) {
        if grid.target().is_some() {
            return;
        }
        match grid.set_target(p) {
            Ok(id) => {
                self.engine.set_target(id);
                if self.phase == Phase::AwaitingTarget {
                    self.phase = Phase::ReadyToSearch;
                }
                self.dirty = true;
                debug!("Target placed at {}", p);
            }
            Err(e) => debug!("Ignoring target placement: {}", e),
        }
    }

    fn paint_wall(&mut self, grid: &mut Grid, p: Point) {
        if grid.cell_at(p).is_some_and(|cell| cell.is_wall()) {
            return;
        }
        match grid.set_wall(p) {
            Ok(_) => self.dirty = true,
            Err(e) => debug!("Ignoring wall: {}", e),
        }
    }

    fn begin_search(&mut self) {
        if self.phase != Phase::ReadyToSearch {
            return;
        }
        info!("Search started");
        self.phase = Phase::Searching;
    }

    /// Takes exactly one search step when searching. Reaching the target reconstructs the path;
    /// exhausting the frontier moves to [Phase::NoPathFound], which happens at most once per run.
    pub fn advance(&mut self, grid: &mut Grid) -> Advance {
        if self.phase != Phase::Searching {
            return Advance::Idle;
        }
        let result = self.engine.step(grid);
        match result {
            StepResult::Continue => self.dirty = true,
            StepResult::TargetReached => {
                if let Some(target) = grid.target() {
                    self.path = reconstruct_path(grid, target);
                    info!("Path of {} cells found", self.path.len());
                }
                self.phase = Phase::PathFound;
                self.dirty = true;
            }
            // Only stale or walled entries were popped, no cell changed.
            StepResult::Exhausted => self.phase = Phase::NoPathFound,
        }
        Advance::Stepped(result)
    }

    /// Discards search progress while keeping walls, start and target, ready for another run.
    pub fn restart(&mut self, grid: &mut Grid) {
        let tie_break = self.engine.tie_break();
        grid.reset_search();
        self.engine = SearchEngine::new(tie_break);
        self.path.clear();
        self.phase = Phase::AwaitingStart;
        if let Some(start) = grid.start() {
            self.engine.seed(grid, start);
            self.phase = Phase::AwaitingTarget;
        }
        if let Some(target) = grid.target() {
            self.engine.set_target(target);
            if self.phase == Phase::AwaitingTarget {
                self.phase = Phase::ReadyToSearch;
            }
        }
        self.dirty = true;
    }

    /// Clears the whole board and starts over from [Phase::AwaitingStart].
    pub fn reset(&mut self, grid: &mut Grid) {
        grid.clear();
        self.restart(grid);
    }
}
