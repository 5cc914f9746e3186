//! # grid_dijkstra_visualizer
//!
//! The engine behind an interactive
//! [Dijkstra](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) visualizer on a uniform-cost
//! 4-connected grid. The user paints walls, picks a start and a target, presses a key and watches
//! the frontier grow one expansion per frame until the path appears.
//!
//! The search is incremental: [SearchEngine::step] performs a single productive expansion, so a
//! tick loop can draw intermediate state. The [InteractionController] turns abstract input events
//! into grid edits and search phases, and the [Visualizer] ties both to a [Renderer] on a
//! cooperative tick. Windowing, input polling and frame pacing stay outside, behind the
//! [Renderer], [Notifier], [InputSource](driver::InputSource) and [Clock](driver::Clock) traits.
//!
//! ```
//! use grid_dijkstra_visualizer::{Grid, SearchEngine, StepResult, reconstruct_path};
//! use grid_util::Point;
//!
//! let mut grid = Grid::new(3, 3);
//! let start = grid.set_start(Point::new(0, 0)).unwrap();
//! let target = grid.set_target(Point::new(2, 2)).unwrap();
//! let mut engine = SearchEngine::default();
//! engine.seed(&mut grid, start);
//! engine.set_target(target);
//! while engine.step(&mut grid) == StepResult::Continue {}
//! assert_eq!(reconstruct_path(&grid, target).len(), 5);
//! ```
pub mod cell;
pub mod config;
pub mod controller;
pub mod driver;
pub mod error;
pub mod frontier;
pub mod grid;
pub mod render;
pub mod search;
pub mod visualizer;

pub use cell::{Cell, CellId, Distance, INFINITY};
pub use config::VisualizerConfig;
pub use controller::{Advance, Control, InputEvent, InteractionController, Phase};
pub use error::{ConfigError, PlacementError};
pub use frontier::{Frontier, TieBreak};
pub use grid::Grid;
pub use render::{classify, AsciiRenderer, CellColor, Notifier, Renderer};
pub use search::{reconstruct_path, Path, SearchEngine, StepResult};
pub use visualizer::{TickReport, Visualizer};

/// Every cell has at most four neighbours.
const N_SMALLVEC_SIZE: usize = 4;

/// Neighbour offsets in relaxation order: west, east, north, south. With equal distances this
/// order decides which predecessor a cell keeps, so it is part of the observable behaviour.
pub const NEIGHBOUR_OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
