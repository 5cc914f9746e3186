use log::{info, warn};

use crate::config::VisualizerConfig;
use crate::controller::{Advance, Control, InputEvent, InteractionController, Phase};
use crate::error::ConfigError;
use crate::grid::Grid;
use crate::render::{render_frame, Notifier, Renderer};
use crate::search::{Path, StepResult};

/// What happened during one [Visualizer::tick].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickReport {
    pub control: Control,
    /// Result of the search step taken this tick, if any.
    pub step: Option<StepResult>,
    pub rendered: bool,
}

/// Owns the [Grid] and the [InteractionController] of one run and advances both one tick at a
/// time. Pacing is left to the caller (see [driver](crate::driver)); a tick never blocks.
#[derive(Debug)]
pub struct Visualizer {
    config: VisualizerConfig,
    grid: Grid,
    controller: InteractionController,
}

impl Visualizer {
    pub fn new(config: VisualizerConfig) -> Result<Visualizer, ConfigError> {
        config.validate()?;
        info!(
            "Creating {}x{} grid at {} fps",
            config.columns, config.rows, config.frames_per_second
        );
        Ok(Visualizer {
            grid: Grid::new(config.columns, config.rows),
            controller: InteractionController::new(config.tie_break),
            config,
        })
    }
    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }
    pub fn phase(&self) -> Phase {
        self.controller.phase()
    }
    pub fn path(&self) -> &Path {
        self.controller.path()
    }

    /// One iteration of the cooperative loop: apply all pending `events` in order, take at most
    /// one search step, then draw a frame if anything visible changed. A [InputEvent::Quit] stops
    /// the tick immediately.
    pub fn tick<I, R, N>(&mut self, events: I, renderer: &mut R, notifier: &mut N) -> TickReport
    where
        I: IntoIterator<Item = InputEvent>,
        R: Renderer + ?Sized,
        N: Notifier + ?Sized,
    {
        for event in events {
            if self.controller.handle_event(&mut self.grid, event) == Control::Quit {
                info!("Quit requested");
                return TickReport {
                    control: Control::Quit,
                    step: None,
                    rendered: false,
                };
            }
        }
        let step = match self.controller.advance(&mut self.grid) {
            Advance::Stepped(result) => Some(result),
            Advance::Idle => None,
        };
        if step == Some(StepResult::Exhausted) {
            warn!("No solution: the target cannot be reached");
            notifier.no_solution();
        }
        let rendered = self.controller.take_dirty();
        if rendered {
            render_frame(&self.grid, self.controller.path(), renderer);
        }
        TickReport {
            control: Control::Continue,
            step,
            rendered,
        }
    }

    /// Draws the current state regardless of whether it changed.
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        render_frame(&self.grid, self.controller.path(), renderer);
    }

    /// Keeps the board and discards the search so it can be run again.
    pub fn restart(&mut self) {
        self.controller.restart(&mut self.grid);
    }

    /// Empties the board.
    pub fn reset(&mut self) {
        self.controller.reset(&mut self.grid);
    }
}
