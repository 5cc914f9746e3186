//! The outer tick loop. Everything that waits lives here, outside the search core: an
//! [InputSource] is drained without blocking, the [Visualizer] ticks once, and a [Clock] sleeps
//! until the next frame boundary.
use log::debug;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::controller::{Control, InputEvent};
use crate::render::{Notifier, Renderer};
use crate::visualizer::Visualizer;

/// Non-blocking source of pending input.
pub trait InputSource {
    /// Returns every event received since the last call, possibly none.
    fn poll_events(&mut self) -> Vec<InputEvent>;
}

/// Frame pacing.
pub trait Clock {
    /// Blocks until `period` has passed since the previous call.
    fn wait_for_next_tick(&mut self, period: Duration);
}

/// Sleeps away whatever is left of each frame period, so the loop runs at a fixed rate as long as
/// a tick is faster than a frame.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl Clock for FrameClock {
    fn wait_for_next_tick(&mut self, period: Duration) {
        let now = Instant::now();
        if let Some(last) = self.last {
            let elapsed = now.duration_since(last);
            if elapsed < period {
                std::thread::sleep(period - elapsed);
            }
        }
        self.last = Some(Instant::now());
    }
}

/// Never sleeps; counts ticks instead. For headless runs and tests.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    pub ticks: usize,
}

impl Clock for ManualClock {
    fn wait_for_next_tick(&mut self, _period: Duration) {
        self.ticks += 1;
    }
}

/// Replays prepared batches of events, one batch per tick. Once the script runs out every poll
/// returns nothing.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    batches: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new() -> ScriptedInput {
        ScriptedInput::default()
    }
    /// Appends a batch delivered in a single tick.
    pub fn then(mut self, batch: impl IntoIterator<Item = InputEvent>) -> ScriptedInput {
        self.batches.push_back(batch.into_iter().collect());
        self
    }
    /// Appends `ticks` ticks without input.
    pub fn idle(mut self, ticks: usize) -> ScriptedInput {
        self.batches.extend(std::iter::repeat_with(Vec::new).take(ticks));
        self
    }
    pub fn remaining(&self) -> usize {
        self.batches.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.batches.pop_front().unwrap_or_default()
    }
}

/// Totals of a finished [run].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: usize,
    pub frames: usize,
    pub steps: usize,
}

/// Ticks `visualizer` at its configured frame rate until an [InputEvent::Quit] arrives.
pub fn run<S, R, N, C>(
    visualizer: &mut Visualizer,
    input: &mut S,
    renderer: &mut R,
    notifier: &mut N,
    clock: &mut C,
) -> RunSummary
where
    S: InputSource + ?Sized,
    R: Renderer + ?Sized,
    N: Notifier + ?Sized,
    C: Clock + ?Sized,
{
    let period = visualizer.config().frame_period();
    let mut summary = RunSummary::default();
    loop {
        let report = visualizer.tick(input.poll_events(), renderer, notifier);
        summary.ticks += 1;
        if report.control == Control::Quit {
            break;
        }
        summary.frames += usize::from(report.rendered);
        summary.steps += usize::from(report.step.is_some());
        clock.wait_for_next_tick(period);
    }
    debug!(
        "Loop finished after {} ticks, {} frames, {} search steps",
        summary.ticks, summary.frames, summary.steps
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VisualizerConfig;
    use crate::controller::Phase;
    use crate::render::AsciiRenderer;
    use grid_util::Point;

    struct Silent;

    impl Notifier for Silent {
        fn no_solution(&mut self) {}
    }

    #[test]
    fn scripted_run_until_quit() {
        let config = VisualizerConfig {
            window_width: 40,
            window_height: 40,
            ..VisualizerConfig::with_grid(4, 4)
        };
        let mut vis = Visualizer::new(config).unwrap();
        let mut input = ScriptedInput::new()
            .then([InputEvent::PrimaryPress(Point::new(0, 0))])
            .then([InputEvent::SecondaryInteract(Point::new(3, 0))])
            .then([InputEvent::KeyPress])
            .idle(10)
            .then([InputEvent::Quit]);
        assert_eq!(input.remaining(), 14);
        let mut renderer = AsciiRenderer::new(4, 4);
        let mut clock = ManualClock::default();
        let summary = run(&mut vis, &mut input, &mut renderer, &mut Silent, &mut clock);
        assert_eq!(vis.phase(), Phase::PathFound);
        assert_eq!(summary.ticks, 14);
        assert_eq!(clock.ticks, 13);
        // The target sits at distance 3, so at most the 10 cells that close are expanded.
        assert!(summary.steps >= 4 && summary.steps <= 10);
        assert_eq!(summary.frames, renderer.frames.len());
        assert_eq!(renderer.last_frame().map(|f| &f[..5]), Some("S**G\n"));
    }

    #[test]
    fn frame_clock_paces_ticks() {
        let mut clock = FrameClock::default();
        let period = Duration::from_millis(5);
        let begin = Instant::now();
        for _ in 0..3 {
            clock.wait_for_next_tick(period);
        }
        assert!(begin.elapsed() >= Duration::from_millis(10));
    }
}
