use grid_dijkstra_visualizer::driver::{run, ManualClock, ScriptedInput};
use grid_dijkstra_visualizer::{
    AsciiRenderer, InputEvent, Notifier, Phase, Visualizer, VisualizerConfig,
};
use grid_util::Point;

// The target is boxed in before the search starts, so the frontier floods the start's side of
// the board and runs dry. Runs headless without frame pacing and prints the final frame.
struct PrintingNotifier;

impl Notifier for PrintingNotifier {
    fn no_solution(&mut self) {
        println!("There is no solution!");
    }
}

fn main() {
    let config = VisualizerConfig {
        window_width: 160,
        window_height: 160,
        ..VisualizerConfig::with_grid(10, 10)
    };
    // Pointer positions in pixels, mapped to cells the way a windowed frontend would.
    let cell = |px: u32, py: u32| config.cell_at_pixel(px, py).expect("inside the window");
    let ring = [(6, 6), (7, 6), (8, 6), (9, 6), (6, 7), (6, 8), (6, 9)]
        .map(|(x, y)| InputEvent::PrimaryDrag(cell(x * 16 + 8, y * 16 + 8)));
    let mut input = ScriptedInput::new()
        .then([InputEvent::PrimaryPress(cell(8, 8))])
        .then([InputEvent::SecondaryInteract(cell(140, 140))])
        .then(ring)
        .then([InputEvent::KeyPress])
        .idle(200)
        .then([InputEvent::Quit]);
    let mut visualizer = Visualizer::new(config.clone()).expect("valid configuration");
    let mut renderer = AsciiRenderer::new(10, 10);
    let summary = run(
        &mut visualizer,
        &mut input,
        &mut renderer,
        &mut PrintingNotifier,
        &mut ManualClock::default(),
    );
    if let Some(frame) = renderer.last_frame() {
        println!("{}", frame);
    }
    assert_eq!(visualizer.phase(), Phase::NoPathFound);
    println!("{} frames, {} search steps", summary.frames, summary.steps);
}
