use grid_dijkstra_visualizer::driver::{run, FrameClock, ScriptedInput};
use grid_dijkstra_visualizer::{
    AsciiRenderer, CellColor, InputEvent, Notifier, Renderer, Visualizer, VisualizerConfig,
};
use grid_util::Point;

// A scripted session on a 12x8 grid: a wall with a single gap is dragged across the board, then
// the search runs at 30 frames per second and every frame is printed.
//
// S marks the start, G the target, # walls, o queued, , visited and * the final path.
struct PrintingRenderer(AsciiRenderer);

impl Renderer for PrintingRenderer {
    fn draw_cell(&mut self, position: Point, color: CellColor) {
        self.0.draw_cell(position, color);
    }
    fn present(&mut self) {
        self.0.present();
        if let Some(frame) = self.0.last_frame() {
            println!("{}", frame);
        }
    }
}

struct PrintingNotifier;

impl Notifier for PrintingNotifier {
    fn no_solution(&mut self) {
        println!("There is no solution!");
    }
}

fn main() {
    let config = VisualizerConfig {
        window_width: 480,
        window_height: 320,
        ..VisualizerConfig::with_grid(12, 8)
    };
    let mut visualizer = Visualizer::new(config).expect("valid configuration");
    let wall = (0..8)
        .filter(|&y| y != 6)
        .map(|y| InputEvent::PrimaryDrag(Point::new(6, y)));
    let mut input = ScriptedInput::new()
        .then([InputEvent::PrimaryPress(Point::new(1, 1))])
        .then(wall)
        .then([InputEvent::SecondaryInteract(Point::new(10, 1))])
        .then([InputEvent::KeyPress])
        .idle(100)
        .then([InputEvent::Quit]);
    let mut renderer = PrintingRenderer(AsciiRenderer::new(12, 8));
    let summary = run(
        &mut visualizer,
        &mut input,
        &mut renderer,
        &mut PrintingNotifier,
        &mut FrameClock::default(),
    );
    println!(
        "{:?} after {} search steps, path of {} cells",
        visualizer.phase(),
        summary.steps,
        visualizer.path().len()
    );
}
