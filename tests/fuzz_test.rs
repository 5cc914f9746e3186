/// Fuzzes the stepwise search by checking on many random grids that it reaches the target exactly
/// when the target shares a connected component with the start, that the path it finds is as
/// short as a plain breadth-first search says it should be, and that an exhausted search visited
/// precisely the start's component.
use grid_dijkstra_visualizer::{reconstruct_path, CellId, Grid, SearchEngine, StepResult, TieBreak};
use grid_util::Point;
use rand::prelude::*;
use std::collections::VecDeque;

fn random_grid(w: usize, h: usize, rng: &mut StdRng, start: Point, end: Point) -> Grid {
    let mut grid = Grid::new(w, h);
    for x in 0..w as i32 {
        for y in 0..h as i32 {
            let p = Point::new(x, y);
            if p != start && p != end && rng.gen_bool(0.4) {
                grid.set_wall(p).unwrap();
            }
        }
    }
    grid.set_start(start).unwrap();
    grid.set_target(end).unwrap();
    grid.update();
    grid
}

fn visualize_grid(grid: &Grid) {
    print!("{}", grid);
}

/// Reference distances from a breadth-first search over open cells.
fn bfs_distances(grid: &Grid, from: CellId) -> Vec<Option<u32>> {
    let mut dist = vec![None; grid.len()];
    let mut queue = VecDeque::from([from]);
    dist[from.index()] = Some(0);
    while let Some(id) = queue.pop_front() {
        let d = dist[id.index()].unwrap();
        for &n in grid.neighbours(id) {
            if !grid[n].is_wall() && dist[n.index()].is_none() {
                dist[n.index()] = Some(d + 1);
                queue.push_back(n);
            }
        }
    }
    dist
}

fn search(grid: &mut Grid, tie_break: TieBreak) -> (StepResult, SearchEngine) {
    let mut engine = SearchEngine::new(tie_break);
    let start = grid.start().unwrap();
    let target = grid.target().unwrap();
    engine.seed(grid, start);
    engine.set_target(target);
    let mut result = StepResult::Continue;
    for _ in 0..=grid.len() + 1 {
        result = engine.step(grid);
        if result != StepResult::Continue {
            break;
        }
    }
    (result, engine)
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    for tie_break in [TieBreak::Fifo, TieBreak::Lifo] {
        for _ in 0..N_GRIDS {
            let mut grid = random_grid(N, N, &mut rng, start, end);
            let s = grid.start().unwrap();
            let t = grid.target().unwrap();
            let reachable = grid.reachable(s, t);
            let (result, engine) = search(&mut grid, tie_break);
            // Show the grid if the search disagrees with the components
            if (result == StepResult::TargetReached) != reachable {
                visualize_grid(&grid);
            }
            assert!(result != StepResult::Continue);
            assert_eq!(result == StepResult::TargetReached, reachable);

            if reachable {
                let expected = bfs_distances(&grid, s)[t.index()].unwrap();
                assert_eq!(grid[t].distance(), expected);
                let path = reconstruct_path(&grid, t);
                assert_eq!(path.first(), Some(s));
                assert_eq!(path.last(), Some(t));
                assert_eq!(path.len() as u32 - 1, expected);
                assert!(path.is_contiguous(&grid));
                assert!(path.iter().all(|id| !grid[id].is_wall()));
            } else {
                let mut visited = engine.expansion_order().to_vec();
                visited.sort();
                assert_eq!(visited, grid.component_members(s));
                let marked = grid
                    .cells()
                    .filter(|(_, c)| c.is_visited())
                    .map(|(id, _)| id)
                    .collect::<Vec<_>>();
                assert_eq!(marked, visited);
            }
        }
    }
}

#[test]
fn fuzz_finalized_distances() {
    const N: usize = 6;
    const N_GRIDS: usize = 1000;
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..N_GRIDS {
        let start = Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        let mut end = Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        if end == start {
            end = Point::new((start.x + 1) % N as i32, start.y);
        }
        let mut grid = random_grid(N, N, &mut rng, start, end);
        let s = grid.start().unwrap();
        let reference = bfs_distances(&grid, s);
        let (_, engine) = search(&mut grid, TieBreak::Fifo);
        // Every finalized cell carries its true shortest distance, in non-decreasing order.
        let mut last = 0;
        for &id in engine.expansion_order() {
            assert_eq!(Some(grid[id].distance()), reference[id.index()]);
            assert!(grid[id].distance() >= last);
            last = grid[id].distance();
        }
    }
}
