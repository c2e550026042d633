use maze_traversal::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;
use std::time::Instant;

const CELLS: usize = 40;
const MAZES: u64 = 64;

/// Carves a perfect Maze with `CELLS` rooms in each direction and opens `loops` extra walls
fn gen_maze(seed: u64, loops: usize) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    let size = 2 * CELLS + 1;
    let mut walls = vec![true; size * size];
    let mut visited = vec![false; CELLS * CELLS];
    let mut stack = vec![(0usize, 0usize)];
    visited[0] = true;
    walls[size + 1] = false;

    while let Some(&(cx, cy)) = stack.last() {
        let options: Vec<(usize, usize)> = [
            (cx as isize, cy as isize - 1),
            (cx as isize + 1, cy as isize),
            (cx as isize, cy as isize + 1),
            (cx as isize - 1, cy as isize),
        ]
        .iter()
        .filter(|(x, y)| *x >= 0 && *y >= 0 && (*x as usize) < CELLS && (*y as usize) < CELLS)
        .map(|&(x, y)| (x as usize, y as usize))
        .filter(|&(x, y)| !visited[y * CELLS + x])
        .collect();

        if options.is_empty() {
            stack.pop();
            continue;
        }
        let (nx, ny) = options[rng.gen_range(0..options.len())];
        visited[ny * CELLS + nx] = true;
        walls[(2 * ny + 1) * size + 2 * nx + 1] = false;
        walls[(cy + ny + 1) * size + cx + nx + 1] = false;
        stack.push((nx, ny));
    }

    let mut opened = 0;
    while opened < loops {
        let x = rng.gen_range(1..size - 1);
        let y = rng.gen_range(1..size - 1);
        if (x + y) % 2 == 1 && walls[y * size + x] {
            walls[y * size + x] = false;
            opened += 1;
        }
    }

    Grid::new((size, size), |(x, y)| walls[y * size + x])
}

struct Run {
    seed: u64,
    create_ms: f64,
    solve_ms: f64,
    nodes: usize,
    length: Option<usize>,
    expected: Option<usize>,
}

fn run(seed: u64, loops: usize, config: MazeConfig) -> Run {
    let grid = gen_maze(seed, loops);
    let (width, height) = grid.size();
    let goal = (width - 2, height - 2);

    let start_time = Instant::now();
    let maze = match MazeGraph::new(&grid, (1, 1), goal, config) {
        Ok(maze) => maze,
        Err(err) => panic!("seed {}: {}", seed, err),
    };
    let create_ms = start_time.elapsed().as_secs_f64() * 1000.0;

    let start_time = Instant::now();
    let solution = maze.solve();
    let solve_ms = start_time.elapsed().as_secs_f64() * 1000.0;

    Run {
        seed,
        create_ms,
        solve_ms,
        nodes: maze.nodes().len(),
        length: Some(solution.length).filter(|_| solution.is_found()),
        expected: bfs_distance(&grid, (1, 1), goal).map(|steps| steps + 1),
    }
}

fn main() {
    let configs = [
        ("compatible", MazeConfig::COMPATIBLE),
        ("corrected", MazeConfig::CORRECTED),
    ];

    for loops in [0, 4, 8] {
        for (name, config) in configs {
            let start_time = Instant::now();
            let runs: Vec<Run> = (0..MAZES)
                .into_par_iter()
                .map(|seed| run(seed, loops, config))
                .collect();
            let total = start_time.elapsed().as_secs_f64() * 1000.0;

            for r in runs.iter().filter(|r| r.length != r.expected) {
                println!(
                    "seed {}: found {:?}, breadth-first search found {:?}",
                    r.seed, r.length, r.expected
                );
            }

            let create = runs.iter().map(|r| r.create_ms);
            let solve = runs.iter().map(|r| r.solve_ms);
            let nodes = runs.iter().map(|r| r.nodes).sum::<usize>() as f64 / runs.len() as f64;

            println!(
                "{} with {} loops | create {:.3}ms - {:.3}ms; {:.3}ms | solve {:.3}ms - {:.3}ms; {:.3}ms | {:.1} nodes | total {:.1}ms",
                name,
                loops,
                create.clone().fold(f64::INFINITY, f64::min),
                create.clone().fold(0.0, f64::max),
                create.sum::<f64>() / runs.len() as f64,
                solve.clone().fold(f64::INFINITY, f64::min),
                solve.clone().fold(0.0, f64::max),
                solve.sum::<f64>() / runs.len() as f64,
                nodes,
                total,
            );
        }
    }
}
