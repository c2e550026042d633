use maze_traversal::prelude::*;
use nanorand::{Rng, WyRand};

fn grid(rows: &[&str]) -> Grid {
    Grid::from_rows(rows).unwrap()
}

/// Carves a perfect Maze (exactly one Path between any two Tiles) with a randomized depth-first
/// walk. `cells` is the number of rooms, the Grid is `2 * cells + 1` Tiles in each direction.
fn perfect_maze((cells_w, cells_h): (usize, usize), rng: &mut WyRand) -> Vec<Vec<bool>> {
    let (width, height) = (2 * cells_w + 1, 2 * cells_h + 1);
    let mut walls = vec![vec![true; width]; height];
    let mut visited = vec![vec![false; cells_w]; cells_h];

    visited[0][0] = true;
    walls[1][1] = false;
    let mut stack = vec![(0usize, 0usize)];

    while let Some(&(cx, cy)) = stack.last() {
        let options: Vec<(usize, usize)> = [(0isize, -1isize), (1, 0), (0, 1), (-1, 0)]
            .iter()
            .map(|(dx, dy)| (cx as isize + dx, cy as isize + dy))
            .filter(|&(x, y)| x >= 0 && y >= 0 && (x as usize) < cells_w && (y as usize) < cells_h)
            .map(|(x, y)| (x as usize, y as usize))
            .filter(|&(x, y)| !visited[y][x])
            .collect();

        if options.is_empty() {
            stack.pop();
            continue;
        }
        let (nx, ny) = options[rng.generate_range(0..options.len())];
        visited[ny][nx] = true;
        walls[2 * ny + 1][2 * nx + 1] = false;
        walls[cy + ny + 1][cx + nx + 1] = false;
        stack.push((nx, ny));
    }

    walls
}

/// Knocks out up to `count` walls that separate two open Tiles, creating loops.
fn braid(walls: &mut [Vec<bool>], count: usize, rng: &mut WyRand) {
    let (width, height) = (walls[0].len(), walls.len());
    let mut removed = 0;
    for _ in 0..count * 50 {
        if removed == count {
            break;
        }
        let x = rng.generate_range(1..width - 1);
        let y = rng.generate_range(1..height - 1);
        if !walls[y][x] {
            continue;
        }
        let horizontal = !walls[y][x - 1] && !walls[y][x + 1];
        let vertical = !walls[y - 1][x] && !walls[y + 1][x];
        if horizontal != vertical {
            walls[y][x] = false;
            removed += 1;
        }
    }
}

fn to_grid(walls: &[Vec<bool>]) -> Grid {
    Grid::new((walls[0].len(), walls.len()), |(x, y)| walls[y][x])
}

fn random_open_tile(grid: &Grid, rng: &mut WyRand) -> Option<Point> {
    let open: Vec<Point> = (0..grid.height())
        .flat_map(|y| (0..grid.width()).map(move |x| (x, y)))
        .filter(|&p| grid.is_open(p))
        .collect();
    if open.is_empty() {
        None
    } else {
        Some(open[rng.generate_range(0..open.len())])
    }
}

fn assert_matches_bfs(grid: &Grid, start: Point, goal: Point, config: MazeConfig) {
    let solution = MazeGraph::new(grid, start, goal, config).unwrap().solve();
    match bfs_distance(grid, start, goal) {
        Some(0) => assert!(solution.is_trivial(), "{:?} -> {:?}", start, goal),
        Some(steps) => {
            assert!(solution.is_found(), "{:?} -> {:?}", start, goal);
            assert_eq!(solution.length, steps + 1, "{:?} -> {:?}", start, goal);
        }
        None => {
            assert!(!solution.is_found(), "{:?} -> {:?}", start, goal);
            assert_eq!(solution.length, Solution::UNSOLVED);
        }
    }
}

#[test]
fn straight_corridor() {
    let grid = grid(&[
        "********", //
        "*      *", //
        "********", //
    ]);
    let maze = MazeGraph::new(&grid, (1, 1), (6, 1), MazeConfig::default()).unwrap();

    assert_eq!(maze.nodes().len(), 2);
    assert_eq!(maze.nodes()[0].edges, vec![Edge { to: 1, dist: 5 }]);
    assert_eq!(maze.nodes()[1].edges, vec![Edge { to: 0, dist: 5 }]);

    let solution = maze.solve();
    assert_eq!(solution.path, vec![0, 1]);
    assert_eq!(solution.length, 6);
    assert_eq!(solution.node_count(), 2);
}

#[test]
fn junction_prefers_shorter_route() {
    // S enters the ring at a Junction. Going left reaches G in 6 steps, going right in 10.
    let grid = grid(&[
        "**S*****", //
        "*      *", //
        "* **** *", //
        "*   G  *", //
        "********", //
    ]);
    let maze = MazeGraph::new(&grid, (2, 0), (4, 3), MazeConfig::default()).unwrap();
    let solution = maze.solve();
    assert_eq!(solution.length, 8);

    let maze = MazeGraph::new(&grid, (2, 0), (3, 3), MazeConfig::default()).unwrap();
    let junction = maze.node_id_at((2, 1)).unwrap();
    assert_eq!(maze.nodes()[junction].edges.len(), 3);

    let solution = maze.solve();
    assert_eq!(solution.length, 6 + 1);
    assert_eq!(solution.path, vec![0, 2, 1, 4, 6]);

    let points: Vec<Point> = solution
        .path
        .iter()
        .map(|&id| maze.nodes()[id].pos.unwrap())
        .collect();
    assert_eq!(points, vec![(2, 0), (2, 1), (1, 1), (1, 3), (3, 3)]);
}

#[test]
fn isolated_pocket() {
    let grid = grid(&[
        "*********", //
        "*   *   *", //
        "* * * * *", //
        "*   *   *", //
        "*********", //
    ]);
    let solution = MazeGraph::new(&grid, (1, 1), (7, 2), MazeConfig::default())
        .unwrap()
        .solve();
    assert!(!solution.is_found());
    assert_eq!(solution.node_count(), 0);
    assert_eq!(solution.length, Solution::UNSOLVED);
    assert_eq!(format!("{}", solution), "Solution: <not found>");

    // the pocket itself is fine
    let solution = MazeGraph::new(&grid, (5, 1), (7, 3), MazeConfig::default())
        .unwrap()
        .solve();
    assert_eq!(solution.length, 5);
}

#[test]
fn start_is_goal() {
    let grids = [
        Grid::new((1, 1), |_| false),
        Grid::new((6, 4), |_| false),
        grid(&["*****", "*   *", "*****"]),
        grid(&["* *", "   ", "* *"]),
    ];
    for grid in grids.iter() {
        let (width, height) = grid.size();
        for y in 0..height {
            for x in 0..width {
                if grid.is_wall((x, y)) {
                    continue;
                }
                let solution = MazeGraph::new(grid, (x, y), (x, y), MazeConfig::default())
                    .unwrap()
                    .solve();
                assert_eq!(solution, Solution::trivial());
                assert_eq!(solution.length, 0);
                assert_eq!(solution.node_count(), 0);
            }
        }
    }
}

#[test]
fn sample_layout() {
    let grid = grid(&[
        "**********",
        "*     *  *",
        "* ****** *",
        "*       **",
        "** **   **",
        "*    *  **",
        "*  **    *",
        "*        *",
        "**********",
    ]);
    let (start, goal) = ((1, 1), (7, 6));

    let maze = MazeGraph::new(&grid, start, goal, MazeConfig::default()).unwrap();
    let solution = maze.solve();
    assert_eq!(solution.length, 12);
    assert_eq!(bfs_distance(&grid, start, goal), Some(11));

    // consecutive Nodes of the Path are connected by an Edge
    let walked: usize = solution
        .path
        .windows(2)
        .map(|ids| maze.nodes()[ids[0]].dist_to(ids[1]).unwrap())
        .sum();
    assert_eq!(walked + 1, solution.length);
    assert_eq!(solution.path.first(), Some(&maze.start_id()));
    assert_eq!(solution.path.last(), Some(&maze.goal_id()));
}

#[test]
fn extraction_is_idempotent() {
    let mut rng = WyRand::new_seed(7);
    for _ in 0..10 {
        let mut walls = perfect_maze((8, 6), &mut rng);
        braid(&mut walls, 4, &mut rng);
        let grid = to_grid(&walls);
        let start = random_open_tile(&grid, &mut rng).unwrap();
        let goal = random_open_tile(&grid, &mut rng).unwrap();

        for config in [MazeConfig::COMPATIBLE, MazeConfig::CORRECTED] {
            let a = MazeGraph::new(&grid, start, goal, config).unwrap();
            let b = MazeGraph::new(&grid, start, goal, config).unwrap();
            assert_eq!(a.cells(), b.cells());
            assert_eq!(a.nodes(), b.nodes());
            assert_eq!(a.solve(), b.solve());
        }
    }
}

#[test]
fn edges_agree_on_distance() {
    let mut rng = WyRand::new_seed(11);
    for _ in 0..10 {
        let mut walls = perfect_maze((10, 10), &mut rng);
        braid(&mut walls, 10, &mut rng);
        let grid = to_grid(&walls);
        let maze = MazeGraph::new(&grid, (1, 1), (19, 19), MazeConfig::default()).unwrap();

        for (id, node) in maze.nodes().iter() {
            assert!(node.edges.len() <= 4);
            for edge in node.edges.iter() {
                assert_eq!(maze.nodes()[edge.to].dist_to(id), Some(edge.dist));
            }
            // every Node with Edges sits on the Tile that carries its ID
            if let Some(pos) = node.pos {
                assert_eq!(maze.node_id_at(pos), Some(id));
            }
        }
    }
}

#[test]
fn matches_bfs_on_perfect_mazes() {
    let mut rng = WyRand::new_seed(42);
    for _ in 0..30 {
        let walls = perfect_maze((15, 12), &mut rng);
        let grid = to_grid(&walls);
        let start = random_open_tile(&grid, &mut rng).unwrap();
        let goal = random_open_tile(&grid, &mut rng).unwrap();
        assert_matches_bfs(&grid, start, goal, MazeConfig::COMPATIBLE);
        assert_matches_bfs(&grid, start, goal, MazeConfig::CORRECTED);
    }
}

#[test]
fn matches_bfs_on_braided_mazes() {
    let mut rng = WyRand::new_seed(1337);
    for _ in 0..30 {
        let mut walls = perfect_maze((10, 8), &mut rng);
        braid(&mut walls, 5, &mut rng);
        let grid = to_grid(&walls);
        let start = random_open_tile(&grid, &mut rng).unwrap();
        let goal = random_open_tile(&grid, &mut rng).unwrap();
        assert_matches_bfs(&grid, start, goal, MazeConfig::COMPATIBLE);
        assert_matches_bfs(&grid, start, goal, MazeConfig::CORRECTED);
    }
}

#[test]
fn matches_bfs_on_small_random_grids() {
    let mut rng = WyRand::new_seed(3);
    for _ in 0..200 {
        let walls: Vec<Vec<bool>> = (0..5)
            .map(|_| (0..5).map(|_| rng.generate_range(0..10usize) < 3).collect())
            .collect();
        let grid = to_grid(&walls);
        let start = match random_open_tile(&grid, &mut rng) {
            Some(p) => p,
            None => continue,
        };
        let goal = random_open_tile(&grid, &mut rng).unwrap();
        assert_matches_bfs(&grid, start, goal, MazeConfig::COMPATIBLE);
    }
}

#[test]
fn split_maze_has_no_path() {
    let mut rng = WyRand::new_seed(5);
    for _ in 0..10 {
        let mut walls = perfect_maze((9, 9), &mut rng);
        braid(&mut walls, 6, &mut rng);
        // a solid wall through the middle row of the Grid
        for tile in walls[9].iter_mut() {
            *tile = true;
        }
        let grid = to_grid(&walls);
        let solution = MazeGraph::new(&grid, (1, 1), (17, 17), MazeConfig::default())
            .unwrap()
            .solve();
        assert!(!solution.is_found());
        assert_eq!(solution, Solution::unsolved());
    }
}

#[test]
fn dead_ends_only_in_corrected_mode() {
    let grid = grid(&[
        "*******", //
        "*     *", //
        "* *** *", //
        "* *   *", //
        "*******", //
    ]);
    let (start, goal) = ((1, 1), (5, 3));
    // (3, 3) is a Dead End
    let compatible = MazeGraph::new(&grid, start, goal, MazeConfig::COMPATIBLE).unwrap();
    let corrected = MazeGraph::new(&grid, start, goal, MazeConfig::CORRECTED).unwrap();

    assert_eq!(compatible.node_id_at((3, 3)), None);
    let dead_end = corrected.node_id_at((3, 3)).unwrap();
    assert_eq!(corrected.nodes()[dead_end].edges.len(), 1);
    assert!(corrected.nodes().len() > compatible.nodes().len());

    assert_eq!(compatible.solve().length, corrected.solve().length);
    assert_eq!(compatible.solve().length, 7);
}
