use super::Grid;
use crate::{
	neighbors::{get_in_dir, Dir},
	Point, PointMap,
};

use std::collections::VecDeque;

/// Counts the steps of the shortest walk from `start` to `goal`, moving between open Tiles in
/// the 4 cardinal directions.
///
/// This works on the raw Tiles and does not use the Graph at all, which makes it an independent
/// check for [`MazeGraph::solve`](crate::MazeGraph::solve): whenever both find a Path, the
/// Solution's `length` is this distance plus one.
///
/// Returns `None` if `goal` cannot be reached or either Point is not an open Tile.
///
/// ## Examples
/// ```
/// # use maze_traversal::prelude::*;
/// let grid = Grid::from_rows(&[
///     "*****",
///     "*   *",
///     "* * *",
///     "*****",
/// ])
/// .unwrap();
///
/// assert_eq!(bfs_distance(&grid, (1, 2), (3, 2)), Some(4));
/// assert_eq!(bfs_distance(&grid, (1, 2), (2, 2)), None);
/// ```
pub fn bfs_distance(grid: &Grid, start: Point, goal: Point) -> Option<usize> {
	if !grid.is_open(start) || !grid.is_open(goal) {
		return None;
	}
	let mut visited = PointMap::default();
	let mut next = VecDeque::new();
	visited.insert(start, 0);
	next.push_back(start);

	while let Some(current) = next.pop_front() {
		let current_dist = visited[&current];
		if current == goal {
			return Some(current_dist);
		}

		for dir in Dir::all() {
			let other = match get_in_dir(current, dir, grid.size()) {
				Some(other) if grid.is_open(other) => other,
				_ => continue,
			};
			if visited.contains_key(&other) {
				continue;
			}
			visited.insert(other, current_dist + 1);
			next.push_back(other);
		}
	}

	None
}
