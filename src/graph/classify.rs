use crate::{grid::Grid, neighbors::WallMask, MazeConfig, NodeID, Point};

/// The Node ID assigned to every Tile of a Grid.
///
/// Created by [`classify`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeGrid {
	width: usize,
	height: usize,
	ids: Vec<Option<NodeID>>,
	goal: NodeID,
}

impl NodeGrid {
	/// The ID of the Node at `pos`, or `None` if `pos` is a wall, a plain Corridor or outside of
	/// the Grid.
	pub fn id_at(&self, pos: Point) -> Option<NodeID> {
		if pos.0 < self.width && pos.1 < self.height {
			self.ids[pos.1 * self.width + pos.0]
		} else {
			None
		}
	}

	/// The ID of the start Node. Always `0`.
	pub fn start_id(&self) -> NodeID {
		0
	}

	/// The ID of the goal Node. One more than the number of Intersections.
	pub fn goal_id(&self) -> NodeID {
		self.goal
	}

	/// The number of Node IDs handed out, including any that were overwritten by the start or
	/// the goal.
	pub fn node_count(&self) -> usize {
		self.goal + 1
	}

	/// `(width, height)` of the underlying Grid
	pub fn size(&self) -> (usize, usize) {
		(self.width, self.height)
	}

	/// Iterates over every Tile that holds a Node, row by row
	pub fn iter(&self) -> impl Iterator<Item = (Point, NodeID)> + '_ {
		let width = self.width;
		self.ids
			.iter()
			.enumerate()
			.filter_map(move |(i, id)| id.map(|id| ((i % width, i / width), id)))
	}
}

/// Assigns Node IDs to the Intersections of `grid`.
///
/// Every open Tile is checked in row-major order. Crossroads, Junctions and Turns (and Dead Ends
/// if [`config.classify_dead_ends`](MazeConfig::classify_dead_ends) is set) receive ascending IDs
/// starting at `1`. Afterwards `start` is forced to ID `0` and `goal` to the next unused ID.
///
/// The forced IDs replace whatever ID those Tiles had before. The replaced ID is still counted
/// in [`NodeGrid::node_count`], but no Tile refers to it anymore, so its Node never receives any
/// Edges. If `start == goal`, the Tile ends up with the goal ID.
///
/// ## Panics
/// if `start` or `goal` lie outside of `grid`
#[track_caller]
pub fn classify(grid: &Grid, start: Point, goal: Point, config: &MazeConfig) -> NodeGrid {
	let (width, height) = grid.size();
	assert!(
		grid.contains(start) && grid.contains(goal),
		"start {:?} and goal {:?} must lie on a {}x{} Grid",
		start,
		goal,
		width,
		height
	);

	let mut ids = vec![None; width * height];
	let mut next_id = 1;

	for y in 0..height {
		for x in 0..width {
			if grid.is_wall((x, y)) {
				continue;
			}
			if WallMask::around(grid, (x, y)).is_node(config.classify_dead_ends) {
				ids[y * width + x] = Some(next_id);
				next_id += 1;
			}
		}
	}

	ids[start.1 * width + start.0] = Some(0);
	ids[goal.1 * width + goal.0] = Some(next_id);

	NodeGrid {
		width,
		height,
		ids,
		goal: next_id,
	}
}
