use crate::{
	graph::{classify, link_nodes, NodeGrid, NodeList},
	grid::Grid,
	search::{exhaustive_search, Solution},
	MazeConfig, MazeError, NodeID, Point,
};

/// The Graph of Intersections of a Maze, ready to be searched.
#[derive(Clone, Debug)]
pub struct MazeGraph {
	start: Point,
	goal: Point,
	cells: NodeGrid,
	nodes: NodeList,
	config: MazeConfig,
}

impl MazeGraph {
	/// Extracts the Graph of `grid` for a Path from `start` to `goal`.
	///
	/// ## Arguments
	/// - `grid` - the Maze
	/// - `start` - where the Path begins. Becomes Node `0`.
	/// - `goal` - where the Path ends. Becomes the Node with the highest ID.
	/// - `config` - which quirks of the Graph extraction to keep. (See [`MazeConfig`])
	///
	/// ## Errors
	/// [`MazeError::OutOfBounds`] or [`MazeError::Wall`] if `start` or `goal` are not open Tiles
	/// of `grid`.
	///
	/// ## Examples
	/// Basic usage:
	/// ```
	/// use maze_traversal::prelude::*;
	///
	/// let grid = Grid::from_rows(&[
	///     "********",
	///     "*      *",
	///     "********",
	/// ])
	/// .unwrap();
	///
	/// let maze = MazeGraph::new(&grid, (1, 1), (6, 1), MazeConfig::default()).unwrap();
	///
	/// // a single straight Corridor: only start and goal are Nodes
	/// assert_eq!(maze.nodes().len(), 2);
	/// assert_eq!(maze.nodes()[0].edges, vec![Edge { to: 1, dist: 5 }]);
	///
	/// let wall = MazeGraph::new(&grid, (0, 0), (6, 1), MazeConfig::default());
	/// assert_eq!(wall.unwrap_err(), MazeError::Wall((0, 0)));
	/// ```
	pub fn new(
		grid: &Grid,
		start: Point,
		goal: Point,
		config: MazeConfig,
	) -> Result<MazeGraph, MazeError> {
		grid.check_endpoint(start)?;
		grid.check_endpoint(goal)?;

		timer!(timer);

		let cells = classify(grid, start, goal, &config);
		re_trace!("classify", timer);

		let nodes = link_nodes(grid, &cells, &config);
		re_trace!("link nodes", timer);

		#[cfg(feature = "log")]
		log::debug!(
			"{}x{} grid: {} nodes, {} edges",
			grid.width(),
			grid.height(),
			nodes.len(),
			nodes.edge_count() / 2
		);

		Ok(MazeGraph {
			start,
			goal,
			cells,
			nodes,
			config,
		})
	}

	/// Searches the shortest Path from start to goal.
	///
	/// Every simple Path through the Graph is tried, see
	/// [`exhaustive_search`](crate::search::exhaustive_search). If start and goal are the same
	/// Tile, no search happens and [`Solution::trivial`] is returned. If the goal cannot be reached,
	/// the result is [`Solution::unsolved`].
	///
	/// ## Examples
	/// ```
	/// # use maze_traversal::prelude::*;
	/// let grid = Grid::from_rows(&[
	///     "*******",
	///     "*  *  *",
	///     "*******",
	/// ])
	/// .unwrap();
	///
	/// let solution = MazeGraph::new(&grid, (1, 1), (2, 1), MazeConfig::default())
	///     .unwrap()
	///     .solve();
	/// assert_eq!(solution.length, 2);
	///
	/// let solution = MazeGraph::new(&grid, (1, 1), (5, 1), MazeConfig::default())
	///     .unwrap()
	///     .solve();
	/// assert!(!solution.is_found());
	///
	/// let solution = MazeGraph::new(&grid, (4, 1), (4, 1), MazeConfig::default())
	///     .unwrap()
	///     .solve();
	/// assert!(solution.is_trivial());
	/// ```
	pub fn solve(&self) -> Solution {
		if self.start == self.goal {
			return Solution::trivial();
		}

		timer!(timer);
		let solution = exhaustive_search(&self.nodes, self.start_id(), self.goal_id());
		re_trace!("search", timer);

		solution
	}

	/// The Nodes of the Graph
	pub fn nodes(&self) -> &NodeList {
		&self.nodes
	}

	/// The Node IDs of all Tiles
	pub fn cells(&self) -> &NodeGrid {
		&self.cells
	}

	/// The ID of the Node at `pos`, if there is one
	pub fn node_id_at(&self, pos: Point) -> Option<NodeID> {
		self.cells.id_at(pos)
	}

	/// The ID of the start Node. Always `0`.
	pub fn start_id(&self) -> NodeID {
		self.cells.start_id()
	}

	/// The ID of the goal Node
	pub fn goal_id(&self) -> NodeID {
		self.cells.goal_id()
	}

	/// The start Tile
	pub fn start(&self) -> Point {
		self.start
	}

	/// The goal Tile
	pub fn goal(&self) -> Point {
		self.goal
	}

	/// Returns the config used to create this MazeGraph
	pub fn config(&self) -> MazeConfig {
		self.config
	}
}
