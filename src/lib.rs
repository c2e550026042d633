#![warn(
	missing_docs,
	missing_debug_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to find the shortest Path through a Maze given as a Grid of Characters.
//!
//! ## Introduction
//! Running a regular search over every Tile of a Maze wastes most of its time walking down
//! straight Corridors where there is nothing to decide. This crate first reduces the Maze to
//! the Tiles where something *can* be decided: crossroads, three-way junctions and turns,
//! plus the start and the goal. Those Tiles become the Nodes of a sparse Graph, and every two
//! Nodes that can see each other along an unbroken row or column are connected by an Edge whose
//! length is the number of steps between them.
//!
//! The Graph is then searched by enumerating every simple Path from start to goal and keeping
//! the shortest one. This is exhaustive: the running time grows exponentially with the number
//! of loops in the Maze. It is meant for Mazes with few Intersections compared to their size,
//! which is exactly what most hand-drawn or generated Mazes look like.
//!
//! ## Examples
//! ```
//! use maze_traversal::prelude::*;
//!
//! // '*' = wall, everything else is open
//! let grid = Grid::from_rows(&[
//!     "**S*****",
//!     "*      *",
//!     "* **** *",
//!     "*      *",
//!     "********",
//! ])
//! .unwrap();
//!
//! let maze = MazeGraph::new(&grid, (2, 0), (3, 3), MazeConfig::default()).unwrap();
//!
//! let solution = maze.solve();
//! assert!(solution.is_found());
//!
//! // the length counts every Tile on the Path, including start and goal
//! assert_eq!(solution.length, 7);
//! assert_eq!(solution.path, vec![0, 2, 1, 4, 6]);
//! ```
//! The Path is given as a sequence of Node IDs. The Nodes themselves, including the Point on
//! the Grid they are located at, can be inspected through [`MazeGraph::nodes`].
//!
//! ### Configuration
//! The Graph extraction carries two quirks of the Algorithm it was built from: Dead Ends are never
//! turned into Nodes, and every Node holds at most 4 Edges. [`MazeConfig::COMPATIBLE`] (the
//! default) keeps both, [`MazeConfig::CORRECTED`] classifies Dead Ends and never drops an Edge.
//! ```
//! # use maze_traversal::prelude::*;
//! let grid = Grid::from_rows(&[
//!     "*****",
//!     "*   *",
//!     "* ***",
//!     "*****",
//! ])
//! .unwrap();
//!
//! let compatible = MazeGraph::new(&grid, (1, 1), (1, 2), MazeConfig::COMPATIBLE).unwrap();
//! assert_eq!(compatible.node_id_at((3, 1)), None);
//!
//! let corrected = MazeGraph::new(&grid, (1, 1), (1, 2), MazeConfig::CORRECTED).unwrap();
//! assert!(corrected.node_id_at((3, 1)).is_some());
//! ```

/// The Type used to reference a Node in the extracted Graph
pub type NodeID = usize;

/// The Type used for distances and Path lengths
pub type Cost = usize;

/// A shorthand for Points on the grid, given as `(x, y)` = `(column, row)`
pub type Point = (usize, usize);

/// A [`HashMap`](hashbrown::HashMap) with Points as keys
pub type PointMap<V> = hashbrown::HashMap<Point, V>;

#[cfg(feature = "log")]
macro_rules! re_trace {
	($msg: literal, $timer: ident) => {
		let now = std::time::Instant::now();
		log::trace!(concat!("time to ", $msg, ": {:?}"), now - $timer);
		#[allow(unused_variables)]
		let $timer = now;
	};
}
#[cfg(not(feature = "log"))]
macro_rules! re_trace {
	($msg: literal, $timer: ident) => {};
}

#[cfg(feature = "log")]
macro_rules! timer {
	($timer: ident) => {
		let $timer = std::time::Instant::now();
	};
}
#[cfg(not(feature = "log"))]
macro_rules! timer {
	($timer: ident) => {};
}

mod error;
pub use self::error::MazeError;

mod maze_config;
pub use self::maze_config::MazeConfig;

mod maze;
pub use self::maze::MazeGraph;

pub mod graph;
pub mod grid;
pub mod neighbors;
pub mod search;

/// The prelude for this crate.
pub mod prelude {
	pub use crate::{
		graph::{Edge, Node, NodeGrid, NodeList},
		grid::{bfs_distance, Grid, Tile},
		neighbors::{CellKind, Dir, WallMask},
		search::Solution,
		Cost, MazeConfig, MazeError, MazeGraph, NodeID, Point,
	};
}
