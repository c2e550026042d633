//! Exhaustive search for the shortest Path through a [`NodeList`]

use crate::{graph::NodeList, Cost, NodeID};

use std::fmt;
use std::ops::{Deref, DerefMut};

/// The shortest Path found between the start and the goal Node.
///
/// There are three possible states:
/// - a Path was found: `path` holds the Node IDs from start to goal and `length` the number of
///   Tiles walked over, counting the start Tile.
/// - no Path exists: `path` is empty and `length` is [`Solution::UNSOLVED`].
/// - start and goal are the same Tile: `path` is empty and `length` is `0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
	/// the Node IDs along the Path, starting with the start Node and ending with the goal Node
	pub path: Vec<NodeID>,
	/// the sum of all Edge distances along the Path plus one for the start Tile
	pub length: Cost,
}

impl Solution {
	/// The `length` of a Solution without a Path. Larger than any actual Path length.
	pub const UNSOLVED: Cost = Cost::MAX;

	/// A Solution that has not found a Path (yet)
	pub fn unsolved() -> Solution {
		Solution {
			path: Vec::new(),
			length: Solution::UNSOLVED,
		}
	}

	/// The Solution for a start that is also the goal
	pub fn trivial() -> Solution {
		Solution {
			path: Vec::new(),
			length: 0,
		}
	}

	/// The number of Nodes on the Path. `0` if there is no Path.
	pub fn node_count(&self) -> usize {
		self.path.len()
	}

	/// `true` if a Path from start to goal was found
	pub fn is_found(&self) -> bool {
		!self.path.is_empty()
	}

	/// `true` if start and goal are the same Tile
	pub fn is_trivial(&self) -> bool {
		self.path.is_empty() && self.length == 0
	}
}

impl Default for Solution {
	fn default() -> Solution {
		Solution::unsolved()
	}
}

impl fmt::Display for Solution {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		if self.is_trivial() {
			return write!(fmt, "Solution[Length = 0]: <start is goal>");
		}
		if !self.is_found() {
			return write!(fmt, "Solution: <not found>");
		}
		write!(fmt, "Solution[Length = {}]: {}", self.length, self.path[0])?;
		for id in self.path.iter().skip(1) {
			write!(fmt, " -> {}", id)?;
		}
		Ok(())
	}
}

/// Finds the shortest Path from `start` to `goal` by trying every simple Path between them.
///
/// The Graph is walked depth-first. Each Node on the current Path is marked and cannot be entered
/// again until the walk backs out of it, so every Path is tried exactly once. Edges are tried in
/// the order they are stored. Whenever the goal is reached, the Path replaces the best one if its
/// length is strictly smaller, which means that among Paths of equal length the first one found
/// is kept.
///
/// The running time is exponential in the number of loops of the Graph. Nothing is pruned early.
///
/// Callers should handle `start == goal` themselves: this function would report a Path with the
/// single Node `goal` and a length of `1`.
///
/// ## Examples
/// ```
/// # use maze_traversal::{graph::NodeList, search::exhaustive_search};
/// // 0 --2-- 1 --2-- 3
/// //  \             /
/// //   ---5-- 2 --1-
/// let mut nodes = NodeList::with_nodes(4);
/// nodes.link((0, (0, 0)), (1, (2, 0)), 2, None);
/// nodes.link((1, (2, 0)), (3, (4, 0)), 2, None);
/// nodes.link((0, (0, 0)), (2, (0, 5)), 5, None);
/// nodes.link((2, (0, 5)), (3, (4, 0)), 1, None);
///
/// let solution = exhaustive_search(&nodes, 0, 3);
/// assert_eq!(solution.path, vec![0, 1, 3]);
/// assert_eq!(solution.length, 2 + 2 + 1);
/// ```
///
/// ## Panics
/// if `start`, `goal` or any Edge refers to a Node that is not in `nodes`
#[track_caller]
pub fn exhaustive_search(nodes: &NodeList, start: NodeID, goal: NodeID) -> Solution {
	let mut search = Search {
		nodes,
		goal,
		in_path: vec![false; nodes.len()],
		path: Vec::with_capacity(nodes.len()),
		best: Solution::unsolved(),
		completed: 0,
	};
	search.visit(start, 0);

	#[cfg(feature = "log")]
	log::debug!(
		"tried {} complete paths, best length: {}",
		search.completed,
		search.best.length
	);

	search.best
}

struct Search<'a> {
	nodes: &'a NodeList,
	goal: NodeID,
	in_path: Vec<bool>,
	path: Vec<NodeID>,
	best: Solution,
	completed: usize,
}

impl Search<'_> {
	fn visit(&mut self, current: NodeID, dist: Cost) {
		if current == self.goal {
			self.completed += 1;
			let length = dist + 1;
			if length < self.best.length {
				self.best.path.clear();
				self.best.path.extend_from_slice(&self.path);
				self.best.path.push(current);
				self.best.length = length;
			}
			return;
		}

		let nodes = self.nodes;
		let mut step = InPath::enter(self, current);
		for edge in nodes[current].edges.iter() {
			if step.in_path[edge.to] {
				continue;
			}
			step.visit(edge.to, dist + edge.dist);
		}
	}
}

/// Marks a Node as part of the current Path for as long as it lives
struct InPath<'s, 'a> {
	search: &'s mut Search<'a>,
	id: NodeID,
}

impl<'s, 'a> InPath<'s, 'a> {
	fn enter(search: &'s mut Search<'a>, id: NodeID) -> Self {
		search.in_path[id] = true;
		search.path.push(id);
		InPath { search, id }
	}
}

impl Drop for InPath<'_, '_> {
	fn drop(&mut self) {
		self.search.path.pop();
		self.search.in_path[self.id] = false;
	}
}

impl<'a> Deref for InPath<'_, 'a> {
	type Target = Search<'a>;
	fn deref(&self) -> &Search<'a> {
		self.search
	}
}
impl<'a> DerefMut for InPath<'_, 'a> {
	fn deref_mut(&mut self) -> &mut Search<'a> {
		self.search
	}
}
