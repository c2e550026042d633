use crate::{Cost, NodeID, Point};

/// One direction of a connection between two Nodes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
	/// the Node on the other end
	pub to: NodeID,
	/// the number of steps to get there
	pub dist: Cost,
}

/// A Node of the extracted Graph
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
	/// the ID of this Node
	pub id: NodeID,
	/// the Tile where this Node last received an Edge. `None` while it has no Edges.
	pub pos: Option<Point>,
	/// the Edges to other Nodes, in the order they were added
	pub edges: Vec<Edge>,
}

impl Node {
	/// Creates a Node without any Edges
	pub fn new(id: NodeID) -> Node {
		Node {
			id,
			pos: None,
			edges: Vec::with_capacity(4),
		}
	}

	/// Appends `edge`, unless the Node already holds `limit` Edges.
	///
	/// `at` is the Tile of this Node and replaces [`pos`](Node::pos) if the Edge was added.
	/// Returns `false` if the Edge was dropped.
	pub fn add_edge(&mut self, edge: Edge, at: Point, limit: Option<usize>) -> bool {
		if limit.map_or(false, |limit| self.edges.len() >= limit) {
			return false;
		}
		self.edges.push(edge);
		self.pos = Some(at);
		true
	}

	/// The distance of the first Edge leading to `other`
	pub fn dist_to(&self, other: NodeID) -> Option<Cost> {
		self.edges.iter().find(|e| e.to == other).map(|e| e.dist)
	}
}
