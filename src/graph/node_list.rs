use super::{Edge, Node};
use crate::{Cost, NodeID, Point};

/// The Nodes of a Graph, addressed by dense [`NodeID`]s starting at `0`
#[derive(Clone, Debug, Default)]
pub struct NodeList {
	nodes: slab::Slab<Node>,
}

impl NodeList {
	/// Creates an empty NodeList
	pub fn new() -> Self {
		Self {
			nodes: slab::Slab::new(),
		}
	}

	/// Creates a NodeList with `count` Nodes that have the IDs `0..count` and no Edges
	pub fn with_nodes(count: usize) -> Self {
		let mut list = Self {
			nodes: slab::Slab::with_capacity(count),
		};
		for _ in 0..count {
			list.add_node();
		}
		list
	}

	/// Adds a Node without Edges and returns its ID
	pub fn add_node(&mut self) -> NodeID {
		let entry = self.nodes.vacant_entry();
		let id = entry.key();
		entry.insert(Node::new(id));
		id
	}

	/// The number of Nodes
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// `true` if there are no Nodes
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// The number of directed Edge entries over all Nodes
	pub fn edge_count(&self) -> usize {
		self.nodes.iter().map(|(_, node)| node.edges.len()).sum()
	}

	/// Connects the Node `src` at `src_pos` with the Node `target` at `target_pos`.
	///
	/// Both Nodes receive an Edge of length `dist`, `src` first. Each side drops its Edge on its
	/// own if it already holds `limit` Edges. Returns how many of the two Edges were stored.
	#[track_caller]
	pub fn link(
		&mut self,
		(src, src_pos): (NodeID, Point),
		(target, target_pos): (NodeID, Point),
		dist: Cost,
		limit: Option<usize>,
	) -> usize {
		let forward = self[src].add_edge(Edge { to: target, dist }, src_pos, limit);
		let backward = self[target].add_edge(Edge { to: src, dist }, target_pos, limit);
		forward as usize + backward as usize
	}

	/// Iterates over all Nodes and their IDs in ascending order
	pub fn iter(&self) -> slab::Iter<Node> {
		self.nodes.iter()
	}

	/// The Node with the ID `id`, if it exists
	pub fn get(&self, id: NodeID) -> Option<&Node> {
		self.nodes.get(id)
	}
}

impl PartialEq for NodeList {
	fn eq(&self, other: &NodeList) -> bool {
		self.len() == other.len() && self.iter().eq(other.iter())
	}
}
impl Eq for NodeList {}

use std::ops::{Index, IndexMut};
impl Index<NodeID> for NodeList {
	type Output = Node;
	#[track_caller]
	fn index(&self, index: NodeID) -> &Node {
		&self.nodes[index]
	}
}
impl IndexMut<NodeID> for NodeList {
	#[track_caller]
	fn index_mut(&mut self, index: NodeID) -> &mut Node {
		&mut self.nodes[index]
	}
}
