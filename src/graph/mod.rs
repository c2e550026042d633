//! Extraction of the sparse Graph of Intersections from a [`Grid`](crate::grid::Grid).
//!
//! This happens in two steps:
//! 1. [`classify`] gives every Intersection of the Grid a Node ID.
//! 2. [`link_nodes`] connects the Nodes that see each other along a row or a column.
//!
//! [`MazeGraph::new`](crate::MazeGraph::new) runs both.

mod node;
pub use self::node::{Edge, Node};

mod node_list;
pub use self::node_list::NodeList;

mod classify;
pub use self::classify::{classify, NodeGrid};

mod link;
pub use self::link::link_nodes;
