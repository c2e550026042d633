use super::{NodeGrid, NodeList};
use crate::{grid::Grid, MazeConfig, NodeID};

/// Connects every two Nodes that can see each other along a row or a column.
///
/// Each row is scanned from left to right, remembering the last Node seen since the last wall.
/// When another Node comes up before a wall does, the two are linked with the number of steps
/// between them. Afterwards every column is scanned the same way from top to bottom.
///
/// Nodes that already hold [`config.edge_limit`](MazeConfig::edge_limit) Edges drop any further
/// ones without notice. Every stored Edge sets [`Node::pos`](super::Node::pos) of its Node, so
/// a Node linked in both scans keeps the position from the column scan.
#[track_caller]
pub fn link_nodes(grid: &Grid, cells: &NodeGrid, config: &MazeConfig) -> NodeList {
	debug_assert_eq!(grid.size(), cells.size(), "NodeGrid belongs to a different Grid");
	let (width, height) = grid.size();
	let mut nodes = NodeList::with_nodes(cells.node_count());

	for y in 0..height {
		let mut last: Option<(NodeID, usize)> = None;
		for x in 0..width {
			if grid.is_wall((x, y)) {
				last = None;
				continue;
			}
			if let Some(id) = cells.id_at((x, y)) {
				if let Some((last_id, last_x)) = last {
					nodes.link(
						(last_id, (last_x, y)),
						(id, (x, y)),
						x - last_x,
						config.edge_limit,
					);
				}
				last = Some((id, x));
			}
		}
	}

	for x in 0..width {
		let mut last: Option<(NodeID, usize)> = None;
		for y in 0..height {
			if grid.is_wall((x, y)) {
				last = None;
				continue;
			}
			if let Some(id) = cells.id_at((x, y)) {
				if let Some((last_id, last_y)) = last {
					nodes.link(
						(last_id, (x, last_y)),
						(id, (x, y)),
						y - last_y,
						config.edge_limit,
					);
				}
				last = Some((id, y));
			}
		}
	}

	nodes
}
