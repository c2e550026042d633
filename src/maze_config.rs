/// Options for building the Graph of a [`MazeGraph`](crate::MazeGraph)
///
/// Default options:
/// ```
/// # use maze_traversal::MazeConfig;
/// assert_eq!(
/// 	MazeConfig {
/// 		classify_dead_ends: false,
/// 		edge_limit: Some(4),
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MazeConfig {
	/// `false` (default): Dead Ends (Tiles with walls on three sides) are treated like Corridors
	/// and never become Nodes, unless they are the start or the goal.
	///
	/// `true`: Dead Ends become Nodes like any other Intersection.
	///
	/// Paths never need to end in a Dead End other than the goal, so this does not change the
	/// length of any Solution. It only makes the Graph a complete picture of the Maze.
	pub classify_dead_ends: bool,
	/// `Some(n)` (default: `Some(4)`): every Node stores at most `n` Edges. Any further Edge
	/// is silently dropped for that Node.
	///
	/// `None`: Nodes store every Edge they receive.
	///
	/// The row and column scans can give a Node at most 4 Edges, so the limit only matters for
	/// values below 4.
	pub edge_limit: Option<usize>,
}

impl MazeConfig {
	/// The behavior of the original Algorithm: Dead Ends stay unclassified and every Node holds
	/// at most 4 Edges.
	///
	/// Values:
	/// ```
	/// # use maze_traversal::MazeConfig;
	/// assert_eq!(
	/// 	MazeConfig {
	/// 		classify_dead_ends: false,
	/// 		edge_limit: Some(4),
	/// 	},
	/// 	MazeConfig::COMPATIBLE
	/// );
	/// ```
	pub const COMPATIBLE: MazeConfig = MazeConfig {
		classify_dead_ends: false,
		edge_limit: Some(4),
	};
	/// Dead Ends become Nodes and Edge lists grow as needed.
	///
	/// Values:
	/// ```
	/// # use maze_traversal::MazeConfig;
	/// assert_eq!(
	/// 	MazeConfig {
	/// 		classify_dead_ends: true,
	/// 		edge_limit: None,
	/// 	},
	/// 	MazeConfig::CORRECTED
	/// );
	/// ```
	pub const CORRECTED: MazeConfig = MazeConfig {
		classify_dead_ends: true,
		edge_limit: None,
	};
}

impl Default for MazeConfig {
	fn default() -> MazeConfig {
		MazeConfig::COMPATIBLE
	}
}
