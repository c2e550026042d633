use crate::Point;
use thiserror::Error;

/// Errors for Grids and Endpoints that cannot be turned into a [`MazeGraph`](crate::MazeGraph).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MazeError {
	/// The Grid has no rows or no columns
	#[error("the grid has no tiles")]
	EmptyGrid,

	/// A row of the Grid has a different length than the first row
	#[error("row {row} has {found} tiles, expected {expected}")]
	RaggedRow {
		/// index of the offending row
		row: usize,
		/// the length of the first row
		expected: usize,
		/// the length of the offending row
		found: usize,
	},

	/// The start or goal lies outside of the Grid
	#[error("{0:?} is outside of the grid")]
	OutOfBounds(Point),

	/// The start or goal lies on a wall
	#[error("{0:?} is a wall")]
	Wall(Point),
}
