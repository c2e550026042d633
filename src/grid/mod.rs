//! The Grid a Maze is drawn on

use crate::{MazeError, Point};

mod bfs;
pub use self::bfs::bfs_distance;

/// The character that marks a wall in [`Grid::from_rows`]
pub const WALL: char = '*';

/// A single Tile of the Grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
	/// a Tile that cannot be walked on
	Wall,
	/// a Tile that can be walked on
	Open,
}

/// A rectangular Grid of walls and open Tiles.
///
/// Tiles are stored row by row. Points are given as `(x, y)`, where `x` is the column and `y`
/// the row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
	width: usize,
	height: usize,
	tiles: Vec<Tile>,
}

impl Grid {
	/// Creates a new Grid of the given size.
	///
	/// `is_wall` is called once for every Point on the Grid.
	///
	/// ## Examples
	/// ```
	/// # use maze_traversal::grid::{Grid, Tile};
	/// // a 5x3 Grid with a wall along the middle column
	/// let grid = Grid::new((5, 3), |(x, _)| x == 2);
	///
	/// assert_eq!(grid.tile((2, 1)), Some(Tile::Wall));
	/// assert_eq!(grid.tile((1, 1)), Some(Tile::Open));
	/// assert_eq!(grid.tile((5, 0)), None);
	/// ```
	pub fn new((width, height): (usize, usize), is_wall: impl Fn(Point) -> bool) -> Grid {
		let mut tiles = Vec::with_capacity(width * height);
		for y in 0..height {
			for x in 0..width {
				tiles.push(if is_wall((x, y)) {
					Tile::Wall
				} else {
					Tile::Open
				});
			}
		}
		Grid {
			width,
			height,
			tiles,
		}
	}

	/// Creates a Grid from rows of characters, where [`WALL`] (`'*'`) is a wall and every other
	/// character is an open Tile.
	///
	/// All rows must have the same number of characters.
	///
	/// ## Examples
	/// ```
	/// # use maze_traversal::prelude::*;
	/// let grid = Grid::from_rows(&[
	///     "*****",
	///     "*S G*",
	///     "*****",
	/// ])
	/// .unwrap();
	/// assert_eq!(grid.size(), (5, 3));
	/// assert!(grid.is_open((1, 1)));
	///
	/// let ragged = Grid::from_rows(&["***", "* "]);
	/// assert_eq!(
	///     ragged,
	///     Err(MazeError::RaggedRow { row: 1, expected: 3, found: 2 })
	/// );
	/// ```
	pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Grid, MazeError> {
		let width = match rows.first() {
			Some(row) => row.as_ref().chars().count(),
			None => return Err(MazeError::EmptyGrid),
		};
		if width == 0 {
			return Err(MazeError::EmptyGrid);
		}

		let mut tiles = Vec::with_capacity(width * rows.len());
		for (y, row) in rows.iter().enumerate() {
			let before = tiles.len();
			tiles.extend(row.as_ref().chars().map(|c| {
				if c == WALL {
					Tile::Wall
				} else {
					Tile::Open
				}
			}));
			let found = tiles.len() - before;
			if found != width {
				return Err(MazeError::RaggedRow {
					row: y,
					expected: width,
					found,
				});
			}
		}

		Ok(Grid {
			width,
			height: rows.len(),
			tiles,
		})
	}

	/// The number of columns
	pub fn width(&self) -> usize {
		self.width
	}

	/// The number of rows
	pub fn height(&self) -> usize {
		self.height
	}

	/// `(width, height)`
	pub fn size(&self) -> (usize, usize) {
		(self.width, self.height)
	}

	/// `true` if `pos` lies on the Grid
	pub fn contains(&self, pos: Point) -> bool {
		pos.0 < self.width && pos.1 < self.height
	}

	/// The Tile at `pos`, or `None` if `pos` is outside of the Grid
	pub fn tile(&self, pos: Point) -> Option<Tile> {
		if self.contains(pos) {
			Some(self.tiles[pos.1 * self.width + pos.0])
		} else {
			None
		}
	}

	/// `true` if the Tile at `pos` is a wall. Points outside of the Grid count as walls.
	pub fn is_wall(&self, pos: Point) -> bool {
		self.tile(pos) != Some(Tile::Open)
	}

	/// `true` if the Tile at `pos` can be walked on
	pub fn is_open(&self, pos: Point) -> bool {
		self.tile(pos) == Some(Tile::Open)
	}

	/// Checks that `pos` can be used as a start or goal
	pub(crate) fn check_endpoint(&self, pos: Point) -> Result<(), MazeError> {
		match self.tile(pos) {
			None => Err(MazeError::OutOfBounds(pos)),
			Some(Tile::Wall) => Err(MazeError::Wall(pos)),
			Some(Tile::Open) => Ok(()),
		}
	}
}
