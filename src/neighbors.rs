//! Directions on the Grid and the Wall patterns around a Tile

use crate::{grid::Grid, Point};

/// One of the 4 cardinal directions on the Grid.
///
/// `UP` points towards row `0`, `LEFT` towards column `0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dir {
	/// towards smaller `y`
	UP = 0,
	/// towards larger `x`
	RIGHT = 1,
	/// towards larger `y`
	DOWN = 2,
	/// towards smaller `x`
	LEFT = 3,
}
pub use self::Dir::*;

impl Dir {
	/// Iterates over all 4 directions, clockwise starting with `UP`
	pub fn all() -> std::iter::Copied<std::slice::Iter<'static, Dir>> {
		[UP, RIGHT, DOWN, LEFT].iter().copied()
	}
	/// The direction pointing the other way
	pub fn opposite(self) -> Dir {
		match self {
			UP => DOWN,
			RIGHT => LEFT,
			DOWN => UP,
			LEFT => RIGHT,
		}
	}
	/// The index of the direction in [`Dir::all`]
	pub fn num(self) -> usize {
		self as usize
	}
	/// `true` for `UP` and `DOWN`
	pub fn is_vertical(self) -> bool {
		self == UP || self == DOWN
	}
	/// The bit set in a [`WallMask`] when there is a wall in this direction.
	///
	/// ```
	/// # use maze_traversal::neighbors::Dir;
	/// assert_eq!(Dir::UP.wall_bit(), 8);
	/// assert_eq!(Dir::DOWN.wall_bit(), 4);
	/// assert_eq!(Dir::LEFT.wall_bit(), 2);
	/// assert_eq!(Dir::RIGHT.wall_bit(), 1);
	/// ```
	pub fn wall_bit(self) -> u8 {
		match self {
			UP => 8,
			DOWN => 4,
			LEFT => 2,
			RIGHT => 1,
		}
	}
}

const UNIT_CIRCLE: [(isize, isize); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Returns the Point next to `pos` in direction `dir`, or `None` if that would leave a Grid of
/// size `(w, h)`.
pub fn get_in_dir(pos: Point, dir: Dir, (w, h): (usize, usize)) -> Option<Point> {
	let diff = UNIT_CIRCLE[dir.num()];
	if (pos.0 == 0 && diff.0 < 0)
		|| (pos.1 == 0 && diff.1 < 0)
		|| (pos.0 + 1 >= w && diff.0 > 0)
		|| (pos.1 + 1 >= h && diff.1 > 0)
	{
		None
	} else {
		Some((
			(pos.0 as isize + diff.0) as usize,
			(pos.1 as isize + diff.1) as usize,
		))
	}
}

/// What a Tile looks like based on the walls around it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
	/// open in all 4 directions
	Crossroads,
	/// open in 3 directions
	Junction,
	/// open in 2 perpendicular directions
	Turn,
	/// open in 2 opposite directions
	Corridor,
	/// open in a single direction
	DeadEnd,
	/// walls on all sides
	Enclosed,
}

/// The walls around a Tile, encoded as `top = 8`, `bottom = 4`, `left = 2`, `right = 1`.
///
/// The border of the Grid counts as a wall.
///
/// ```
/// # use maze_traversal::prelude::*;
/// let grid = Grid::from_rows(&[
///     "***",
///     "*  ",
///     "* *",
/// ])
/// .unwrap();
///
/// let mask = WallMask::around(&grid, (1, 1));
/// assert_eq!(mask.bits(), 8 + 2);
/// assert_eq!(mask.kind(), CellKind::Turn);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct WallMask(pub u8);

impl WallMask {
	/// Collects the walls around `pos` on `grid`
	pub fn around(grid: &Grid, pos: Point) -> WallMask {
		let bits = Dir::all()
			.filter(|&dir| match get_in_dir(pos, dir, grid.size()) {
				Some(other) => grid.is_wall(other),
				None => true,
			})
			.map(Dir::wall_bit)
			.sum();
		WallMask(bits)
	}

	/// The raw sum of the wall bits
	pub fn bits(self) -> u8 {
		self.0
	}

	/// `true` if there is a wall in direction `dir`
	pub fn has_wall(self, dir: Dir) -> bool {
		self.0 & dir.wall_bit() != 0
	}

	/// The number of directions without a wall
	pub fn open_sides(self) -> usize {
		4 - (self.0 & 0b1111).count_ones() as usize
	}

	/// Classifies the Tile by the shape of its walls
	pub fn kind(self) -> CellKind {
		match self.0 & 0b1111 {
			0 => CellKind::Crossroads,
			1 | 2 | 4 | 8 => CellKind::Junction,
			5 | 6 | 9 | 10 => CellKind::Turn,
			3 | 12 => CellKind::Corridor,
			7 | 11 | 13 | 14 => CellKind::DeadEnd,
			_ => CellKind::Enclosed,
		}
	}

	/// `true` if a Tile with these walls becomes a Node of the Graph.
	///
	/// Crossroads, Junctions and Turns always do. Dead Ends only when `classify_dead_ends` is set.
	pub fn is_node(self, classify_dead_ends: bool) -> bool {
		match self.kind() {
			CellKind::Crossroads | CellKind::Junction | CellKind::Turn => true,
			CellKind::DeadEnd => classify_dead_ends,
			CellKind::Corridor | CellKind::Enclosed => false,
		}
	}
}
