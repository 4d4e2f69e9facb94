//! Board primitives shared by the grid games.
//!
//! - `Coord`: a signed cell address, so a step off the board is representable
//! - `Direction`: the four unit moves and their reversal relation
//! - `GridSize`: bounds checks, row-major indexing and line enumeration
//!
//! ## Usage
//!
//! ```
//! use rust_minigames::core::{Coord, Direction, GridSize};
//!
//! let grid = GridSize::new(20, 20);
//! let head = Coord::new(19, 5);
//!
//! assert!(grid.contains(head));
//! assert!(!grid.contains(head.step(Direction::Right)));
//! assert!(Direction::Left.is_reverse_of(Direction::Right));
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A cell address. `x` grows rightwards, `y` grows downwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent cell one step in `direction`. May lie outside any grid.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Unit movement on a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// `(dx, dy)` for one step.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The 180° turn.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True if `self` points exactly against `other`.
    #[must_use]
    pub fn is_reverse_of(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// A line of cell indices (row, column or diagonal).
pub type Line = SmallVec<[usize; 8]>;

/// Fixed grid dimensions with row-major cell indexing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    #[must_use]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// A square grid.
    #[must_use]
    pub const fn square(side: u16) -> Self {
        Self::new(side, side)
    }

    /// Total number of cells.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check if a coordinate lies on the grid.
    #[must_use]
    pub fn contains(self, coord: Coord) -> bool {
        coord.x >= 0 && coord.y >= 0 && coord.x < i32::from(self.width) && coord.y < i32::from(self.height)
    }

    /// Row-major index of a coordinate, `None` if off the grid.
    #[must_use]
    pub fn index_of(self, coord: Coord) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.y as usize * self.width as usize + coord.x as usize)
        } else {
            None
        }
    }

    /// Coordinate of a row-major index, `None` if out of range.
    #[must_use]
    pub fn coord_of(self, index: usize) -> Option<Coord> {
        if index < self.cell_count() {
            let width = self.width as usize;
            Some(Coord::new((index % width) as i32, (index / width) as i32))
        } else {
            None
        }
    }

    /// Iterate over every cell in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Coord> {
        let width = i32::from(self.width);
        let height = i32::from(self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Coord::new(x, y)))
    }

    /// Every full-length line on the grid: rows, then columns, then
    /// both diagonals when the grid is square.
    #[must_use]
    pub fn full_lines(self) -> Vec<Line> {
        let width = self.width as usize;
        let height = self.height as usize;
        let mut lines = Vec::with_capacity(width + height + 2);

        for row in 0..height {
            lines.push((0..width).map(|col| row * width + col).collect());
        }
        for col in 0..width {
            lines.push((0..height).map(|row| row * width + col).collect());
        }
        if width == height {
            lines.push((0..width).map(|i| i * width + i).collect());
            lines.push((0..width).map(|i| i * width + (width - 1 - i)).collect());
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_and_reverse() {
        let c = Coord::new(5, 5);
        assert_eq!(c.step(Direction::Right), Coord::new(6, 5));
        assert_eq!(c.step(Direction::Up), Coord::new(5, 4));

        for dir in Direction::ALL {
            assert_eq!(c.step(dir).step(dir.opposite()), c);
            assert!(dir.opposite().is_reverse_of(dir));
            assert!(!dir.is_reverse_of(dir));
        }
        assert!(!Direction::Up.is_reverse_of(Direction::Left));
    }

    #[test]
    fn test_contains_bounds() {
        let grid = GridSize::new(20, 10);

        assert!(grid.contains(Coord::new(0, 0)));
        assert!(grid.contains(Coord::new(19, 9)));
        assert!(!grid.contains(Coord::new(20, 0)));
        assert!(!grid.contains(Coord::new(0, 10)));
        assert!(!grid.contains(Coord::new(-1, 3)));
    }

    #[test]
    fn test_index_roundtrip() {
        let grid = GridSize::new(4, 3);

        assert_eq!(grid.index_of(Coord::new(1, 2)), Some(9));
        assert_eq!(grid.coord_of(9), Some(Coord::new(1, 2)));
        assert_eq!(grid.index_of(Coord::new(4, 0)), None);
        assert_eq!(grid.coord_of(12), None);
        assert_eq!(grid.cells().count(), 12);
    }

    #[test]
    fn test_full_lines_3x3() {
        let lines = GridSize::square(3).full_lines();

        let lines: Vec<Vec<usize>> = lines.iter().map(|l| l.to_vec()).collect();
        let expected = vec![
            vec![0, 1, 2],
            vec![3, 4, 5],
            vec![6, 7, 8],
            vec![0, 3, 6],
            vec![1, 4, 7],
            vec![2, 5, 8],
            vec![0, 4, 8],
            vec![2, 4, 6],
        ];
        assert_eq!(lines, expected);
    }

    #[test]
    fn test_full_lines_rectangular_has_no_diagonals() {
        let lines = GridSize::new(3, 2).full_lines();
        assert_eq!(lines.len(), 5);
    }
}
