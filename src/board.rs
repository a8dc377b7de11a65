//! Board state: a fixed-size square grid of intersections.
//!
//! The board is pure data. It knows how to bounds-check coordinate
//! access, count stones, and render itself as text; every rule about
//! what may be placed where lives in [`crate::game`]. Each intersection
//! is in exactly one of three states: empty, black, or white.

use std::fmt;

use crate::coord::Coord;
use crate::error::GameError;

/// Smallest supported board.
pub const MIN_BOARD_SIZE: usize = 4;

/// Largest supported board: one column letter per coordinate, A..Z.
pub const MAX_BOARD_SIZE: usize = 26;

/// A player, and the color of that player's stones.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// An NxN grid of intersections, N in `[4, 26]`.
///
/// The size is fixed at construction. `None` is an empty intersection,
/// `Some(color)` a stone. The board is the single source of truth for
/// position state; groups and regions are derived views computed by
/// [`crate::group`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Color>>,
}

impl Board {
    /// Create an all-empty board, or fail with [`GameError::SizeOutOfRange`].
    pub fn new(size: usize) -> Result<Board, GameError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(GameError::SizeOutOfRange(size));
        }
        Ok(Board {
            size,
            cells: vec![None; size * size],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Linear index of an in-range coordinate, row-major.
    fn index(&self, coord: Coord) -> usize {
        (coord.row - 1) * self.size + (coord.col - 1)
    }

    fn check(&self, coord: Coord) -> Result<(), GameError> {
        if coord.col < 1 || coord.row < 1 || coord.col > self.size || coord.row > self.size {
            return Err(GameError::InvalidCoordinate(coord.to_string()));
        }
        Ok(())
    }

    /// State of one intersection, bounds-checked.
    pub fn get(&self, coord: Coord) -> Result<Option<Color>, GameError> {
        self.check(coord)?;
        Ok(self.cells[self.index(coord)])
    }

    /// Unchecked state read. Callers must pass a coordinate produced by
    /// [`Board::coords`] or [`Board::neighbors`] of this board.
    pub(crate) fn at(&self, coord: Coord) -> Option<Color> {
        self.cells[self.index(coord)]
    }

    /// Overwrite one intersection, bounds-checked.
    ///
    /// This is the only mutation primitive. It has no capture or
    /// legality awareness of its own.
    pub fn set(&mut self, coord: Coord, state: Option<Color>) -> Result<(), GameError> {
        self.check(coord)?;
        let idx = self.index(coord);
        self.cells[idx] = state;
        Ok(())
    }

    /// In-bounds orthogonal neighbors of an in-range coordinate.
    pub fn neighbors(&self, coord: Coord) -> Vec<Coord> {
        let mut v = Vec::with_capacity(4);
        if coord.col > 1 {
            v.push(Coord::new(coord.col - 1, coord.row));
        }
        if coord.col < self.size {
            v.push(Coord::new(coord.col + 1, coord.row));
        }
        if coord.row > 1 {
            v.push(Coord::new(coord.col, coord.row - 1));
        }
        if coord.row < self.size {
            v.push(Coord::new(coord.col, coord.row + 1));
        }
        v
    }

    /// Every coordinate of the board, row-major from A1.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let size = self.size;
        (1..=size).flat_map(move |row| (1..=size).map(move |col| Coord::new(col, row)))
    }

    /// Total stones on the board as `(black, white)`.
    pub fn stone_counts(&self) -> (usize, usize) {
        let mut black = 0;
        let mut white = 0;
        for cell in &self.cells {
            match cell {
                Some(Color::Black) => black += 1,
                Some(Color::White) => white += 1,
                None => {}
            }
        }
        (black, white)
    }

    /// Canonical copy of the full position, for history comparison and
    /// rollback. Two snapshots are equal iff every intersection matches.
    pub(crate) fn snapshot(&self) -> Vec<Option<Color>> {
        self.cells.clone()
    }

    /// Restore a snapshot previously taken from this board.
    pub(crate) fn restore(&mut self, snapshot: Vec<Option<Color>>) {
        debug_assert_eq!(snapshot.len(), self.cells.len());
        self.cells = snapshot;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (1..=self.size).rev() {
            write!(f, "{row:>2}")?;
            for col in 1..=self.size {
                let glyph = match self.at(Coord::new(col, row)) {
                    Some(Color::Black) => 'X',
                    Some(Color::White) => 'O',
                    None => '.',
                };
                write!(f, " {glyph}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for col in 1..=self.size {
            let letter = (b'A' + (col - 1) as u8) as char;
            write!(f, " {letter}")?;
        }
        Ok(())
    }
}
