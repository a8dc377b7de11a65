//! Command rejection reasons.
//!
//! Every failure is scoped to a single command. A rejected command
//! leaves the board, the position history, and the turn state exactly
//! as they were; no error here is fatal to the session.

use std::fmt;

use crate::board::{Color, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::coord::Coord;

/// All the ways a command can be rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Requested board size is outside the supported range.
    SizeOutOfRange(usize),
    /// Coordinate text is malformed, or the coordinate is off the board.
    InvalidCoordinate(String),
    /// Target intersection already holds a stone.
    OccupiedPosition(Coord),
    /// The acting player is not the player to move.
    NotPlayersTurn(Color),
    /// The resulting position would repeat an earlier one (superko).
    PositionRepeated,
    /// Two consecutive passes already ended the game.
    GameAlreadyOver,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::SizeOutOfRange(size) => write!(
                f,
                "board size {size} outside supported range {MIN_BOARD_SIZE}..={MAX_BOARD_SIZE}"
            ),
            GameError::InvalidCoordinate(input) => write!(f, "invalid coordinate {input:?}"),
            GameError::OccupiedPosition(coord) => write!(f, "position {coord} already occupied"),
            GameError::NotPlayersTurn(player) => write!(f, "not {player}'s turn"),
            GameError::PositionRepeated => write!(f, "move recreates a previous board position"),
            GameError::GameAlreadyOver => write!(f, "game is already over"),
        }
    }
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            GameError::SizeOutOfRange(3).to_string(),
            "board size 3 outside supported range 4..=26"
        );
        assert_eq!(
            GameError::InvalidCoordinate("Z!".to_string()).to_string(),
            "invalid coordinate \"Z!\""
        );
        assert_eq!(
            GameError::OccupiedPosition(Coord::new(2, 3)).to_string(),
            "position B3 already occupied"
        );
        assert_eq!(
            GameError::NotPlayersTurn(Color::White).to_string(),
            "not white's turn"
        );
    }
}
