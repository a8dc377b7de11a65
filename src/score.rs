//! Area scoring.
//!
//! Mechanical counting under area rules: a player's score is the number
//! of intersections they occupy plus the empty intersections only their
//! stones border. There is no dead-stone negotiation; whatever is on
//! the board is counted as it stands.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use crate::board::{Board, Color};
use crate::coord::Coord;
use crate::group::empty_region;

/// Final areas for both players.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Score {
    pub black_area: usize,
    pub white_area: usize,
}

impl Score {
    /// The player with the larger area, or `None` for a draw.
    pub fn winner(&self) -> Option<Color> {
        match self.black_area.cmp(&self.white_area) {
            Ordering::Greater => Some(Color::Black),
            Ordering::Less => Some(Color::White),
            Ordering::Equal => None,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "black {} white {}", self.black_area, self.white_area)?;
        match self.winner() {
            Some(color) => write!(f, " ({color} wins)"),
            None => write!(f, " (draw)"),
        }
    }
}

/// Compute both players' areas on the given board.
///
/// Every empty region bordering exactly one color is that color's
/// territory; a region bordering both colors, or nothing at all (the
/// empty board), counts for nobody. Pure function of the board; never
/// mutates game state and may be called speculatively mid-game.
pub fn score(board: &Board) -> Score {
    let (mut black_area, mut white_area) = board.stone_counts();
    let mut assigned: BTreeSet<Coord> = BTreeSet::new();

    for coord in board.coords() {
        if board.at(coord).is_some() || assigned.contains(&coord) {
            continue;
        }
        let Ok(region) = empty_region(board, coord) else {
            continue; // coords() only yields in-bounds coordinates
        };
        match region.sole_border() {
            Some(Color::Black) => black_area += region.points.len(),
            Some(Color::White) => white_area += region.points.len(),
            None => {}
        }
        assigned.extend(region.points);
    }

    Score {
        black_area,
        white_area,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(black: &[&str], white: &[&str]) -> Board {
        let mut board = Board::new(4).unwrap();
        for text in black {
            let coord = Coord::parse(text).unwrap();
            board.set(coord, Some(Color::Black)).unwrap();
        }
        for text in white {
            let coord = Coord::parse(text).unwrap();
            board.set(coord, Some(Color::White)).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let board = Board::new(4).unwrap();
        let result = score(&board);
        assert_eq!(result, Score { black_area: 0, white_area: 0 });
        assert_eq!(result.winner(), None);
    }

    #[test]
    fn test_enclosed_pocket_is_territory() {
        // Black walls off A1 and B1; a lone white stone at D4 keeps the
        // rest of the board neutral.
        let board = board_with(&["C1", "A2", "B2", "C2"], &["D4"]);
        let result = score(&board);
        assert_eq!(result.black_area, 4 + 2);
        assert_eq!(result.white_area, 1);
        assert_eq!(result.winner(), Some(Color::Black));
    }

    #[test]
    fn test_board_of_one_color_owns_everything() {
        let board = board_with(&["B2"], &[]);
        let result = score(&board);
        assert_eq!(result.black_area, 16);
        assert_eq!(result.white_area, 0);
    }

    #[test]
    fn test_region_bordering_both_colors_is_neutral() {
        // Black column B, white column C: A-side is black territory,
        // D-side is white territory, nothing in between is empty.
        let board = board_with(
            &["B1", "B2", "B3", "B4"],
            &["C1", "C2", "C3", "C4"],
        );
        let result = score(&board);
        assert_eq!(result.black_area, 4 + 4);
        assert_eq!(result.white_area, 4 + 4);
        assert_eq!(result.winner(), None);
    }

    #[test]
    fn test_display() {
        let score = Score { black_area: 6, white_area: 1 };
        assert_eq!(score.to_string(), "black 6 white 1 (black wins)");
        let tie = Score { black_area: 0, white_area: 0 };
        assert_eq!(tie.to_string(), "black 0 white 0 (draw)");
    }
}
