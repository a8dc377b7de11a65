//! Game session: move validation, capture resolution, superko, turns.
//!
//! A [`Game`] is a strictly sequential state machine owning one board,
//! the full position history, and the turn state. Each command is
//! validated, applied, and committed (or rolled back) in full before
//! the next is accepted; a rejected command leaves no trace.
//!
//! A play proceeds in the prescribed order: put the stone down, remove
//! every adjacent opponent group without liberties, then remove the
//! played stone's own group if it is still without liberties, and only
//! then test the resulting position against the history. Capturing the
//! enemy relieves liberties for the placed stone, so a move that looks
//! suicidal can be legal when it captures first.

use crate::board::{Board, Color};
use crate::coord::Coord;
use crate::error::GameError;
use crate::group::group_and_liberties;
use crate::score::{self, Score};

/// Whose move it is, or whether the game has ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TurnState {
    BlackToMove,
    WhiteToMove,
    GameOver,
}

/// Result of a successful placement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Black stones on the board after the move.
    pub black_stones: usize,
    /// White stones on the board after the move.
    pub white_stones: usize,
    /// Opponent stones removed by this move.
    pub captured: usize,
}

type Snapshot = Vec<Option<Color>>;

/// One game of Go, from the empty board to two consecutive passes.
pub struct Game {
    board: Board,
    /// Every position that has occurred, oldest first, seeded with the
    /// empty board. Read only by the repetition check.
    history: Vec<Snapshot>,
    state: TurnState,
    consecutive_passes: u32,
    moves_played: usize,
}

impl Game {
    /// Start a game on an empty `size` x `size` board, black to move.
    pub fn new(size: usize) -> Result<Game, GameError> {
        let board = Board::new(size)?;
        let history = vec![board.snapshot()];
        Ok(Game {
            board,
            history,
            state: TurnState::BlackToMove,
            consecutive_passes: 0,
            moves_played: 0,
        })
    }

    /// Read-only view of the position, for rendering and scoring.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> TurnState {
        self.state
    }

    /// The player to move, or `None` once the game is over.
    pub fn current_player(&self) -> Option<Color> {
        match self.state {
            TurnState::BlackToMove => Some(Color::Black),
            TurnState::WhiteToMove => Some(Color::White),
            TurnState::GameOver => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.state == TurnState::GameOver
    }

    /// Accepted moves so far, passes included.
    pub fn move_number(&self) -> usize {
        self.moves_played
    }

    fn check_turn(&self, player: Color) -> Result<(), GameError> {
        match self.state {
            TurnState::GameOver => Err(GameError::GameAlreadyOver),
            TurnState::BlackToMove if player == Color::Black => Ok(()),
            TurnState::WhiteToMove if player == Color::White => Ok(()),
            _ => Err(GameError::NotPlayersTurn(player)),
        }
    }

    fn advance_turn(&mut self) {
        self.state = match self.state {
            TurnState::BlackToMove => TurnState::WhiteToMove,
            TurnState::WhiteToMove => TurnState::BlackToMove,
            TurnState::GameOver => TurnState::GameOver,
        };
    }

    /// Play a stone for `player` at `coord`.
    ///
    /// # Errors
    /// - [`GameError::GameAlreadyOver`] after two consecutive passes
    /// - [`GameError::NotPlayersTurn`] when `player` is not to move
    /// - [`GameError::InvalidCoordinate`] off the board
    /// - [`GameError::OccupiedPosition`] on a stone
    /// - [`GameError::PositionRepeated`] when the post-capture position
    ///   has occurred before; the board is rolled back untouched
    pub fn place(&mut self, coord: Coord, player: Color) -> Result<MoveOutcome, GameError> {
        self.check_turn(player)?;
        if self.board.get(coord)?.is_some() {
            return Err(GameError::OccupiedPosition(coord));
        }

        let saved = self.board.snapshot();
        self.board.set(coord, Some(player))?;

        // Capture: every adjacent opponent group left without a liberty
        // comes off, all of them, before the played stone is examined.
        let mut captured = 0;
        for n in self.board.neighbors(coord) {
            if self.board.at(n) != Some(player.opponent()) {
                continue;
            }
            let group = group_and_liberties(&self.board, n)?;
            if group.liberties.is_empty() {
                captured += group.stones.len();
                for &stone in &group.stones {
                    self.board.set(stone, None)?;
                }
            }
        }

        // Self-capture: if nothing relieved the played stone's group, it
        // is removed in turn. No separate suicide gate; the single-stone
        // case restores the prior position and fails the check below.
        let own = group_and_liberties(&self.board, coord)?;
        if own.liberties.is_empty() {
            for &stone in &own.stones {
                self.board.set(stone, None)?;
            }
        }

        // Superko: the resulting position must never have occurred.
        let snapshot = self.board.snapshot();
        if self.history.contains(&snapshot) {
            self.board.restore(saved);
            return Err(GameError::PositionRepeated);
        }
        self.history.push(snapshot);

        self.consecutive_passes = 0;
        self.moves_played += 1;
        self.advance_turn();

        let (black_stones, white_stones) = self.board.stone_counts();
        Ok(MoveOutcome {
            black_stones,
            white_stones,
            captured,
        })
    }

    /// Pass for `player`. The second consecutive pass ends the game.
    pub fn pass(&mut self, player: Color) -> Result<TurnState, GameError> {
        self.check_turn(player)?;
        self.consecutive_passes += 1;
        self.moves_played += 1;
        if self.consecutive_passes >= 2 {
            self.state = TurnState::GameOver;
        } else {
            self.advance_turn();
        }
        Ok(self.state)
    }

    /// Area score of the current position. Pure read; callable at any
    /// time, not only after the game ends.
    pub fn score(&self) -> Score {
        score::score(&self.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(game: &mut Game, text: &str, player: Color) -> Result<MoveOutcome, GameError> {
        game.place(Coord::parse(text).unwrap(), player)
    }

    #[test]
    fn test_new_game_black_to_move() {
        let game = Game::new(9).unwrap();
        assert_eq!(game.turn(), TurnState::BlackToMove);
        assert_eq!(game.current_player(), Some(Color::Black));
        assert!(!game.is_over());
        assert_eq!(game.move_number(), 0);
    }

    #[test]
    fn test_place_toggles_turn_and_counts() {
        let mut game = Game::new(9).unwrap();
        let outcome = place(&mut game, "D4", Color::Black).unwrap();
        assert_eq!(outcome.black_stones, 1);
        assert_eq!(outcome.white_stones, 0);
        assert_eq!(outcome.captured, 0);
        assert_eq!(game.turn(), TurnState::WhiteToMove);

        let outcome = place(&mut game, "E5", Color::White).unwrap();
        assert_eq!(outcome.black_stones, 1);
        assert_eq!(outcome.white_stones, 1);
        assert_eq!(game.turn(), TurnState::BlackToMove);
    }

    #[test]
    fn test_wrong_player_rejected_without_mutation() {
        let mut game = Game::new(9).unwrap();
        let before = game.board().clone();
        assert_eq!(
            place(&mut game, "D4", Color::White),
            Err(GameError::NotPlayersTurn(Color::White))
        );
        assert_eq!(game.board(), &before);
        assert_eq!(game.turn(), TurnState::BlackToMove);
        assert_eq!(
            game.pass(Color::White),
            Err(GameError::NotPlayersTurn(Color::White))
        );
    }

    #[test]
    fn test_occupied_rejected_without_mutation() {
        let mut game = Game::new(9).unwrap();
        place(&mut game, "D4", Color::Black).unwrap();
        let before = game.board().clone();
        assert_eq!(
            place(&mut game, "D4", Color::White),
            Err(GameError::OccupiedPosition(Coord::new(4, 4)))
        );
        assert_eq!(game.board(), &before);
        assert_eq!(game.turn(), TurnState::WhiteToMove);
    }

    #[test]
    fn test_invalid_coordinate_rejected() {
        let mut game = Game::new(4).unwrap();
        assert_eq!(
            place(&mut game, "E1", Color::Black),
            Err(GameError::InvalidCoordinate("E1".to_string()))
        );
        assert_eq!(game.turn(), TurnState::BlackToMove);
    }

    #[test]
    fn test_two_passes_end_the_game() {
        let mut game = Game::new(4).unwrap();
        assert_eq!(game.pass(Color::Black), Ok(TurnState::WhiteToMove));
        assert_eq!(game.pass(Color::White), Ok(TurnState::GameOver));
        assert!(game.is_over());
        assert_eq!(game.current_player(), None);
        assert_eq!(
            place(&mut game, "A1", Color::Black),
            Err(GameError::GameAlreadyOver)
        );
        assert_eq!(game.pass(Color::Black), Err(GameError::GameAlreadyOver));
    }

    #[test]
    fn test_placement_resets_pass_counter() {
        let mut game = Game::new(4).unwrap();
        game.pass(Color::Black).unwrap();
        place(&mut game, "B2", Color::White).unwrap();
        game.pass(Color::Black).unwrap();
        assert!(!game.is_over(), "non-consecutive passes must not end the game");
        assert_eq!(game.pass(Color::White), Ok(TurnState::GameOver));
    }
}
