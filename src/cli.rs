//! Interactive console play.
//!
//! A minimal line-oriented loop for two players sharing one terminal.
//! This is the thin external layer around the engine: it parses
//! coordinate text, relays commands to the session, and prints the
//! board; every rule lives in [`crate::game`].
//!
//! ## Commands
//!
//! - a coordinate (e.g. `D4`) - place a stone for the player to move
//! - `pass` - pass the turn
//! - `score` - show the current area count
//! - `show` - reprint the board
//! - `quit` - abandon the game

use std::io::{self, BufRead, Write};

use crate::coord::Coord;
use crate::error::GameError;
use crate::game::Game;

/// Console driver for one game.
pub struct Console {
    game: Game,
}

impl Console {
    pub fn new(size: usize) -> Result<Console, GameError> {
        Ok(Console {
            game: Game::new(size)?,
        })
    }

    /// Run the command loop until the game ends, input runs out, or a
    /// player quits. Rule violations are printed and play continues.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let mut lines = stdin.lock().lines();

        writeln!(stdout, "{}", self.game.board())?;

        while let Some(player) = self.game.current_player() {
            write!(stdout, "{player}> ")?;
            stdout.flush()?;

            let Some(line) = lines.next() else {
                return Ok(());
            };
            let line = line?;
            let input = line.trim();
            if input.is_empty() || input.starts_with('#') {
                continue;
            }

            match input {
                "quit" => return Ok(()),
                "show" => writeln!(stdout, "{}", self.game.board())?,
                "score" => writeln!(stdout, "{}", self.game.score())?,
                "pass" => {
                    if let Err(e) = self.game.pass(player) {
                        writeln!(stdout, "{e}")?;
                    }
                }
                text => match Coord::parse(text).and_then(|c| self.game.place(c, player)) {
                    Ok(outcome) => {
                        writeln!(stdout, "{}", self.game.board())?;
                        if outcome.captured > 0 {
                            writeln!(stdout, "captured {}", outcome.captured)?;
                        }
                        writeln!(
                            stdout,
                            "black {} white {}",
                            outcome.black_stones, outcome.white_stones
                        )?;
                    }
                    Err(e) => writeln!(stdout, "{e}")?,
                },
            }
        }

        writeln!(stdout, "game over: {}", self.game.score())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_size() {
        assert!(Console::new(9).is_ok());
        assert!(matches!(
            Console::new(3).map(|_| ()),
            Err(GameError::SizeOutOfRange(3))
        ));
    }
}
