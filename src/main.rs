//! Goban: a Go rules engine with a console front end.
//!
//! ## Usage
//!
//! - `goban play` - interactive two-player game at the terminal
//! - `goban demo` - watch a random self-play game
//! - `goban` - same as `goban demo`

use anyhow::Result;
use clap::{Parser, Subcommand};

use goban::board::Color;
use goban::cli::Console;
use goban::coord::Coord;
use goban::error::GameError;
use goban::game::Game;

/// Goban: a rules engine for the game of Go
#[derive(Parser)]
#[command(name = "goban")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive two-player game
    Play {
        /// Board size (4 to 26)
        #[arg(short, long, default_value_t = 9)]
        size: usize,
    },
    /// Run a random self-play game and score it
    Demo {
        /// Board size (4 to 26)
        #[arg(short, long, default_value_t = 9)]
        size: usize,
        /// Stop after this many moves if the game has not ended
        #[arg(short, long, default_value_t = 120)]
        moves: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play { size }) => Console::new(size)?.run()?,
        Some(Commands::Demo { size, moves }) => run_demo(size, moves)?,
        None => run_demo(9, 120)?,
    }
    Ok(())
}

/// Drive the engine with uniformly random legal moves, then score.
fn run_demo(size: usize, max_moves: usize) -> Result<()> {
    let mut game = Game::new(size)?;

    while !game.is_over() && game.move_number() < max_moves {
        let Some(player) = game.current_player() else {
            break;
        };
        if !play_random(&mut game, player)? {
            game.pass(player)?;
            println!("{}. {player} passes", game.move_number());
        }
    }

    println!("{}", game.board());
    println!("result after {} moves: {}", game.move_number(), game.score());
    Ok(())
}

/// Try random empty points until one sticks. Returns false when no
/// placement is legal for `player`.
fn play_random(game: &mut Game, player: Color) -> Result<bool> {
    let mut pool: Vec<Coord> = game
        .board()
        .coords()
        .filter(|&c| matches!(game.board().get(c), Ok(None)))
        .collect();

    while !pool.is_empty() {
        let coord = pool.swap_remove(fastrand::usize(..pool.len()));
        match game.place(coord, player) {
            Ok(outcome) => {
                if outcome.captured > 0 {
                    println!(
                        "{}. {player} {coord} captures {}",
                        game.move_number(),
                        outcome.captured
                    );
                }
                return Ok(true);
            }
            // Repetition just disqualifies this point for now.
            Err(GameError::PositionRepeated) => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(false)
}
