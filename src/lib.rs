//! Goban: a rules engine for the game of Go.
//!
//! The crate tracks board state, validates and applies moves, resolves
//! captures, enforces positional superko, and scores positions by area.
//! Rendering beyond plain text, session management, and transport are
//! left to the caller; [`cli`] is a small console front end built on
//! the same public surface.
//!
//! ## Modules
//!
//! - [`board`] - the grid: intersection states, bounds-checked access
//! - [`coord`] - coordinates and their `"A1"` text form
//! - [`group`] - connectivity: groups, liberties, empty regions
//! - [`game`] - move validation, captures, superko, turn order
//! - [`score`] - area scoring
//! - [`error`] - command rejection reasons
//! - [`cli`] - interactive console loop
//!
//! ## Example
//!
//! ```
//! use goban::board::Color;
//! use goban::coord::Coord;
//! use goban::game::Game;
//!
//! let mut game = Game::new(9).unwrap();
//! let d4 = Coord::parse("D4").unwrap();
//!
//! let outcome = game.place(d4, Color::Black).unwrap();
//! assert_eq!(outcome.black_stones, 1);
//! assert_eq!(game.current_player(), Some(Color::White));
//! ```

pub mod board;
pub mod cli;
pub mod coord;
pub mod error;
pub mod game;
pub mod group;
pub mod score;
