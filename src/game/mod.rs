//! Core connect-N game logic: board storage, winning-line enumeration, player
//! types, and the terminal outcome of a game.

mod board;
pub mod lines;
mod player;
mod state;

pub use board::{Board, Cell, DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_RUN_LENGTH};
pub use lines::{Coord, Direction, WinningLine};
pub use player::Player;
pub use state::GameOutcome;
