//! # Connect N
//!
//! A two-player connect-N game (Connect Four with a configurable board size
//! and run length) played over a plain line-based console.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, winning lines, players, outcome
//! - [`driver`] — Console game loop over any `BufRead` / `Write` pair
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod driver;
pub mod error;
pub mod game;
