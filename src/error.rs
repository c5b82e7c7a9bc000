use std::path::PathBuf;

use crate::game::Player;

/// Errors raised when a board or the application is configured with
/// unusable values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("board {rows}x{columns} is too small for a run length of {run_length}")]
    BoardTooSmall {
        rows: usize,
        columns: usize,
        run_length: usize,
    },

    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors raised by an illegal move. The board is never modified when one of
/// these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range (board has {columns} columns)")]
    InvalidColumn { column: usize, columns: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameOver,

    #[error("it is player {expected}'s turn, not player {got}'s")]
    WrongPlayer { expected: Player, got: Player },
}

/// Malformed console input. Recoverable: the driver re-prompts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("'{0}' is not a column number")]
    NotANumber(String),

    #[error("column {column} is not available (available: {available:?})")]
    Unavailable { column: usize, available: Vec<usize> },
}

/// Errors that end a console game early.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed before the game finished")]
    InputClosed,
}
