use std::fmt;

use tracing::{debug, info};

use super::lines::{generate_lines, WinningLine};
use super::{GameOutcome, Player};
use crate::config::BoardConfig;
use crate::error::{ConfigError, MoveError};

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLUMNS: usize = 7;
pub const DEFAULT_RUN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    One,
    Two,
}

impl Cell {
    /// Console symbol: `.` for empty, `X` for player 1, `O` for player 2.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::One => 'X',
            Cell::Two => 'O',
        }
    }

    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::One => Some(Player::One),
            Cell::Two => Some(Player::Two),
        }
    }
}

/// A connect-N board: the grid, its precomputed winning lines, whose turn it
/// is, and the outcome once the game has ended.
///
/// Row 0 is the top of the board; pieces fall towards row `rows - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    run_length: usize,
    cells: Vec<Cell>,
    lines: Vec<WinningLine>,
    current_player: Player,
    outcome: Option<GameOutcome>,
    move_count: usize,
}

impl Board {
    /// Create an empty board.
    ///
    /// Fails if either dimension is smaller than `run_length`, if
    /// `run_length` is zero, or if the board is larger than
    /// [`MAX_CELLS`](crate::config::MAX_CELLS).
    pub fn new(rows: usize, columns: usize, run_length: usize) -> Result<Self, ConfigError> {
        BoardConfig {
            rows,
            columns,
            run_length,
        }
        .validate()?;

        let lines = generate_lines(rows, columns, run_length);
        debug!(rows, columns, run_length, lines = lines.len(), "board created");

        Ok(Board {
            rows,
            columns,
            run_length,
            cells: vec![Cell::Empty; rows * columns],
            lines,
            current_player: Player::One,
            outcome: None,
            move_count: 0,
        })
    }

    /// Standard 6x7 board with a run length of 4.
    pub fn classic() -> Self {
        Board::new(DEFAULT_ROWS, DEFAULT_COLUMNS, DEFAULT_RUN_LENGTH)
            .expect("classic dimensions are valid")
    }

    pub fn from_config(config: &BoardConfig) -> Result<Self, ConfigError> {
        Board::new(config.rows, config.columns, config.run_length)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn run_length(&self) -> usize {
        self.run_length
    }

    /// Get the cell at a specific position, or `None` if it is off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.columns).then(|| row * self.columns + col)
    }

    pub fn winning_lines(&self) -> &[WinningLine] {
        &self.lines
    }

    /// Player whose move is expected next.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn winner(&self) -> Option<Player> {
        match self.outcome {
            Some(GameOutcome::Winner(player)) => Some(player),
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Number of pieces placed so far.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        self.get(0, col) != Some(Cell::Empty)
    }

    /// Columns that can still take a piece, in ascending order.
    ///
    /// Empty once the game has finished.
    pub fn available_moves(&self) -> Vec<usize> {
        if self.is_finished() {
            return Vec::new();
        }
        (0..self.columns)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Drop `player`'s piece into `column` and return the row it landed on.
    ///
    /// The piece settles on the lowest empty cell of the column. On error the
    /// board is left untouched.
    pub fn apply_move(&mut self, column: usize, player: Player) -> Result<usize, MoveError> {
        if self.is_finished() {
            return Err(MoveError::GameOver);
        }
        if column >= self.columns {
            return Err(MoveError::InvalidColumn {
                column,
                columns: self.columns,
            });
        }
        if self.is_column_full(column) {
            return Err(MoveError::ColumnFull(column));
        }
        if player != self.current_player {
            return Err(MoveError::WrongPlayer {
                expected: self.current_player,
                got: player,
            });
        }

        let row = (0..self.rows)
            .rev()
            .find(|&row| self.get(row, column) == Some(Cell::Empty))
            .ok_or(MoveError::ColumnFull(column))?;
        let idx = row * self.columns + column;
        self.cells[idx] = player.to_cell();
        self.move_count += 1;
        self.current_player = player.other();
        debug!(player = player.id(), column, row, "piece dropped");

        if let Some(winner) = self.check_winner() {
            info!(winner = winner.id(), moves = self.move_count, "game won");
        } else if (0..self.columns).all(|col| self.is_column_full(col)) {
            self.outcome = Some(GameOutcome::Draw);
            info!(moves = self.move_count, "game drawn");
        }

        Ok(row)
    }

    /// Scan the winning lines in generation order and record the first
    /// complete one. A winner, once recorded, is never replaced.
    pub fn check_winner(&mut self) -> Option<Player> {
        if self.outcome.is_some() {
            return self.winner();
        }
        let winner = self.lines.iter().find_map(|line| self.line_owner(line));
        if let Some(player) = winner {
            self.outcome = Some(GameOutcome::Winner(player));
        }
        winner
    }

    /// The player holding every cell of `line`, if any.
    pub fn line_owner(&self, line: &WinningLine) -> Option<Player> {
        let mut cells = line.cells().iter().map(|&(r, c)| self.get(r, c));
        let first = cells.next()??.player()?;
        cells
            .all(|cell| cell == Some(first.to_cell()))
            .then_some(first)
    }

    /// Every winning line currently held by a single player.
    pub fn completed_lines(&self) -> impl Iterator<Item = (&WinningLine, Player)> + '_ {
        self.lines
            .iter()
            .filter_map(|line| self.line_owner(line).map(|p| (line, p)))
    }

    /// Iterate over the rows from top to bottom.
    pub fn grid_rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.columns)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::classic()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid_rows() {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
