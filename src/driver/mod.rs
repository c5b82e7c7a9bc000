//! Console game loop: prompts each player for a column over any line-based
//! input and writes the board and messages to any output sink.

mod input;
mod render;

pub use input::parse_move;
pub use render::render_board;

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::error::{ConfigError, DriverError};
use crate::game::{Board, GameOutcome};

pub struct GameDriver<R, W> {
    board: Board,
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> GameDriver<R, W> {
    pub fn new(board: Board, input: R, output: W) -> Self {
        GameDriver {
            board,
            input,
            output,
            color: false,
        }
    }

    /// Build a driver with a fresh board sized from `config`.
    pub fn from_config(config: &AppConfig, input: R, output: W) -> Result<Self, ConfigError> {
        let board = Board::from_config(&config.board)?;
        Ok(Self::new(board, input, output).with_color(config.display.color))
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Play until the board reports an outcome, then print the final board
    /// and the result.
    pub fn run(&mut self) -> Result<GameOutcome, DriverError> {
        loop {
            self.write_board()?;
            if let Some(outcome) = self.board.outcome() {
                writeln!(self.output, "{outcome}")?;
                self.output.flush()?;
                return Ok(outcome);
            }
            self.play_turn()?;
        }
    }

    /// Prompt the current player and apply their move. Bad input leaves the
    /// board as it was and the same player is asked again on the next turn.
    fn play_turn(&mut self) -> Result<(), DriverError> {
        let player = self.board.current_player();
        let available = self.board.available_moves();

        writeln!(
            self.output,
            "Player {player}, input column number out of {available:?}:"
        )?;
        self.output.flush()?;

        let line = self.read_line()?;
        let column = match parse_move(&line, &available) {
            Ok(column) => column,
            Err(err) => {
                debug!(%err, "rejected input");
                writeln!(self.output, "Column number should be one of {available:?}")?;
                return Ok(());
            }
        };

        let applied = self.board.apply_move(column, player);
        debug_assert!(applied.is_ok(), "validated move refused: {applied:?}");
        if let Err(err) = applied {
            warn!(%err, column, "engine refused move");
        }
        Ok(())
    }

    /// Read one raw line. Bytes that are not UTF-8 are replaced rather than
    /// rejected so that `parse_move` reports them like any other bad input.
    fn read_line(&mut self) -> Result<String, DriverError> {
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Err(DriverError::InputClosed);
        }
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn write_board(&mut self) -> Result<(), DriverError> {
        // Blank line after the grid.
        writeln!(self.output, "{}", render_board(&self.board, self.color))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;
    use std::io::Cursor;

    fn run_script(board: Board, script: &str) -> (Result<GameOutcome, DriverError>, String) {
        let mut driver = GameDriver::new(board, Cursor::new(script.to_string()), Vec::new());
        let result = driver.run();
        let output = String::from_utf8(driver.into_output()).unwrap();
        (result, output)
    }

    #[test]
    fn test_player_one_wins_along_bottom_row() {
        let (result, output) = run_script(Board::classic(), "0\n0\n1\n1\n2\n2\n3\n");
        assert_eq!(result.unwrap(), GameOutcome::Winner(Player::One));
        assert!(output.ends_with("X X X X . . .\n\nPlayer 1 won!\n"));
        assert!(output.starts_with(
            ". . . . . . .\n. . . . . . .\n. . . . . . .\n. . . . . . .\n. . . . . . .\n. . . . . . .\n\n\
             Player 1, input column number out of [0, 1, 2, 3, 4, 5, 6]:\n"
        ));
        assert!(output.contains("Player 2, input column number out of [0, 1, 2, 3, 4, 5, 6]:\n"));
    }

    #[test]
    fn test_bad_input_reprompts_same_player() {
        let script = "abc\n9\n\n0\n6\n0\n6\n0\n6\n0\n";
        let (result, output) = run_script(Board::classic(), script);
        assert_eq!(result.unwrap(), GameOutcome::Winner(Player::One));
        assert_eq!(
            output
                .matches("Column number should be one of [0, 1, 2, 3, 4, 5, 6]\n")
                .count(),
            3
        );
        assert_eq!(
            output.matches("Player 1, input column number").count(),
            3 + 4
        );
    }

    #[test]
    fn test_full_column_is_not_offered() {
        let board = Board::new(4, 4, 4).unwrap();
        let script = "0\n0\n0\n0\n0\n1\n";
        let mut driver = GameDriver::new(board, Cursor::new(script), Vec::new());
        let err = driver.run().unwrap_err();
        assert!(matches!(err, DriverError::InputClosed));
        assert_eq!(driver.board().move_count(), 5);

        let output = String::from_utf8(driver.into_output()).unwrap();
        assert!(output.contains("Player 1, input column number out of [1, 2, 3]:\n"));
        assert!(output.contains("Column number should be one of [1, 2, 3]\n"));
        assert!(!output.contains("Illegal move"));
    }

    #[test]
    fn test_refused_column_leaves_board_untouched() {
        let board = Board::new(4, 4, 4).unwrap();
        let script = "0\n0\n0\n0\n0\n";
        let mut driver = GameDriver::new(board, Cursor::new(script), Vec::new());
        assert!(matches!(driver.run(), Err(DriverError::InputClosed)));

        let mut expected = Board::new(4, 4, 4).unwrap();
        for player in [Player::One, Player::Two, Player::One, Player::Two] {
            expected.apply_move(0, player).unwrap();
        }
        assert_eq!(driver.board(), &expected);
        assert_eq!(driver.board().current_player(), Player::One);
    }

    #[test]
    fn test_non_utf8_line_is_reprompted() {
        let script = &b"\xff\xfe\n0\n6\n0\n6\n0\n6\n0\n"[..];
        let mut driver = GameDriver::new(Board::classic(), Cursor::new(script), Vec::new());
        assert_eq!(driver.run().unwrap(), GameOutcome::Winner(Player::One));

        let output = String::from_utf8(driver.into_output()).unwrap();
        assert_eq!(
            output
                .matches("Column number should be one of [0, 1, 2, 3, 4, 5, 6]\n")
                .count(),
            1
        );
    }

    #[test]
    fn test_draw_is_reported() {
        let script = "2\n3\n2\n1\n2\n2\n1\n3\n1\n0\n0\n0\n3\n1\n0\n3\n";
        let (result, output) = run_script(Board::new(4, 4, 4).unwrap(), script);
        assert_eq!(result.unwrap(), GameOutcome::Draw);
        assert!(output.ends_with("O O X O\n\nDraw! No moves remain.\n"));
    }

    #[test]
    fn test_input_closed_mid_game() {
        let (result, _) = run_script(Board::classic(), "3\n");
        assert!(matches!(result, Err(DriverError::InputClosed)));
    }

    #[test]
    fn test_from_config_applies_dimensions() {
        let mut config = AppConfig::default();
        config.board.rows = 5;
        config.board.columns = 5;
        config.board.run_length = 3;
        let driver = GameDriver::from_config(&config, Cursor::new(""), Vec::new()).unwrap();
        assert_eq!(driver.board().rows(), 5);
        assert_eq!(driver.board().run_length(), 3);

        config.board.run_length = 6;
        assert!(GameDriver::from_config(&config, Cursor::new(""), Vec::new()).is_err());
    }
}
