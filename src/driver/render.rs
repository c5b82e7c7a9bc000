use crossterm::style::Stylize;

use crate::game::{Board, Cell};

/// Render the board one row per line, cells separated by single spaces.
///
/// With `color` set, pieces are wrapped in terminal colour codes: X in red,
/// O in yellow. Without it the output is identical to `Board`'s `Display`.
pub fn render_board(board: &Board, color: bool) -> String {
    if !color {
        return board.to_string();
    }

    let mut out = String::new();
    for row in board.grid_rows() {
        let symbols: Vec<String> = row.iter().map(|&cell| styled_symbol(cell)).collect();
        out.push_str(&symbols.join(" "));
        out.push('\n');
    }
    out
}

fn styled_symbol(cell: Cell) -> String {
    let symbol = cell.symbol();
    match cell {
        Cell::Empty => symbol.to_string(),
        Cell::One => symbol.red().bold().to_string(),
        Cell::Two => symbol.yellow().bold().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    #[test]
    fn test_plain_render_matches_display() {
        let mut board = Board::classic();
        board.apply_move(2, Player::One).unwrap();
        assert_eq!(render_board(&board, false), board.to_string());
    }

    #[test]
    fn test_color_render_keeps_layout() {
        let mut board = Board::new(4, 4, 4).unwrap();
        board.apply_move(0, Player::One).unwrap();
        board.apply_move(1, Player::Two).unwrap();

        let rendered = render_board(&board, true);
        assert_eq!(rendered.lines().count(), 4);
        assert_eq!(rendered.lines().next().unwrap(), ". . . .");
        let bottom = rendered.lines().last().unwrap();
        assert!(bottom.contains('X'));
        assert!(bottom.contains('O'));
        assert!(bottom.ends_with(". ."));
    }
}
