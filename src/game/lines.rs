//! Winning-line enumeration.
//!
//! Every window of `n` consecutive cells that could complete a run is listed
//! once, up front, so that win detection is a plain scan over coordinates.

/// A `(row, column)` board coordinate. Row 0 is the top.
pub type Coord = (usize, usize);

/// The direction a winning line runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along one row.
    Horizontal,
    /// Top to bottom along one column.
    Vertical,
    /// Row and column both increase (`\`).
    Diagonal,
    /// Row decreases while column increases (`/`).
    AntiDiagonal,
}

/// One candidate run of `n` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningLine {
    direction: Direction,
    cells: Box<[Coord]>,
}

impl WinningLine {
    fn new(direction: Direction, start: Coord, n: usize) -> Self {
        let (row, col) = start;
        let cells = (0..n)
            .map(|i| match direction {
                Direction::Horizontal => (row, col + i),
                Direction::Vertical => (row + i, col),
                Direction::Diagonal => (row + i, col + i),
                Direction::AntiDiagonal => (row - i, col + i),
            })
            .collect();
        WinningLine { direction, cells }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Coordinates of the line in order from its starting cell.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }
}

/// Enumerate all winning lines for a `rows` x `columns` board and run length `n`.
///
/// Families come out in a fixed order: horizontal, vertical, diagonal,
/// anti-diagonal. Within a family, lines are ordered by starting row and then
/// starting column (horizontal) or by column and then row (vertical).
/// Returns an empty list if the board cannot hold a run of `n`.
pub fn generate_lines(rows: usize, columns: usize, n: usize) -> Vec<WinningLine> {
    if n == 0 || rows < n || columns < n {
        return Vec::new();
    }

    let mut lines = Vec::with_capacity(expected_line_count(rows, columns, n));

    for row in 0..rows {
        for col in 0..=columns - n {
            lines.push(WinningLine::new(Direction::Horizontal, (row, col), n));
        }
    }

    for col in 0..columns {
        for row in 0..=rows - n {
            lines.push(WinningLine::new(Direction::Vertical, (row, col), n));
        }
    }

    for row in 0..=rows - n {
        for col in 0..=columns - n {
            lines.push(WinningLine::new(Direction::Diagonal, (row, col), n));
        }
    }

    // Anti-diagonals start low and climb, so the start row needs n - 1 rows above it.
    for row in n - 1..rows {
        for col in 0..=columns - n {
            lines.push(WinningLine::new(Direction::AntiDiagonal, (row, col), n));
        }
    }

    lines
}

/// Closed-form number of lines `generate_lines` produces.
pub fn expected_line_count(rows: usize, columns: usize, n: usize) -> usize {
    if n == 0 || rows < n || columns < n {
        return 0;
    }
    let row_windows = rows - n + 1;
    let col_windows = columns - n + 1;
    let horizontal = rows.saturating_mul(col_windows);
    let vertical = columns.saturating_mul(row_windows);
    let diagonal = row_windows.saturating_mul(col_windows).saturating_mul(2);
    horizontal.saturating_add(vertical).saturating_add(diagonal)
}
