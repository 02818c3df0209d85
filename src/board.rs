//! Board state: an 8x8 grid of cells, each empty or holding a stone.
//!
//! The board is pure storage. It is owned by the caller and passed
//! explicitly into every scanning and search routine; nothing in this
//! crate retains a reference to it across calls.

use std::fmt;

use crate::constants::N;

/// A stone color. The computer plays Black, the human plays White.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    fn as_char(self) -> char {
        match self {
            Color::Black => 'b',
            Color::White => 'w',
        }
    }
}

/// Why a move could not be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Coordinate outside `[0, N)` on either axis.
    OutOfRange,
    /// Target cell already holds a stone.
    Occupied,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfRange => write!(f, "coordinates are out of range"),
            MoveError::Occupied => write!(f, "this space is occupied"),
        }
    }
}

impl std::error::Error for MoveError {}

/// A fixed 8x8 Gomoku board.
///
/// Cells are stored row-major in a 1D array; `None` is an empty cell.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Color>; N * N],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self {
            cells: [None; N * N],
        }
    }

    fn idx(row: usize, col: usize) -> usize {
        row * N + col
    }

    /// Get the cell at (row, col). Out-of-range coordinates read as empty.
    pub fn get(&self, row: usize, col: usize) -> Option<Color> {
        if row >= N || col >= N {
            return None;
        }
        self.cells[Self::idx(row, col)]
    }

    /// Place a stone, validating range and occupancy.
    pub fn play(&mut self, row: usize, col: usize, color: Color) -> Result<(), MoveError> {
        if row >= N || col >= N {
            return Err(MoveError::OutOfRange);
        }
        let i = Self::idx(row, col);
        if self.cells[i].is_some() {
            return Err(MoveError::Occupied);
        }
        self.cells[i] = Some(color);
        Ok(())
    }

    /// Overwrite a cell without validation. Used by the move search to
    /// place and revert candidate stones; callers guarantee (row, col)
    /// is in range.
    pub(crate) fn set_cell(&mut self, row: usize, col: usize, stone: Option<Color>) {
        self.cells[Self::idx(row, col)] = stone;
    }

    /// True if no stone has been placed yet.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }

    /// True if every cell holds a stone.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Place a run of `length` stones starting at (row, col), stepping by
    /// (d_row, d_col). Stops silently at the board edge. For staging test
    /// and demo positions.
    pub fn put_run(
        &mut self,
        row: usize,
        col: usize,
        d_row: isize,
        d_col: isize,
        length: usize,
        color: Color,
    ) {
        let mut r = row as isize;
        let mut c = col as isize;
        for _ in 0..length {
            if r < 0 || r >= N as isize || c < 0 || c >= N as isize {
                break;
            }
            self.cells[Self::idx(r as usize, c as usize)] = Some(color);
            r += d_row;
            c += d_col;
        }
    }

    fn cell_char(&self, row: usize, col: usize) -> char {
        match self.get(row, col) {
            Some(color) => color.as_char(),
            None => ' ',
        }
    }
}

/// Renders the board in the classic bordered text format:
/// a digit-labelled header row, one labelled row per board row with `|`
/// separators, and a row of `*` as the footer.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "*")?;
        for col in 0..N - 1 {
            write!(f, "{}|", col % 10)?;
        }
        writeln!(f, "{}*", (N - 1) % 10)?;
        for row in 0..N {
            write!(f, "{}", row % 10)?;
            for col in 0..N - 1 {
                write!(f, "{}|", self.cell_char(row, col))?;
            }
            writeln!(f, "{}*", self.cell_char(row, N - 1))?;
        }
        write!(f, "{}", "*".repeat(N * 2 + 1))
    }
}
