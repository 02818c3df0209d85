//! Line-pattern detection: the scanning core of the engine.
//!
//! Every judgement the engine makes reduces to counting maximal runs of
//! one color, bucketed by how bounded their two ends are:
//!
//! - [`classify_run`] decides whether a run is open, semi-open, or
//!   closed, from its end coordinate, length, and direction.
//! - [`scan_line`] walks one full line (row, column, or diagonal) and
//!   tallies runs of an exact target length.
//! - [`detect_runs`] aggregates those tallies over every line of the
//!   board, each line scanned exactly once.
//!
//! A single scan parametrized over a [`Direction`] replaces the four
//! hand-coded direction cases of the Python original; scan order and
//! edge semantics are unchanged.

use crate::board::{Board, Color};
use crate::constants::N;

/// A forward scan direction, as a (row, col) step.
///
/// Only the forward half of each axis is scanned; the reverse direction
/// is covered by the symmetry of the boundedness check.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Vertical, top to bottom: step (1, 0).
    Down,
    /// Horizontal, left to right: step (0, 1).
    Right,
    /// Diagonal toward the bottom-right: step (1, 1).
    DownRight,
    /// Diagonal toward the bottom-left: step (1, -1).
    DownLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Down,
        Direction::Right,
        Direction::DownRight,
        Direction::DownLeft,
    ];

    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Down => (1, 0),
            Direction::Right => (0, 1),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (1, -1),
        }
    }
}

/// How many of a run's two extension slots are blocked (0 / 1 / 2).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Openness {
    Open,
    SemiOpen,
    Closed,
}

/// Tallies of runs by openness, as produced by [`scan_line`] and
/// [`detect_runs`]. Each physical run lands in exactly one bucket.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RunCounts {
    pub open: u32,
    pub semi_open: u32,
    pub closed: u32,
}

impl RunCounts {
    pub fn total(self) -> u32 {
        self.open + self.semi_open + self.closed
    }

    fn record(&mut self, openness: Openness) {
        match openness {
            Openness::Open => self.open += 1,
            Openness::SemiOpen => self.semi_open += 1,
            Openness::Closed => self.closed += 1,
        }
    }
}

impl std::ops::AddAssign for RunCounts {
    fn add_assign(&mut self, other: Self) {
        self.open += other.open;
        self.semi_open += other.semi_open;
        self.closed += other.closed;
    }
}

fn in_bounds(row: isize, col: isize) -> bool {
    (0..N as isize).contains(&row) && (0..N as isize).contains(&col)
}

/// A run's extension slot is blocked when it falls off the board or
/// holds a stone of either color. A diagonal slot past a corner leaves
/// the board on both axes at once but still counts as one blocked slot.
fn slot_blocked(board: &Board, row: isize, col: isize) -> bool {
    if !in_bounds(row, col) {
        return true;
    }
    board.get(row as usize, col as usize).is_some()
}

/// Classify the run of `length` cells ending at (end_row, end_col) in
/// direction `dir` as open, semi-open, or closed.
///
/// The start coordinate is derived from the end; both extension slots
/// (one step before the start, one step past the end) are tested without
/// ever dereferencing an off-board cell.
pub fn classify_run(
    board: &Board,
    end_row: usize,
    end_col: usize,
    length: usize,
    dir: Direction,
) -> Openness {
    let (d_row, d_col) = dir.delta();
    let span = length as isize - 1;
    let start_row = end_row as isize - d_row * span;
    let start_col = end_col as isize - d_col * span;

    let mut blocked = 0;
    if slot_blocked(board, start_row - d_row, start_col - d_col) {
        blocked += 1;
    }
    if slot_blocked(board, end_row as isize + d_row, end_col as isize + d_col) {
        blocked += 1;
    }
    match blocked {
        0 => Openness::Open,
        1 => Openness::SemiOpen,
        _ => Openness::Closed,
    }
}

/// Scan one full line for maximal runs of `color` with exactly `length`
/// stones, starting at (start_row, start_col) and stepping by `dir`
/// until the walk leaves the board.
///
/// Runs longer or shorter than `length` are skipped, and the scan
/// resumes past the whole measured run, so overlapping sub-runs of one
/// maximal run are never re-counted. A run cut short by the board edge
/// ends there exactly as if an opposing stone stood beyond it.
pub fn scan_line(
    board: &Board,
    color: Color,
    length: usize,
    start_row: usize,
    start_col: usize,
    dir: Direction,
) -> RunCounts {
    let (d_row, d_col) = dir.delta();
    let mut counts = RunCounts::default();
    let mut row = start_row as isize;
    let mut col = start_col as isize;

    while in_bounds(row, col) {
        if board.get(row as usize, col as usize) == Some(color) {
            // Measure the maximal run starting here. The previous cell
            // along the line is known not to match, so this is a true
            // run start.
            let mut run = 0;
            let (mut r, mut c) = (row, col);
            while in_bounds(r, c) && board.get(r as usize, c as usize) == Some(color) {
                run += 1;
                r += d_row;
                c += d_col;
            }
            // (r, c) is one step past the run end.
            if run == length {
                let end_row = (r - d_row) as usize;
                let end_col = (c - d_col) as usize;
                counts.record(classify_run(board, end_row, end_col, length, dir));
            }
            row = r - d_row;
            col = c - d_col;
        }
        row += d_row;
        col += d_col;
    }
    counts
}

/// Tally runs of `color` with exactly `length` stones over the whole
/// board: every row, every column, and every diagonal of both
/// orientations, each line scanned once.
pub fn detect_runs(board: &Board, color: Color, length: usize) -> RunCounts {
    let mut totals = RunCounts::default();
    for i in 0..N {
        totals += scan_line(board, color, length, 0, i, Direction::Down);
        totals += scan_line(board, color, length, i, 0, Direction::Right);
        totals += scan_line(board, color, length, 0, i, Direction::DownRight);
        totals += scan_line(board, color, length, 0, i, Direction::DownLeft);
    }
    for i in 1..N {
        totals += scan_line(board, color, length, i, 0, Direction::DownRight);
        totals += scan_line(board, color, length, i, N - 1, Direction::DownLeft);
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    // The classification battery from the Python original's test suite:
    // a lone black stone at (0, 0), then runs probed at assorted ends,
    // lengths, and directions.
    #[test]
    fn test_classify_battery() {
        let mut board = Board::new();
        board.put_run(0, 0, 1, 1, 1, Color::Black);

        let cases: &[(usize, usize, usize, Direction, Openness)] = &[
            (7, 3, 4, Direction::DownRight, Openness::Closed),
            (7, 0, 5, Direction::Down, Openness::SemiOpen),
            (7, 7, 8, Direction::DownRight, Openness::Closed),
            (6, 4, 3, Direction::DownRight, Openness::Open),
            (2, 5, 3, Direction::DownLeft, Openness::SemiOpen),
            (0, 0, 1, Direction::DownRight, Openness::SemiOpen),
            (7, 0, 1, Direction::Down, Openness::SemiOpen),
            (7, 0, 3, Direction::DownLeft, Openness::SemiOpen),
            (3, 4, 4, Direction::DownRight, Openness::SemiOpen),
            (4, 3, 5, Direction::DownLeft, Openness::SemiOpen),
            (0, 7, 5, Direction::Right, Openness::SemiOpen),
        ];
        for &(end_row, end_col, length, dir, expected) in cases {
            assert_eq!(
                classify_run(&board, end_row, end_col, length, dir),
                expected,
                "run ending at ({end_row}, {end_col}) length {length} along {dir:?}"
            );
        }
    }

    #[test]
    fn test_corner_diagonal_blocks_once() {
        // A single stone at the corner, probed along the diagonal: the
        // slot before the start leaves the board on both axes at once,
        // which must count as one blocked end, not two.
        let mut board = Board::new();
        board.play(0, 0, Color::White).unwrap();
        assert_eq!(
            classify_run(&board, 0, 0, 1, Direction::DownRight),
            Openness::SemiOpen
        );
    }

    #[test]
    fn test_empty_lines_report_nothing() {
        let board = Board::new();
        for length in 1..=5 {
            for dir in Direction::ALL {
                let counts = scan_line(&board, Color::Black, length, 0, 0, dir);
                assert_eq!(counts, RunCounts::default());
            }
        }
    }

    #[test]
    fn test_scan_counts_exact_length_only() {
        // A horizontal white run of 3: found at length 3, invisible at
        // lengths 2 and 4.
        let mut board = Board::new();
        board.put_run(2, 1, 0, 1, 3, Color::White);
        let found = scan_line(&board, Color::White, 3, 2, 0, Direction::Right);
        assert_eq!(found.open, 1);
        assert_eq!(found.total(), 1);
        for probe in [2, 4] {
            let missed = scan_line(&board, Color::White, probe, 2, 0, Direction::Right);
            assert_eq!(missed.total(), 0, "length {probe} must not match a run of 3");
        }
    }

    #[test]
    fn test_scan_skips_past_whole_runs() {
        // Two separate runs of 2 in one row, split by a gap: both are
        // counted, and neither run contributes twice.
        let mut board = Board::new();
        board.put_run(5, 0, 0, 1, 2, Color::Black);
        board.put_run(5, 4, 0, 1, 2, Color::Black);
        let counts = scan_line(&board, Color::Black, 2, 5, 0, Direction::Right);
        assert_eq!(counts.total(), 2);
        assert_eq!(counts.semi_open, 1); // the run touching the left edge
        assert_eq!(counts.open, 1);
    }

    #[test]
    fn test_edge_cutoff_matches_stone_cutoff() {
        // A vertical run of 5 ending on the bottom edge, and the same
        // run capped by an opposing stone instead: both are semi-open.
        let mut at_edge = Board::new();
        at_edge.put_run(3, 2, 1, 0, 5, Color::White);
        assert_eq!(
            scan_line(&at_edge, Color::White, 5, 0, 2, Direction::Down).semi_open,
            1
        );

        let mut capped = Board::new();
        capped.put_run(2, 2, 1, 0, 5, Color::White);
        capped.play(7, 2, Color::Black).unwrap();
        assert_eq!(
            scan_line(&capped, Color::White, 5, 0, 2, Direction::Down).semi_open,
            1
        );
    }

    #[test]
    fn test_detect_covers_all_orientations() {
        // One run of 3 per direction, placed far apart.
        let mut board = Board::new();
        board.put_run(1, 1, 0, 1, 3, Color::Black); // horizontal
        board.put_run(3, 6, 1, 0, 3, Color::Black); // vertical
        board.put_run(5, 0, 1, 1, 3, Color::Black); // down-right
        board.put_run(3, 3, 1, -1, 3, Color::Black); // down-left
        let counts = detect_runs(&board, Color::Black, 3);
        assert_eq!(counts.total(), 4);
    }
}
