//! Position evaluation and terminal detection.
//!
//! [`evaluate`] scores a board from the computer's (Black's) point of
//! view, immediately after a hypothetical Black move. A five on the
//! board short-circuits to the `MAX_SCORE` sentinel; otherwise the
//! open/semi-open tallies for runs of length 2 through 4 are combined
//! with the weights from [`crate::constants`].
//!
//! [`game_status`] reuses the same whole-board scan at length 5 to
//! decide win/draw/continue after every move.

use std::fmt;
use std::fmt::Write as _;

use crate::board::{Board, Color};
use crate::constants::{
    MAX_SCORE, OPP_FOUR_WEIGHT, OPP_OPEN_THREE_WEIGHT, OPP_SEMI_THREE_WEIGHT,
    OWN_OPEN_FOUR_WEIGHT, OWN_OPEN_THREE_WEIGHT, OWN_SEMI_FOUR_WEIGHT, OWN_SEMI_THREE_WEIGHT,
    WIN_LEN,
};
use crate::scan::{RunCounts, detect_runs};

/// Outcome of a terminal check.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Continue,
    BlackWon,
    WhiteWon,
    Draw,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Continue => write!(f, "Continue playing"),
            Status::BlackWon => write!(f, "Black won!"),
            Status::WhiteWon => write!(f, "White won!"),
            Status::Draw => write!(f, "Draw!"),
        }
    }
}

fn has_five(counts: RunCounts) -> bool {
    counts.open >= 1 || counts.semi_open >= 1
}

/// Score the board for Black, assuming Black has just moved.
///
/// A Black five (open or semi-open) wins outright; a White five loses
/// outright. The White branch cannot trigger when this is called right
/// after Black's own move, but is kept for symmetry. Otherwise the
/// weighted sum over run lengths 2 through 4 applies; closed runs carry
/// no weight anywhere.
pub fn evaluate(board: &Board) -> i32 {
    let own = Color::Black;
    let opp = own.opponent();

    if has_five(detect_runs(board, own, WIN_LEN)) {
        return MAX_SCORE;
    }
    if has_five(detect_runs(board, opp, WIN_LEN)) {
        return -MAX_SCORE;
    }

    let own_four = detect_runs(board, own, 4);
    let opp_four = detect_runs(board, opp, 4);
    let own_three = detect_runs(board, own, 3);
    let opp_three = detect_runs(board, opp, 3);
    let own_two = detect_runs(board, own, 2);
    let opp_two = detect_runs(board, opp, 2);

    OPP_FOUR_WEIGHT * (opp_four.open + opp_four.semi_open) as i32
        + OWN_OPEN_FOUR_WEIGHT * own_four.open as i32
        + OWN_SEMI_FOUR_WEIGHT * own_four.semi_open as i32
        + OPP_OPEN_THREE_WEIGHT * opp_three.open as i32
        + OPP_SEMI_THREE_WEIGHT * opp_three.semi_open as i32
        + OWN_OPEN_THREE_WEIGHT * own_three.open as i32
        + OWN_SEMI_THREE_WEIGHT * own_three.semi_open as i32
        + (own_two.open + own_two.semi_open) as i32
        - (opp_two.open + opp_two.semi_open) as i32
}

/// Decide whether the game is over.
///
/// A five of any openness counts as a win; Black (the computer) is
/// checked first. With no five on the board, the game continues while
/// any cell is empty and is otherwise a draw.
pub fn game_status(board: &Board) -> Status {
    if detect_runs(board, Color::Black, WIN_LEN).total() > 0 {
        return Status::BlackWon;
    }
    if detect_runs(board, Color::White, WIN_LEN).total() > 0 {
        return Status::WhiteWon;
    }
    if board.is_full() {
        Status::Draw
    } else {
        Status::Continue
    }
}

/// Report the open and semi-open run counts for each color and each
/// length from 2 to 5, one line per count.
pub fn analysis(board: &Board) -> String {
    let mut out = String::new();
    for (color, name) in [(Color::Black, "Black"), (Color::White, "White")] {
        let _ = writeln!(out, "{name} stones");
        for length in 2..=WIN_LEN {
            let counts = detect_runs(board, color, length);
            let _ = writeln!(out, "Open rows of length {length}: {}", counts.open);
            let _ = writeln!(out, "Semi-open rows of length {length}: {}", counts.semi_open);
        }
    }
    out
}
