//! One-ply exhaustive move search for the computer.
//!
//! Every empty cell is tried in row-major order: place a Black stone,
//! score the position, take the stone back. No deeper search and no
//! pruning; at 8x8 the full scan is instant, and the greedy single ply
//! is a deliberate design choice of this engine.

use crate::board::{Board, Color};
use crate::constants::{MAX_SCORE, N};
use crate::eval::evaluate;

/// Pick the computer's (Black's) move.
///
/// On an entirely empty board the exact center is played without any
/// evaluation. Otherwise the running maximum is tracked with `>=`, so a
/// tie goes to the candidate seen later in row-major order; this
/// tie-break is part of the engine's observable behavior and must not
/// change. The board is left exactly as it was found.
///
/// A full board has no candidates and falls back to (0, 0); the game
/// loop's draw check keeps that from being reached in play.
pub fn best_move(board: &mut Board) -> (usize, usize) {
    if board.is_empty() {
        return (N / 2, N / 2);
    }

    let mut free = Vec::with_capacity(N * N);
    for row in 0..N {
        for col in 0..N {
            if board.get(row, col).is_none() {
                free.push((row, col));
            }
        }
    }

    let mut cur_max = -MAX_SCORE;
    let mut best = (0, 0);
    for (row, col) in free {
        board.set_cell(row, col, Some(Color::Black));
        let score = evaluate(board);
        board.set_cell(row, col, None);
        if score >= cur_max {
            cur_max = score;
            best = (row, col);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_opens_at_center() {
        let mut board = Board::new();
        assert_eq!(best_move(&mut board), (4, 4));
        assert!(board.is_empty());
    }

    #[test]
    fn test_completes_an_open_four() {
        // Black stones at (3,1)..(3,4): both (3,0) and (3,5) make five,
        // and the >= rule picks the later one.
        let mut board = Board::new();
        board.put_run(3, 1, 0, 1, 4, Color::Black);
        assert_eq!(best_move(&mut board), (3, 5));
    }

    #[test]
    fn test_closes_a_semi_open_four() {
        // White four capped by the right edge: the only reply that takes
        // the -10000 term off the board is the one that closes the run's
        // remaining end at (2,3). An *open* four cannot be defused this
        // way, since open and semi-open fours share one weight.
        let mut board = Board::new();
        board.put_run(2, 4, 0, 1, 4, Color::White);
        assert_eq!(best_move(&mut board), (2, 3));
    }

    #[test]
    fn test_search_restores_the_board() {
        let mut board = Board::new();
        board.put_run(1, 1, 1, 1, 3, Color::White);
        board.put_run(6, 2, 0, 1, 2, Color::Black);
        let before = board.clone();
        best_move(&mut board);
        assert!(board == before);
    }

    #[test]
    fn test_search_is_idempotent() {
        let mut board = Board::new();
        board.play(0, 0, Color::White).unwrap();
        let first = best_move(&mut board);
        let second = best_move(&mut board);
        assert_eq!(first, second);
    }

    #[test]
    fn test_all_equal_scores_pick_last_cell() {
        // A lone White stone creates no runs of length 2 or more, so
        // every candidate scores alike and the last one in row-major
        // order wins.
        let mut board = Board::new();
        board.play(0, 0, Color::White).unwrap();
        assert_eq!(best_move(&mut board), (7, 7));
    }
}
