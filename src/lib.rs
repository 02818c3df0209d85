//! A Gomoku (five-in-a-row) engine on a fixed 8x8 board.
//!
//! The engine scans the board in four directions, classifies maximal
//! same-color runs by length and by how bounded their ends are, folds
//! the tallies into a signed positional score, and picks the move that
//! maximizes it by trying every empty cell. One ply, no pruning: at 8x8
//! the exhaustive scan is instant and the greedy search is the point.
//!
//! Reimplemented in Rust from the original Python program.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry and evaluation weights
//! - [`board`] - Board storage, move application, text rendering
//! - [`scan`] - Run scanning and boundedness classification (the core)
//! - [`eval`] - Positional evaluation and win/draw detection
//! - [`search`] - One-ply exhaustive move search
//! - [`game`] - Interactive terminal game loop
//!
//! ## Example
//!
//! ```
//! use gomoku_rust::board::{Board, Color};
//! use gomoku_rust::eval::{Status, game_status};
//! use gomoku_rust::search::best_move;
//!
//! let mut board = Board::new();
//! board.play(3, 3, Color::White)?;
//!
//! let (row, col) = best_move(&mut board);
//! board.play(row, col, Color::Black)?;
//! assert_eq!(game_status(&board), Status::Continue);
//! # Ok::<(), gomoku_rust::board::MoveError>(())
//! ```

pub mod board;
pub mod constants;
pub mod eval;
pub mod game;
pub mod scan;
pub mod search;
