//! Interactive terminal game: human (White) against the engine (Black).
//!
//! The computer opens each round; the board is printed and checked for
//! a result after every move. Coordinate entry re-prompts on anything
//! invalid, and typing `quit` at either prompt ends the game.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::board::{Board, Color, MoveError};
use crate::constants::N;
use crate::eval::{Status, game_status};
use crate::search::best_move;

/// One game between the engine and a human at the terminal.
pub struct GameSession {
    board: Board,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
        }
    }

    /// Run the game loop until a result or a quit, reading moves from
    /// stdin.
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        loop {
            println!("-------------------------");

            self.computer_move()?;
            println!("{}", self.board);
            let status = game_status(&self.board);
            if status != Status::Continue {
                println!("{status}");
                return Ok(());
            }

            if !self.player_move(&mut lines)? {
                println!("Game quitted");
                return Ok(());
            }
            println!("{}", self.board);
            let status = game_status(&self.board);
            if status != Status::Continue {
                println!("{status}");
                return Ok(());
            }
        }
    }

    fn computer_move(&mut self) -> Result<()> {
        let (row, col) = best_move(&mut self.board);
        println!("Computer move: ({row}, {col})\n");
        self.board.play(row, col, Color::Black)?;
        Ok(())
    }

    /// Prompt for and apply one human move.
    ///
    /// Returns `Ok(false)` when the player quits (or input ends),
    /// `Ok(true)` once a stone has been placed. Bad input of any kind
    /// re-prompts.
    fn player_move(
        &mut self,
        lines: &mut impl Iterator<Item = io::Result<String>>,
    ) -> Result<bool> {
        println!("Your move! (Type 'quit' at any time to quit the game)");
        loop {
            let Some(x_raw) = prompt(lines, "x-coord (0-7): ")? else {
                return Ok(false);
            };
            let Some(y_raw) = prompt(lines, "y-coord (0-7): ")? else {
                return Ok(false);
            };
            if x_raw == "quit" || y_raw == "quit" {
                return Ok(false);
            }

            // x is the column, y the row.
            let mut col: i64 = -1;
            let mut row: i64 = -1;
            match x_raw.parse() {
                Ok(v) => col = v,
                Err(_) => println!("Please enter a valid number"),
            }
            match y_raw.parse() {
                Ok(v) => row = v,
                Err(_) => println!("Please enter a valid number"),
            }
            if !(0..N as i64).contains(&col) || !(0..N as i64).contains(&row) {
                println!("Your coordinates are out of range. Please try again.");
                continue;
            }

            match self.board.play(row as usize, col as usize, Color::White) {
                Ok(()) => return Ok(true),
                Err(MoveError::Occupied) => {
                    println!("This space is occupied. Please try again.");
                }
                Err(MoveError::OutOfRange) => {
                    println!("Your coordinates are out of range. Please try again.");
                }
            }
        }
    }
}

/// Print a prompt without a newline and read the next input line.
/// `None` means input ended.
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    message: &str,
) -> Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}
