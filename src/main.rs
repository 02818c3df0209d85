//! Gomoku: five-in-a-row against the computer, in the terminal.
//!
//! ## Usage
//!
//! - `gomoku-rust` - Play an interactive game
//! - `gomoku-rust play` - Same as above
//! - `gomoku-rust demo` - Stage a position and show the engine's analysis

use clap::{Parser, Subcommand};

use gomoku_rust::board::{Board, Color};
use gomoku_rust::eval::analysis;
use gomoku_rust::game::GameSession;
use gomoku_rust::search::best_move;

/// Gomoku: a heuristic five-in-a-row engine
#[derive(Parser)]
#[command(name = "gomoku-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against the computer
    Play,
    /// Stage a sample position and print the engine's analysis
    Demo,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Demo) => {
            run_demo();
            Ok(())
        }
        Some(Commands::Play) | None => GameSession::new().run(),
    }
}

fn run_demo() {
    println!("Gomoku engine analysis demo\n");

    let mut board = Board::new();
    board.put_run(0, 2, 1, 0, 3, Color::Black);
    board.put_run(4, 0, 1, 1, 3, Color::Black);
    board.put_run(3, 6, 1, 0, 3, Color::Black);
    board.put_run(0, 5, 1, -1, 3, Color::White);
    println!("{board}\n");

    print!("{}", analysis(&board));

    let (row, col) = best_move(&mut board);
    println!("\nEngine move for Black: ({row}, {col})");
}
