//! Terminal front end for the Ninefold number-place engine.
//!
//! Resolves a named board from the built-in catalog, hands the parsed board
//! to the game engine, and runs a line-oriented command loop. All rendering
//! happens here, from snapshots of the engine state.

use std::process::ExitCode;

use clap::Parser;
use ninefold_core::Board;
use ninefold_game::Game;

mod boards;
mod play;

#[derive(Debug, Parser)]
#[command(name = "ninefold", about = "Play a number-place puzzle in the terminal")]
struct Args {
    /// Name of the built-in board to play.
    #[arg(long, default_value = "easy")]
    board: String,

    /// List the available boards and exit.
    #[arg(long)]
    list: bool,
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if args.list {
        for name in boards::names() {
            println!("{name}");
        }
        return ExitCode::SUCCESS;
    }

    let Some(text) = boards::lookup(&args.board) else {
        eprintln!("unknown board {:?}; use --list to see the catalog", args.board);
        return ExitCode::FAILURE;
    };
    let board: Board = match text.parse() {
        Ok(board) => board,
        Err(err) => {
            eprintln!("board {:?} is malformed: {err}", args.board);
            return ExitCode::FAILURE;
        }
    };
    log::info!("loaded board {:?}", args.board);

    match play::run(Game::new(board)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
