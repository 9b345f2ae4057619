//! tracer — find every shortest connecting trace on a circuit board.

mod args;
mod render;

use std::error::Error;
use std::io;
use std::process;

use clap::Parser;
use crossterm::tty::IsTty;
use log::info;

use tracer_core::Board;
use tracer_search::search;

use args::Args;

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("tracer: {e}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let board = Board::from_path(&args.file)?;
    info!(
        "loaded {}x{} board from {}",
        board.height(),
        board.width(),
        args.file.display()
    );

    let results = search(&board, args.search_config());

    if args.gui {
        // The search still runs, matching the historical CLI contract.
        eprintln!("Sorry, the -g GUI output option is not supported at this time.");
        return Ok(());
    }

    let stdout = io::stdout();
    let color = stdout.is_tty();
    render::write_results(&mut stdout.lock(), &results, color)?;
    Ok(())
}
