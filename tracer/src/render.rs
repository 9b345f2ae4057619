//! Console presentation of search results.

use std::io::{self, Write};

use crossterm::style::Stylize;

use tracer_core::{Cell, Point};
use tracer_search::TraceState;

/// Write a summary line followed by every tied shortest trace.
///
/// With `color` set, trace cells are highlighted and the terminals dimmed;
/// without it the output is plain tokens, safe to pipe.
pub fn write_results(w: &mut impl Write, results: &[TraceState], color: bool) -> io::Result<()> {
    match results.first() {
        None => writeln!(w, "no path found")?,
        Some(first) => writeln!(
            w,
            "{} shortest trace(s) of length {}",
            results.len(),
            first.path_len()
        )?,
    }
    for state in results {
        writeln!(w)?;
        write_board(w, state, color)?;
    }
    Ok(())
}

fn write_board(w: &mut impl Write, state: &TraceState, color: bool) -> io::Result<()> {
    let board = state.board();
    for y in 0..board.height() {
        for x in 0..board.width() {
            if x > 0 {
                write!(w, " ")?;
            }
            let cell = board.cell_at(Point::new(x, y)).unwrap_or(Cell::Open);
            if color {
                match cell {
                    Cell::Trace => write!(w, "{}", cell.token().green().bold())?,
                    Cell::Start | Cell::End => write!(w, "{}", cell.token().cyan())?,
                    _ => write!(w, "{}", cell.token())?,
                }
            } else {
                write!(w, "{}", cell.token())?;
            }
        }
        writeln!(w)?;
    }
    Ok(())
}
