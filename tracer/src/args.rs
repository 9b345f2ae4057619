//! Command-line interface definition.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

use tracer_search::{Discipline, GoalRule, SearchConfig};

/// Search for all shortest connecting traces between the two terminals of a
/// circuit board description.
#[derive(Debug, Parser)]
#[command(
    name = "tracer",
    version,
    about,
    group(ArgGroup::new("storage").required(true).args(["stack", "queue"])),
    group(ArgGroup::new("output").required(true).args(["console", "gui"])),
)]
pub struct Args {
    /// Explore with a stack frontier (depth-first order).
    #[arg(short = 's', long)]
    pub stack: bool,

    /// Explore with a queue frontier (breadth-first order).
    #[arg(short = 'q', long)]
    pub queue: bool,

    /// Print results to the console.
    #[arg(short = 'c', long)]
    pub console: bool,

    /// Display results graphically (not supported at this time).
    #[arg(short = 'g', long)]
    pub gui: bool,

    /// Complete a trace by stepping onto the end terminal instead of
    /// stopping on a cell next to it.
    #[arg(long)]
    pub enter_end: bool,

    /// Board description file.
    pub file: PathBuf,
}

impl Args {
    /// The search configuration selected by the flags.
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            discipline: if self.queue {
                Discipline::Queue
            } else {
                Discipline::Stack
            },
            goal: if self.enter_end {
                GoalRule::EnterEnd
            } else {
                GoalRule::AdjacentToEnd
            },
        }
    }
}
