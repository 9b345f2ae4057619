//! Exhaustive shortest-trace search for circuit boards.
//!
//! Given a validated [`tracer_core::Board`], the search explores **all**
//! simple paths between the two terminals, one orthogonal move at a time,
//! and reports every path of minimum length (ties included):
//!
//! - [`TraceState`] — an immutable snapshot of one candidate path, carrying
//!   its own stamped copy of the board (branches never share visited state)
//! - [`Frontier`] — the pending-state container, with a stack (depth-first
//!   order) or queue (breadth-first order) [`Discipline`]
//! - [`search`] — the exploration loop with running-minimum [`ResultSet`]
//!   tracking
//!
//! Both disciplines visit the identical search space and produce set-equal
//! results; they differ only in discovery order. Completion semantics for
//! the end terminal are an explicit configuration point, [`GoalRule`].

mod distance;
mod engine;
mod frontier;
mod state;

pub use distance::manhattan;
pub use engine::{ResultSet, SearchConfig, search};
pub use frontier::{Discipline, Frontier};
pub use state::{GoalRule, TraceState};
