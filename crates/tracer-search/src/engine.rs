//! The search engine: exhaustive frontier exploration with running-minimum
//! result tracking.

use log::{debug, trace};

use tracer_core::Board;

use crate::frontier::{Discipline, Frontier};
use crate::state::{GoalRule, TraceState};

// ---------------------------------------------------------------------------
// SearchConfig
// ---------------------------------------------------------------------------

/// Run parameters: frontier discipline and end-terminal completion rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchConfig {
    pub discipline: Discipline,
    pub goal: GoalRule,
}

// ---------------------------------------------------------------------------
// ResultSet
// ---------------------------------------------------------------------------

/// The running set of minimum-length complete paths.
///
/// Every member has the same length, the minimum among all complete paths
/// offered so far. The update rule is order-independent: a strictly shorter
/// completion rebuilds the set, a tie appends, a longer one is discarded.
#[derive(Debug, Default)]
pub struct ResultSet {
    states: Vec<TraceState>,
}

impl ResultSet {
    /// Apply the minimum-tracking rule to a complete path.
    pub fn offer(&mut self, state: TraceState) {
        match self.min_len() {
            None => self.states.push(state),
            Some(min) if state.path_len() < min => {
                self.states.clear();
                self.states.push(state);
            }
            Some(min) if state.path_len() == min => self.states.push(state),
            Some(_) => {}
        }
    }

    /// Length shared by all current members, or `None` while empty.
    pub fn min_len(&self) -> Option<u32> {
        self.states.first().map(TraceState::path_len)
    }

    /// Number of tied shortest paths.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether no complete path has been recorded.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// The tied shortest paths, in discovery order.
    pub fn as_slice(&self) -> &[TraceState] {
        &self.states
    }

    /// Consume the set, yielding the tied shortest paths.
    pub fn into_vec(self) -> Vec<TraceState> {
        self.states
    }
}

// ---------------------------------------------------------------------------
// search
// ---------------------------------------------------------------------------

/// Explore every simple path between the board's terminals and return all
/// tied shortest complete paths, in discovery order.
///
/// The search is a full-space exploration: no early termination, no
/// heuristic pruning. An unreachable end terminal yields an empty result,
/// not an error. The board itself is never mutated.
pub fn search(board: &Board, config: SearchConfig) -> Vec<TraceState> {
    let mut frontier = Frontier::new(config.discipline);
    let mut results = ResultSet::default();

    for p in board.start().neighbors_4() {
        if config.goal.admits(board, p) {
            frontier.push(TraceState::seed(board, p, config.goal));
        }
    }
    debug!(
        "seeded {} state(s) from start {}",
        frontier.len(),
        board.start()
    );

    let mut examined: u64 = 0;
    while let Some(state) = frontier.pop() {
        examined += 1;
        if state.is_complete(config.goal) {
            let len = state.path_len();
            match results.min_len() {
                None => debug!("first complete path, length {len}"),
                Some(min) if len < min => debug!("new minimum length {len}"),
                _ => {}
            }
            results.offer(state);
        } else {
            trace!("expanding {} at length {}", state.head(), state.path_len());
            for p in state.head().neighbors_4() {
                if state.can_enter(p, config.goal) {
                    frontier.push(state.extend(p));
                }
            }
        }
    }

    debug!(
        "search done: {} state(s) examined, {} shortest path(s) of length {:?}",
        examined,
        results.len(),
        results.min_len()
    );
    results.into_vec()
}
