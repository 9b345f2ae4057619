//! The [`TraceState`] type — one candidate path through the board.

use std::fmt;

use tracer_core::{Board, Point};

use crate::distance::manhattan;

// ---------------------------------------------------------------------------
// GoalRule
// ---------------------------------------------------------------------------

/// Completion semantics for the end terminal.
///
/// Whether the end cell itself is traversable is ambiguous in the board
/// model (`2` is not `O`), so it is an explicit configuration point rather
/// than a silent assumption.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GoalRule {
    /// A path is complete when its head is orthogonally adjacent to the end
    /// terminal. The end cell is never entered. This is the default.
    #[default]
    AdjacentToEnd,
    /// The end cell is admissible as a final move; a path is complete when
    /// its head occupies the end terminal. Entering the end does not stamp
    /// it as a trace.
    EnterEnd,
}

impl GoalRule {
    /// Whether `p` may be entered on `board` under this rule.
    #[inline]
    pub fn admits(self, board: &Board, p: Point) -> bool {
        board.is_open(p) || (self == GoalRule::EnterEnd && p == board.end())
    }
}

// ---------------------------------------------------------------------------
// TraceState
// ---------------------------------------------------------------------------

/// An immutable snapshot of one candidate path: a private working copy of
/// the board with every visited cell stamped as a trace, the current head
/// position, and the number of cells stamped so far.
///
/// States are produced only by [`seed`](TraceState::seed) and
/// [`extend`](TraceState::extend), each of which deep-copies its parent's
/// board. Sibling states therefore never share visited cells: a cell used
/// earlier by *this* path is closed to it, while independent branches may
/// legitimately cross the same position.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraceState {
    board: Board,
    head: Point,
    len: u32,
}

impl TraceState {
    /// Construct the first step of a path into `p`, a cell adjacent to the
    /// start terminal.
    ///
    /// `p` must be admissible on the raw board under `rule`; seeding an
    /// inadmissible position is a programming error and panics.
    pub fn seed(board: &Board, p: Point, rule: GoalRule) -> TraceState {
        assert!(
            manhattan(board.start(), p) == 1,
            "seed {p} is not adjacent to start {}",
            board.start()
        );
        assert!(rule.admits(board, p), "seed {p} is not admissible");
        let mut board = board.clone();
        if board.is_open(p) {
            board.make_trace(p);
        }
        TraceState {
            board,
            head: p,
            len: 1,
        }
    }

    /// Extend this path by one move into `p`.
    ///
    /// `p` must be orthogonally adjacent to the head and admissible in
    /// *this* state's working board; the engine checks admissibility before
    /// calling, so a violation here is an internal-invariant failure and
    /// panics. Open cells are stamped; the end cell (admissible only under
    /// [`GoalRule::EnterEnd`]) is entered without stamping.
    pub fn extend(&self, p: Point) -> TraceState {
        assert!(
            manhattan(self.head, p) == 1,
            "extend {p} is not adjacent to head {}",
            self.head
        );
        let mut board = self.board.clone();
        if board.is_open(p) {
            board.make_trace(p);
        } else {
            assert!(p == board.end(), "extend into occupied position {p}");
        }
        TraceState {
            board,
            head: p,
            len: self.len + 1,
        }
    }

    /// Whether `p` is open in this state's working board (not blocked, not a
    /// terminal, and not already claimed by this path).
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.board.is_open(p)
    }

    /// Whether `p` may be entered from this state under `rule`.
    #[inline]
    pub fn can_enter(&self, p: Point, rule: GoalRule) -> bool {
        rule.admits(&self.board, p)
    }

    /// Whether this path connects the terminals under `rule`.
    #[inline]
    pub fn is_complete(&self, rule: GoalRule) -> bool {
        match rule {
            GoalRule::AdjacentToEnd => manhattan(self.head, self.board.end()) == 1,
            GoalRule::EnterEnd => self.head == self.board.end(),
        }
    }

    /// Number of cells this path has claimed.
    #[inline]
    pub fn path_len(&self) -> u32 {
        self.len
    }

    /// The most recently entered position.
    #[inline]
    pub fn head(&self) -> Point {
        self.head
    }

    /// This path's working board, with claimed cells stamped as traces.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }
}

impl fmt::Display for TraceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.board.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracer_core::Cell;

    fn board() -> Board {
        Board::parse("3 3\n1 O O\nO O O\nO O 2").unwrap()
    }

    #[test]
    fn seed_stamps_first_cell() {
        let b = board();
        let s = TraceState::seed(&b, Point::new(1, 0), GoalRule::default());
        assert_eq!(s.head(), Point::new(1, 0));
        assert_eq!(s.path_len(), 1);
        assert_eq!(s.board().cell_at(Point::new(1, 0)), Some(Cell::Trace));
        // The source board is untouched.
        assert_eq!(b.cell_at(Point::new(1, 0)), Some(Cell::Open));
    }

    #[test]
    #[should_panic(expected = "not adjacent to start")]
    fn seed_requires_adjacency() {
        TraceState::seed(&board(), Point::new(2, 2), GoalRule::default());
    }

    #[test]
    fn extend_copies_rather_than_aliases() {
        let b = board();
        let s = TraceState::seed(&b, Point::new(1, 0), GoalRule::default());
        let left = s.extend(Point::new(1, 1));
        let right = s.extend(Point::new(2, 0));
        // Each branch sees only its own stamps.
        assert!(left.is_open(Point::new(2, 0)));
        assert!(right.is_open(Point::new(1, 1)));
        assert_eq!(s.path_len(), 1);
        assert_eq!(left.path_len(), 2);
    }

    #[test]
    fn own_stamps_close_cells_to_further_extension() {
        let b = board();
        let s = TraceState::seed(&b, Point::new(1, 0), GoalRule::default());
        let t = s.extend(Point::new(1, 1));
        assert!(!t.is_open(Point::new(1, 0)));
        assert!(!t.can_enter(Point::new(1, 0), GoalRule::default()));
    }

    #[test]
    #[should_panic(expected = "occupied position")]
    fn extend_into_stamped_cell_panics() {
        let b = board();
        let s = TraceState::seed(&b, Point::new(1, 0), GoalRule::default());
        s.extend(Point::new(1, 1)).extend(Point::new(1, 0));
    }

    #[test]
    fn path_len_matches_stamped_cells() {
        let b = board();
        let s = TraceState::seed(&b, Point::new(1, 0), GoalRule::default())
            .extend(Point::new(1, 1))
            .extend(Point::new(1, 2));
        assert_eq!(s.path_len(), 3);
        assert_eq!(s.board().count(Cell::Trace), 3);
    }

    #[test]
    fn completion_adjacent_to_end() {
        let b = Board::parse("1 3\n1 O 2").unwrap();
        let s = TraceState::seed(&b, Point::new(1, 0), GoalRule::AdjacentToEnd);
        assert!(s.is_complete(GoalRule::AdjacentToEnd));
        assert!(!s.is_complete(GoalRule::EnterEnd));
    }

    #[test]
    fn completion_enter_end() {
        let b = Board::parse("1 3\n1 O 2").unwrap();
        let s = TraceState::seed(&b, Point::new(1, 0), GoalRule::EnterEnd);
        assert!(s.can_enter(Point::new(2, 0), GoalRule::EnterEnd));
        assert!(!s.can_enter(Point::new(2, 0), GoalRule::AdjacentToEnd));
        let done = s.extend(Point::new(2, 0));
        assert!(done.is_complete(GoalRule::EnterEnd));
        assert_eq!(done.path_len(), 2);
        // Entering the end does not stamp it.
        assert_eq!(done.board().cell_at(Point::new(2, 0)), Some(Cell::End));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn trace_state_round_trip() {
        let b = Board::parse("1 3\n1 O 2").unwrap();
        let s = TraceState::seed(&b, Point::new(1, 0), GoalRule::default());
        let json = serde_json::to_string(&s).unwrap();
        let back: TraceState = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
