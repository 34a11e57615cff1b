//! First-class invariants over [`GameState`].
//!
//! These are the properties every reachable state satisfies. The engine
//! checks them after each move in debug builds; tests check them directly.

use crate::rules::has_line;
use crate::{Cell, GameState, Player};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of up to five invariants.
pub trait InvariantSet<S> {
    /// Checks every invariant in the set, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>),+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);
impl_invariant_set!(I1, I2, I3, I4, I5);

/// Winner and draw are never both set.
pub struct ExclusiveOutcome;

impl Invariant<GameState> for ExclusiveOutcome {
    fn holds(state: &GameState) -> bool {
        !(state.winner.is_some() && state.is_draw)
    }

    fn description() -> &'static str {
        "Winner and draw are mutually exclusive"
    }
}

/// A draw only exists on a full board.
pub struct DrawMeansFullBoard;

impl Invariant<GameState> for DrawMeansFullBoard {
    fn holds(state: &GameState) -> bool {
        !state.is_draw || state.board.is_full()
    }

    fn description() -> &'static str {
        "Draw implies a fully occupied board"
    }
}

/// A declared winner owns a complete line.
pub struct WinnerHasLine;

impl Invariant<GameState> for WinnerHasLine {
    fn holds(state: &GameState) -> bool {
        state
            .winner
            .is_none_or(|winner| has_line(&state.board, winner))
    }

    fn description() -> &'static str {
        "Winner implies a matching line"
    }
}

/// X moves first, so X has as many marks as O or one more.
pub struct BalancedMarks;

impl Invariant<GameState> for BalancedMarks {
    fn holds(state: &GameState) -> bool {
        let x = state.board.count(Cell::X);
        let o = state.board.count(Cell::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "Mark counts differ by at most one, X leading"
    }
}

/// The current player agrees with the marks on the board.
///
/// While ongoing it is whoever moves next; once over it is frozen on
/// whoever moved last.
pub struct TurnMatchesBoard;

impl Invariant<GameState> for TurnMatchesBoard {
    fn holds(state: &GameState) -> bool {
        let equal = state.board.count(Cell::X) == state.board.count(Cell::O);
        let expected = match (state.is_over(), equal) {
            (false, true) | (true, false) => Player::X,
            (false, false) | (true, true) => Player::O,
        };
        state.current_player == expected
    }

    fn description() -> &'static str {
        "Current player matches the marks on the board"
    }
}

/// All state invariants as a composable set.
pub type StateInvariants = (
    ExclusiveOutcome,
    DrawMeansFullBoard,
    WinnerHasLine,
    BalancedMarks,
    TurnMatchesBoard,
);
