pub mod board;
pub mod movegen;
pub mod referee;
pub mod sim;
pub mod types;

pub use board::{Board, Constraint, EMPTY};
pub use movegen::{all_moves, all_moves_into, candidate_moves, has_any_move, is_legal};
pub use referee::{Referee, TurnOutcome, TurnReport};
pub use sim::{EvalMode, SimBoard};
pub use types::{Move, Outcome, SideId};

use std::time::{Duration, Instant};

// =============================================================================
// Side trait — implemented by all deciders (human, scripted, search-backed)
// =============================================================================

/// Per-decision diagnostics. Accumulated by the caller across a game;
/// the deciders themselves never consult these to pick a move.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionStats {
    /// Search-tree nodes visited while deciding (0 for non-search sides)
    pub nodes: u64,
    /// Wall time spent on the decision
    pub elapsed: Duration,
    /// Number of decisions this record covers (1 per call)
    pub moves: u32,
}

/// A proposed move together with its diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct Decision {
    pub mv: Option<Move>,
    pub stats: DecisionStats,
}

/// Capability contract for one of the two competing sides.
///
/// The referee depends only on this trait; human-input adapters,
/// fixed-rule adapters and search-backed adapters all implement it.
pub trait Side {
    /// Propose a move for the given board, or `None` to pass.
    ///
    /// Returning `None` (or an illegal move) costs the side a fixed
    /// `-N` penalty, which a decider may deliberately prefer over a
    /// worse placement.
    fn propose_move(&mut self, board: &Board) -> Option<Move>;

    /// Diagnostics-returning variant of `propose_move`. The default
    /// wraps the plain call with a wall-clock timer; search-backed
    /// sides override it to report node counts as well.
    fn propose_move_timed(&mut self, board: &Board) -> Decision {
        let start = Instant::now();
        let mv = self.propose_move(board);
        Decision {
            mv,
            stats: DecisionStats {
                nodes: 0,
                elapsed: start.elapsed(),
                moves: 1,
            },
        }
    }

    /// Display name for reports and score tables.
    fn name(&self) -> &str;

    /// Move legality is side-agnostic; these are provided for
    /// convenience and delegate to the shared legality engine.
    fn is_legal(&self, board: &Board, mv: Move) -> bool {
        movegen::is_legal(board, mv)
    }

    /// Legal moves at one cell, best (highest) value first.
    fn candidate_moves(&self, board: &Board, row: usize, col: usize) -> Vec<Move> {
        movegen::candidate_moves(board, row, col)
    }
}
