//! Turn/scoring state machine adjudicating a real game.
//!
//! The referee exclusively owns the authoritative board; sides only
//! ever see a shared reference and search over their own clones.

use crate::Side;
use crate::board::Board;
use crate::movegen::{has_any_move, is_legal};
use crate::types::{Move, Outcome, SideId};
use crate::DecisionStats;

/// What happened during one call to `apply_turn`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// A legal move was applied and scored.
    Played(Move),
    /// No legal move existed anywhere; the turn passed without penalty.
    Skipped,
    /// The side proposed nothing or an illegal move; a fixed `-N`
    /// penalty was applied and the board left untouched.
    Penalized,
}

/// Report from a single turn, including the acting side and optional
/// decision diagnostics.
#[derive(Debug)]
pub struct TurnReport {
    pub side: SideId,
    pub outcome: TurnOutcome,
    pub stats: Option<DecisionStats>,
}

pub struct Referee<'a> {
    sides: [&'a mut dyn Side; 2],
    board: Board,
    zeros_in_rows: Vec<u8>,
    zeros_in_cols: Vec<u8>,
    scores: [i32; 2],
    to_move: SideId,
    out_of_moves: bool,
}

impl<'a> Referee<'a> {
    /// Builds a referee owning the authoritative board. Side A moves
    /// first. Explicitly constructed and owned by the game-session
    /// caller; there is no global instance.
    pub fn new(side_a: &'a mut dyn Side, side_b: &'a mut dyn Side, board: Board) -> Self {
        let n = board.size();
        let mut zeros_in_rows = vec![n as u8; n];
        let mut zeros_in_cols = vec![n as u8; n];
        for row in 0..n {
            for col in 0..n {
                if !board.is_empty_cell(row, col) {
                    zeros_in_rows[row] -= 1;
                    zeros_in_cols[col] -= 1;
                }
            }
        }
        Self {
            sides: [side_a, side_b],
            board,
            zeros_in_rows,
            zeros_in_cols,
            scores: [0, 0],
            to_move: SideId::A,
            out_of_moves: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> SideId {
        self.to_move
    }

    pub fn score(&self, id: SideId) -> i32 {
        self.scores[id.idx()]
    }

    pub fn side_name(&self, id: SideId) -> &str {
        self.sides[id.idx()].name()
    }

    /// Whether the previous game-over check found no legal placement
    /// anywhere on the board.
    pub fn out_of_moves(&self) -> bool {
        self.out_of_moves
    }

    /// The game ends when the board is full or when no empty cell
    /// anywhere admits any legal value. The stalemate scan is global,
    /// not per-side: legality never depended on which side moves.
    pub fn is_game_over(&mut self) -> bool {
        self.out_of_moves = !has_any_move(&self.board);
        self.board.is_full() || self.out_of_moves
    }

    /// Runs one turn for the active side and passes the turn.
    pub fn apply_turn(&mut self) -> TurnReport {
        let side = self.to_move;
        let outcome = if !has_any_move(&self.board) {
            TurnOutcome::Skipped
        } else {
            let proposed = self.sides[side.idx()].propose_move(&self.board);
            self.adjudicate(side, proposed)
        };
        self.to_move = side.other();
        TurnReport {
            side,
            outcome,
            stats: None,
        }
    }

    /// As `apply_turn`, but collects per-decision diagnostics from the
    /// side. The diagnostics never influence adjudication.
    pub fn apply_turn_timed(&mut self) -> TurnReport {
        let side = self.to_move;
        let (outcome, stats) = if !has_any_move(&self.board) {
            (TurnOutcome::Skipped, None)
        } else {
            let decision = self.sides[side.idx()].propose_move_timed(&self.board);
            (self.adjudicate(side, decision.mv), Some(decision.stats))
        };
        self.to_move = side.other();
        TurnReport {
            side,
            outcome,
            stats,
        }
    }

    fn adjudicate(&mut self, side: SideId, proposed: Option<Move>) -> TurnOutcome {
        match proposed {
            Some(mv) if is_legal(&self.board, mv) => {
                self.place(mv);
                self.award_points(side, mv);
                TurnOutcome::Played(mv)
            }
            _ => {
                self.scores[side.idx()] -= self.board.size() as i32;
                TurnOutcome::Penalized
            }
        }
    }

    /// Applies a legal move to the authoritative board, decrementing
    /// the empty counters exactly once.
    fn place(&mut self, mv: Move) {
        let row = mv.row as usize;
        let col = mv.col as usize;
        self.board.set(row, col, mv.value);
        self.zeros_in_rows[row] -= 1;
        self.zeros_in_cols[col] -= 1;
    }

    /// Scores a just-applied move against the post-move board:
    /// `+value`, plus `N^2` for each of row/column/block completed.
    /// Deliberately parallel to, and independent of, the search-time
    /// evaluation function.
    fn award_points(&mut self, side: SideId, mv: Move) {
        let n = self.board.size() as i32;
        let row = mv.row as usize;
        let col = mv.col as usize;
        let mut gained = mv.value as i32;

        if self.zeros_in_rows[row] == 0 {
            gained += n * n;
        }
        if self.zeros_in_cols[col] == 0 {
            gained += n * n;
        }
        if self.block_filled(row, col) {
            gained += n * n;
        }
        self.scores[side.idx()] += gained;
    }

    fn block_filled(&self, row: usize, col: usize) -> bool {
        let (r0, c0) = self.board.block_origin(row, col);
        let b = self.board.block_size();
        for i in r0..r0 + b {
            for j in c0..c0 + b {
                if self.board.is_empty_cell(i, j) {
                    return false;
                }
            }
        }
        true
    }

    /// Strictly higher cumulative score wins; equality is a tie.
    pub fn winner(&self) -> Outcome {
        if self.scores[0] > self.scores[1] {
            Outcome::SideA
        } else if self.scores[1] > self.scores[0] {
            Outcome::SideB
        } else {
            Outcome::Tie
        }
    }
}

#[cfg(test)]
#[path = "referee_tests.rs"]
mod referee_tests;
