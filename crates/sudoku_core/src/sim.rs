//! Simulated board with incremental evaluation, used only inside
//! lookahead search. One clone per explored node; a clone is never
//! shared between branches.

use crate::board::Board;
use crate::movegen::{candidate_moves, candidate_moves_into};
use crate::types::Move;

/// Which evaluation terms are active when a move is applied.
///
/// `Plain` is the base reward plus completion bonuses. `Adaptive` adds
/// the anticipation penalty and the mobility bonus (both only on
/// boards larger than 4×4).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EvalMode {
    Plain,
    Adaptive,
}

/// A board clone carrying per-row/per-column empty counters, a running
/// evaluation score, and the last applied move.
///
/// Invariant: `zeros_in_rows[r]` equals the number of empty cells in
/// row r at all times (symmetrically for columns). Counters are
/// decremented exactly once per cell filled, never recomputed by
/// scanning.
#[derive(Clone, Debug)]
pub struct SimBoard {
    board: Board,
    zeros_in_rows: Vec<u8>,
    zeros_in_cols: Vec<u8>,
    eval: i32,
    last_move: Option<Move>,
}

impl SimBoard {
    /// Seeds a simulation from the authoritative board. The counters
    /// are established by a single scan here; every later update goes
    /// through `apply`.
    pub fn from_board(board: &Board) -> Self {
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
            board: board.clone(),
            zeros_in_rows,
            zeros_in_cols,
            eval: 0,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn eval(&self) -> i32 {
        self.eval
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn zeros_in_row(&self, row: usize) -> u8 {
        self.zeros_in_rows[row]
    }

    pub fn zeros_in_col(&self, col: usize) -> u8 {
        self.zeros_in_cols[col]
    }

    pub fn is_full(&self) -> bool {
        self.zeros_in_rows.iter().all(|&z| z == 0)
    }

    pub fn row_filled(&self, row: usize) -> bool {
        self.zeros_in_rows[row] == 0
    }

    pub fn col_filled(&self, col: usize) -> bool {
        self.zeros_in_cols[col] == 0
    }

    pub fn block_filled(&self, row: usize, col: usize) -> bool {
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

    /// Tentatively places a move on behalf of a hypothetical mover and
    /// folds its effect into the running score. `maximizing` selects
    /// the sign (+1 / -1).
    pub fn apply(&mut self, mv: Move, maximizing: bool, mode: EvalMode) {
        let row = mv.row as usize;
        let col = mv.col as usize;
        let n = self.board.size() as i32;

        self.board.set(row, col, mv.value);
        self.last_move = Some(mv);
        self.zeros_in_rows[row] -= 1;
        self.zeros_in_cols[col] -= 1;

        let sign: i32 = if maximizing { 1 } else { -1 };
        self.eval += sign * mv.value as i32;

        if self.col_filled(col) {
            self.eval += sign * n * n;
        }
        if self.row_filled(row) {
            self.eval += sign * n * n;
        }
        if self.block_filled(row, col) {
            self.eval += sign * n * n;
        }

        let adaptive = mode == EvalMode::Adaptive && n > 4;
        if adaptive {
            // A unit left one legal placement short of complete hands
            // the completion bonus to the opponent on their next move;
            // charge that here.
            if let Some(v) = self.almost_filled_row(row) {
                self.eval += -sign * (n * n + v as i32);
            }
            if let Some(v) = self.almost_filled_col(col) {
                self.eval += -sign * (n * n + v as i32);
            }
            if let Some(v) = self.almost_filled_block(row, col) {
                self.eval += -sign * (n * n + v as i32);
            }
            if maximizing {
                self.eval += self.mobility() / 2;
            }
        }
    }

    /// If the row has exactly one empty cell that still admits a legal
    /// value, returns the highest such value.
    fn almost_filled_row(&self, row: usize) -> Option<u8> {
        if self.zeros_in_rows[row] != 1 {
            return None;
        }
        let n = self.board.size();
        for col in 0..n {
            if self.board.is_empty_cell(row, col) {
                return candidate_moves(&self.board, row, col)
                    .first()
                    .map(|m| m.value);
            }
        }
        None
    }

    fn almost_filled_col(&self, col: usize) -> Option<u8> {
        if self.zeros_in_cols[col] != 1 {
            return None;
        }
        let n = self.board.size();
        for row in 0..n {
            if self.board.is_empty_cell(row, col) {
                return candidate_moves(&self.board, row, col)
                    .first()
                    .map(|m| m.value);
            }
        }
        None
    }

    fn almost_filled_block(&self, row: usize, col: usize) -> Option<u8> {
        let (r0, c0) = self.board.block_origin(row, col);
        let b = self.board.block_size();
        let mut empty = None;
        let mut count = 0;
        for i in r0..r0 + b {
            for j in c0..c0 + b {
                if self.board.is_empty_cell(i, j) {
                    count += 1;
                    empty = Some((i, j));
                }
            }
        }
        if count != 1 {
            return None;
        }
        let (i, j) = empty?;
        candidate_moves(&self.board, i, j).first().map(|m| m.value)
    }

    /// Total count of legal value-choices summed over every empty
    /// cell. Rewards positions that keep follow-up options open.
    fn mobility(&self) -> i32 {
        let n = self.board.size();
        let mut bonus = 0i32;
        let mut cell = Vec::new();
        for row in 0..n {
            for col in 0..n {
                if self.board.is_empty_cell(row, col) {
                    candidate_moves_into(&self.board, row, col, &mut cell);
                    bonus += cell.len() as i32;
                }
            }
        }
        bonus
    }
}

#[cfg(test)]
#[path = "sim_tests.rs"]
mod sim_tests;
