//! Baseline Sides
//!
//! Deciders with no lookahead, used for:
//! - Testing the referee and session plumbing before real opponents
//! - Floor comparisons (any search side should beat these)
//! - Exercising the penalty path (`BlindRandomSide` plays unchecked)

use rand::Rng;
use rand::seq::SliceRandom;
use rand::thread_rng;

use sudoku_core::{Board, Move, Side, all_moves, candidate_moves};


/// Picks uniformly at random among all legal moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSide;

impl RandomSide {
    pub fn new() -> Self {
        Self
    }
}

impl Side for RandomSide {
    fn propose_move(&mut self, board: &Board) -> Option<Move> {
        all_moves(board).choose(&mut thread_rng()).copied()
    }

    fn name(&self) -> &str {
        "Random"
    }
}

/// Picks a random empty cell and a random value without checking
/// legality, so it regularly earns the referee's penalty. Never
/// proposes on a full board.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlindRandomSide;

impl BlindRandomSide {
    pub fn new() -> Self {
        Self
    }
}

impl Side for BlindRandomSide {
    fn propose_move(&mut self, board: &Board) -> Option<Move> {
        let n = board.size();
        let mut empties = Vec::new();
        for row in 0..n {
            for col in 0..n {
                if board.is_empty_cell(row, col) {
                    empties.push((row as u8, col as u8));
                }
            }
        }
        let mut rng = thread_rng();
        let &(row, col) = empties.choose(&mut rng)?;
        let value = rng.gen_range(1..=n as u8);
        Some(Move::new(row, col, value))
    }

    fn name(&self) -> &str {
        "BlindRandom"
    }
}

/// Plays the highest legal value in the first empty cell that has one,
/// scanning row-major. Deterministic; handy in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstValidSide;

impl FirstValidSide {
    pub fn new() -> Self {
        Self
    }
}

impl Side for FirstValidSide {
    fn propose_move(&mut self, board: &Board) -> Option<Move> {
        let n = board.size();
        for row in 0..n {
            for col in 0..n {
                if !board.is_empty_cell(row, col) {
                    continue;
                }
                if let Some(&mv) = candidate_moves(board, row, col).first() {
                    return Some(mv);
                }
            }
        }
        None
    }

    fn name(&self) -> &str {
        "FirstValid"
    }
}
