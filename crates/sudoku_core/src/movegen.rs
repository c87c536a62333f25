use crate::board::Board;
use crate::types::Move;

/// Decides whether a placement is playable. Pure; never mutates.
///
/// Legality does not depend on whose turn it is: the same move set is
/// available to both sides.
pub fn is_legal(board: &Board, mv: Move) -> bool {
    let n = board.size();
    let row = mv.row as usize;
    let col = mv.col as usize;
    let value = mv.value;

    if row >= n || col >= n {
        return false;
    }
    if !board.is_empty_cell(row, col) || value == 0 || value as usize > n {
        return false;
    }

    // Row and column duplicates
    for i in 0..n {
        if board.get(row, i) == value || board.get(i, col) == value {
            return false;
        }
    }

    // Block duplicate
    let (r0, c0) = board.block_origin(row, col);
    let b = board.block_size();
    for i in r0..r0 + b {
        for j in c0..c0 + b {
            if board.get(i, j) == value {
                return false;
            }
        }
    }

    // Consecutive constraints touching the target cell: the rule only
    // binds once the other endpoint is filled.
    for c in board.constraints_at(mv.row, mv.col) {
        let (or, oc) = c.other_end(mv.row, mv.col);
        let other = board.get(or as usize, oc as usize);
        if other != 0 && !c.satisfied(value, other) {
            return false;
        }
    }

    true
}

/// Enumerates the legal moves at one cell, probing values N down to 1.
///
/// The descending order is load-bearing: callers that want "the best
/// value first" take the front of this list rather than re-sorting.
pub fn candidate_moves(board: &Board, row: usize, col: usize) -> Vec<Move> {
    let mut out = Vec::new();
    candidate_moves_into(board, row, col, &mut out);
    out
}

/// Buffer-reusing variant of `candidate_moves`.
pub fn candidate_moves_into(board: &Board, row: usize, col: usize, out: &mut Vec<Move>) {
    out.clear();
    for value in (1..=board.size() as u8).rev() {
        let mv = Move::new(row as u8, col as u8, value);
        if is_legal(board, mv) {
            out.push(mv);
        }
    }
}

/// Every legal move over every empty cell, row-major cell order with
/// descending values inside each cell.
pub fn all_moves(board: &Board) -> Vec<Move> {
    let mut out = Vec::new();
    all_moves_into(board, &mut out);
    out
}

pub fn all_moves_into(board: &Board, out: &mut Vec<Move>) {
    out.clear();
    let n = board.size();
    let mut cell = Vec::new();
    for row in 0..n {
        for col in 0..n {
            if board.is_empty_cell(row, col) {
                candidate_moves_into(board, row, col, &mut cell);
                out.extend_from_slice(&cell);
            }
        }
    }
}

/// Whether any legal placement exists anywhere on the board.
/// Short-circuits on the first hit; used for stalemate detection.
pub fn has_any_move(board: &Board) -> bool {
    let n = board.size();
    for row in 0..n {
        for col in 0..n {
            if !board.is_empty_cell(row, col) {
                continue;
            }
            for value in (1..=n as u8).rev() {
                if is_legal(board, Move::new(row as u8, col as u8, value)) {
                    return true;
                }
            }
        }
    }
    false
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
