//! Depth selection for the adaptive side.
//!
//! Depth is chosen per decision from a rough work estimate: the
//! branching factor at ply k is modelled as `rho * N * (free - k)`,
//! and plies are added while the estimated node product stays under
//! budget. The estimate discount of 1.6 accounts for alpha-beta
//! cutoffs shrinking the effective branching factor.

use sudoku_core::{Board, all_moves};

/// Estimated node ceiling per decision.
pub const NODE_BUDGET: f64 = 2_000_000.0;

/// Fraction of value-choices still legal, averaged over empty cells.
/// 1.0 on a full board (no estimate needed, and no division by zero).
pub fn branching_ratio(board: &Board) -> f64 {
    let empty = board.count_empty();
    if empty == 0 {
        return 1.0;
    }
    all_moves(board).len() as f64 / (empty * board.size()) as f64
}

/// Plies affordable within `budget`, given `empty` free cells on an
/// `n`-sized board with branching ratio `rho`.
///
/// Clamped to at least 3 plies (cheap positions deserve real
/// lookahead) and at most one ply per free cell.
pub fn adaptive_depth(empty: usize, n: usize, rho: f64, budget: f64) -> u32 {
    let free = empty as u32;
    if free == 0 {
        return 1;
    }

    let mut product = 1.0;
    let mut plies = 0u32;
    while plies < free {
        let next = product * rho * n as f64 * (free - plies) as f64 / 1.6;
        if next > budget {
            break;
        }
        product = next;
        plies += 1;
    }

    (plies + 1).max(3).min(free)
}

/// Depth for the next decision on this board. 4x4 games are shallow
/// enough that a fixed 3-ply search is always affordable.
pub fn pick_depth(board: &Board, budget: f64) -> u32 {
    if board.size() == 4 {
        return 3;
    }
    adaptive_depth(board.count_empty(), board.size(), branching_ratio(board), budget)
}

#[cfg(test)]
#[path = "adaptive_tests.rs"]
mod adaptive_tests;
