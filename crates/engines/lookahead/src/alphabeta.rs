//! Minimax with alpha-beta pruning. Candidate values are already
//! probed highest-first, which is close enough to best-first to make
//! the cutoffs bite.

use sudoku_core::{EvalMode, Move, SimBoard, all_moves};

/// Pruned lookahead; must agree with plain minimax on the backed-up
/// score (the chosen move may differ between equal-scoring siblings).
/// Same depth accounting as minimax: depth 1 is a leaf, no move
/// generation.
pub fn alpha_beta(
    sim: &SimBoard,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    mode: EvalMode,
    nodes: &mut u64,
) -> (Option<Move>, i32) {
    if depth <= 1 {
        return (None, sim.eval());
    }
    let moves = all_moves(sim.board());
    if moves.is_empty() {
        return (None, sim.eval());
    }

    let mut best_move = None;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for mv in moves {
        let mut child = sim.clone();
        child.apply(mv, maximizing, mode);
        *nodes += 1;

        let score = alpha_beta(&child, depth - 1, alpha, beta, !maximizing, mode, nodes).1;

        if maximizing {
            if score > best {
                best = score;
                best_move = Some(mv);
            }
            if best >= beta {
                break;
            }
            if best > alpha {
                alpha = best;
            }
        } else {
            if score < best {
                best = score;
                best_move = Some(mv);
            }
            if best <= alpha {
                break;
            }
            if best < beta {
                beta = best;
            }
        }
    }

    (best_move, best)
}
