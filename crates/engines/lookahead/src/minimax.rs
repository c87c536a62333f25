//! Exhaustive minimax over simulated boards. No pruning; kept as the
//! reference point the pruned searches are checked against.

use sudoku_core::{EvalMode, Move, SimBoard, all_moves};

/// Searches up to `depth` and returns the best root move with its
/// backed-up score.
///
/// Depth counts the current node as a ply: depth 1 is a leaf that
/// returns the standing evaluation without generating a single move,
/// so depth `d` expands `d - 1` plies. A node with no legal moves
/// scores as it stands, for either mover.
pub fn minimax(
    sim: &SimBoard,
    depth: u32,
    maximizing: bool,
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
        child.apply(mv, maximizing, EvalMode::Plain);
        *nodes += 1;

        let score = minimax(&child, depth - 1, !maximizing, nodes).1;

        if (maximizing && score > best) || (!maximizing && score < best) {
            best = score;
            best_move = Some(mv);
        }
    }

    (best_move, best)
}
