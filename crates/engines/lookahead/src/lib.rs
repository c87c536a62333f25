//! Lookahead Sides
//!
//! Three search-backed deciders over the shared board model:
//! - `MinimaxSide`: exhaustive minimax, the correctness baseline
//! - `AlphaBetaSide`: same values with alpha-beta pruning
//! - `AdaptiveSide`: alpha-beta at a per-decision depth chosen from a
//!   node-budget estimate, with the richer evaluation terms enabled

mod adaptive;
mod alphabeta;
mod minimax;

use std::time::Instant;

use sudoku_core::{Board, Decision, DecisionStats, EvalMode, Move, Side, SimBoard};

pub use adaptive::{NODE_BUDGET, adaptive_depth, branching_ratio, pick_depth};
pub use alphabeta::alpha_beta;
pub use minimax::minimax;

/// Default lookahead for the fixed-depth sides.
pub const DEFAULT_DEPTH: u32 = 3;

fn check_depth(depth: u32) -> Result<(), String> {
    if depth == 0 {
        return Err("search depth must be at least 1".to_string());
    }
    Ok(())
}

/// Passing costs a fixed `-N`; prefer it only when every playable
/// line backs up to something strictly worse than that.
pub fn should_pass(best: i32, n: usize) -> bool {
    best < -(n as i32)
}

// =============================================================================
// Fixed-depth sides
// =============================================================================

#[derive(Debug, Clone)]
pub struct MinimaxSide {
    depth: u32,
    nodes: u64,
}

impl MinimaxSide {
    pub fn new(depth: u32) -> Result<Self, String> {
        check_depth(depth)?;
        Ok(Self { depth, nodes: 0 })
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Default for MinimaxSide {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            nodes: 0,
        }
    }
}

impl Side for MinimaxSide {
    fn propose_move(&mut self, board: &Board) -> Option<Move> {
        self.nodes = 0;
        let sim = SimBoard::from_board(board);
        minimax(&sim, self.depth, true, &mut self.nodes).0
    }

    fn propose_move_timed(&mut self, board: &Board) -> Decision {
        let start = Instant::now();
        let mv = self.propose_move(board);
        Decision {
            mv,
            stats: DecisionStats {
                nodes: self.nodes,
                elapsed: start.elapsed(),
                moves: 1,
            },
        }
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}

#[derive(Debug, Clone)]
pub struct AlphaBetaSide {
    depth: u32,
    nodes: u64,
}

impl AlphaBetaSide {
    pub fn new(depth: u32) -> Result<Self, String> {
        check_depth(depth)?;
        Ok(Self { depth, nodes: 0 })
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Default for AlphaBetaSide {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            nodes: 0,
        }
    }
}

impl Side for AlphaBetaSide {
    fn propose_move(&mut self, board: &Board) -> Option<Move> {
        self.nodes = 0;
        let sim = SimBoard::from_board(board);
        alpha_beta(
            &sim,
            self.depth,
            i32::MIN / 2,
            i32::MAX / 2,
            true,
            EvalMode::Plain,
            &mut self.nodes,
        )
        .0
    }

    fn propose_move_timed(&mut self, board: &Board) -> Decision {
        let start = Instant::now();
        let mv = self.propose_move(board);
        Decision {
            mv,
            stats: DecisionStats {
                nodes: self.nodes,
                elapsed: start.elapsed(),
                moves: 1,
            },
        }
    }

    fn name(&self) -> &str {
        "AlphaBeta"
    }
}

// =============================================================================
// Adaptive side
// =============================================================================

/// Alpha-beta with per-decision depth and the anticipation/mobility
/// evaluation terms. The only side that ever passes deliberately.
#[derive(Debug, Clone)]
pub struct AdaptiveSide {
    budget: f64,
    nodes: u64,
    last_depth: u32,
}

impl AdaptiveSide {
    pub fn new() -> Self {
        Self::with_budget(NODE_BUDGET)
    }

    pub fn with_budget(budget: f64) -> Self {
        Self {
            budget,
            nodes: 0,
            last_depth: 0,
        }
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Depth used by the most recent decision.
    pub fn last_depth(&self) -> u32 {
        self.last_depth
    }
}

impl Default for AdaptiveSide {
    fn default() -> Self {
        Self::new()
    }
}

impl Side for AdaptiveSide {
    fn propose_move(&mut self, board: &Board) -> Option<Move> {
        self.nodes = 0;
        self.last_depth = pick_depth(board, self.budget);
        let sim = SimBoard::from_board(board);
        let (mv, best) = alpha_beta(
            &sim,
            self.last_depth,
            i32::MIN / 2,
            i32::MAX / 2,
            true,
            EvalMode::Adaptive,
            &mut self.nodes,
        );
        if should_pass(best, board.size()) {
            return None;
        }
        mv
    }

    fn propose_move_timed(&mut self, board: &Board) -> Decision {
        let start = Instant::now();
        let mv = self.propose_move(board);
        Decision {
            mv,
            stats: DecisionStats {
                nodes: self.nodes,
                elapsed: start.elapsed(),
                moves: 1,
            },
        }
    }

    fn name(&self) -> &str {
        "Adaptive"
    }
}
