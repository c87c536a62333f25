//! Board preparation: random prefill, constraint generation, file
//! loading.

use rand::Rng;
use rand::seq::SliceRandom;
use rand::thread_rng;

use sudoku_core::{Board, Constraint, candidate_moves};

/// Builds a board with roughly `prefill_percent` of its cells filled
/// and `constraint_count` consecutive constraints between adjacent
/// cells.
///
/// Placement is rejection-sampled: a random empty cell gets a random
/// legal value, so the prefill is always mutually consistent. Late in
/// a dense prefill some cells admit nothing; the attempt cap keeps
/// generation from spinning, at the cost of occasionally placing
/// fewer cells than asked.
pub fn generate_board(
    size: usize,
    prefill_percent: u8,
    constraint_count: usize,
) -> Result<Board, String> {
    if prefill_percent > 100 {
        return Err(format!(
            "prefill percentage must be 0..=100, got {}",
            prefill_percent
        ));
    }
    let mut board = Board::new(size)?;
    let mut rng = thread_rng();

    let target = size * size * prefill_percent as usize / 100;
    let mut placed = 0;
    let mut attempts = 0;
    while placed < target && attempts < target * 50 {
        attempts += 1;
        let row = rng.gen_range(0..size);
        let col = rng.gen_range(0..size);
        if !board.is_empty_cell(row, col) {
            continue;
        }
        if let Some(&mv) = candidate_moves(&board, row, col).choose(&mut rng) {
            board.set(row, col, mv.value);
            placed += 1;
        }
    }

    add_random_constraints(&mut board, constraint_count, &mut rng);
    Ok(board)
}

/// Attaches up to `count` consecutive constraints between random
/// adjacent cell pairs, skipping pairs the prefill already violates
/// and pairs that are already constrained.
fn add_random_constraints(board: &mut Board, count: usize, rng: &mut impl Rng) {
    let n = board.size();
    let mut added = 0;
    let mut attempts = 0;
    while added < count && attempts < count * 50 {
        attempts += 1;
        let row = rng.gen_range(0..n) as u8;
        let col = rng.gen_range(0..n) as u8;
        let (or, oc) = if rng.gen_bool(0.5) {
            (row + 1, col)
        } else {
            (row, col + 1)
        };
        if or as usize >= n || oc as usize >= n {
            continue;
        }

        let constraint = Constraint::consecutive((row, col), (or, oc));
        let duplicate = board
            .constraints()
            .iter()
            .any(|c| c.touches(row, col) && c.touches(or, oc));
        if duplicate {
            continue;
        }

        let va = board.get(row as usize, col as usize);
        let vb = board.get(or as usize, oc as usize);
        if va != 0 && vb != 0 && !constraint.satisfied(va, vb) {
            continue;
        }

        board.add_constraint(constraint);
        added += 1;
    }
}

/// Reads a prefilled grid from a text file. Failure surfaces to the
/// caller; the game does not start on a half-read board.
pub fn load_board(path: &str) -> Result<Board, String> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;
    Board::parse(&contents)
}

#[cfg(test)]
#[path = "setup_tests.rs"]
mod setup_tests;
