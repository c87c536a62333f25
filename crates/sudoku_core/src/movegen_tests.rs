use super::*;
use crate::board::Constraint;

fn board_4x4() -> Board {
    Board::parse("1 2 3 4\n0 0 0 0\n0 0 0 0\n0 0 0 0\n").unwrap()
}

#[test]
fn rejects_occupied_target() {
    let board = board_4x4();
    assert!(!is_legal(&board, Move::new(0, 0, 2)));
}

#[test]
fn rejects_out_of_range_value() {
    let board = board_4x4();
    assert!(!is_legal(&board, Move::new(1, 0, 0)));
    assert!(!is_legal(&board, Move::new(1, 0, 5)));
}

#[test]
fn rejects_row_duplicate() {
    let mut board = Board::new(4).unwrap();
    board.set(1, 0, 3);
    assert!(!is_legal(&board, Move::new(1, 3, 3)));
    assert!(is_legal(&board, Move::new(1, 3, 4)));
}

#[test]
fn rejects_column_duplicate() {
    let mut board = Board::new(4).unwrap();
    board.set(0, 2, 3);
    assert!(!is_legal(&board, Move::new(3, 2, 3)));
    assert!(is_legal(&board, Move::new(3, 2, 1)));
}

#[test]
fn rejects_block_duplicate() {
    let mut board = Board::new(4).unwrap();
    board.set(0, 0, 2);
    // (1, 1) shares the top-left 2x2 block but neither row nor column.
    assert!(!is_legal(&board, Move::new(1, 1, 2)));
    assert!(is_legal(&board, Move::new(1, 1, 3)));
}

#[test]
fn rejects_broken_consecutive_constraint() {
    let mut board = Board::new(4).unwrap();
    board.set(0, 1, 3);
    board.add_constraint(Constraint::consecutive((0, 0), (0, 1)));
    assert!(!is_legal(&board, Move::new(0, 0, 1)));
    assert!(is_legal(&board, Move::new(0, 0, 2)));
    assert!(is_legal(&board, Move::new(0, 0, 4)));
}

#[test]
fn constraint_with_empty_other_end_does_not_bind() {
    let mut board = Board::new(4).unwrap();
    board.add_constraint(Constraint::consecutive((0, 0), (0, 1)));
    // (0, 1) is empty, so any in-range value is fine at (0, 0).
    assert!(is_legal(&board, Move::new(0, 0, 4)));
}

#[test]
fn candidates_are_descending() {
    let board = board_4x4();
    let moves = candidate_moves(&board, 1, 0);
    let values: Vec<u8> = moves.iter().map(|m| m.value).collect();
    // 1 is blocked by the column, 3 by the block.
    assert_eq!(values, vec![4, 2]);
    let mut sorted = values.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(values, sorted);
}

#[test]
fn candidates_empty_when_cell_is_blocked() {
    let mut board = Board::parse("0 2 3 4\n0 0 0 0\n0 0 0 0\n0 0 0 0\n").unwrap();
    // Only 1 fits at (0, 0); a constraint against the 3 below kills it.
    board.set(1, 0, 3);
    board.add_constraint(Constraint::consecutive((0, 0), (1, 0)));
    assert!(candidate_moves(&board, 0, 0).is_empty());
}

#[test]
fn all_moves_covers_every_empty_cell() {
    let board = board_4x4();
    let moves = all_moves(&board);
    assert!(moves.iter().all(|&m| is_legal(&board, m)));
    // Row 0 is full; the other 12 cells each contribute at least one move.
    assert!(moves.iter().all(|m| m.row > 0));
    for row in 1..4u8 {
        for col in 0..4u8 {
            assert!(moves.iter().any(|m| m.row == row && m.col == col));
        }
    }
}

#[test]
fn has_any_move_matches_enumeration() {
    let board = board_4x4();
    assert!(has_any_move(&board));

    let full = Board::parse("1 2 3 4\n3 4 1 2\n2 1 4 3\n4 3 2 1\n").unwrap();
    assert!(!has_any_move(&full));
    assert!(all_moves(&full).is_empty());
}
