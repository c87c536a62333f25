use super::*;
use sudoku_core::{Move, is_legal};

/// Every filled cell must itself be a legal placement on the board
/// with that cell cleared out.
fn assert_mutually_consistent(board: &Board) {
    let n = board.size();
    let mut probe = board.clone();
    for row in 0..n {
        for col in 0..n {
            let value = board.get(row, col);
            if value == 0 {
                continue;
            }
            probe.set(row, col, 0);
            let mv = Move::new(row as u8, col as u8, value);
            assert!(is_legal(&probe, mv), "inconsistent prefill at {mv:?}");
            probe.set(row, col, value);
        }
    }
}

#[test]
fn generated_prefill_is_mutually_consistent() {
    for _ in 0..10 {
        let board = generate_board(9, 40, 0).unwrap();
        assert!(board.count_empty() < 81);
        assert_mutually_consistent(&board);
    }
}

#[test]
fn generated_constraints_are_adjacent_and_compatible() {
    let board = generate_board(9, 40, 10).unwrap();
    for c in board.constraints() {
        let dr = c.a.0.abs_diff(c.b.0);
        let dc = c.a.1.abs_diff(c.b.1);
        assert_eq!(dr + dc, 1, "endpoints not adjacent: {c:?}");

        let va = board.get(c.a.0 as usize, c.a.1 as usize);
        let vb = board.get(c.b.0 as usize, c.b.1 as usize);
        if va != 0 && vb != 0 {
            assert!(c.satisfied(va, vb), "prefill violates {c:?}");
        }
    }
}

#[test]
fn zero_percent_prefill_leaves_the_board_empty() {
    let board = generate_board(4, 0, 0).unwrap();
    assert_eq!(board.count_empty(), 16);
}

#[test]
fn bad_parameters_are_rejected() {
    assert!(generate_board(5, 40, 0).is_err());
    assert!(generate_board(9, 101, 0).is_err());
}

#[test]
fn loading_a_missing_file_fails() {
    assert!(load_board("no/such/board.txt").is_err());
}
