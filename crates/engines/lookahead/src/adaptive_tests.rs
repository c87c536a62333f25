use super::*;

#[test]
fn branching_ratio_is_one_on_untouched_board() {
    // Every value is legal in every empty cell, so the ratio is exact.
    let board = Board::new(4).unwrap();
    assert_eq!(branching_ratio(&board), 1.0);
}

#[test]
fn branching_ratio_is_one_on_full_board() {
    let board = Board::parse("1 2 3 4\n3 4 1 2\n2 1 4 3\n4 3 2 1\n").unwrap();
    assert_eq!(branching_ratio(&board), 1.0);
}

#[test]
fn branching_ratio_stays_in_unit_interval() {
    let board = Board::parse("1 0 0 4\n0 0 0 0\n0 0 0 0\n2 0 0 3\n").unwrap();
    let rho = branching_ratio(&board);
    assert!(rho > 0.0 && rho < 1.0, "rho = {rho}");
}

#[test]
fn depth_grows_with_budget() {
    let budgets = [1e2, 1e4, 1e6, 1e9, 1e300];
    let mut previous = 0;
    for budget in budgets {
        let depth = adaptive_depth(40, 9, 0.5, budget);
        assert!(depth >= previous, "depth shrank at budget {budget}");
        previous = depth;
    }
}

#[test]
fn depth_clamps_low_and_high() {
    // Starved budget still yields the 3-ply floor.
    assert_eq!(adaptive_depth(40, 9, 0.5, 1.0), 3);
    // Never deeper than one ply per free cell.
    assert_eq!(adaptive_depth(2, 9, 0.5, 1.0), 2);
    assert_eq!(adaptive_depth(40, 9, 0.5, 1e300), 40);
}

#[test]
fn depth_on_full_board_is_one() {
    assert_eq!(adaptive_depth(0, 9, 1.0, NODE_BUDGET), 1);
}

#[test]
fn small_boards_use_fixed_depth() {
    let board = Board::new(4).unwrap();
    assert_eq!(pick_depth(&board, 1.0), 3);
    assert_eq!(pick_depth(&board, 1e300), 3);
}

#[test]
fn large_board_depth_comes_from_the_estimate() {
    let board = Board::new(9).unwrap();
    let depth = pick_depth(&board, NODE_BUDGET);
    assert_eq!(
        depth,
        adaptive_depth(81, 9, branching_ratio(&board), NODE_BUDGET)
    );
}
