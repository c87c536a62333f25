use super::*;
use crate::board::Constraint;

/// Plays back a fixed script of proposals, then passes forever.
struct Scripted {
    moves: Vec<Option<Move>>,
    next: usize,
}

impl Scripted {
    fn new(moves: Vec<Option<Move>>) -> Self {
        Self { moves, next: 0 }
    }
}

impl Side for Scripted {
    fn propose_move(&mut self, _board: &Board) -> Option<Move> {
        let mv = self.moves.get(self.next).copied().flatten();
        self.next += 1;
        mv
    }
    fn name(&self) -> &str {
        "scripted"
    }
}

fn solved_minus_corner() -> Board {
    Board::parse("0 2 3 4\n3 4 1 2\n2 1 4 3\n4 3 2 1\n").unwrap()
}

#[test]
fn legal_move_scores_its_value() {
    let mut a = Scripted::new(vec![Some(Move::new(0, 0, 3))]);
    let mut b = Scripted::new(vec![]);
    let mut referee = Referee::new(&mut a, &mut b, Board::new(4).unwrap());

    let report = referee.apply_turn();
    assert_eq!(report.side, SideId::A);
    assert_eq!(report.outcome, TurnOutcome::Played(Move::new(0, 0, 3)));
    assert_eq!(referee.score(SideId::A), 3);
    assert_eq!(referee.score(SideId::B), 0);
    assert_eq!(referee.board().get(0, 0), 3);
    assert_eq!(referee.to_move(), SideId::B);
}

#[test]
fn illegal_proposal_costs_n_and_leaves_board_untouched() {
    let mut a = Scripted::new(vec![Some(Move::new(0, 0, 9))]);
    let mut b = Scripted::new(vec![]);
    let mut referee = Referee::new(&mut a, &mut b, Board::new(4).unwrap());

    let report = referee.apply_turn();
    assert_eq!(report.outcome, TurnOutcome::Penalized);
    assert_eq!(referee.score(SideId::A), -4);
    assert!(referee.board().is_empty_cell(0, 0));
    assert_eq!(referee.to_move(), SideId::B);
}

#[test]
fn pass_is_penalized_like_an_illegal_move() {
    let mut a = Scripted::new(vec![None]);
    let mut b = Scripted::new(vec![]);
    let mut referee = Referee::new(&mut a, &mut b, Board::new(4).unwrap());

    assert_eq!(referee.apply_turn().outcome, TurnOutcome::Penalized);
    assert_eq!(referee.score(SideId::A), -4);
}

#[test]
fn completing_row_column_and_block_pays_triple_bonus() {
    let mut a = Scripted::new(vec![Some(Move::new(0, 0, 1))]);
    let mut b = Scripted::new(vec![]);
    let mut referee = Referee::new(&mut a, &mut b, solved_minus_corner());

    assert_eq!(
        referee.apply_turn().outcome,
        TurnOutcome::Played(Move::new(0, 0, 1))
    );
    assert_eq!(referee.score(SideId::A), 1 + 3 * 16);
    assert!(referee.is_game_over());
    assert_eq!(referee.winner(), Outcome::SideA);
}

#[test]
fn blocked_last_cell_ends_game_by_stalemate_not_fill() {
    let mut board = solved_minus_corner();
    // Only 1 fits at (0, 0); the constraint against the 3 below
    // forbids it, so no legal placement exists anywhere.
    board.add_constraint(Constraint::consecutive((0, 0), (1, 0)));

    let mut a = Scripted::new(vec![]);
    let mut b = Scripted::new(vec![]);
    let mut referee = Referee::new(&mut a, &mut b, board);

    assert!(referee.is_game_over());
    assert!(referee.out_of_moves());
    assert!(!referee.board().is_full());
}

#[test]
fn out_of_moves_turn_is_skipped_without_penalty() {
    let mut board = solved_minus_corner();
    board.add_constraint(Constraint::consecutive((0, 0), (1, 0)));

    let mut a = Scripted::new(vec![Some(Move::new(0, 0, 1))]);
    let mut b = Scripted::new(vec![]);
    let mut referee = Referee::new(&mut a, &mut b, board);

    let report = referee.apply_turn();
    assert_eq!(report.outcome, TurnOutcome::Skipped);
    assert_eq!(referee.score(SideId::A), 0);
    assert_eq!(referee.to_move(), SideId::B);
}

#[test]
fn equal_scores_tie() {
    let mut a = Scripted::new(vec![]);
    let mut b = Scripted::new(vec![]);
    let referee = Referee::new(&mut a, &mut b, Board::new(4).unwrap());
    assert_eq!(referee.winner(), Outcome::Tie);
}

#[test]
fn timed_turn_reports_diagnostics() {
    let mut a = Scripted::new(vec![Some(Move::new(0, 0, 3))]);
    let mut b = Scripted::new(vec![]);
    let mut referee = Referee::new(&mut a, &mut b, Board::new(4).unwrap());

    let report = referee.apply_turn_timed();
    let stats = report.stats.expect("timed turn carries stats");
    assert_eq!(stats.moves, 1);
    assert_eq!(referee.score(SideId::A), 3);
}
