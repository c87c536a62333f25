//! Drives one full game through the referee and collects statistics.

use sudoku_core::{Board, DecisionStats, Outcome, Referee, Side, SideId, TurnOutcome};

/// Per-side aggregates over one game's decisions.
#[derive(Debug, Clone, Copy, Default)]
pub struct SideStats {
    pub decisions: u32,
    pub total_nodes: u64,
    pub min_nodes: u64,
    pub max_nodes: u64,
    pub total_millis: u64,
}

impl SideStats {
    pub fn record(&mut self, stats: &DecisionStats) {
        if self.decisions == 0 {
            self.min_nodes = stats.nodes;
            self.max_nodes = stats.nodes;
        } else {
            self.min_nodes = self.min_nodes.min(stats.nodes);
            self.max_nodes = self.max_nodes.max(stats.nodes);
        }
        self.decisions += stats.moves;
        self.total_nodes += stats.nodes;
        self.total_millis += stats.elapsed.as_millis() as u64;
    }

    pub fn mean_nodes(&self) -> f64 {
        if self.decisions == 0 {
            return 0.0;
        }
        self.total_nodes as f64 / self.decisions as f64
    }
}

/// Outcome of one finished game.
#[derive(Debug)]
pub struct SessionReport {
    pub outcome: Outcome,
    pub scores: [i32; 2],
    pub turns: u32,
    pub stats: [SideStats; 2],
}

/// Configuration for running a single game.
pub struct GameSession {
    /// Print the board and a line per turn.
    pub verbose: bool,
    /// Collect per-decision timing and node counts.
    pub collect_stats: bool,
    /// Hard ceiling on turns, in case a side keeps proposing illegal
    /// moves on a board that still has legal ones.
    pub max_turns: u32,
}

impl Default for GameSession {
    fn default() -> Self {
        Self {
            verbose: true,
            collect_stats: false,
            max_turns: 1000,
        }
    }
}

impl GameSession {
    pub fn new(verbose: bool, collect_stats: bool) -> Self {
        Self {
            verbose,
            collect_stats,
            ..Default::default()
        }
    }

    /// Plays a game to completion. Side A moves first.
    pub fn run(&self, side_a: &mut dyn Side, side_b: &mut dyn Side, board: Board) -> SessionReport {
        let mut referee = Referee::new(side_a, side_b, board);
        let mut stats = [SideStats::default(); 2];
        let mut turns = 0;

        if self.verbose {
            println!(
                "=== {} (A) vs {} (B) ===",
                referee.side_name(SideId::A),
                referee.side_name(SideId::B)
            );
            println!("{}", referee.board().render());
        }

        while !referee.is_game_over() && turns < self.max_turns {
            let report = if self.collect_stats {
                referee.apply_turn_timed()
            } else {
                referee.apply_turn()
            };
            turns += 1;

            if let Some(decision_stats) = report.stats {
                stats[report.side.idx()].record(&decision_stats);
            }

            if self.verbose {
                let tag = match report.side {
                    SideId::A => "A",
                    SideId::B => "B",
                };
                match report.outcome {
                    TurnOutcome::Played(mv) => {
                        println!(
                            "{}: {} at ({}, {})  [A {} - B {}]",
                            tag,
                            mv.value,
                            mv.row,
                            mv.col,
                            referee.score(SideId::A),
                            referee.score(SideId::B)
                        );
                    }
                    TurnOutcome::Skipped => println!("{}: no move available, turn skipped", tag),
                    TurnOutcome::Penalized => {
                        println!(
                            "{}: illegal proposal, penalty  [A {} - B {}]",
                            tag,
                            referee.score(SideId::A),
                            referee.score(SideId::B)
                        );
                    }
                }
            }
        }

        if self.verbose {
            println!();
            println!("{}", referee.board().render());
            println!(
                "Final: A {} - B {} ({:?})",
                referee.score(SideId::A),
                referee.score(SideId::B),
                referee.winner()
            );
        }

        SessionReport {
            outcome: referee.winner(),
            scores: [referee.score(SideId::A), referee.score(SideId::B)],
            turns,
            stats,
        }
    }
}
