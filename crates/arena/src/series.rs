//! Repeated-game series between two sides.

use serde::{Deserialize, Serialize};

use sudoku_core::{Board, Outcome, Side};

use crate::session::GameSession;

/// Tally of a series, from side A's perspective.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeriesResult {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl SeriesResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.ties
    }

    /// Score from side A's perspective (1 per win, 0.5 per tie).
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.ties as f64) / total
    }

    /// Save the tally to a JSON file.
    pub fn save(&self, path: &str) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write file: {}", e))
    }

    /// Load a previously saved tally.
    pub fn load(path: &str) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse JSON: {}", e))
    }
}

/// Plays `games` games, alternating which side moves first, on a
/// fresh board per game from `next_board`.
///
/// The tally is always from `side_a`'s perspective regardless of who
/// moved first in a given game.
pub fn run_series<F>(
    side_a: &mut dyn Side,
    side_b: &mut dyn Side,
    games: u32,
    verbose: bool,
    mut next_board: F,
) -> SeriesResult
where
    F: FnMut(u32) -> Board,
{
    let session = GameSession::new(false, false);
    let mut result = SeriesResult::new();

    for game_num in 0..games {
        let board = next_board(game_num);
        let a_moves_first = game_num % 2 == 0;

        let outcome = if a_moves_first {
            session.run(side_a, side_b, board).outcome
        } else {
            match session.run(side_b, side_a, board).outcome {
                Outcome::SideA => Outcome::SideB,
                Outcome::SideB => Outcome::SideA,
                Outcome::Tie => Outcome::Tie,
            }
        };

        match outcome {
            Outcome::SideA => result.wins += 1,
            Outcome::SideB => result.losses += 1,
            Outcome::Tie => result.ties += 1,
        }

        if verbose {
            let first = if a_moves_first { "A" } else { "B" };
            let label = match outcome {
                Outcome::SideA => "A",
                Outcome::SideB => "B",
                Outcome::Tie => "tie",
            };
            println!(
                "Game {}/{}: {} ({} first) - Score: {}-{}-{}",
                game_num + 1,
                games,
                label,
                first,
                result.wins,
                result.losses,
                result.ties
            );
        }
    }

    result
}
