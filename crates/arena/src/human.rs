//! Console-input side.

use std::io::{self, BufRead, Write};

use sudoku_core::{Board, Move, Side, is_legal};

/// Reads moves as `row col value` (0-based coordinates) from stdin.
///
/// An obviously illegal entry gets a warning and a re-prompt; the
/// player may still force it through with `play`, eating the penalty.
/// `pass` passes (also penalized), EOF passes.
pub struct HumanSide {
    label: String,
    pending: Option<Move>,
}

impl HumanSide {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            pending: None,
        }
    }

    fn parse_entry(line: &str) -> Option<Move> {
        let mut parts = line.split_whitespace();
        let row = parts.next()?.parse().ok()?;
        let col = parts.next()?.parse().ok()?;
        let value = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Move::new(row, col, value))
    }
}

impl Side for HumanSide {
    fn propose_move(&mut self, board: &Board) -> Option<Move> {
        println!("{}", board.render());
        let stdin = io::stdin();
        loop {
            print!("{} move (row col value | pass | play): ", self.label);
            io::stdout().flush().ok();

            let mut line = String::new();
            match stdin.lock().read_line(&mut line) {
                Ok(0) | Err(_) => return None,
                Ok(_) => {}
            }
            let entry = line.trim();

            match entry {
                "pass" => return None,
                // Confirm the previously warned-about entry.
                "play" => {
                    if let Some(mv) = self.pending.take() {
                        return Some(mv);
                    }
                    eprintln!("nothing to confirm");
                    continue;
                }
                _ => {}
            }

            match Self::parse_entry(entry) {
                Some(mv) if is_legal(board, mv) => return Some(mv),
                Some(mv) => {
                    eprintln!("{mv:?} is not legal here; 'play' to force it anyway");
                    self.pending = Some(mv);
                }
                None => eprintln!("expected: row col value"),
            }
        }
    }

    fn name(&self) -> &str {
        &self.label
    }
}
