//! Arena Runner for Constraint-Sudoku Duels
//!
//! This crate provides infrastructure for:
//! - Driving single games through the referee (human or automated)
//! - Running repeated-game series between two sides
//! - Generating prefilled boards with consecutive constraints
//! - Collecting per-side search statistics
//!
//! # Usage
//!
//! ```bash
//! # One verbose game, adaptive vs random, generated 9x9 board
//! cargo run -p arena -- play adaptive random --size 9
//!
//! # 50-game series, alpha-beta vs minimax at depth 4
//! cargo run -p arena -- simulate alphabeta minimax --games 50 --depth 4
//! ```

mod config;
mod human;
mod series;
mod session;
mod setup;

pub use config::*;
pub use human::*;
pub use series::*;
pub use session::*;
pub use setup::*;
