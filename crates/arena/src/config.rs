//! Arena configuration, optionally loaded from a TOML file.

use serde::{Deserialize, Serialize};

/// Defaults for games the CLI flags do not override.
///
/// Every field has a default, so a config file may set any subset of
/// keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Board side length; must be a perfect square.
    pub board_size: usize,
    /// Percentage of cells filled before the game starts.
    pub prefill_percent: u8,
    /// Number of consecutive constraints to generate.
    pub constraints: usize,
    /// Games per series.
    pub games: u32,
    /// Search depth for the fixed-depth sides.
    pub depth: u32,
    /// Print boards and per-turn lines.
    pub verbose: bool,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            board_size: 9,
            prefill_percent: 40,
            constraints: 10,
            games: 10,
            depth: 3,
            verbose: true,
        }
    }
}

impl ArenaConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;
        toml::from_str(&contents).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &str) -> Self {
        Self::load(path).unwrap_or_default()
    }
}
