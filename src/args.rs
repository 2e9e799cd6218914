//! Command-line arguments for the `tile-merge` binary.
//!
//! Flags override the environment (`TILE_MERGE_*`, see [`GameConfig::from_env`]),
//! which overrides the built-in defaults.

use std::path::PathBuf;

use clap::Parser;

use crate::core::GameConfig;
use crate::types::{Direction, Level};

#[derive(Parser, Debug)]
#[command(name = "tile-merge", about = "Slide and merge tiles in the terminal")]
pub struct Args {
    /// Grid dimension.
    #[arg(long)]
    pub size: Option<usize>,
    /// Highest level a merge may produce (11 = 2048).
    #[arg(long)]
    pub max_level: Option<Level>,
    /// Level of spawned tiles.
    #[arg(long)]
    pub spawn_level: Option<Level>,
    /// Seed for tile spawns.
    #[arg(long)]
    pub seed: Option<u32>,
    /// Resume from a saved board.
    #[arg(long)]
    pub load: Option<PathBuf>,
    /// Save the board here on exit.
    #[arg(long)]
    pub save: Option<PathBuf>,
    /// Play these moves without a terminal UI, e.g. "left,up,right", then print the board.
    #[arg(long, value_delimiter = ',', value_parser = parse_direction)]
    pub moves: Option<Vec<Direction>>,
}

impl Args {
    /// Resolve the game configuration: flags over environment over defaults.
    pub fn config(&self) -> GameConfig {
        self.config_over(GameConfig::from_env())
    }

    fn config_over(&self, base: GameConfig) -> GameConfig {
        GameConfig {
            size: self.size.unwrap_or(base.size),
            max_level: self.max_level.unwrap_or(base.max_level),
            spawn_level: self.spawn_level.unwrap_or(base.spawn_level),
            seed: self.seed.unwrap_or(base.seed),
        }
    }
}

fn parse_direction(s: &str) -> Result<Direction, String> {
    Direction::from_str(s.trim()).ok_or_else(|| format!("unknown direction '{}'", s))
}
