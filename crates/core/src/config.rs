//! Game configuration.
//!
//! Defaults match the classic 4x4 game capped at 2048. Every field can be
//! overridden from the environment:
//!
//! - `TILE_MERGE_SIZE`: grid dimension (default 4)
//! - `TILE_MERGE_MAX_LEVEL`: merge cap (default 11)
//! - `TILE_MERGE_SPAWN_LEVEL`: level of spawned tiles (default 1)
//! - `TILE_MERGE_SEED`: RNG seed for spawns (default 1)

use std::str::FromStr;

use crate::error::BoardError;
use crate::types::{Level, DEFAULT_MAX_LEVEL, DEFAULT_SIZE, DEFAULT_SPAWN_LEVEL, LEVEL_LIMIT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
    pub max_level: Level,
    pub spawn_level: Level,
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            max_level: DEFAULT_MAX_LEVEL,
            spawn_level: DEFAULT_SPAWN_LEVEL,
            seed: 1,
        }
    }
}

impl GameConfig {
    /// Create from environment variables, falling back to defaults for
    /// anything unset or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        fn parse<T: FromStr>(value: Option<String>) -> Option<T> {
            value.and_then(|s| s.trim().parse().ok())
        }

        let defaults = Self::default();
        Self {
            size: parse(lookup("TILE_MERGE_SIZE")).unwrap_or(defaults.size),
            max_level: parse(lookup("TILE_MERGE_MAX_LEVEL")).unwrap_or(defaults.max_level),
            spawn_level: parse(lookup("TILE_MERGE_SPAWN_LEVEL")).unwrap_or(defaults.spawn_level),
            seed: parse(lookup("TILE_MERGE_SEED")).unwrap_or(defaults.seed),
        }
    }

    pub fn validate(&self) -> Result<(), BoardError> {
        if self.size == 0 || !(2..=LEVEL_LIMIT).contains(&self.max_level) {
            return Err(BoardError::InvalidDimensions {
                size: self.size,
                max_level: self.max_level,
            });
        }
        if self.spawn_level >= self.max_level {
            return Err(BoardError::LevelTooHigh {
                level: self.spawn_level,
                max_level: self.max_level,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert_eq!(config.size, 4);
        assert_eq!(config.max_level, 11);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_lookup_overrides_and_ignores_garbage() {
        let vars: HashMap<&str, &str> = [
            ("TILE_MERGE_SIZE", "5"),
            ("TILE_MERGE_MAX_LEVEL", "not-a-number"),
            ("TILE_MERGE_SEED", " 42 "),
        ]
        .into_iter()
        .collect();

        let config = GameConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.size, 5);
        assert_eq!(config.max_level, DEFAULT_MAX_LEVEL);
        assert_eq!(config.spawn_level, DEFAULT_SPAWN_LEVEL);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_cap_above_limit_rejected() {
        let config = GameConfig {
            max_level: 64,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(BoardError::InvalidDimensions { max_level: 64, .. })
        ));
    }

    #[test]
    fn test_spawn_level_must_be_below_cap() {
        let config = GameConfig {
            spawn_level: 11,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(BoardError::LevelTooHigh {
                level: 11,
                max_level: 11
            })
        );
    }
}
