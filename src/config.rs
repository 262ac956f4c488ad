//! Startup configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `BLOCKFALL_SEED` | system clock | Piece RNG seed |
//! | `BLOCKFALL_DROP_MS` | 1000 | Gravity interval |
//! | `BLOCKFALL_COLS` / `BLOCKFALL_ROWS` | 10 / 20 | Board size |
//! | `BLOCKFALL_LINE_CLEAR` | `single-pass` | `single-pass` or `exhaustive` |
//! | `BLOCKFALL_LOG_PATH` | unset | JSON-lines session log |
//!
//! Unparsable values fall back to the default.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{ensure, Result};

use crate::core::board::MAX_BOARD_SIDE;
use crate::core::pieces::MAX_SHAPE_SIZE;
use crate::core::{GameConfig, LineClearScan};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub game: GameConfig,
    pub seed: u32,
    pub log_path: Option<String>,
}

impl AppConfig {
    /// Read the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let parsed = |key: &str| lookup(key).and_then(|s| s.trim().parse::<u32>().ok());

        let defaults = GameConfig::default();
        let width = parsed("BLOCKFALL_COLS").map_or(defaults.width, |v| v as usize);
        let height = parsed("BLOCKFALL_ROWS").map_or(defaults.height, |v| v as usize);

        let mut game = if (width, height) == (defaults.width, defaults.height) {
            defaults
        } else {
            GameConfig::with_size(width, height)
        };
        game.drop_interval_ms = parsed("BLOCKFALL_DROP_MS").unwrap_or(defaults.drop_interval_ms);
        game.line_clear = lookup("BLOCKFALL_LINE_CLEAR")
            .and_then(|s| LineClearScan::from_str(&s))
            .unwrap_or_default();

        let seed = parsed("BLOCKFALL_SEED").unwrap_or_else(clock_seed);

        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            game,
            seed,
            log_path,
        }
    }

    /// Reject settings the engine cannot run with.
    pub fn validate(&self) -> Result<()> {
        let game = &self.game;
        ensure!(
            (MAX_SHAPE_SIZE..=MAX_BOARD_SIDE).contains(&game.width),
            "board width {} outside {}..={}",
            game.width,
            MAX_SHAPE_SIZE,
            MAX_BOARD_SIDE
        );
        ensure!(
            (MAX_SHAPE_SIZE..=MAX_BOARD_SIDE).contains(&game.height),
            "board height {} outside {}..={}",
            game.height,
            MAX_SHAPE_SIZE,
            MAX_BOARD_SIDE
        );
        ensure!(game.drop_interval_ms > 0, "drop interval must be positive");
        let (spawn_x, spawn_y) = game.spawn;
        ensure!(
            spawn_x >= 0 && spawn_x as usize + MAX_SHAPE_SIZE <= game.width,
            "spawn column {} leaves no room for a {}-wide piece",
            spawn_x,
            MAX_SHAPE_SIZE
        );
        ensure!(
            spawn_y >= 0 && spawn_y as usize + MAX_SHAPE_SIZE <= game.height,
            "spawn row {} leaves no room for a {}-tall piece",
            spawn_y,
            MAX_SHAPE_SIZE
        );
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            seed: 1,
            log_path: None,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> AppConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = config(&[("BLOCKFALL_SEED", "42")]);
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.game, GameConfig::default());
        assert_eq!(cfg.log_path, None);
        cfg.validate().unwrap();
    }

    #[test]
    fn overrides_are_applied() {
        let cfg = config(&[
            ("BLOCKFALL_SEED", " 7 "),
            ("BLOCKFALL_DROP_MS", "250"),
            ("BLOCKFALL_COLS", "14"),
            ("BLOCKFALL_ROWS", "24"),
            ("BLOCKFALL_LINE_CLEAR", "exhaustive"),
            ("BLOCKFALL_LOG_PATH", "/tmp/blockfall.jsonl"),
        ]);
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.game.drop_interval_ms, 250);
        assert_eq!((cfg.game.width, cfg.game.height), (14, 24));
        assert_eq!(cfg.game.spawn, (5, 0));
        assert_eq!(cfg.game.line_clear, LineClearScan::Exhaustive);
        assert_eq!(cfg.log_path.as_deref(), Some("/tmp/blockfall.jsonl"));
        cfg.validate().unwrap();
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        let cfg = config(&[
            ("BLOCKFALL_SEED", "3"),
            ("BLOCKFALL_DROP_MS", "fast"),
            ("BLOCKFALL_COLS", "-2"),
            ("BLOCKFALL_LINE_CLEAR", "sometimes"),
            ("BLOCKFALL_LOG_PATH", "  "),
        ]);
        assert_eq!(cfg.game, GameConfig::default());
        assert_eq!(cfg.log_path, None);
    }

    #[test]
    fn validate_rejects_tiny_board_and_zero_interval() {
        let narrow = config(&[("BLOCKFALL_SEED", "1"), ("BLOCKFALL_COLS", "3")]);
        assert!(narrow.validate().is_err());

        let huge = config(&[("BLOCKFALL_SEED", "1"), ("BLOCKFALL_ROWS", "65")]);
        assert!(huge.validate().is_err());

        let frozen = config(&[("BLOCKFALL_SEED", "1"), ("BLOCKFALL_DROP_MS", "0")]);
        let err = frozen.validate().unwrap_err();
        assert!(err.to_string().contains("drop interval"));
    }
}
