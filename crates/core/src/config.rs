//! Engine configuration

use crate::board::LineClearScan;
use crate::pieces::MAX_SHAPE_SIZE;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, DROP_INTERVAL_MS, SPAWN_POSITION};

/// Fixed parameters of one game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Board columns
    pub width: usize,
    /// Board rows
    pub height: usize,
    /// Accumulated milliseconds per gravity step
    pub drop_interval_ms: u32,
    /// Anchor (x, y) of every freshly spawned piece
    pub spawn: (i32, i32),
    pub line_clear: LineClearScan,
}

impl GameConfig {
    /// Config for a custom board size, with the spawn column centered for the
    /// widest template.
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            spawn: (centered_spawn_x(width), SPAWN_POSITION.1),
            ..Self::default()
        }
    }
}

fn centered_spawn_x(width: usize) -> i32 {
    (width.saturating_sub(MAX_SHAPE_SIZE) / 2) as i32
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH as usize,
            height: BOARD_HEIGHT as usize,
            drop_interval_ms: DROP_INTERVAL_MS,
            spawn: SPAWN_POSITION,
            line_clear: LineClearScan::SinglePass,
        }
    }
}
