//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the game rules and state management for the
//! falling-block engine. It has **no dependencies** on UI, terminal or I/O:
//!
//! - **Deterministic**: piece selection goes through an injected
//!   [`PieceSource`], so a seed or a script reproduces a game exactly
//! - **Testable**: every transition is a synchronous method on [`GameState`]
//! - **Portable**: the terminal front end is just one consumer
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid of color indices, row clearing
//! - [`pieces`]: the seven shape templates and clockwise matrix rotation
//! - [`rng`]: piece sources (seeded LCG, fixed script)
//! - [`game_state`]: active piece, gravity, collision, lock sequence
//! - [`config`]: board size, drop interval, spawn anchor, line-clear scan
//!
//! # Game Rules
//!
//! - Pieces spawn at a fixed anchor and fall one row per drop interval
//! - Moves and rotations that would collide are reverted (no wall kicks)
//! - A piece that cannot fall freezes; full rows are cleared bottom to top
//! - If the next piece collides on spawn the board is reset to empty
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameConfig, GameState, ScriptedSource};
//! use blockfall_types::{GameAction, PieceKind};
//!
//! // Always spawn O pieces.
//! let mut game = GameState::new(GameConfig::default(), ScriptedSource::repeat(0));
//! assert_eq!(game.active().kind, PieceKind::O);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! assert_eq!(game.active().x, 4);
//!
//! // 2000ms of gravity in 16ms frames: one step after the first 1000ms.
//! for _ in 0..125 {
//!     game.tick(16);
//! }
//! assert_eq!(game.active().y, 1);
//! ```

pub mod board;
pub mod config;
pub mod game_state;
pub mod pieces;
pub mod rng;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows, LineClearScan};
pub use config::GameConfig;
pub use game_state::{collides, ActivePiece, GameState, LockEvent, Step};
pub use pieces::{random_template, rotate_clockwise, template, Shape};
pub use rng::{PieceSource, ScriptedSource, SimpleRng};
