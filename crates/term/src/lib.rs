//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the view draws into a plain
//! framebuffer and the renderer flushes it to the terminal with crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Redraw only what changed between frames
//! - Control the aspect ratio (2 chars wide per board cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport, PALETTE};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
