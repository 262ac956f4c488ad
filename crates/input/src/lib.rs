//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Every key
//! press yields at most one action; auto-repeat and release events are
//! ignored, so holding a key does nothing beyond the first press.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
