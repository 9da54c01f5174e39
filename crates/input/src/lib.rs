//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events (and abstract key symbols) into
//! [`crate::types::Command`]s and feeds them to the game loop's command queue.
//! Nothing here mutates game state.

pub mod controller;
pub mod map;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use controller::InputController;
pub use map::{handle_key_event, handle_key_symbol, should_quit};
