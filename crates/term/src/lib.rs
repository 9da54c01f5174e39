//! Terminal render collaborator.
//!
//! Renders board cell updates into a framebuffer and flushes only the changed
//! runs to the terminal.
//!
//! - [`PlayfieldView`]: pure drawing surface (bordered board, game-over box)
//! - [`TerminalRenderer`]: terminal setup/teardown and diff flushing
//! - [`TerminalScreen`]: both together, implementing the engine's render trait

pub mod fb;
pub mod playfield;
pub mod renderer;
pub mod screen;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style, Weight};
pub use playfield::{color_rgb, PlayfieldView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use screen::TerminalScreen;
