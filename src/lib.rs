//! Falling-block puzzle game for the terminal (workspace facade crate).
//!
//! The rules engine, input mapping and terminal renderer live in dedicated
//! crates under `crates/`; this package re-exports them under one roof.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
