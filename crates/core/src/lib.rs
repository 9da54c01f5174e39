//! Core game logic - the rules engine of the falling-block game
//!
//! This crate owns the playing field, the falling piece, gravity, collision,
//! line clearing, scoring and end-of-game detection. It performs no terminal
//! I/O: rendering goes through the [`Renderer`] trait and player input arrives
//! as [`Command`](types::Command)s through the [`CommandQueue`].
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven-shape catalog
//! - [`board`]: 10x20 grid (plus a hidden spawn row) of settled cells
//! - [`collision`]: the single movement predicate
//! - [`piece`]: the active falling piece
//! - [`line_clear`]: full-row removal with downward shift
//! - [`game`]: session state machine and the game loop
//! - [`commands`]: command queue between input and the loop
//! - [`ticker`]: gravity pacing
//! - [`rng`]: uniform random shape selection
//! - [`render`]: render collaborator trait
//!
//! # Game Rules
//!
//! - Pieces spawn at (4, -1), one row above the visible field
//! - Gravity moves the piece one row per tick (333ms)
//! - Left, right and soft drop are applied between ticks; blocked moves are ignored
//! - A piece that cannot move down settles permanently
//! - Every full row scores one point and everything above it drops one row
//! - The game ends when a spawn is blocked or the stack reaches the top two rows
//!
//! # Example
//!
//! ```
//! use blockfall_core::{CommandQueue, GameLoop, ManualTicker, NullRenderer, Outcome};
//! use blockfall_types::ShapeId;
//!
//! let square = ShapeId::try_from(5).unwrap();
//! let mut game = GameLoop::new(move || square, ManualTicker::new());
//! let queue = CommandQueue::new();
//!
//! let summary = game.run(&mut NullRenderer, &queue).unwrap();
//! assert_eq!(summary.outcome, Outcome::GameOver);
//! ```

pub mod board;
pub mod collision;
pub mod commands;
pub mod game;
pub mod line_clear;
pub mod piece;
pub mod render;
pub mod rng;
pub mod shapes;
pub mod ticker;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::{can_move, fits};
pub use commands::CommandQueue;
pub use game::{GameLoop, GameSession, Outcome, Phase, SessionSummary};
pub use line_clear::{clear_full_rows, ClearedRows};
pub use piece::Piece;
pub use render::{NullRenderer, Renderer};
pub use rng::{RandomShapes, ShapeSource, SimpleRng};
pub use shapes::{shape, shape_offsets, Shape};
pub use ticker::{IntervalTicker, ManualTicker, Ticker};
