//! Shared data structures and constants
//!
//! Pure data types used by the rules engine, the input layer and the terminal
//! renderer. Nothing in here performs I/O.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 visible rows (indexed 0-19, top to bottom)
//! - **Hidden rows**: 1 row above the visible field (row -1) where pieces spawn
//! - **Spawn anchor**: (4, -1)
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 333 | Gravity step interval (one row per tick) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, ShapeId, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let bar = ShapeId::try_from(4).unwrap();
//! assert_eq!(bar.get(), 4);
//! assert!(ShapeId::try_from(8).is_err());
//!
//! assert_eq!(Command::MoveLeft.offset(), Some((-1, 0)));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use std::fmt;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Visible board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Rows stored above the visible field. Pieces spawn here and may settle here.
pub const HIDDEN_ROWS: u8 = 1;

/// Column of the anchor of a freshly spawned piece
pub const SPAWN_COL: i8 = 4;

/// Row of the anchor of a freshly spawned piece (first hidden row)
pub const SPAWN_ROW: i8 = -1;

/// Gravity step interval in milliseconds (a third of a second)
pub const TICK_MS: u32 = 333;

/// A settled cell whose row is below this value ends the game.
pub const GAME_OVER_ROWS: i8 = 2;

/// Number of shapes in the catalog
pub const SHAPE_COUNT: u8 = 7;

/// Cell colors, one per shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Purple,
    LightBlue,
    Yellow,
    Orange,
    DarkBlue,
}

/// Catalog index of a shape, always within `1..=7`.
///
/// The only way to obtain a `ShapeId` from a raw number is [`ShapeId::try_from`],
/// so every id that reaches the shape library is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(u8);

impl ShapeId {
    /// All seven shapes in catalog order.
    pub const ALL: [ShapeId; SHAPE_COUNT as usize] = [
        ShapeId(1),
        ShapeId(2),
        ShapeId(3),
        ShapeId(4),
        ShapeId(5),
        ShapeId(6),
        ShapeId(7),
    ];

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for ShapeId {
    type Error = UnknownShape;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        if (1..=SHAPE_COUNT).contains(&id) {
            Ok(ShapeId(id))
        } else {
            Err(UnknownShape(id))
        }
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shape {}", self.0)
    }
}

/// Raised when a raw shape number is outside the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownShape(pub u8);

impl fmt::Display for UnknownShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown shape id {} (expected 1..={})", self.0, SHAPE_COUNT)
    }
}

impl std::error::Error for UnknownShape {}

/// Identity of one spawned piece. Issued once per spawn, strictly increasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub u32);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "piece#{}", self.0)
    }
}

/// A cell on the game board
///
/// Settled cells remember the piece they came from, so collision checks can
/// tell a piece's own cells apart from the rest of the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied { color: Color, piece_id: PieceId },
}

impl Cell {
    pub fn is_occupied(&self) -> bool {
        matches!(self, Cell::Occupied { .. })
    }

    pub fn piece_id(&self) -> Option<PieceId> {
        match self {
            Cell::Empty => None,
            Cell::Occupied { piece_id, .. } => Some(*piece_id),
        }
    }

    pub fn color(&self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Occupied { color, .. } => Some(*color),
        }
    }
}

/// Player commands consumed by the game loop
///
/// Produced by the input layer, never applied directly from the event context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// End the session immediately
    Quit,
}

impl Command {
    /// Name used in log events
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::Quit => "quit",
        }
    }

    /// Anchor translation `(dcol, drow)` for movement commands; `None` for `Quit`.
    pub fn offset(&self) -> Option<(i8, i8)> {
        match self {
            Command::MoveLeft => Some((-1, 0)),
            Command::MoveRight => Some((1, 0)),
            Command::SoftDrop => Some((0, 1)),
            Command::Quit => None,
        }
    }
}
