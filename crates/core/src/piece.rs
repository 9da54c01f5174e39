//! Active falling piece

use crate::collision::can_move;
use crate::shapes::shape;
use crate::types::{Color, PieceId, ShapeId, SPAWN_COL, SPAWN_ROW};
use crate::Board;

/// A piece that has not settled yet
///
/// Only its anchor changes while it falls. Once settled, its identity survives
/// only as the `piece_id` tag on board cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub shape: ShapeId,
    pub col: i8,
    pub row: i8,
    pub id: PieceId,
}

impl Piece {
    /// Create a piece at the spawn anchor
    pub fn spawn(shape: ShapeId, id: PieceId) -> Self {
        Self::at(shape, SPAWN_COL, SPAWN_ROW, id)
    }

    pub fn at(shape: ShapeId, col: i8, row: i8, id: PieceId) -> Self {
        Self {
            shape,
            col,
            row,
            id,
        }
    }

    pub fn color(&self) -> Color {
        shape(self.shape).color
    }

    /// Absolute (col, row) of the four cells
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.cells_at(0, 0)
    }

    /// Absolute cells after a translation by (dcol, drow)
    pub fn cells_at(&self, dcol: i8, drow: i8) -> [(i8, i8); 4] {
        shape(self.shape)
            .offsets
            .map(|(dx, dy)| (self.col + dx + dcol, self.row + dy + drow))
    }

    /// Translate the piece if the move is legal; blocked moves leave it untouched.
    pub fn try_move(&mut self, board: &Board, dcol: i8, drow: i8) -> bool {
        if !can_move(board, self, dcol, drow) {
            return false;
        }
        self.col += dcol;
        self.row += drow;
        true
    }
}
