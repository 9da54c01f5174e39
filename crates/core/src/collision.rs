//! Collision engine
//!
//! One predicate decides every move (gravity, left, right, soft drop) so that
//! blocking is consistent everywhere.

use crate::piece::Piece;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};
use crate::Board;

/// Whether `piece` translated by (dcol, drow) is free.
///
/// Blocked when a cell would leave the side walls, go past the bottom row, or
/// land on a settled cell owned by another piece. Cells above the stored rows
/// are open sky.
pub fn can_move(board: &Board, piece: &Piece, dcol: i8, drow: i8) -> bool {
    piece
        .cells_at(dcol, drow)
        .iter()
        .all(|&(col, row)| is_free(board, piece, col, row))
}

/// Whether the piece fits where it currently is
pub fn fits(board: &Board, piece: &Piece) -> bool {
    can_move(board, piece, 0, 0)
}

fn is_free(board: &Board, piece: &Piece, col: i8, row: i8) -> bool {
    if col < 0 || col >= BOARD_WIDTH as i8 || row >= BOARD_HEIGHT as i8 {
        return false;
    }
    match board.get(col, row) {
        Some(Cell::Occupied { piece_id, .. }) => piece_id == piece.id,
        Some(Cell::Empty) | None => true,
    }
}
