//! Line clear engine
//!
//! Rows are processed top to bottom (ascending index). Clearing row `r` only
//! moves cells above `r`, so every row below still sits at its original
//! index when its turn comes.

use arrayvec::ArrayVec;

use crate::types::BOARD_HEIGHT;
use crate::Board;

/// Rows cleared by one pass, as their original indices in ascending order
pub type ClearedRows = ArrayVec<i8, { BOARD_HEIGHT as usize }>;

/// Clear every full visible row and drop everything above it.
///
/// Each cleared row is emptied and then every cell above it moves down by one
/// row. Hidden rows are never scanned.
pub fn clear_full_rows(board: &mut Board) -> ClearedRows {
    let mut cleared = ClearedRows::new();
    for row in 0..BOARD_HEIGHT as i8 {
        if board.is_row_full(row) {
            board.clear_row(row);
            board.shift_row_down(row);
            cleared.push(row);
        }
    }
    cleared
}
