//! Board module - the settled playing field
//!
//! The board is a 10x20 grid plus one hidden row above it where pieces spawn.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (col, row) where col ranges 0..9 (left to right) and row ranges
//! -1..19 (top to bottom); row -1 is the hidden spawn row.
//!
//! Every operation is bounds-checked. Touching a cell outside the storage is a
//! caller bug and panics.

use crate::types::{Cell, Color, PieceId, BOARD_HEIGHT, BOARD_WIDTH, HIDDEN_ROWS};

const WIDTH: usize = BOARD_WIDTH as usize;

/// Stored rows, hidden ones included
const STORED_ROWS: usize = (BOARD_HEIGHT + HIDDEN_ROWS) as usize;

/// Total number of stored cells
const BOARD_SIZE: usize = WIDTH * STORED_ROWS;

/// Topmost stored row index
pub const TOP_ROW: i8 = -(HIDDEN_ROWS as i8);

/// The game board - 10 columns x (20 + hidden) rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Row-major cells; storage row 0 is board row `TOP_ROW`
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (col, row) coordinates
    #[inline(always)]
    fn index(col: i8, row: i8) -> Option<usize> {
        if !Self::contains(col, row) {
            return None;
        }
        let stored_row = (row - TOP_ROW) as usize;
        Some(stored_row * WIDTH + col as usize)
    }

    #[inline(always)]
    fn checked_index(col: i8, row: i8) -> usize {
        match Self::index(col, row) {
            Some(idx) => idx,
            None => panic!("cell ({}, {}) is outside the board", col, row),
        }
    }

    #[inline(always)]
    fn row_range(row: i8) -> std::ops::Range<usize> {
        let start = Self::checked_index(0, row);
        start..start + WIDTH
    }

    /// Whether (col, row) is stored, hidden rows included
    pub fn contains(col: i8, row: i8) -> bool {
        col >= 0 && (col as usize) < WIDTH && row >= TOP_ROW && row < BOARD_HEIGHT as i8
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Visible height (hidden rows excluded)
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at (col, row), or `None` outside the board
    pub fn get(&self, col: i8, row: i8) -> Option<Cell> {
        Self::index(col, row).map(|idx| self.cells[idx])
    }

    pub fn is_occupied(&self, col: i8, row: i8) -> bool {
        self.cells[Self::checked_index(col, row)].is_occupied()
    }

    /// Settle one cell of a piece.
    pub fn occupy(&mut self, col: i8, row: i8, color: Color, piece_id: PieceId) {
        let idx = Self::checked_index(col, row);
        debug_assert!(
            !self.cells[idx].is_occupied(),
            "cell ({}, {}) is already occupied",
            col,
            row
        );
        self.cells[idx] = Cell::Occupied { color, piece_id };
    }

    /// Empty every cell in a row
    pub fn clear_row(&mut self, row: i8) {
        self.cells[Self::row_range(row)].fill(Cell::Empty);
    }

    /// Move every cell above `row` down by one row.
    ///
    /// The previous contents of `row` are overwritten and the top stored row
    /// becomes empty.
    pub fn shift_row_down(&mut self, row: i8) {
        let end = Self::row_range(row).start;
        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..end, WIDTH);
        self.cells[..WIDTH].fill(Cell::Empty);
    }

    pub fn cell_count_in_row(&self, row: i8) -> usize {
        self.cells[Self::row_range(row)]
            .iter()
            .filter(|cell| cell.is_occupied())
            .count()
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: i8) -> bool {
        self.cell_count_in_row(row) == WIDTH
    }

    /// All occupied cells as `(col, row, cell)`, top to bottom
    pub fn occupied(&self) -> impl Iterator<Item = (i8, i8, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_occupied())
            .map(|(idx, cell)| {
                let col = (idx % WIDTH) as i8;
                let row = (idx / WIDTH) as i8 + TOP_ROW;
                (col, row, *cell)
            })
    }

    /// Row of the highest occupied cell, if any
    pub fn top_occupied_row(&self) -> Option<i8> {
        self.occupied().next().map(|(_, row, _)| row)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
