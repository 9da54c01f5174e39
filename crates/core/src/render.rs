//! Render collaborator interface
//!
//! The engine reports every visible board change through this trait and never
//! reads anything back. Only rows `0..BOARD_HEIGHT` are ever reported.

use std::convert::Infallible;

use crate::types::Color;

pub trait Renderer {
    type Error;

    fn draw_cell(&mut self, col: u8, row: u8, color: Color);

    fn clear_cell(&mut self, col: u8, row: u8);

    fn announce_game_over(&mut self, final_score: u32);

    /// Push the cell updates made since the last call to the display.
    fn present(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Discards everything (headless runs, benchmarks)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    type Error = Infallible;

    fn draw_cell(&mut self, _col: u8, _row: u8, _color: Color) {}

    fn clear_cell(&mut self, _col: u8, _row: u8) {}

    fn announce_game_over(&mut self, _final_score: u32) {}
}
