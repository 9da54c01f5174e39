//! TerminalScreen: the terminal-backed render collaborator.

use anyhow::Result;

use crate::core::Renderer;
use crate::playfield::{PlayfieldView, Viewport};
use crate::renderer::{on_error, TerminalRenderer};
use crate::types::Color;

/// Keeps the playfield in a framebuffer and flushes it on `present`.
pub struct TerminalScreen {
    view: PlayfieldView,
    term: TerminalRenderer,
}

impl TerminalScreen {
    /// Switch the terminal into the alternate screen and draw an empty board.
    ///
    /// On failure the terminal is restored before the error is returned.
    pub fn enter(viewport: Viewport) -> Result<Self> {
        let mut term = TerminalRenderer::new();
        term.enter()?;
        let mut screen = Self {
            view: PlayfieldView::new(viewport),
            term,
        };
        on_error(screen.present(), || {
            let _ = screen.term.exit();
        })?;
        Ok(screen)
    }

    /// Restore the terminal.
    pub fn exit(mut self) -> Result<()> {
        self.term.exit()
    }
}

impl Renderer for TerminalScreen {
    type Error = anyhow::Error;

    fn draw_cell(&mut self, col: u8, row: u8, color: Color) {
        self.view.draw_cell(col, row, color);
    }

    fn clear_cell(&mut self, col: u8, row: u8) {
        self.view.clear_cell(col, row);
    }

    fn announce_game_over(&mut self, final_score: u32) {
        self.view.draw_game_over(final_score);
    }

    fn present(&mut self) -> Result<()> {
        self.term.draw(self.view.framebuffer())
    }
}
