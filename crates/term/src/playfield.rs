//! PlayfieldView: the render collaborator's drawing surface.
//!
//! Board cells are drawn 2 columns wide inside a border, centered in the
//! viewport. This module is pure (no I/O).

use crate::fb::{FrameBuffer, Glyph, Rgb, Style, Weight};
use crate::types::{Color, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Board cell width in terminal columns (compensates for glyph aspect ratio)
const CELL_W: u16 = 2;

const BOARD_W: u16 = BOARD_WIDTH as u16 * CELL_W;
const BOARD_H: u16 = BOARD_HEIGHT as u16;
const FRAME_W: u16 = BOARD_W + 2;
const FRAME_H: u16 = BOARD_H + 2;

/// Height of the game-over box in terminal rows
const BANNER_H: u16 = 7;

const FIELD_BG: Rgb = Rgb(30, 30, 40);

const EMPTY_STYLE: Style = Style::new(Rgb(90, 90, 100), FIELD_BG, Weight::Dim);
const BORDER_STYLE: Style = Style::new(Rgb(200, 200, 200), Rgb(0, 0, 0), Weight::Normal);
const BANNER_STYLE: Style = Style::new(Rgb(0, 0, 0), Rgb(255, 255, 255), Weight::Bold);

pub fn color_rgb(color: Color) -> Rgb {
    match color {
        Color::Red => Rgb(220, 60, 60),
        Color::Green => Rgb(80, 200, 90),
        Color::Purple => Rgb(160, 80, 200),
        Color::LightBlue => Rgb(150, 205, 240),
        Color::Yellow => Rgb(240, 220, 80),
        Color::Orange => Rgb(255, 165, 0),
        Color::DarkBlue => Rgb(30, 50, 160),
    }
}

#[derive(Debug, Clone)]
pub struct PlayfieldView {
    fb: FrameBuffer,
    /// Top-left corner of the border
    origin: (u16, u16),
}

impl PlayfieldView {
    /// An empty bordered board centered in `viewport`.
    pub fn new(viewport: Viewport) -> Self {
        let fb = FrameBuffer::new(viewport.width, viewport.height);
        let origin = (
            viewport.width.saturating_sub(FRAME_W) / 2,
            viewport.height.saturating_sub(FRAME_H) / 2,
        );
        let mut view = Self { fb, origin };
        view.draw_border();
        for row in 0..BOARD_HEIGHT {
            for col in 0..BOARD_WIDTH {
                view.clear_cell(col, row);
            }
        }
        view
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }

    /// Terminal position of the left half of a board cell
    pub fn cell_origin(&self, col: u8, row: u8) -> (u16, u16) {
        (
            self.origin.0 + 1 + col as u16 * CELL_W,
            self.origin.1 + 1 + row as u16,
        )
    }

    pub fn draw_cell(&mut self, col: u8, row: u8, color: Color) {
        let block = Glyph::new('█', Style::new(color_rgb(color), FIELD_BG, Weight::Bold));
        let (x, y) = self.cell_origin(col, row);
        self.fb.fill_rect(x, y, CELL_W, 1, block);
    }

    pub fn clear_cell(&mut self, col: u8, row: u8) {
        let (x, y) = self.cell_origin(col, row);
        self.fb.set(x, y, Glyph::new('·', EMPTY_STYLE));
        self.fb.set(x + 1, y, Glyph::new(' ', EMPTY_STYLE));
    }

    /// White box across the middle of the board with the final score.
    pub fn draw_game_over(&mut self, final_score: u32) {
        let x = self.origin.0 + 1;
        let y = self.origin.1 + 1 + (BOARD_H - BANNER_H) / 2;
        self.fb
            .fill_rect(x, y, BOARD_W, BANNER_H, Glyph::new(' ', BANNER_STYLE));

        let score = final_score.to_string();
        let lines = ["GAME OVER", "Your score was", score.as_str()];
        let first = y + (BANNER_H - lines.len() as u16) / 2;
        for (i, line) in lines.iter().enumerate() {
            self.fb
                .text_centered(x, BOARD_W, first + i as u16, line, BANNER_STYLE);
        }
    }

    fn draw_border(&mut self) {
        let (left, top) = self.origin;
        let right = left + FRAME_W - 1;
        let bottom = top + FRAME_H - 1;
        let edge = |ch| Glyph::new(ch, BORDER_STYLE);

        self.fb.fill_rect(left + 1, top, FRAME_W - 2, 1, edge('─'));
        self.fb.fill_rect(left + 1, bottom, FRAME_W - 2, 1, edge('─'));
        self.fb.fill_rect(left, top + 1, 1, FRAME_H - 2, edge('│'));
        self.fb.fill_rect(right, top + 1, 1, FRAME_H - 2, edge('│'));
        for (x, y, ch) in [
            (left, top, '┌'),
            (right, top, '┐'),
            (left, bottom, '└'),
            (right, bottom, '┘'),
        ] {
            self.fb.set(x, y, edge(ch));
        }
    }
}
