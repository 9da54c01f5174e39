//! Off-screen character grid the playfield is painted into.

use crossterm::style::{Attribute, Color};

/// 24-bit terminal color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl From<Rgb> for Color {
    fn from(Rgb(r, g, b): Rgb) -> Self {
        Color::Rgb { r, g, b }
    }
}

/// Text weight of a glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Weight {
    #[default]
    Normal,
    Bold,
    Dim,
}

impl Weight {
    /// Attribute to set after a reset, if any
    pub fn attribute(self) -> Option<Attribute> {
        match self {
            Weight::Normal => None,
            Weight::Bold => Some(Attribute::Bold),
            Weight::Dim => Some(Attribute::Dim),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Rgb,
    pub bg: Rgb,
    pub weight: Weight,
}

impl Style {
    pub const fn new(fg: Rgb, bg: Rgb, weight: Weight) -> Self {
        Self { fg, bg, weight }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new(Rgb(220, 220, 220), Rgb(0, 0, 0), Weight::Normal)
    }
}

/// One terminal column of one row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub style: Style,
}

impl Glyph {
    pub const fn new(ch: char, style: Style) -> Self {
        Self { ch, style }
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Self::new(' ', Style::default())
    }
}

/// Row-major grid of glyphs. Writes that fall outside are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl FrameBuffer {
    /// A blank grid of `width` x `height`
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            glyphs: vec![Glyph::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn same_size(&self, other: &FrameBuffer) -> bool {
        self.width == other.width && self.height == other.height
    }

    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        self.offset(x, y).map(|i| self.glyphs[i])
    }

    /// All glyphs of row `y`
    pub fn row(&self, y: u16) -> &[Glyph] {
        match self.offset(0, y) {
            Some(start) => &self.glyphs[start..start + self.width as usize],
            None => &[],
        }
    }

    pub fn set(&mut self, x: u16, y: u16, glyph: Glyph) {
        if let Some(i) = self.offset(x, y) {
            self.glyphs[i] = glyph;
        }
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, glyph: Glyph) {
        for row in y..y.saturating_add(h) {
            for col in x..x.saturating_add(w) {
                self.set(col, row, glyph);
            }
        }
    }

    /// Write `text` starting at (x, y), clipped at the right edge.
    pub fn text(&mut self, x: u16, y: u16, text: &str, style: Style) {
        for (col, ch) in (x..self.width).zip(text.chars()) {
            self.set(col, y, Glyph::new(ch, style));
        }
    }

    /// Write `text` centered within the columns `[x, x + w)`.
    pub fn text_centered(&mut self, x: u16, w: u16, y: u16, text: &str, style: Style) {
        let len = text.chars().count() as u16;
        self.text(x.saturating_add(w.saturating_sub(len) / 2), y, text, style);
    }

    /// Characters of row `y` as a string
    pub fn row_text(&self, y: u16) -> String {
        self.row(y).iter().map(|glyph| glyph.ch).collect()
    }
}
