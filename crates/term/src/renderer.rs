//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The last flushed frame is kept, and later flushes only rewrite the runs of
//! glyphs that differ from it.

use std::io::{self, Write};
use std::ops::Range;

use anyhow::{Context, Result};
use crossterm::{
    cursor, queue,
    style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use crate::fb::{FrameBuffer, Glyph, Style};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// What the terminal currently shows
    shown: Option<FrameBuffer>,
    scratch: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            scratch: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode plus the alternate screen, cursor hidden.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("enable raw mode")?;
        self.scratch.clear();
        queue!(
            self.scratch,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap
        )?;
        let entered = self.flush().context("enter alternate screen");
        on_error(entered, || {
            let _ = terminal::disable_raw_mode();
        })
    }

    pub fn exit(&mut self) -> Result<()> {
        self.scratch.clear();
        queue!(
            self.scratch,
            ResetColor,
            SetAttribute(Attribute::Reset),
            terminal::EnableLineWrap,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        self.flush().context("leave alternate screen")?;
        terminal::disable_raw_mode().context("disable raw mode")
    }

    /// Bring the terminal up to date with `fb`.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.scratch.clear();
        match &mut self.shown {
            Some(shown) if shown.same_size(fb) => {
                encode_diff_into(shown, fb, &mut self.scratch)?;
                shown.clone_from(fb);
            }
            slot => {
                encode_full_into(fb, &mut self.scratch)?;
                *slot = Some(fb.clone());
            }
        }
        self.flush().context("write frame")
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.write_all(&self.scratch)?;
        self.stdout.flush()
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Run `undo` when `result` is an error, then hand the result back.
pub(crate) fn on_error<T, E>(result: Result<T, E>, undo: impl FnOnce()) -> Result<T, E> {
    if result.is_err() {
        undo();
    }
    result
}

/// Writes glyphs, emitting style changes only when the style differs.
struct StyledWriter<'a> {
    out: &'a mut Vec<u8>,
    style: Option<Style>,
}

impl<'a> StyledWriter<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn glyphs(&mut self, glyphs: &[Glyph]) -> io::Result<()> {
        for glyph in glyphs {
            if self.style != Some(glyph.style) {
                let style = glyph.style;
                queue!(
                    self.out,
                    SetForegroundColor(style.fg.into()),
                    SetBackgroundColor(style.bg.into()),
                    SetAttribute(Attribute::Reset)
                )?;
                if let Some(attribute) = style.weight.attribute() {
                    queue!(self.out, SetAttribute(attribute))?;
                }
                self.style = Some(style);
            }
            queue!(self.out, Print(glyph.ch))?;
        }
        Ok(())
    }

    fn finish(self) -> io::Result<()> {
        queue!(self.out, ResetColor, SetAttribute(Attribute::Reset))
    }
}

/// Encode a repaint of the whole frame into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> io::Result<()> {
    queue!(out, terminal::Clear(ClearType::All))?;
    let mut writer = StyledWriter::new(out);
    for y in 0..fb.height() {
        queue!(writer.out, cursor::MoveTo(0, y))?;
        writer.glyphs(fb.row(y))?;
    }
    writer.finish()
}

/// Encode only what changed from `prev` to `next` into `out`.
///
/// Both frames must be the same size.
pub fn encode_diff_into(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> io::Result<()> {
    debug_assert!(prev.same_size(next));
    let mut writer = StyledWriter::new(out);
    for y in 0..next.height() {
        let row = next.row(y);
        for run in changed_runs(prev.row(y), row) {
            queue!(writer.out, cursor::MoveTo(run.start as u16, y))?;
            writer.glyphs(&row[run])?;
        }
    }
    writer.finish()
}

/// Maximal column ranges where the two rows differ
fn changed_runs<'a>(
    prev: &'a [Glyph],
    next: &'a [Glyph],
) -> impl Iterator<Item = Range<usize>> + 'a {
    let differs = move |x: usize| prev.get(x) != next.get(x);
    let mut x = 0;
    std::iter::from_fn(move || {
        while x < next.len() && !differs(x) {
            x += 1;
        }
        if x == next.len() {
            return None;
        }
        let start = x;
        while x < next.len() && differs(x) {
            x += 1;
        }
        Some(start..x)
    })
}
