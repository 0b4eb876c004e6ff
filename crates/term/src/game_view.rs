//! GameView: maps a `core::BoardSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: the bordered board, one blank row, the score line,
//! and the bonus timer line while a bonus is live. The end banner is drawn
//! over the middle of the board once an outcome is known.

use crate::core::BoardSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Tone};
use crate::types::{Cell, Outcome};

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

/// Where the frame sits in the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    Center,
}

const BORDER_CORNER: char = '+';
const BORDER_HORI: char = '-';
const BORDER_VERT: char = '|';

/// Rows below the board frame: blank, score, timer
const FOOTER_ROWS: u16 = 3;

/// A lightweight terminal renderer for the snake board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    anchor: Anchor,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            cell_w: 1,
            anchor: Anchor::TopLeft,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            anchor: Anchor::TopLeft,
        }
    }

    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Size of the bordered board plus footer, in terminal cells
    pub fn frame_size(&self, snap: &BoardSnapshot) -> (u16, u16) {
        let w = (snap.width().max(0) as u16).saturating_mul(self.cell_w) + 2;
        let h = (snap.height().max(0) as u16) + 2;
        (w, h)
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into(
        &self,
        snap: &BoardSnapshot,
        outcome: Option<Outcome>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let (frame_w, frame_h) = self.frame_size(snap);
        let (start_x, start_y) = match self.anchor {
            Anchor::TopLeft => (0, 0),
            Anchor::Center => (
                viewport.width.saturating_sub(frame_w) / 2,
                viewport.height.saturating_sub(frame_h + FOOTER_ROWS) / 2,
            ),
        };

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        for (y, row) in snap.rows().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                if cell == Cell::Empty {
                    continue;
                }
                let px = start_x + 1 + (x as u16) * self.cell_w;
                let py = start_y + 1 + y as u16;
                let style = cell_style(cell);
                for dx in 0..self.cell_w {
                    fb.put_char(px + dx, py, cell.glyph(), style);
                }
            }
        }

        let label = CellStyle::PLAIN;
        let score_y = start_y.saturating_add(frame_h).saturating_add(1);
        let x = fb.put_str(start_x, score_y, "Score: ", label);
        fb.put_u32(x, score_y, snap.score, CellStyle::bold(Tone::Blue));

        if let Some(timer) = snap.bonus_timer {
            let timer_y = score_y.saturating_add(1);
            let x = fb.put_str(start_x, timer_y, "Timer: ", label);
            fb.put_u32(x, timer_y, timer, CellStyle::bold(Tone::Yellow));
        }

        if let Some(outcome) = outcome {
            self.draw_banner(fb, start_x, start_y, frame_w, frame_h, banner_text(outcome));
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &BoardSnapshot,
        outcome: Option<Outcome>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, outcome, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let style = CellStyle::PLAIN;

        for dx in 0..w {
            let ch = if dx == 0 || dx == w - 1 {
                BORDER_CORNER
            } else {
                BORDER_HORI
            };
            fb.put_char(x + dx, y, ch, style);
            fb.put_char(x + dx, y + h - 1, ch, style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, BORDER_VERT, style);
            fb.put_char(x + w - 1, y + dy, BORDER_VERT, style);
        }
    }

    fn draw_banner(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, mid_y, text, CellStyle::bold(Tone::Red));
    }
}

/// Banner shown when the game ends
pub fn banner_text(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win => "You Won!",
        Outcome::Loss => "Game Over!",
    }
}

fn cell_style(cell: Cell) -> CellStyle {
    match cell {
        Cell::Empty => CellStyle::PLAIN,
        Cell::Body => CellStyle {
            fg: Tone::Green,
            bold: false,
        },
        Cell::Head(_) => CellStyle::bold(Tone::Green),
        Cell::Food => CellStyle::bold(Tone::Red),
        Cell::Bonus => CellStyle::bold(Tone::Yellow),
    }
}
