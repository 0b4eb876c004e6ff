//! Board snapshot - the read-only grid handed to renderers
//!
//! Snapshots are derived data. They are rebuilt from the snake and the
//! collectibles after every tick and never edited on their own.

use crate::collectible::Collectibles;
use crate::snake::Snake;
use crate::types::{Cell, Position};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardSnapshot {
    width: i32,
    height: i32,
    /// Row-major cells (y * width + x)
    cells: Vec<Cell>,
    pub score: u32,
    /// Remaining bonus lifetime; `None` while no bonus is live
    pub bonus_timer: Option<u32>,
}

impl BoardSnapshot {
    /// An all-empty snapshot
    pub fn new(width: i32, height: i32) -> Self {
        let len = (width.max(0) as usize) * (height.max(0) as usize);
        Self {
            width,
            height,
            cells: vec![Cell::Empty; len],
            score: 0,
            bonus_timer: None,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if !Position::new(x, y).in_bounds(self.width, self.height) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Cell at `(x, y)`, `None` if off the board
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Paint a cell; off-board writes are ignored
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Copy `src` into `self`, reusing the cell buffer.
    ///
    /// Only a size change touches the allocation.
    pub fn copy_from(&mut self, src: &BoardSnapshot) {
        if self.cells.len() != src.cells.len() {
            self.cells.resize(src.cells.len(), Cell::Empty);
        }
        self.cells.copy_from_slice(&src.cells);
        self.width = src.width;
        self.height = src.height;
        self.score = src.score;
        self.bonus_timer = src.bonus_timer;
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Plain-text rendering using the classic glyphs, one line per row
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height.max(0) as usize);
        for row in self.rows() {
            out.extend(row.iter().map(|c| c.glyph()));
            out.push('\n');
        }
        out
    }

    fn reset(&mut self, width: i32, height: i32) {
        let len = (width.max(0) as usize) * (height.max(0) as usize);
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells.resize(len, Cell::Empty);
    }
}

/// Paint the model into `out`, reusing its allocation.
///
/// Paint order sets priority: body, then food, then bonus, then the head.
pub fn build_snapshot_into(
    snake: &Snake,
    collectibles: &Collectibles,
    score: u32,
    width: i32,
    height: i32,
    out: &mut BoardSnapshot,
) {
    out.reset(width, height);

    for p in snake.body_positions() {
        out.set(p.x, p.y, Cell::Body);
    }

    let food = collectibles.food();
    out.set(food.x, food.y, Cell::Food);

    let bonus = collectibles.bonus();
    if let Some(b) = bonus {
        out.set(b.position.x, b.position.y, Cell::Bonus);
    }

    let head = snake.head();
    out.set(head.x, head.y, Cell::Head(snake.direction()));

    out.score = score;
    out.bonus_timer = bonus.map(|b| b.remaining);
}

/// Allocating wrapper around [`build_snapshot_into`]
pub fn build_snapshot(
    snake: &Snake,
    collectibles: &Collectibles,
    score: u32,
    width: i32,
    height: i32,
) -> BoardSnapshot {
    let mut out = BoardSnapshot::new(width, height);
    build_snapshot_into(snake, collectibles, score, width, height, &mut out);
    out
}
