//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core simulation, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! Default playfield dimensions:
//!
//! - **Width**: 30 columns (indexed 0-29)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn position**: snake head at the centre `(width / 2, height / 2)`, facing right
//!
//! # Rule Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `START_SNAKE_LEN` | 5 | Segments at game start |
//! | `FOOD_SCORE` | 1 | Score for eating food |
//! | `BONUS_SCORE` | 10 | Score for eating a bonus |
//! | `BONUS_CHANCE` | 400 | Bonus spawn-chance denominator |
//! | `BONUS_MIN_TIME` | 30 | Shortest bonus lifetime (ticks) |
//! | `BONUS_MAX_TIME` | 120 | Longest bonus lifetime (ticks) |
//! | `TICK_MS` | 100 | Interval between simulation ticks |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, GameConfig, InputEvent, Position};
//!
//! // Directions never reverse into the neck
//! assert!(Direction::Up.is_opposite(Direction::Down));
//! assert!(!Direction::Up.is_opposite(Direction::Left));
//!
//! // Positions move one cell per step
//! let p = Position::new(5, 5).step(Direction::Right);
//! assert_eq!(p, Position::new(6, 5));
//!
//! // Parse input events (case-insensitive)
//! assert_eq!(InputEvent::from_str("up"), Some(InputEvent::Direction(Direction::Up)));
//! assert_eq!(InputEvent::from_str("quit"), Some(InputEvent::Quit));
//!
//! // Defaults follow the classic game
//! let config = GameConfig::default();
//! assert_eq!((config.width, config.height), (30, 20));
//! ```

/// Board width in cells (30 columns)
pub const BOARD_WIDTH: i32 = 30;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: i32 = 20;

/// Number of segments the snake starts with
pub const START_SNAKE_LEN: usize = 5;

/// Whether crossing an edge re-enters from the opposite edge
pub const SNAKE_WRAP: bool = false;

/// Score increase when the snake eats food
pub const FOOD_SCORE: u32 = 1;

/// Score increase when the snake eats a bonus
pub const BONUS_SCORE: u32 = 10;

/// Bonus spawn-chance denominator.
///
/// Each tick without a bonus draws from `0..=BONUS_CHANCE`; one value spawns.
pub const BONUS_CHANCE: u32 = 400;

/// Lower bound of a bonus lifetime, in ticks
pub const BONUS_MIN_TIME: u32 = 30;

/// Upper bound of a bonus lifetime, in ticks
pub const BONUS_MAX_TIME: u32 = 120;

/// Fixed interval between simulation ticks in milliseconds
pub const TICK_MS: u32 = 100;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_rule_defaults() {
        assert_eq!(BOARD_WIDTH, 30);
        assert_eq!(BOARD_HEIGHT, 20);
        assert_eq!(START_SNAKE_LEN, 5);
        assert!(!SNAKE_WRAP);
        assert_eq!(FOOD_SCORE, 1);
        assert_eq!(BONUS_SCORE, 10);
        assert_eq!(BONUS_CHANCE, 400);
        assert!(BONUS_MIN_TIME <= BONUS_MAX_TIME);
    }

    #[test]
    fn default_config_matches_constants() {
        let c = GameConfig::default();
        assert_eq!(c.width, BOARD_WIDTH);
        assert_eq!(c.height, BOARD_HEIGHT);
        assert_eq!(c.initial_length, START_SNAKE_LEN);
        assert_eq!(c.wrap, SNAKE_WRAP);
        assert_eq!(c.bonus_chance, BONUS_CHANCE);
        assert!(c.is_valid());
    }

    #[test]
    fn config_validity_bounds() {
        let mut c = GameConfig::default().with_board(3, 1);
        c.initial_length = 3;
        assert!(!c.is_valid());
        c.initial_length = 2;
        assert!(c.is_valid());
        c.initial_length = 0;
        assert!(!c.is_valid());
    }

    #[test]
    fn direction_deltas_and_opposites() {
        for d in Direction::ALL {
            let (dx, dy) = d.delta();
            let (ox, oy) = d.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
            assert!(d.is_opposite(d.opposite()));
            assert!(!d.is_opposite(d));
        }
    }

    #[test]
    fn cell_is_snake() {
        assert!(Cell::Body.is_snake());
        assert!(Cell::Head(Direction::Left).is_snake());
        assert!(!Cell::Empty.is_snake());
        assert!(!Cell::Food.is_snake());
        assert!(!Cell::Bonus.is_snake());
    }

    #[test]
    fn outcome_literals() {
        assert_eq!(Outcome::Win.as_str(), "Win");
        assert_eq!(Outcome::Loss.as_str(), "Loss");
    }
}

/// A board coordinate.
///
/// Coordinates are signed so that a head stepping off the board can be
/// represented before it is wrapped or rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring position one cell in `direction`.
    ///
    /// No clamping or wrapping is applied.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Check if the position lies inside a `width` x `height` board
    pub fn in_bounds(self, width: i32, height: i32) -> bool {
        self.x >= 0 && self.x < width && self.y >= 0 && self.y < height
    }
}

/// Movement directions
///
/// Screen coordinates: y grows downwards, so `Up` decreases y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit displacement `(dx, dy)` for this direction
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Check if `other` is the exact reverse of this direction
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("LEFT"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("north"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Logical input observed once per tick.
///
/// The absence of input is `Option::<InputEvent>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Request a new heading
    Direction(Direction),
    /// End the game
    Quit,
}

impl InputEvent {
    /// Parse an event from its string form (a direction name or `quit`)
    pub fn from_str(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("quit") {
            return Some(InputEvent::Quit);
        }
        Direction::from_str(s).map(InputEvent::Direction)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InputEvent::Direction(d) => d.as_str(),
            InputEvent::Quit => "quit",
        }
    }
}

/// A cell of the board snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Body,
    /// Snake head, facing the given direction
    Head(Direction),
    Food,
    Bonus,
}

impl Cell {
    /// Body and head cells count as snake-occupied
    pub fn is_snake(self) -> bool {
        matches!(self, Cell::Body | Cell::Head(_))
    }

    /// Classic glyph for the cell.
    ///
    /// The head glyph points its "mouth" the way the snake travels.
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Body => '*',
            Cell::Head(Direction::Up) => 'v',
            Cell::Head(Direction::Down) => '^',
            Cell::Head(Direction::Left) => '>',
            Cell::Head(Direction::Right) => '<',
            Cell::Food => '@',
            Cell::Bonus => '$',
        }
    }
}

/// Final result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Loss,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "Win",
            Outcome::Loss => "Loss",
        }
    }
}

/// Rule parameters for one game.
///
/// Callers must keep `1 <= initial_length < width * height`; the simulation
/// does not re-check it. See [`GameConfig::is_valid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    pub initial_length: usize,
    pub wrap: bool,
    pub food_score: u32,
    pub bonus_score: u32,
    pub bonus_chance: u32,
    pub bonus_min_time: u32,
    pub bonus_max_time: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            initial_length: START_SNAKE_LEN,
            wrap: SNAKE_WRAP,
            food_score: FOOD_SCORE,
            bonus_score: BONUS_SCORE,
            bonus_chance: BONUS_CHANCE,
            bonus_min_time: BONUS_MIN_TIME,
            bonus_max_time: BONUS_MAX_TIME,
        }
    }
}

impl GameConfig {
    pub fn with_board(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_initial_length(mut self, initial_length: usize) -> Self {
        self.initial_length = initial_length;
        self
    }

    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Number of cells on the board
    pub fn cell_count(&self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }

    /// Check the contract the simulation relies on.
    ///
    /// The initial snake must fit in its row, leaving at least one free cell.
    pub fn is_valid(&self) -> bool {
        self.width > 0
            && self.height > 0
            && self.initial_length >= 1
            && self.initial_length < self.cell_count()
            && self.initial_length as i32 <= self.width / 2 + 1
            && self.bonus_min_time >= 1
            && self.bonus_min_time <= self.bonus_max_time
    }
}
