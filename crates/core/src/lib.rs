//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the snake rules, the session state and the per-tick
//! simulation. It has **no dependencies** on terminals or other I/O, making it:
//!
//! - **Deterministic**: Same seed and same inputs replay the same game
//! - **Testable**: Every tick can be driven and inspected in isolation
//! - **Portable**: Runs in a terminal, headless, or under a benchmark
//!
//! # Module Structure
//!
//! - [`rng`]: seeded LCG with bounded-range draws
//! - [`snake`]: body segments, heading, growth via pending segments
//! - [`collectible`]: food and timed bonus placement by rejection sampling
//! - [`session`]: the [`GameSession`] aggregate and its tick
//! - [`snapshot`]: the read-only board grid handed to renderers
//! - [`end_state`]: win/loss from the final board
//! - [`driver`]: the polled input seam ([`InputSource`])
//!
//! # Game Rules
//!
//! - The snake moves one cell per tick; reversing into the neck is ignored
//! - Eating food scores `food_score` and grows the snake by one segment
//! - A bonus appears at random, scores `bonus_score`, and vanishes after its lifetime
//! - Hitting the body ends the game; so does leaving the board unless wrap mode is on
//! - The game is won only if the snake fills the whole board
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameSession, Status};
//! use tui_snake_core::types::{Direction, GameConfig, Position};
//!
//! let config = GameConfig::default().with_board(10, 10).with_initial_length(3);
//! let mut game = GameSession::new(config, 12345);
//! game.place_food(Position::new(6, 5));
//!
//! // Head at (5, 5) facing right lands on the food
//! assert_eq!(game.tick(None), Status::Running);
//! assert_eq!(game.score(), config.food_score);
//! assert_eq!(game.snake().len(), 4);
//!
//! game.tick(Some(Direction::Down));
//! assert_eq!(game.snake().head(), Position::new(6, 6));
//! ```

pub mod collectible;
pub mod driver;
pub mod end_state;
pub mod rng;
pub mod session;
pub mod snake;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use collectible::{Avoid, Bonus, BonusTick, Collectibles, Consumption};
pub use driver::{run_tick, InputSource, ScriptedInput};
pub use end_state::evaluate;
pub use rng::SimpleRng;
pub use session::{GameSession, Status, Termination};
pub use snake::{Segment, Snake};
pub use snapshot::{build_snapshot, build_snapshot_into, BoardSnapshot};
