//! Game session - owns the whole model and advances it one tick at a time
//!
//! A session ties together the snake, the collectibles, the RNG and the score.
//! Each [`GameSession::tick`] runs the fixed update order:
//!
//! 1. adopt the requested heading unless it reverses the current one
//! 2. compute the new head
//! 3. self-collision against the pre-move body ends the game
//! 4. leaving the board wraps (wrap mode) or ends the game
//! 5. eat food/bonus at the new head, growing on food
//! 6. count the bonus down, or roll for a new one
//! 7. shift the body
//! 8. rebuild the board snapshot
//!
//! A tick that ends the game stops at the failing step and leaves score,
//! food, bonus and body untouched. The one exception is eating the last food
//! on a full board: that tick completes, then the session ends. Win or loss
//! is only decided afterwards by [`GameSession::finish`].

use tracing::{debug, trace};

use crate::collectible::{Bonus, Collectibles, Consumption};
use crate::end_state;
use crate::rng::SimpleRng;
use crate::snake::Snake;
use crate::snapshot::{build_snapshot_into, BoardSnapshot};
use crate::types::{Direction, GameConfig, InputEvent, Outcome, Position};

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Termination {
    /// The head ran into the body
    SelfCollision,
    /// The head left the board with wrapping disabled
    OutOfBounds,
    /// The player asked to stop
    Quit,
    /// The snake ate the last food and covers the whole board
    BoardFull,
}

impl Termination {
    pub fn as_str(&self) -> &'static str {
        match self {
            Termination::SelfCollision => "self_collision",
            Termination::OutOfBounds => "out_of_bounds",
            Termination::Quit => "quit",
            Termination::BoardFull => "board_full",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Running,
    Terminated(Termination),
}

#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    seed: u32,
    rng: SimpleRng,
    snake: Snake,
    collectibles: Collectibles,
    score: u32,
    ticks: u64,
    status: Status,
    last_consumption: Option<Consumption>,
    snapshot: BoardSnapshot,
    outcome: Option<Outcome>,
}

impl GameSession {
    /// Start a game: snake centred and facing right, first food placed.
    pub fn new(config: GameConfig, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let head = Position::new(config.width / 2, config.height / 2);
        let snake = Snake::new(head, config.initial_length);
        let collectibles = Collectibles::new(&config, &mut rng, &snake);
        Self::assemble(config, seed, rng, snake, collectibles)
    }

    /// Start from an explicit model, e.g. a scripted scenario.
    pub fn from_parts(
        config: GameConfig,
        seed: u32,
        snake: Snake,
        collectibles: Collectibles,
    ) -> Self {
        Self::assemble(config, seed, SimpleRng::new(seed), snake, collectibles)
    }

    fn assemble(
        config: GameConfig,
        seed: u32,
        rng: SimpleRng,
        snake: Snake,
        collectibles: Collectibles,
    ) -> Self {
        let mut session = Self {
            config,
            seed,
            rng,
            snake,
            collectibles,
            score: 0,
            ticks: 0,
            status: Status::Running,
            last_consumption: None,
            snapshot: BoardSnapshot::new(config.width, config.height),
            outcome: None,
        };
        session.rebuild_snapshot();
        session
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Position {
        self.collectibles.food()
    }

    pub fn bonus(&self) -> Option<Bonus> {
        self.collectibles.bonus()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Ticks that advanced the model (terminating ticks excluded)
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self.status, Status::Terminated(_))
    }

    /// What the head ate on the last advancing tick
    pub fn last_consumption(&self) -> Option<Consumption> {
        self.last_consumption
    }

    /// Board as of the last completed tick
    pub fn snapshot(&self) -> &BoardSnapshot {
        &self.snapshot
    }

    /// Copy the current snapshot into `out`, reusing its allocation
    pub fn snapshot_into(&self, out: &mut BoardSnapshot) {
        out.copy_from(&self.snapshot);
    }

    /// Outcome decided by [`GameSession::finish`], if it ran
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Move the food (scripted scenarios). The snapshot is refreshed.
    pub fn place_food(&mut self, pos: Position) {
        self.collectibles.place_food(pos);
        self.rebuild_snapshot();
    }

    /// Set or clear the bonus (scripted scenarios). The snapshot is refreshed.
    pub fn place_bonus(&mut self, bonus: Option<Bonus>) {
        self.collectibles.place_bonus(bonus);
        self.rebuild_snapshot();
    }

    pub fn request_quit(&mut self) {
        self.terminate(Termination::Quit);
    }

    /// Route one polled input observation into the session
    pub fn apply_event(&mut self, event: Option<InputEvent>) -> Status {
        match event {
            Some(InputEvent::Quit) => {
                self.request_quit();
                self.status
            }
            Some(InputEvent::Direction(d)) => self.tick(Some(d)),
            None => self.tick(None),
        }
    }

    /// Advance the simulation by one tick.
    ///
    /// `requested` is the heading asked for this tick; `None` keeps the
    /// current one. Ticks after termination do nothing.
    pub fn tick(&mut self, requested: Option<Direction>) -> Status {
        if self.is_terminated() {
            return self.status;
        }

        if let Some(d) = requested {
            if !self.snake.set_direction(d) {
                trace!(requested = d.as_str(), "reverse heading ignored");
            }
        }

        let mut head = self.snake.advance_head(self.snake.direction());

        if self.snake.self_collides(head) {
            self.terminate(Termination::SelfCollision);
            return self.status;
        }

        if !head.in_bounds(self.config.width, self.config.height) {
            if !self.config.wrap {
                self.terminate(Termination::OutOfBounds);
                return self.status;
            }
            head = Position::new(
                head.x.rem_euclid(self.config.width),
                head.y.rem_euclid(self.config.height),
            );
        }

        self.snake.set_head(head);

        let eaten =
            self.collectibles
                .consume_if_match(head, &self.config, &mut self.rng, &self.snake);
        if let Some(c) = eaten {
            self.score += c.reward;
            if c.ate_food {
                self.snake.grow();
            }
            debug!(
                food = c.ate_food,
                bonus = c.ate_bonus,
                score = self.score,
                len = self.snake.len(),
                "consumed"
            );
        }
        self.last_consumption = eaten;

        self.collectibles
            .tick_bonus(&self.config, &mut self.rng, &self.snake);

        self.snake.shift_body();
        self.ticks += 1;
        self.rebuild_snapshot();

        trace!(tick = self.ticks, x = head.x, y = head.y, "tick");
        if eaten.is_some_and(|c| c.board_full) {
            self.terminate(Termination::BoardFull);
        }
        self.status
    }

    /// Decide the final outcome from the last snapshot.
    ///
    /// Evaluated once; later calls return the cached result.
    pub fn finish(&mut self) -> Outcome {
        if let Some(outcome) = self.outcome {
            return outcome;
        }
        let outcome = end_state::evaluate(&self.snapshot);
        self.outcome = Some(outcome);
        debug!(
            outcome = outcome.as_str(),
            score = self.score,
            ticks = self.ticks,
            "game finished"
        );
        outcome
    }

    fn terminate(&mut self, reason: Termination) {
        if self.is_terminated() {
            return;
        }
        self.status = Status::Terminated(reason);
        debug!(reason = reason.as_str(), score = self.score, "terminated");
    }

    fn rebuild_snapshot(&mut self) {
        build_snapshot_into(
            &self.snake,
            &self.collectibles,
            self.score,
            self.config.width,
            self.config.height,
            &mut self.snapshot,
        );
    }
}
