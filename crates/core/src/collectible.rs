//! Collectible module - food and timed bonus placement
//!
//! Food is always on the board and is re-placed the moment it is eaten. A bonus
//! shows up at random while none is live and disappears when eaten or when its
//! lifetime runs out.
//!
//! Placement is rejection sampling: uniform board coordinates are drawn until
//! one misses the snake and the other collectible. There is no retry cap, so
//! callers check [`Collectibles::has_free_cell`] first. When the snake covers
//! every cell the food is not re-placed and the eat reports a full board.

use arrayvec::ArrayVec;
use tracing::debug;

use crate::rng::SimpleRng;
use crate::snake::Snake;
use crate::types::{GameConfig, Position};

/// A live bonus item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bonus {
    pub position: Position,
    /// Ticks left before the bonus disappears
    pub remaining: u32,
}

/// Positions a spawn must not land on
#[derive(Debug, Clone)]
pub struct Avoid<'a> {
    snake: &'a Snake,
    others: ArrayVec<Position, 2>,
}

impl<'a> Avoid<'a> {
    pub fn snake(snake: &'a Snake) -> Self {
        Self {
            snake,
            others: ArrayVec::new(),
        }
    }

    /// Also avoid `pos`.
    ///
    /// Holds the other collectibles only; a third extra position panics.
    pub fn with(mut self, pos: Position) -> Self {
        self.others.push(pos);
        self
    }

    pub fn with_opt(self, pos: Option<Position>) -> Self {
        match pos {
            Some(pos) => self.with(pos),
            None => self,
        }
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.snake.occupies(pos) || self.others.contains(&pos)
    }

    /// Upper bound on the number of distinct cells covered
    fn max_covered(&self) -> usize {
        self.snake.visible_len() + 1 + self.others.len()
    }
}

/// What the head ate this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Consumption {
    pub ate_food: bool,
    pub ate_bonus: bool,
    /// Score earned by this consumption
    pub reward: u32,
    /// The food was eaten and the snake now covers every cell, so no new
    /// food was placed
    pub board_full: bool,
}

/// Result of advancing the bonus timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BonusTick {
    /// No bonus live and none spawned
    Idle,
    /// A new bonus appeared
    Spawned(Bonus),
    /// The live bonus counted down and is still live
    Counting(u32),
    /// The live bonus ran out
    Expired,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collectibles {
    food: Position,
    bonus: Option<Bonus>,
}

impl Collectibles {
    /// Place the first food item away from `snake`; no bonus yet.
    pub fn new(config: &GameConfig, rng: &mut SimpleRng, snake: &Snake) -> Self {
        let food = Self::spawn(config, rng, &Avoid::snake(snake));
        Self { food, bonus: None }
    }

    /// Build from explicit positions (used by scripted sessions and tests)
    pub fn from_parts(food: Position, bonus: Option<Bonus>) -> Self {
        Self { food, bonus }
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn bonus(&self) -> Option<Bonus> {
        self.bonus
    }

    pub fn place_food(&mut self, pos: Position) {
        self.food = pos;
    }

    pub fn place_bonus(&mut self, bonus: Option<Bonus>) {
        self.bonus = bonus;
    }

    /// Draw uniform board positions until one is not in `avoid`
    pub fn spawn(config: &GameConfig, rng: &mut SimpleRng, avoid: &Avoid<'_>) -> Position {
        loop {
            let x = rng.range_inclusive(0, (config.width - 1) as u32) as i32;
            let y = rng.range_inclusive(0, (config.height - 1) as u32) as i32;
            let pos = Position::new(x, y);
            if !avoid.contains(pos) {
                return pos;
            }
        }
    }

    /// Check whether any board cell lies outside `avoid`
    pub fn has_free_cell(config: &GameConfig, avoid: &Avoid<'_>) -> bool {
        if avoid.max_covered() < config.cell_count() {
            return true;
        }
        (0..config.height)
            .any(|y| (0..config.width).any(|x| !avoid.contains(Position::new(x, y))))
    }

    /// Roll for a new bonus when none is live.
    ///
    /// One value out of `0..=bonus_chance` wins the roll.
    pub fn maybe_spawn_bonus(
        &mut self,
        config: &GameConfig,
        rng: &mut SimpleRng,
        snake: &Snake,
    ) -> Option<Bonus> {
        if self.bonus.is_some() {
            return None;
        }
        if rng.range_inclusive(0, config.bonus_chance) != config.bonus_chance / 2 {
            return None;
        }

        let avoid = Avoid::snake(snake).with(self.food);
        if !Self::has_free_cell(config, &avoid) {
            return None;
        }
        let position = Self::spawn(config, rng, &avoid);
        let remaining = rng.range_inclusive(config.bonus_min_time, config.bonus_max_time);
        let bonus = Bonus {
            position,
            remaining,
        };
        self.bonus = Some(bonus);
        debug!(x = position.x, y = position.y, remaining, "bonus spawned");
        Some(bonus)
    }

    /// Count a live bonus down (clearing it at zero), or roll for a new one
    pub fn tick_bonus(
        &mut self,
        config: &GameConfig,
        rng: &mut SimpleRng,
        snake: &Snake,
    ) -> BonusTick {
        match self.bonus.as_mut() {
            Some(bonus) => {
                bonus.remaining = bonus.remaining.saturating_sub(1);
                if bonus.remaining == 0 {
                    self.bonus = None;
                    debug!("bonus expired");
                    BonusTick::Expired
                } else {
                    BonusTick::Counting(bonus.remaining)
                }
            }
            None => match self.maybe_spawn_bonus(config, rng, snake) {
                Some(bonus) => BonusTick::Spawned(bonus),
                None => BonusTick::Idle,
            },
        }
    }

    /// Eat whatever sits at `pos`.
    ///
    /// Food is re-placed immediately (away from `snake` and the bonus); an
    /// eaten bonus is cleared together with its timer. If a live bonus holds
    /// the only free cell, the bonus is dropped and the food takes its cell.
    pub fn consume_if_match(
        &mut self,
        pos: Position,
        config: &GameConfig,
        rng: &mut SimpleRng,
        snake: &Snake,
    ) -> Option<Consumption> {
        let mut out = Consumption {
            ate_food: false,
            ate_bonus: false,
            reward: 0,
            board_full: false,
        };

        if self.food == pos {
            out.ate_food = true;
            out.reward += config.food_score;
            out.board_full = !self.respawn_food(config, rng, snake);
        }

        if self.bonus.map(|b| b.position) == Some(pos) {
            out.ate_bonus = true;
            out.reward += config.bonus_score;
            self.bonus = None;
        }

        (out.ate_food || out.ate_bonus).then_some(out)
    }

    /// Returns false when the snake leaves no cell for the food.
    fn respawn_food(&mut self, config: &GameConfig, rng: &mut SimpleRng, snake: &Snake) -> bool {
        let avoid = Avoid::snake(snake).with_opt(self.bonus.map(|b| b.position));
        if Self::has_free_cell(config, &avoid) {
            self.food = Self::spawn(config, rng, &avoid);
            debug!(x = self.food.x, y = self.food.y, "food respawned");
            return true;
        }
        match self.bonus.take() {
            Some(bonus) => {
                self.food = bonus.position;
                debug!(x = self.food.x, y = self.food.y, "bonus gave way to food");
                true
            }
            None => {
                debug!("board full");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::Segment;
    use crate::types::Direction;

    fn config() -> GameConfig {
        GameConfig::default().with_board(10, 10).with_initial_length(3)
    }

    fn snake() -> Snake {
        Snake::new(Position::new(5, 5), 3)
    }

    #[test]
    fn test_initial_food_avoids_snake() {
        let cfg = config();
        let snake = snake();
        for seed in 1..200 {
            let mut rng = SimpleRng::new(seed);
            let c = Collectibles::new(&cfg, &mut rng, &snake);
            assert!(!snake.occupies(c.food()));
            assert!(c.food().in_bounds(cfg.width, cfg.height));
            assert!(c.bonus().is_none());
        }
    }

    #[test]
    fn test_spawn_finds_last_free_cell() {
        // 3x1 board with a 2-long snake leaves only (2, 0) free.
        let cfg = GameConfig::default().with_board(3, 1).with_initial_length(2);
        let snake = Snake::new(Position::new(1, 0), 2);
        let mut rng = SimpleRng::new(3);
        for _ in 0..20 {
            assert_eq!(
                Collectibles::spawn(&cfg, &mut rng, &Avoid::snake(&snake)),
                Position::new(2, 0)
            );
        }
    }

    #[test]
    fn test_free_cell_check() {
        let cfg = GameConfig::default().with_board(3, 1).with_initial_length(2);
        let snake = Snake::new(Position::new(1, 0), 2);
        assert!(Collectibles::has_free_cell(&cfg, &Avoid::snake(&snake)));
        assert!(!Collectibles::has_free_cell(
            &cfg,
            &Avoid::snake(&snake).with(Position::new(2, 0))
        ));

        // Overlapping positions do not hide the free cell
        let overlap = Avoid::snake(&snake).with(Position::new(1, 0));
        assert!(Collectibles::has_free_cell(&cfg, &overlap));
    }

    #[test]
    fn test_eating_last_food_reports_full_board() {
        let cfg = GameConfig::default().with_board(3, 1).with_initial_length(2);
        // Head already moved onto the food at (2, 0)
        let snake = Snake::from_parts(
            Position::new(2, 0),
            Direction::Right,
            vec![
                Segment::Placed(Position::new(1, 0)),
                Segment::Placed(Position::new(0, 0)),
            ],
        );
        let mut rng = SimpleRng::new(5);
        let mut c = Collectibles::from_parts(Position::new(2, 0), None);

        let eaten = c
            .consume_if_match(Position::new(2, 0), &cfg, &mut rng, &snake)
            .unwrap();
        assert!(eaten.ate_food);
        assert!(eaten.board_full);
        assert_eq!(c.food(), Position::new(2, 0));
        assert_eq!(c.maybe_spawn_bonus(&cfg, &mut rng, &snake), None);
    }

    #[test]
    fn test_bonus_gives_way_to_food_on_last_cell() {
        let cfg = GameConfig::default().with_board(4, 1).with_initial_length(2);
        let snake = Snake::from_parts(
            Position::new(2, 0),
            Direction::Right,
            vec![
                Segment::Placed(Position::new(1, 0)),
                Segment::Placed(Position::new(0, 0)),
            ],
        );
        let bonus = Bonus {
            position: Position::new(3, 0),
            remaining: 9,
        };
        let mut rng = SimpleRng::new(5);
        let mut c = Collectibles::from_parts(Position::new(2, 0), Some(bonus));

        let eaten = c
            .consume_if_match(Position::new(2, 0), &cfg, &mut rng, &snake)
            .unwrap();
        assert!(!eaten.board_full);
        assert!(!eaten.ate_bonus);
        assert_eq!(c.food(), Position::new(3, 0));
        assert_eq!(c.bonus(), None);
    }

    #[test]
    #[should_panic]
    fn test_avoid_rejects_third_extra_position() {
        let snake = snake();
        let _ = Avoid::snake(&snake)
            .with(Position::new(0, 0))
            .with(Position::new(1, 1))
            .with(Position::new(2, 2));
    }

    #[test]
    fn test_avoid_respects_extra_positions() {
        let snake = snake();
        let avoid = Avoid::snake(&snake).with(Position::new(0, 0)).with_opt(None);
        assert!(avoid.contains(Position::new(0, 0)));
        assert!(avoid.contains(Position::new(4, 5)));
        assert!(!avoid.contains(Position::new(9, 9)));
    }

    #[test]
    fn test_consume_food_respawns_elsewhere() {
        let cfg = config();
        let snake = snake();
        let mut rng = SimpleRng::new(11);
        let bonus = Bonus {
            position: Position::new(1, 1),
            remaining: 5,
        };
        let mut c = Collectibles::from_parts(Position::new(8, 8), Some(bonus));

        let eaten = c.consume_if_match(Position::new(8, 8), &cfg, &mut rng, &snake);
        assert_eq!(
            eaten,
            Some(Consumption {
                ate_food: true,
                ate_bonus: false,
                reward: cfg.food_score,
                board_full: false,
            })
        );
        assert!(!snake.occupies(c.food()));
        assert_ne!(c.food(), bonus.position);
        assert_eq!(c.bonus(), Some(bonus));
    }

    #[test]
    fn test_consume_bonus_clears_it() {
        let cfg = config();
        let snake = snake();
        let mut rng = SimpleRng::new(11);
        let mut c = Collectibles::from_parts(
            Position::new(8, 8),
            Some(Bonus {
                position: Position::new(1, 1),
                remaining: 5,
            }),
        );

        let eaten = c.consume_if_match(Position::new(1, 1), &cfg, &mut rng, &snake);
        assert_eq!(eaten.map(|e| e.reward), Some(cfg.bonus_score));
        assert!(c.bonus().is_none());
        assert_eq!(c.food(), Position::new(8, 8));
    }

    #[test]
    fn test_consume_miss() {
        let cfg = config();
        let snake = snake();
        let mut rng = SimpleRng::new(11);
        let mut c = Collectibles::from_parts(Position::new(8, 8), None);
        assert_eq!(c.consume_if_match(Position::new(6, 5), &cfg, &mut rng, &snake), None);
        assert_eq!(c.food(), Position::new(8, 8));
    }

    #[test]
    fn test_bonus_expires_at_zero() {
        let cfg = config();
        let snake = snake();
        let mut rng = SimpleRng::new(1);
        let mut c = Collectibles::from_parts(
            Position::new(8, 8),
            Some(Bonus {
                position: Position::new(1, 1),
                remaining: 2,
            }),
        );

        assert_eq!(c.tick_bonus(&cfg, &mut rng, &snake), BonusTick::Counting(1));
        assert_eq!(c.tick_bonus(&cfg, &mut rng, &snake), BonusTick::Expired);
        assert!(c.bonus().is_none());
    }

    #[test]
    fn test_bonus_always_spawns_with_zero_chance() {
        // bonus_chance = 0 makes the roll range {0} with target 0.
        let mut cfg = config();
        cfg.bonus_chance = 0;
        let snake = snake();
        let mut rng = SimpleRng::new(5);
        let mut c = Collectibles::from_parts(Position::new(8, 8), None);

        match c.tick_bonus(&cfg, &mut rng, &snake) {
            BonusTick::Spawned(b) => {
                assert!(!snake.occupies(b.position));
                assert_ne!(b.position, c.food());
                assert!((cfg.bonus_min_time..=cfg.bonus_max_time).contains(&b.remaining));
                assert_eq!(c.bonus(), Some(b));
            }
            other => panic!("expected a spawn, got {:?}", other),
        }

        // A live bonus is never rolled for again.
        assert_eq!(c.maybe_spawn_bonus(&cfg, &mut rng, &snake), None);
    }

    #[test]
    fn test_bonus_spawn_rate_is_roughly_one_in_chance_plus_one() {
        let mut cfg = config();
        cfg.bonus_chance = 9;
        let snake = snake();
        let mut rng = SimpleRng::new(77);
        let mut hits = 0;
        let rolls = 10_000;
        for _ in 0..rolls {
            let mut c = Collectibles::from_parts(Position::new(8, 8), None);
            if c.maybe_spawn_bonus(&cfg, &mut rng, &snake).is_some() {
                hits += 1;
            }
        }
        // Expected 1/10 of rolls.
        assert!((700..1300).contains(&hits), "hits = {}", hits);
    }
}
