use std::time::{Duration, Instant};

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::food::Food;
use crate::grid::Direction;
use crate::snake::{Collision, Snake};

/// Gameplay step, independent of the frame rate.
pub const TICK_INTERVAL: Duration = Duration::from_millis(150);

/// Fires once more than `interval` has passed since the last firing.
#[derive(Clone, Copy, Debug)]
pub struct TickTimer {
    interval: Duration,
    last_tick: Instant,
}

impl TickTimer {
    pub fn new(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            last_tick: start,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true and restarts the interval at `now` if it has elapsed.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_tick) > self.interval {
            self.last_tick = now;
            true
        } else {
            false
        }
    }
}

/// What a single gameplay tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Ate { score: u32 },
    Reset { collision: Collision, final_score: u32 },
}

pub struct Game<R = StdRng> {
    snake: Snake,
    food: Food,
    score: u32,
    timer: TickTimer,
    rng: R,
}

impl Game<StdRng> {
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), Instant::now())
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(mut rng: R, start: Instant) -> Self {
        let food = Food::new(&mut rng);
        Self {
            snake: Snake::new(),
            food,
            score: 0,
            timer: TickTimer::new(TICK_INTERVAL, start),
            rng,
        }
    }

    /// Replaces the board contents. Score and timer are kept.
    pub fn with_state(mut self, snake: Snake, food: Food) -> Self {
        self.snake = snake;
        self.food = food;
        self
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn tick_interval(&self) -> Duration {
        self.timer.interval()
    }

    /// Applies to the snake on the next tick; reversals are dropped.
    pub fn set_direction(&mut self, direction: Direction) {
        self.snake.set_direction(direction);
    }

    /// Runs a tick if the tick interval has elapsed by `now`.
    pub fn advance(&mut self, now: Instant) -> Option<TickOutcome> {
        self.timer.poll(now).then(|| self.update())
    }

    /// One gameplay step: move, eat, keep the food off the body, then
    /// restart the snake if it crashed.
    pub fn update(&mut self) -> TickOutcome {
        self.snake.move_forward();
        let ate = self.resolve_collisions();

        if let Some(collision) = self.snake.collision() {
            let final_score = self.score;
            self.game_over();
            info!("snake {collision}, final score {final_score}; starting over");
            return TickOutcome::Reset {
                collision,
                final_score,
            };
        }

        if ate {
            TickOutcome::Ate { score: self.score }
        } else {
            TickOutcome::Moved
        }
    }

    fn resolve_collisions(&mut self) -> bool {
        let mut ate = false;
        if self.snake.head() == self.food.position() {
            self.food.randomize(&mut self.rng);
            self.snake.grow();
            self.score += 1;
            ate = true;
            debug!("food eaten, score {}", self.score);
        }

        // Single pass: a fresh position is only checked against the
        // segments not yet visited.
        for &segment in self.snake.body().iter().skip(1) {
            if segment == self.food.position() {
                self.food.randomize(&mut self.rng);
                debug!(
                    "food was under the body at ({}, {}), moved to ({}, {})",
                    segment.x,
                    segment.y,
                    self.food.position().x,
                    self.food.position().y
                );
            }
        }
        ate
    }

    // Food stays where it is.
    fn game_over(&mut self) {
        self.snake = Snake::new();
        self.score = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Position;
    use rand::rngs::mock::StepRng;

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    /// `gen_range` on this rng always yields the lower bound, so every
    /// respawn lands on (0, 0).
    fn corner_rng() -> StepRng {
        StepRng::new(0, 0)
    }

    fn game_with(snake: Snake, food: Position) -> Game<StepRng> {
        Game::with_rng(corner_rng(), Instant::now()).with_state(snake, Food::at(food))
    }

    #[test]
    fn new_game_starts_clean() {
        let game = Game::new(3);
        assert_eq!(game.score(), 0);
        assert_eq!(game.snake(), &Snake::new());
        assert_eq!(game.tick_interval(), Duration::from_millis(150));
    }

    #[test]
    fn plain_tick_moves_the_snake() {
        let mut game = game_with(Snake::new(), p(20, 20));
        assert_eq!(game.update(), TickOutcome::Moved);
        assert_eq!(game.snake().head(), p(6, 10));
        assert_eq!(game.score(), 0);
        assert_eq!(game.food().position(), p(20, 20));
    }

    #[test]
    fn eating_scores_grows_and_respawns() {
        let mut game = game_with(Snake::new(), p(6, 10));
        assert_eq!(game.update(), TickOutcome::Ate { score: 1 });
        assert_eq!(game.score(), 1);
        assert!(game.snake().pending_growth());
        assert_eq!(game.snake().len(), 3);
        assert_eq!(game.food().position(), p(0, 0));

        game.update();
        assert_eq!(game.snake().len(), 4);
        assert!(!game.snake().pending_growth());
    }

    #[test]
    fn food_under_the_body_is_moved() {
        // After the move the body is [(6,10),(5,10),(4,10)].
        let mut game = game_with(Snake::new(), p(4, 10));
        assert_eq!(game.update(), TickOutcome::Moved);
        assert_eq!(game.food().position(), p(0, 0));
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn overlap_correction_is_a_single_pass() {
        // Snake heading up the left column; after the move the body is
        // [(0,0),(0,1),(0,2),(0,3)]. Food under (0,2) respawns at (0,0),
        // the head, and is left there.
        let snake = Snake::from_segments(vec![p(0, 1), p(0, 2), p(0, 3), p(0, 4)], Direction::Up);
        let mut game = game_with(snake, p(0, 2));
        assert_eq!(game.update(), TickOutcome::Moved);
        assert_eq!(game.food().position(), p(0, 0));
        assert_eq!(game.snake().head(), p(0, 0));
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn wall_crash_resets_snake_and_score_but_not_food() {
        let snake = Snake::from_segments(vec![p(0, 10), p(1, 10), p(2, 10)], Direction::Left);
        let mut game = game_with(snake, p(30, 20));
        game.score = 7;

        assert_eq!(
            game.update(),
            TickOutcome::Reset {
                collision: Collision::Wall,
                final_score: 7
            }
        );
        assert_eq!(game.score(), 0);
        assert_eq!(game.snake(), &Snake::new());
        assert_eq!(game.food().position(), p(30, 20));
    }

    #[test]
    fn self_bite_resets() {
        let snake = Snake::from_segments(
            vec![p(5, 5), p(6, 5), p(6, 6), p(5, 6), p(4, 6)],
            Direction::Down,
        );
        let mut game = game_with(snake, p(30, 20));
        game.score = 2;
        assert_eq!(
            game.update(),
            TickOutcome::Reset {
                collision: Collision::SelfBite,
                final_score: 2
            }
        );
        assert_eq!(game.snake(), &Snake::new());
    }

    #[test]
    fn reset_keeps_food_even_on_the_new_body() {
        let snake = Snake::from_segments(vec![p(39, 0)], Direction::Right);
        let mut game = game_with(snake, p(4, 10));
        game.update();
        assert_eq!(game.snake(), &Snake::new());
        assert_eq!(game.food().position(), p(4, 10));
    }

    #[test]
    fn reversal_request_is_ignored_by_the_game() {
        let mut game = game_with(Snake::new(), p(20, 20));
        game.set_direction(Direction::Left);
        game.update();
        assert_eq!(game.snake().head(), p(6, 10));
    }

    #[test]
    fn last_direction_before_tick_wins() {
        let mut game = game_with(Snake::new(), p(20, 20));
        game.set_direction(Direction::Up);
        game.set_direction(Direction::Right);
        game.set_direction(Direction::Down);
        game.update();
        assert_eq!(game.snake().head(), p(5, 11));
    }

    #[test]
    fn tick_timer_needs_strictly_more_than_the_interval() {
        let start = Instant::now();
        let mut timer = TickTimer::new(TICK_INTERVAL, start);
        assert!(!timer.poll(start));
        assert!(!timer.poll(start + TICK_INTERVAL));
        assert!(timer.poll(start + TICK_INTERVAL + Duration::from_millis(1)));
        // Restarted at the firing time.
        assert!(!timer.poll(start + Duration::from_millis(200)));
        assert!(timer.poll(start + Duration::from_millis(302)));
    }

    #[test]
    fn advance_is_gated_by_the_tick_interval() {
        let start = Instant::now();
        let mut game =
            Game::with_rng(corner_rng(), start).with_state(Snake::new(), Food::at(p(20, 20)));

        for ms in [16, 33, 50, 100, 150] {
            assert_eq!(game.advance(start + Duration::from_millis(ms)), None);
        }
        assert_eq!(game.snake().head(), p(5, 10));

        assert_eq!(
            game.advance(start + Duration::from_millis(166)),
            Some(TickOutcome::Moved)
        );
        assert_eq!(game.snake().head(), p(6, 10));
        assert_eq!(game.advance(start + Duration::from_millis(183)), None);
    }
}
