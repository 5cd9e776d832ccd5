use super::{
    action::Direction,
    config::GameConfig,
    state::{CollisionType, GameState, Position, Snake},
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, info};

/// Result of a game tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickResult {
    /// Whether the snake ate the apple this tick
    pub ate_apple: bool,
    /// Collision that ended the game, if any
    pub collision: Option<CollisionType>,
}

impl TickResult {
    /// Whether the game is over after this tick
    pub fn terminated(&self) -> bool {
        self.collision.is_some()
    }
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine seeded from system entropy
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a game engine with a fixed seed, for reproducible apple placement
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a fresh game: snake on the top row heading right, tail at x = 0
    pub fn reset(&mut self) -> GameState {
        let unit = self.config.unit_size;
        let length = self.config.initial_body_parts;
        let start_x = length.saturating_sub(1) as i32 * unit;

        let snake = Snake::new(
            Position::new(start_x, 0),
            Direction::Right,
            length,
            unit,
            self.config.capacity(),
        );

        let apple = self.spawn_apple();
        info!(
            body_parts = length,
            apple_x = apple.x,
            apple_y = apple.y,
            "game started"
        );

        GameState::new(
            snake,
            apple,
            self.config.screen_width,
            self.config.screen_height,
        )
    }

    /// Change the heading of the snake.
    ///
    /// Reversals and input after game over are ignored. Returns whether the
    /// direction was applied.
    pub fn set_direction(&self, state: &mut GameState, direction: Direction) -> bool {
        if !state.running {
            return false;
        }
        if state.snake.direction.is_opposite(direction) {
            debug!(current = ?state.snake.direction, requested = ?direction, "reversal ignored");
            return false;
        }
        state.snake.direction = direction;
        true
    }

    /// Advance the game by one tick: move, eat, then check collisions
    pub fn tick(&mut self, state: &mut GameState) -> TickResult {
        if !state.running {
            return TickResult::default();
        }

        state.snake.advance(self.config.unit_size);

        let ate_apple = state.snake.head() == state.apple;
        if ate_apple {
            state.snake.grow();
            state.score += 1;
            state.apple = self.spawn_apple();
            debug!(
                score = state.score,
                body_parts = state.snake.len(),
                "apple eaten"
            );
        }

        let collision = self.check_collision(state);
        if let Some(kind) = collision {
            state.running = false;
            info!(score = state.score, collision = ?kind, "game over");
        }

        TickResult {
            ate_apple,
            collision,
        }
    }

    /// Check if the head position ends the game
    fn check_collision(&self, state: &GameState) -> Option<CollisionType> {
        if state.snake.bites_itself() {
            return Some(CollisionType::SelfCollision);
        }

        if !state.is_in_bounds(state.snake.head()) {
            return Some(CollisionType::Wall);
        }

        None
    }

    /// Pick a random grid-aligned cell. The snake is not avoided.
    fn spawn_apple(&mut self) -> Position {
        let unit = self.config.unit_size;
        let x = self.rng.gen_range(0..self.config.columns()) * unit;
        let y = self.rng.gen_range(0..self.config.rows()) * unit;
        Position::new(x, y)
    }
}
