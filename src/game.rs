use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::autopilot::plan_move;
use crate::food::place_food;
use crate::grid::{GridSize, Position};
use crate::input::{Direction, GameInput};
use crate::snake::Snake;

/// Who steers the snake.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlMode {
    Auto,
    Manual,
}

impl ControlMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Auto => Self::Manual,
            Self::Manual => Self::Auto,
        }
    }

    /// Label shown on the status line.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Auto => "AUTO",
            Self::Manual => "MANUAL",
        }
    }
}

/// Why the board was re-initialised.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ResetReason {
    WallCollision,
    SelfCollision,
    Restart,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    Moved,
    Ate,
    Reset(ResetReason),
}

/// Complete mutable simulation state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Option<Position>,
    pub score: u32,
    pub best_score: u32,
    pub mode: ControlMode,
    pub tick_count: u64,
    pub resets: u32,
    pub last_reset: Option<ResetReason>,
    path: Vec<Position>,
    queued_direction: Option<Direction>,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a state seeded from OS entropy.
    #[must_use]
    pub fn new(bounds: GridSize, mode: ControlMode) -> Self {
        Self::with_rng(bounds, mode, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, mode: ControlMode, seed: u64) -> Self {
        Self::with_rng(bounds, mode, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: GridSize, mode: ControlMode, mut rng: StdRng) -> Self {
        let snake = Snake::centered(bounds);
        let food = place_food(&mut rng, bounds, &snake.occupied_cells());

        Self {
            snake,
            food,
            score: 0,
            best_score: 0,
            mode,
            tick_count: 0,
            resets: 0,
            last_reset: None,
            path: Vec::new(),
            queued_direction: None,
            bounds,
            rng,
        }
    }

    /// Advances the simulation by one tick.
    pub fn tick(&mut self) -> TickOutcome {
        self.tick_count += 1;

        let requested = self.choose_direction();
        self.snake.step(requested);

        let head = self.snake.head();
        if self.snake.collides(self.bounds) {
            let reason = if self.bounds.contains(head) {
                ResetReason::SelfCollision
            } else {
                ResetReason::WallCollision
            };
            self.reset(reason);
            return TickOutcome::Reset(reason);
        }

        if self.food == Some(head) {
            self.snake.mark_growth();
            self.score += 1;
            self.best_score = self.best_score.max(self.score);
            self.food = place_food(&mut self.rng, self.bounds, &self.snake.occupied_cells());
            debug!(score = self.score, food = ?self.food, "food eaten");
            return TickOutcome::Ate;
        }

        TickOutcome::Moved
    }

    /// Applies one external input event.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => {
                self.queued_direction = Some(direction);
                if self.mode == ControlMode::Auto {
                    self.set_mode(ControlMode::Manual);
                }
            }
            GameInput::ToggleAuto => {
                self.queued_direction = None;
                self.set_mode(self.mode.toggled());
            }
            GameInput::Restart => self.reset(ResetReason::Restart),
            GameInput::Quit => {}
        }
    }

    /// Re-initialises snake, food and score. The control mode survives.
    pub fn reset(&mut self, reason: ResetReason) {
        info!(?reason, score = self.score, length = self.snake.len(), "reset");

        self.snake = Snake::centered(self.bounds);
        self.food = place_food(&mut self.rng, self.bounds, &self.snake.occupied_cells());
        self.score = 0;
        self.path.clear();
        self.queued_direction = None;
        self.resets += 1;
        self.last_reset = Some(reason);
    }

    /// Path searched by the most recent AUTO tick; empty otherwise.
    #[must_use]
    pub fn path(&self) -> &[Position] {
        &self.path
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    #[must_use]
    pub fn queued_direction(&self) -> Option<Direction> {
        self.queued_direction
    }

    fn set_mode(&mut self, mode: ControlMode) {
        self.mode = mode;
        self.path.clear();
        debug!(mode = mode.label(), "control mode changed");
    }

    fn choose_direction(&mut self) -> Option<Direction> {
        match (self.mode, self.food) {
            (ControlMode::Auto, Some(food)) => {
                let planned = plan_move(&mut self.rng, &self.snake, food, self.bounds);
                self.path = planned.path;
                planned.direction
            }
            (ControlMode::Auto, None) => {
                self.path.clear();
                None
            }
            (ControlMode::Manual, _) => {
                self.path.clear();
                self.queued_direction.take()
            }
        }
    }
}
