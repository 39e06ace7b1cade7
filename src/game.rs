use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::layout::Rect;

use crate::config::{GridSize, POINTS_PER_FOOD};
use crate::error::GameError;
use crate::food::Food;
use crate::input::{direction_change_is_valid, Direction, GameInput, PointerPosition};
use crate::snake::{Position, Snake};
use crate::steering::resolve_direction;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    Paused,
    GameOver,
    Victory,
}

/// Why the last session ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Result of one [`GameState::step`] call.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StepOutcome {
    /// The game was not running; nothing changed.
    Idle,
    Moved,
    Ate,
    Collided(DeathReason),
    /// The snake filled the board and no food could be placed.
    Won,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub tick_count: u64,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    started: bool,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a state seeded from OS entropy.
    pub fn new(bounds: GridSize) -> Result<Self, GameError> {
        Self::with_rng(bounds, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: GridSize, mut rng: StdRng) -> Result<Self, GameError> {
        let bounds = bounds.validate()?;
        let snake = Snake::new(start_position(bounds), Direction::Right);
        let food = Food::spawn(&mut rng, bounds, &snake)?;
        info!("new game on a {}x{} board", bounds.width, bounds.height);

        Ok(Self {
            snake,
            food,
            score: 0,
            tick_count: 0,
            status: GameStatus::Playing,
            bounds,
            death_reason: None,
            started: true,
            rng,
        })
    }

    /// Restarts play on the same board, keeping the random stream.
    pub fn reset(&mut self) -> Result<(), GameError> {
        let snake = Snake::new(start_position(self.bounds), Direction::Right);
        self.food = Food::spawn(&mut self.rng, self.bounds, &snake)?;
        self.snake = snake;
        self.score = 0;
        self.tick_count = 0;
        self.status = GameStatus::Playing;
        self.death_reason = None;
        self.started = true;
        info!("game reset");

        Ok(())
    }

    /// Advances the simulation by one tick heading in `direction`.
    ///
    /// On collision the snake body is left exactly as it was before the move.
    pub fn step(&mut self, direction: Direction) -> StepOutcome {
        if self.status != GameStatus::Playing {
            return StepOutcome::Idle;
        }

        self.tick_count += 1;
        self.snake.set_direction(direction);
        let next_head = self.snake.next_head_position();

        if !next_head.is_within_bounds(self.bounds) {
            return self.end(DeathReason::WallCollision);
        }

        if self.snake.occupies(next_head) {
            return self.end(DeathReason::SelfCollision);
        }

        let ate = next_head == self.food.position;
        self.snake.advance(next_head, ate);
        if !ate {
            return StepOutcome::Moved;
        }

        self.score += POINTS_PER_FOOD;
        match Food::spawn(&mut self.rng, self.bounds, &self.snake) {
            Ok(food) => {
                self.food = food;
                StepOutcome::Ate
            }
            Err(error) => {
                warn!("{error}");
                info!("board filled with score {}", self.score);
                self.status = GameStatus::Victory;
                StepOutcome::Won
            }
        }
    }

    /// Turns towards the pointer cell (see [`resolve_direction`]) and steps.
    pub fn step_towards(&mut self, target: Position) -> StepOutcome {
        let direction = resolve_direction(self.snake.head(), self.snake.moved_direction(), target);
        self.step(direction)
    }

    /// Advances one tick along the current heading.
    pub fn tick(&mut self) -> StepOutcome {
        self.step(self.snake.direction())
    }

    /// One loop tick: follows the pointer when known, else the current heading.
    ///
    /// Holds still while `grid_area` is `None`, i.e. the board is not on screen.
    pub fn update(
        &mut self,
        grid_area: Option<Rect>,
        pointer: Option<PointerPosition>,
    ) -> StepOutcome {
        let Some(area) = grid_area else {
            return StepOutcome::Idle;
        };

        match pointer {
            Some(position) => self.step_towards(position.to_cell(area)),
            None => self.tick(),
        }
    }

    /// Parks the session on the start screen until it is confirmed.
    pub fn show_start_screen(&mut self) {
        self.status = GameStatus::Paused;
        self.started = false;
    }

    /// Routes start, restart and pause commands.
    ///
    /// Restart only acts on a finished session; confirm starts play from the
    /// start screen and restarts a finished one.
    pub fn handle_command(&mut self, input: GameInput) -> Result<(), GameError> {
        match input {
            GameInput::Confirm if self.is_start_screen() => {
                self.status = GameStatus::Playing;
                self.started = true;
            }
            GameInput::Confirm | GameInput::Restart if self.is_terminal() => self.reset()?,
            other => self.apply_input(other),
        }

        Ok(())
    }

    /// Applies one external input event.
    ///
    /// Turns are checked against the last move taken, so several key presses
    /// inside one tick cannot fold the snake back onto its neck.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => {
                if self.status == GameStatus::Playing
                    && direction_change_is_valid(self.snake.moved_direction(), direction)
                {
                    self.snake.set_direction(direction);
                }
            }
            GameInput::Pause => {
                self.status = match self.status {
                    GameStatus::Playing => GameStatus::Paused,
                    GameStatus::Paused => GameStatus::Playing,
                    other => other,
                };
                if self.status == GameStatus::Playing {
                    self.started = true;
                }
            }
            GameInput::Pointer(_) | GameInput::Restart | GameInput::Quit | GameInput::Confirm => {}
        }
    }

    fn end(&mut self, reason: DeathReason) -> StepOutcome {
        info!("game over ({reason:?}) with score {}", self.score);
        self.status = GameStatus::GameOver;
        self.death_reason = Some(reason);
        StepOutcome::Collided(reason)
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// True once a collision ended the session.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// True for any state that only [`GameState::reset`] can leave.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self.status, GameStatus::GameOver | GameStatus::Victory)
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn death_reason(&self) -> Option<DeathReason> {
        self.death_reason
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.snake.direction()
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[must_use]
    pub fn food(&self) -> Food {
        self.food
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// True while parked on the start screen, see [`GameState::show_start_screen`].
    #[must_use]
    pub fn is_start_screen(&self) -> bool {
        self.status == GameStatus::Paused && !self.started
    }
}

fn start_position(bounds: GridSize) -> Position {
    Position {
        x: i32::from(bounds.width / 2),
        y: i32::from(bounds.height / 2),
    }
}
