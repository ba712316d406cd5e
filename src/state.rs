//! Game state and the per-tick simulation.

use rand::Rng;
use tracing::{debug, info, trace};

use crate::config::GameConfig;
use crate::error::{PlacementError, Result};
use crate::grid::{Cell, Grid};
use crate::placement::{self, Attempts};

/// Starting body, head first, heading right.
pub const INITIAL_SNAKE: [Cell; 3] = [Cell::new(160, 160), Cell::new(150, 160), Cell::new(140, 160)];

/// Body segments this close to the head can never meet it within a tick.
const SELF_COLLISION_EXEMPT: usize = 4;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn is_opposite(self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }
}

/// One-cell step per tick along exactly one axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Velocity {
    heading: Direction,
    step: i32,
}

impl Velocity {
    pub fn new(heading: Direction, step: i32) -> Self {
        Self { heading, step }
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn dx(&self) -> i32 {
        match self.heading {
            Direction::Left => -self.step,
            Direction::Right => self.step,
            Direction::Up | Direction::Down => 0,
        }
    }

    pub fn dy(&self) -> i32 {
        match self.heading {
            Direction::Up => -self.step,
            Direction::Down => self.step,
            Direction::Left | Direction::Right => 0,
        }
    }

    /// Turns towards `heading` unless that would reverse the snake.
    pub fn steer(&mut self, heading: Direction) {
        if !self.heading.is_opposite(heading) {
            self.heading = heading;
        }
    }
}

/// What ended a run.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Collision {
    /// Head met a body segment at index 4 or later.
    SelfCollision,
    /// Some segment, not only the head, sits on an obstacle.
    Obstacle,
}

/// Outcome of one simulation step.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Step {
    Moved,
    /// Food was eaten; carries the new score.
    Ate { score: u32 },
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub grid: Grid,
    /// Head first.
    pub snake: Vec<Cell>,
    pub food: Cell,
    pub obstacles: Vec<Cell>,
    pub score: u32,
    pub food_reward: u32,
    pub attempts: Attempts,
    velocity: Velocity,
}

impl GameState {
    /// Builds the starting state: the fixed snake, then food, then obstacles.
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Self> {
        let grid = config.grid()?;
        let attempts = Attempts::from(config.max_placement_attempts);
        let snake = INITIAL_SNAKE.to_vec();

        let food = placement::place_food(&grid, &snake, attempts, rng)?;
        let obstacles =
            placement::place_obstacles(&grid, config.obstacle_count, &snake, food, attempts, rng)?;
        info!(x = food.x, y = food.y, obstacles = ?obstacles, "field placed");

        let mut state = Self::from_parts(grid, snake, Direction::Right, food, obstacles);
        state.food_reward = config.food_reward;
        state.attempts = attempts;
        Ok(state)
    }

    /// Assembles a state from explicit pieces, with a zero score, the
    /// default reward of 10 and unbounded placement.
    pub fn from_parts(
        grid: Grid,
        snake: Vec<Cell>,
        heading: Direction,
        food: Cell,
        obstacles: Vec<Cell>,
    ) -> Self {
        Self {
            velocity: Velocity::new(heading, grid.cell_size()),
            grid,
            snake,
            food,
            obstacles,
            score: 0,
            food_reward: 10,
            attempts: Attempts::Unbounded,
        }
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    /// The only way input reaches the state.
    pub fn steer(&mut self, heading: Direction) {
        self.velocity.steer(heading);
    }

    pub fn head(&self) -> Cell {
        self.snake[0]
    }

    /// Moves the snake one cell, wrapping at every edge.
    ///
    /// Eating grows the snake by one, raises the score and places new food
    /// (checked against the snake only). Otherwise the tail is dropped.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> std::result::Result<Step, PlacementError> {
        let v = self.velocity;
        let head = self.grid.wrap(self.head().offset(v.dx(), v.dy()));
        self.snake.insert(0, head);

        if head == self.food {
            self.score = self.score.saturating_add(self.food_reward);
            self.food = placement::place_food(&self.grid, &self.snake, self.attempts, rng)?;
            debug!(score = self.score, x = self.food.x, y = self.food.y, "food eaten");
            Ok(Step::Ate { score: self.score })
        } else {
            self.snake.pop();
            Ok(Step::Moved)
        }
    }

    /// Checks whether the run is over, and why.
    pub fn collision(&self) -> Option<Collision> {
        let head = self.head();

        if self.snake.iter().skip(SELF_COLLISION_EXEMPT).any(|s| *s == head) {
            return Some(Collision::SelfCollision);
        }

        // Wraparound keeps the head inside; this never decides the outcome.
        let hit_wall = !self.grid.contains(head);
        trace!(hit_wall, "wall check");

        if self.snake.iter().any(|s| self.obstacles.contains(s)) {
            return Some(Collision::Obstacle);
        }

        None
    }

    pub fn did_game_end(&self) -> bool {
        self.collision().is_some()
    }
}
