//! Fixed-delay tick loop.
//!
//! The driver owns the game state and is polled by the window once per
//! frame. It runs a tick whenever a full interval has passed since the
//! previous one and stops for good when the termination check fires.

use macroquad::input::KeyCode;
use rand::Rng;
use tracing::{info, warn};

use crate::config::GameConfig;
use crate::error::{PlacementError, Result};
use crate::input;
use crate::render::{DisplayList, Renderer, ScoreBoard};
use crate::state::{Collision, GameState, Step};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    Running,
    Stopped,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StopReason {
    Collision(Collision),
    Placement(PlacementError),
}

pub struct Driver<R> {
    state: GameState,
    rng: R,
    renderer: Renderer,
    frame: DisplayList,
    score_board: ScoreBoard,
    phase: Phase,
    stop_reason: Option<StopReason>,
    interval: f64,
    last_tick: f64,
}

impl<R: Rng> Driver<R> {
    /// Sets up a fresh game. The first tick comes one interval after `now`.
    pub fn new(config: &GameConfig, mut rng: R, now: f64) -> Result<Self> {
        let state = GameState::new(config, &mut rng)?;
        Ok(Self::with_state(state, rng, config.tick_interval_secs(), now))
    }

    pub fn with_state(state: GameState, rng: R, interval: f64, now: f64) -> Self {
        Self {
            renderer: Renderer::new(state.grid),
            state,
            rng,
            frame: DisplayList::default(),
            score_board: ScoreBoard::new(),
            phase: Phase::Running,
            stop_reason: None,
            interval,
            last_tick: now,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop_reason
    }

    /// The picture made by the latest tick.
    pub fn frame(&self) -> &DisplayList {
        &self.frame
    }

    pub fn score_board(&self) -> &ScoreBoard {
        &self.score_board
    }

    /// Key presses keep reaching the velocity after the game has stopped.
    pub fn on_key(&mut self, key: KeyCode) {
        input::change_direction(&mut self.state, key);
    }

    /// Same as [`Driver::on_key`] for every direction key held this frame.
    pub fn on_keys_pressed<F: Fn(KeyCode) -> bool>(&mut self, is_pressed: F) {
        input::change_direction_pressed(&mut self.state, is_pressed);
    }

    /// Runs a tick if one is due at `now`.
    pub fn update(&mut self, now: f64) -> Phase {
        if self.phase == Phase::Running && now - self.last_tick >= self.interval {
            self.last_tick = now;
            self.tick();
        }
        self.phase
    }

    /// One iteration: termination check, static layers, simulation step,
    /// snake.
    pub fn tick(&mut self) -> Phase {
        if self.phase == Phase::Stopped {
            return self.phase;
        }
        if let Some(collision) = self.state.collision() {
            self.stop(StopReason::Collision(collision));
            return self.phase;
        }

        let mut frame = DisplayList::default();
        self.renderer.clear(&mut frame);
        self.renderer.draw_obstacles(&mut frame, &self.state.obstacles);
        self.renderer.draw_food(&mut frame, self.state.food);

        match self.state.advance(&mut self.rng) {
            Ok(Step::Ate { score }) => self.score_board.on_score_changed(score),
            Ok(Step::Moved) => {}
            Err(e) => {
                // The score was raised before the new food failed to land
                self.score_board.on_score_changed(self.state.score);
                warn!("{}", e);
                self.stop(StopReason::Placement(e));
            }
        }

        self.renderer.draw_snake(&mut frame, &self.state.snake);
        self.frame = frame;
        self.phase
    }

    fn stop(&mut self, reason: StopReason) {
        info!(reason = ?reason, score = self.state.score, "game over");
        self.phase = Phase::Stopped;
        self.stop_reason = Some(reason);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Cell, Grid};
    use crate::placement::Attempts;
    use crate::render::DrawCommand;
    use crate::state::{Direction, INITIAL_SNAKE};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn driver(state: GameState) -> Driver<StdRng> {
        Driver::with_state(state, StdRng::seed_from_u64(1), 0.1, 0.0)
    }

    fn plain_state(food: Cell, obstacles: Vec<Cell>) -> GameState {
        GameState::from_parts(
            Grid::default(),
            INITIAL_SNAKE.to_vec(),
            Direction::Right,
            food,
            obstacles,
        )
    }

    #[test]
    fn test_waits_one_interval() {
        let mut d = driver(plain_state(Cell::new(0, 0), vec![]));

        d.update(0.05);
        assert!(d.frame().is_empty());
        assert_eq!(d.state().head(), Cell::new(160, 160));

        d.update(0.1);
        assert_eq!(d.state().head(), Cell::new(170, 160));
        assert!(!d.frame().is_empty());

        // Next tick is measured from the previous one
        d.update(0.15);
        assert_eq!(d.state().head(), Cell::new(170, 160));
        d.update(0.25);
        assert_eq!(d.state().head(), Cell::new(180, 160));
    }

    #[test]
    fn test_food_drawn_before_it_moves() {
        let mut d = driver(plain_state(Cell::new(170, 160), vec![]));
        d.tick();

        assert_eq!(d.state().score, 10);
        assert_eq!(d.score_board().text(), "Score: 10");
        // The frame still shows the food that was just eaten
        assert!(d.frame().commands().contains(&DrawCommand::Fill(
            Grid::default().rect(Cell::new(170, 160)),
            crate::render::FOOD
        )));
    }

    #[test]
    fn test_stops_on_obstacle_and_stays_stopped() {
        let mut d = driver(plain_state(Cell::new(0, 0), vec![Cell::new(180, 160)]));

        assert_eq!(d.tick(), Phase::Running);
        assert_eq!(d.tick(), Phase::Running);
        // Head is on the obstacle now; the next check ends the game
        assert_eq!(d.tick(), Phase::Stopped);
        assert_eq!(
            d.stop_reason(),
            Some(StopReason::Collision(Collision::Obstacle))
        );

        let snake = d.state().snake.clone();
        assert_eq!(d.update(10.0), Phase::Stopped);
        assert_eq!(d.state().snake, snake);
    }

    #[test]
    fn test_keys_still_reach_velocity_after_stop() {
        let mut d = driver(plain_state(Cell::new(0, 0), vec![Cell::new(140, 160)]));
        assert_eq!(d.tick(), Phase::Stopped);

        d.on_key(KeyCode::Up);
        assert_eq!(d.state().velocity().heading(), Direction::Up);
    }

    #[test]
    fn test_held_keys_apply_in_fixed_order() {
        let mut d = driver(plain_state(Cell::new(0, 0), vec![]));
        d.on_keys_pressed(|k| matches!(k, KeyCode::Left | KeyCode::Up));
        assert_eq!(d.state().velocity().heading(), Direction::Up);
    }

    #[test]
    fn test_placement_failure_ends_game() {
        // 2x1 field: eating the food leaves no free cell
        let grid = Grid::new(10, 20, 10).unwrap();
        let mut state = GameState::from_parts(
            grid,
            vec![Cell::new(0, 0)],
            Direction::Right,
            Cell::new(10, 0),
            vec![],
        );
        state.attempts = Attempts::AtMost(10);
        let mut d = driver(state);

        assert_eq!(d.tick(), Phase::Stopped);
        assert_eq!(
            d.stop_reason(),
            Some(StopReason::Placement(PlacementError::Food { attempts: 10 }))
        );
    }
}
