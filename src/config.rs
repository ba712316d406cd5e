//! Startup configuration, read from an optional JSON file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SnakeError};
use crate::grid::{CELL_SIZE, FIELD_HEIGHT, FIELD_WIDTH, Grid};
use crate::state::INITIAL_SNAKE;

pub const CONFIG_PATH: &str = "snake_config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub cell_size: i32,
    pub field_width: i32,
    pub field_height: i32,
    /// Delay between ticks
    pub tick_interval_ms: u64,
    pub obstacle_count: usize,
    /// Points per food eaten
    pub food_reward: u32,
    /// Cap on samples per placement; `None` retries forever.
    pub max_placement_attempts: Option<u32>,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            tick_interval_ms: 100,
            obstacle_count: 5,
            food_reward: 10,
            max_placement_attempts: None,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Reads the config at `path`, or the defaults when there is no file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path).map_err(|source| SnakeError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let grid = self.grid()?;
        if !INITIAL_SNAKE.iter().all(|c| grid.contains(*c) && grid.is_aligned(*c)) {
            return Err(SnakeError::InvalidGrid(
                "the starting snake does not sit on the grid".to_string(),
            ));
        }
        let cells = (grid.columns() as usize) * (grid.rows() as usize);
        if self.obstacle_count > cells {
            return Err(SnakeError::InvalidConfig(format!(
                "obstacle_count {} exceeds the {} cells of the field",
                self.obstacle_count, cells
            )));
        }
        if self.max_placement_attempts == Some(0) {
            return Err(SnakeError::InvalidConfig(
                "max_placement_attempts must be at least 1".to_string(),
            ));
        }
        if self.tick_interval_ms == 0 {
            return Err(SnakeError::InvalidConfig(
                "tick_interval_ms must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn grid(&self) -> Result<Grid> {
        Grid::new(self.cell_size, self.field_width, self.field_height)
    }

    pub fn tick_interval_secs(&self) -> f64 {
        self.tick_interval_ms as f64 / 1000.0
    }
}
