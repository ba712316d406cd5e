//! Grid snake on a fixed 400x400 field.
//!
//! The library holds everything that does not need a window: field geometry,
//! the game state and its tick, placement, key mapping, the renderer (which
//! records into a display list) and the loop driver. The binary replays the
//! recorded frames through macroquad.

pub mod config;
pub mod driver;
pub mod error;
pub mod grid;
pub mod input;
pub mod placement;
pub mod render;
pub mod state;

pub use config::GameConfig;
pub use driver::{Driver, Phase, StopReason};
pub use error::{PlacementError, Result, SnakeError};
pub use grid::{Cell, Grid};
pub use state::{Collision, Direction, GameState, Step, Velocity};
