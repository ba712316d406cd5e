//! Random placement of food and obstacles by rejection sampling.
//!
//! Both samplers draw a uniformly random cell and try again while it lands
//! on something it must avoid. Food only avoids the snake. Obstacles avoid
//! the snake and the food but not each other, so two obstacles may share a
//! cell. Neither rule is rechecked once a cell has been accepted.
//!
//! With [`Attempts::Unbounded`] a field with no free cell makes the sampler
//! spin forever. The chance of that on the default field is nil, but it is a
//! real property of the loop; configure [`Attempts::AtMost`] to turn it into
//! a [`PlacementError`] instead.

use rand::Rng;
use tracing::trace;

use crate::error::PlacementError;
use crate::grid::{Cell, Grid};

/// How many samples a single placement may draw.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Attempts {
    #[default]
    Unbounded,
    AtMost(u32),
}

impl Attempts {
    fn exhausted(self, tried: u32) -> bool {
        match self {
            Attempts::Unbounded => false,
            Attempts::AtMost(max) => tried >= max,
        }
    }
}

impl From<Option<u32>> for Attempts {
    fn from(cap: Option<u32>) -> Self {
        cap.map_or(Attempts::Unbounded, Attempts::AtMost)
    }
}

/// A uniformly random cell inside the field.
pub fn random_cell<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Cell {
    let cell = grid.cell_size();
    Cell::new(
        rng.gen_range(0..grid.columns()) * cell,
        rng.gen_range(0..grid.rows()) * cell,
    )
}

/// Samples cells until `accept` takes one. Returns the cell, or the number
/// of attempts made once the budget runs out.
fn sample<R, F>(grid: &Grid, limit: Attempts, rng: &mut R, mut accept: F) -> Result<Cell, u32>
where
    R: Rng + ?Sized,
    F: FnMut(Cell) -> bool,
{
    let mut tried: u32 = 0;
    loop {
        let cell = random_cell(grid, rng);
        tried = tried.saturating_add(1);
        if accept(cell) {
            return Ok(cell);
        }
        trace!(x = cell.x, y = cell.y, tried, "placement sample rejected");
        if limit.exhausted(tried) {
            return Err(tried);
        }
    }
}

/// Picks a food cell that is not under the snake.
pub fn place_food<R: Rng + ?Sized>(
    grid: &Grid,
    snake: &[Cell],
    limit: Attempts,
    rng: &mut R,
) -> Result<Cell, PlacementError> {
    sample(grid, limit, rng, |c| !snake.contains(&c))
        .map_err(|attempts| PlacementError::Food { attempts })
}

/// Places `count` obstacles, each clear of the snake and the food.
pub fn place_obstacles<R: Rng + ?Sized>(
    grid: &Grid,
    count: usize,
    snake: &[Cell],
    food: Cell,
    limit: Attempts,
    rng: &mut R,
) -> Result<Vec<Cell>, PlacementError> {
    let mut obstacles = Vec::new();
    for index in 0..count {
        let cell = sample(grid, limit, rng, |c| c != food && !snake.contains(&c))
            .map_err(|attempts| PlacementError::Obstacle { index, attempts })?;
        obstacles.push(cell);
    }
    Ok(obstacles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn snake() -> Vec<Cell> {
        vec![Cell::new(160, 160), Cell::new(150, 160), Cell::new(140, 160)]
    }

    #[test]
    fn test_random_cell_is_aligned_and_inside() {
        let grid = Grid::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let c = random_cell(&grid, &mut rng);
            assert!(grid.contains(c));
            assert!(grid.is_aligned(c));
        }
    }

    #[test]
    fn test_food_avoids_snake() {
        // 3x1 field with the snake on two of the three cells
        let grid = Grid::new(10, 30, 10).unwrap();
        let body = vec![Cell::new(0, 0), Cell::new(10, 0)];
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let food = place_food(&grid, &body, Attempts::Unbounded, &mut rng).unwrap();
            assert_eq!(food, Cell::new(20, 0));
        }
    }

    #[test]
    fn test_obstacles_avoid_snake_and_food() {
        let grid = Grid::new(10, 40, 10).unwrap();
        let body = vec![Cell::new(0, 0), Cell::new(10, 0)];
        let food = Cell::new(20, 0);
        let mut rng = StdRng::seed_from_u64(3);

        let obstacles =
            place_obstacles(&grid, 4, &body, food, Attempts::Unbounded, &mut rng).unwrap();

        // Only one free cell, so all four obstacles pile up on it
        assert_eq!(obstacles, vec![Cell::new(30, 0); 4]);
    }

    #[test]
    fn test_obstacle_count_is_exact() {
        let grid = Grid::default();
        let mut rng = StdRng::seed_from_u64(11);
        let food = place_food(&grid, &snake(), Attempts::Unbounded, &mut rng).unwrap();
        let obstacles =
            place_obstacles(&grid, 5, &snake(), food, Attempts::Unbounded, &mut rng).unwrap();

        assert_eq!(obstacles.len(), 5);
        for o in &obstacles {
            assert!(grid.contains(*o));
            assert!(grid.is_aligned(*o));
            assert_ne!(*o, food);
            assert!(!snake().contains(o));
        }
    }

    #[test]
    fn test_capped_food_placement_fails_on_full_field() {
        let grid = Grid::new(10, 20, 10).unwrap();
        let body = vec![Cell::new(0, 0), Cell::new(10, 0)];
        let mut rng = StdRng::seed_from_u64(5);

        let err = place_food(&grid, &body, Attempts::AtMost(25), &mut rng).unwrap_err();
        assert_eq!(err, PlacementError::Food { attempts: 25 });
    }

    #[test]
    fn test_capped_obstacle_placement_reports_index() {
        let grid = Grid::new(10, 30, 10).unwrap();
        let body = vec![Cell::new(0, 0), Cell::new(10, 0)];
        let food = Cell::new(20, 0);
        let mut rng = StdRng::seed_from_u64(5);

        let err = place_obstacles(&grid, 2, &body, food, Attempts::AtMost(8), &mut rng)
            .unwrap_err();
        assert_eq!(err, PlacementError::Obstacle { index: 0, attempts: 8 });
    }

    #[test]
    fn test_attempts_from_option() {
        assert_eq!(Attempts::from(None), Attempts::Unbounded);
        assert_eq!(Attempts::from(Some(3)), Attempts::AtMost(3));
    }
}
