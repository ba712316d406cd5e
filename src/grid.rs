//! Field geometry

use macroquad::math::Rect;

use crate::error::{Result, SnakeError};

/// Side of one cell, in field units
pub const CELL_SIZE: i32 = 10;
pub const FIELD_WIDTH: i32 = 400;
pub const FIELD_HEIGHT: i32 = 400;

/// Top-left corner of a cell, in field units.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// A bounded field cut into square cells.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Grid {
    cell: i32,
    width: i32,
    height: i32,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            cell: CELL_SIZE,
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

impl Grid {
    pub fn new(cell: i32, width: i32, height: i32) -> Result<Self> {
        if cell <= 0 || width <= 0 || height <= 0 {
            return Err(SnakeError::InvalidGrid(format!(
                "cell {cell}, width {width} and height {height} must all be positive"
            )));
        }
        if width % cell != 0 || height % cell != 0 {
            return Err(SnakeError::InvalidGrid(format!(
                "{width}x{height} is not a whole number of {cell} unit cells"
            )));
        }
        Ok(Self { cell, width, height })
    }

    pub fn cell_size(&self) -> i32 {
        self.cell
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn columns(&self) -> i32 {
        self.width / self.cell
    }

    pub fn rows(&self) -> i32 {
        self.height / self.cell
    }

    pub fn contains(&self, c: Cell) -> bool {
        c.x >= 0 && c.x < self.width && c.y >= 0 && c.y < self.height
    }

    pub fn is_aligned(&self, c: Cell) -> bool {
        c.x % self.cell == 0 && c.y % self.cell == 0
    }

    /// Brings a cell that stepped off an edge back in at the opposite edge.
    /// Each axis is handled on its own.
    pub fn wrap(&self, c: Cell) -> Cell {
        Cell::new(
            wrap_axis(c.x, self.width, self.cell),
            wrap_axis(c.y, self.height, self.cell),
        )
    }

    /// Screen rectangle covered by a cell.
    pub fn rect(&self, c: Cell) -> Rect {
        Rect::new(c.x as f32, c.y as f32, self.cell as f32, self.cell as f32)
    }
}

fn wrap_axis(v: i32, extent: i32, cell: i32) -> i32 {
    if v >= extent {
        0
    } else if v < 0 {
        extent - cell
    } else {
        v
    }
}
