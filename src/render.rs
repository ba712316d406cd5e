//! Drawing.
//!
//! The renderer paints onto any [`Surface`]. A tick paints into a
//! [`DisplayList`], which the window then replays onto the [`Screen`] every
//! frame until the next tick replaces it.

use macroquad::prelude::*;

use crate::grid::{Cell, Grid};

pub const BACKGROUND: Color = BLACK;
pub const OBSTACLE: Color = BLUE;
pub const FOOD: Color = RED;
pub const SNAKE_FILL: Color = Color::new(0.56, 0.93, 0.56, 1.0); // light green
pub const SNAKE_BORDER: Color = Color::new(0.0, 0.39, 0.0, 1.0); // dark green

const STROKE_WIDTH: f32 = 1.0;

/// A 2D target with the three primitives the game needs.
pub trait Surface {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn stroke_rect(&mut self, rect: Rect, color: Color);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Fill(Rect, Color),
    Stroke(Rect, Color),
}

/// Recorded frame.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn replay<S: Surface + ?Sized>(&self, target: &mut S) {
        for cmd in &self.commands {
            match *cmd {
                DrawCommand::Clear(color) => target.clear(color),
                DrawCommand::Fill(rect, color) => target.fill_rect(rect, color),
                DrawCommand::Stroke(rect, color) => target.stroke_rect(rect, color),
            }
        }
    }
}

impl Surface for DisplayList {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Fill(rect, color));
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Stroke(rect, color));
    }
}

/// The macroquad window.
pub struct Screen;

impl Surface for Screen {
    fn clear(&mut self, color: Color) {
        clear_background(color);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, STROKE_WIDTH, color);
    }
}

/// Paints cells of one grid. Every layer is redrawn in full.
pub struct Renderer {
    grid: Grid,
}

impl Renderer {
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }

    pub fn clear<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear(BACKGROUND);
    }

    pub fn draw_obstacles<S: Surface + ?Sized>(&self, surface: &mut S, obstacles: &[Cell]) {
        for o in obstacles {
            surface.fill_rect(self.grid.rect(*o), OBSTACLE);
        }
    }

    pub fn draw_food<S: Surface + ?Sized>(&self, surface: &mut S, food: Cell) {
        surface.fill_rect(self.grid.rect(food), FOOD);
    }

    /// Same look for every segment, head included.
    pub fn draw_snake<S: Surface + ?Sized>(&self, surface: &mut S, snake: &[Cell]) {
        for part in snake {
            let rect = self.grid.rect(*part);
            surface.fill_rect(rect, SNAKE_FILL);
            surface.stroke_rect(rect, SNAKE_BORDER);
        }
    }
}

/// The "Score: N" label under the field.
#[derive(Debug, Clone)]
pub struct ScoreBoard {
    text: String,
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self {
            text: format_score(0),
        }
    }

    pub fn on_score_changed(&mut self, score: u32) {
        self.text = format_score(score);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn draw(&self, grid: &Grid) {
        draw_text(&self.text, 8.0, grid.height() as f32 + 22.0, 24.0, WHITE);
    }
}

fn format_score(score: u32) -> String {
    format!("Score: {}", score)
}
