//! Game state and core simulation types
//!
//! Everything one frame reads or mutates lives here; the session owns a
//! single `GameState` and nothing else holds entity data.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::stage::StageDef;
use crate::consts::*;

/// Drawing/playing field dimensions, taken from the host canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)
    }
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Top edge of the paddle (fixed)
    pub fn paddle_y(&self) -> f32 {
        self.height - PADDLE_HEIGHT - PADDLE_BOTTOM_MARGIN
    }

    /// Rightmost x the paddle may occupy
    pub fn paddle_max_x(&self) -> f32 {
        (self.width - PADDLE_WIDTH).max(0.0)
    }

    /// Left offset that centers the brick grid horizontally
    pub fn brick_offset_left(&self) -> f32 {
        let grid_width = BRICK_COLUMNS as f32 * (BRICK_WIDTH + BRICK_PADDING) - BRICK_PADDING;
        (self.width - grid_width) / 2.0
    }
}

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

/// Whether a brick still takes part in play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrickStatus {
    #[default]
    Active,
    Destroyed,
}

/// A destructible brick at a fixed grid cell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub column: usize,
    pub row: usize,
    pub x: f32,
    pub y: f32,
    pub status: BrickStatus,
}

impl Brick {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, BRICK_WIDTH, BRICK_HEIGHT)
    }

    pub fn is_active(&self) -> bool {
        self.status == BrickStatus::Active
    }
}

/// Fixed columns x rows brick matrix, stored column-major
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickGrid {
    columns: usize,
    rows: usize,
    cells: Vec<Brick>,
}

impl BrickGrid {
    /// Lay out a full grid of active bricks centered in the arena
    pub fn new(arena: &Arena) -> Self {
        let offset_left = arena.brick_offset_left();
        let mut cells = Vec::with_capacity(BRICK_COLUMNS * BRICK_ROWS);
        for column in 0..BRICK_COLUMNS {
            for row in 0..BRICK_ROWS {
                cells.push(Brick {
                    column,
                    row,
                    x: column as f32 * (BRICK_WIDTH + BRICK_PADDING) + offset_left,
                    y: row as f32 * (BRICK_HEIGHT + BRICK_PADDING) + BRICK_OFFSET_TOP,
                    status: BrickStatus::Active,
                });
            }
        }
        Self {
            columns: BRICK_COLUMNS,
            rows: BRICK_ROWS,
            cells,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, column: usize, row: usize) -> Option<&Brick> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.cells.get(column * self.rows + row)
    }

    pub fn get_mut(&mut self, column: usize, row: usize) -> Option<&mut Brick> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.cells.get_mut(column * self.rows + row)
    }

    /// Bricks in collision order: columns outer, rows inner
    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.cells.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Brick> {
        self.cells.iter_mut()
    }

    pub fn active_count(&self) -> usize {
        self.cells.iter().filter(|b| b.is_active()).count()
    }

    pub fn all_destroyed(&self) -> bool {
        self.cells.iter().all(|b| !b.is_active())
    }
}

/// Indestructible static rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub rect: Rect,
}

impl Obstacle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
        }
    }
}

/// The ball; velocity is in pixels per frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Ball resting on top of the paddle center, heading up and to the right
    pub fn new(arena: &Arena, speed: f32) -> Self {
        Self {
            pos: Vec2::new(arena.width / 2.0, arena.paddle_y() - BALL_RADIUS),
            vel: Vec2::new(speed, -speed),
            radius: BALL_RADIUS,
        }
    }

    /// Position one step back along the current velocity
    pub fn previous_pos(&self) -> Vec2 {
        self.pos - self.vel
    }
}

/// The player's paddle; only x moves
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new(arena: &Arena) -> Self {
        Self {
            x: (arena.width - PADDLE_WIDTH) / 2.0,
            y: arena.paddle_y(),
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Move by `dx`, staying within the arena
    pub fn shift(&mut self, dx: f32, arena: &Arena) {
        self.x = (self.x + dx).clamp(0.0, arena.paddle_max_x());
    }
}

/// Complete per-session game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub arena: Arena,
    /// Bricks destroyed so far in this run
    pub score: u32,
    /// Current stage number (1-based)
    pub stage: u32,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickGrid,
    pub obstacles: Vec<Obstacle>,
}

impl GameState {
    /// Fresh state: stage 1, score 0, full grid, no obstacles
    pub fn new(arena: Arena) -> Self {
        Self {
            arena,
            score: 0,
            stage: 1,
            ball: Ball::new(&arena, BALL_START_SPEED),
            paddle: Paddle::new(&arena),
            bricks: BrickGrid::new(&arena),
            obstacles: Vec::new(),
        }
    }

    /// Re-center ball and paddle, ball launching at `speed` per axis
    pub fn reset_entities(&mut self, speed: f32) {
        self.ball = Ball::new(&self.arena, speed);
        self.paddle = Paddle::new(&self.arena);
    }

    /// Set up the board for `stage`; the score is left untouched
    pub fn load_stage(&mut self, stage: &StageDef, speed: f32) {
        self.stage = stage.number;
        self.bricks = BrickGrid::new(&self.arena);
        self.obstacles = stage.obstacles(&self.arena);
        self.reset_entities(speed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brick_grid_layout() {
        let arena = Arena::default();
        let grid = BrickGrid::new(&arena);
        assert_eq!(grid.len(), BRICK_COLUMNS * BRICK_ROWS);
        assert_eq!(grid.active_count(), 40);

        // 8 bricks of 75 with 10 padding = 670 wide, centered in 800
        let first = grid.get(0, 0).unwrap();
        assert_eq!((first.x, first.y), (65.0, 30.0));
        let last = grid.get(7, 4).unwrap();
        assert_eq!((last.x, last.y), (65.0 + 7.0 * 85.0, 30.0 + 4.0 * 30.0));
        assert!(grid.get(8, 0).is_none());
        assert!(grid.get(0, 5).is_none());
    }

    #[test]
    fn test_grid_iterates_column_major() {
        let grid = BrickGrid::new(&Arena::default());
        let order: Vec<(usize, usize)> = grid.iter().take(6).map(|b| (b.column, b.row)).collect();
        assert_eq!(order, vec![(0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (1, 0)]);
    }

    #[test]
    fn test_initial_entities_centered() {
        let state = GameState::new(Arena::default());
        assert_eq!(state.paddle.x, 350.0);
        assert_eq!(state.paddle.y, 570.0);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 560.0));
        assert_eq!(state.ball.vel, Vec2::new(5.0, -5.0));
        assert_eq!(state.stage, 1);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_paddle_shift_clamps() {
        let arena = Arena::default();
        let mut paddle = Paddle::new(&arena);
        paddle.shift(10_000.0, &arena);
        assert_eq!(paddle.x, 700.0);
        paddle.shift(-10_000.0, &arena);
        assert_eq!(paddle.x, 0.0);
    }
}
