//! Stage Breaker - a two-stage brick breaker for the browser canvas
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (entities, collisions, stage table)
//! - `session`: Stage/UI state machine driving the simulation
//! - `scheduler`: Frame ticker and cancelable one-shot timer
//! - `renderer`: 2D surface drawing (canvas on web, draw list elsewhere)
//! - `ui`: Visibility and text of the DOM affordances per screen
//! - `platform`: Browser input mapping
//! - `audio`: Procedural sound effects (Web Audio)

pub mod audio;
pub mod platform;
pub mod renderer;
pub mod scheduler;
pub mod session;
pub mod settings;
pub mod sim;
pub mod ui;

pub use session::{Screen, Session};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default arena (canvas) size
    pub const DEFAULT_CANVAS_WIDTH: f32 = 800.0;
    pub const DEFAULT_CANVAS_HEIGHT: f32 = 600.0;

    /// Paddle
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Gap between paddle bottom and canvas bottom
    pub const PADDLE_BOTTOM_MARGIN: f32 = 10.0;
    /// Paddle travel per frame while a direction key is held
    pub const PADDLE_STEP: f32 = 7.0;
    /// Horizontal speed gained per pixel of offset from paddle center
    pub const PADDLE_ENGLISH: f32 = 0.3;

    /// Ball
    pub const BALL_RADIUS: f32 = 10.0;
    /// Per-axis speed at the start of a run (pixels per frame)
    pub const BALL_START_SPEED: f32 = 5.0;

    /// Brick grid
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLUMNS: usize = 8;
    pub const BRICK_WIDTH: f32 = 75.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_TOP: f32 = 30.0;

    /// Obstacles
    pub const OBSTACLE_WIDTH: f32 = 150.0;
    pub const OBSTACLE_HEIGHT: f32 = 25.0;
    pub const SIDE_OBSTACLE_WIDTH: f32 = 100.0;

    /// Delay before an automatic stage advance
    pub const STAGE_ADVANCE_DELAY_MS: u32 = 2000;
}
