//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One step per displayed frame, fixed per-frame velocities
//! - Stable iteration order (column-major over the brick grid)
//! - No rendering or platform dependencies

pub mod collision;
pub mod stage;
pub mod state;
pub mod tick;

pub use collision::{ball_overlaps, collide_bricks, collide_obstacles, collide_paddle};
pub use stage::{StageDef, StageTable};
pub use state::{Arena, Ball, Brick, BrickGrid, BrickStatus, GameState, Obstacle, Paddle, Rect};
pub use tick::{GameEvent, TickInput, tick};
