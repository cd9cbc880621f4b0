//! Per-frame simulation step
//!
//! One call advances the game by exactly one displayed frame. Velocities
//! are in pixels per frame, so there is no timestep argument.

use serde::{Deserialize, Serialize};

use super::collision::{collide_bricks, collide_obstacles, collide_paddle};
use super::state::GameState;
use crate::consts::PADDLE_STEP;

/// Held-key state for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
}

/// Things that happened during a frame, in the order they happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A brick was hit and removed (score already incremented)
    BrickDestroyed { column: usize, row: usize },
    /// The last active brick went away
    BoardCleared,
    /// The ball crossed the bottom edge
    BallLost,
}

/// Advance the game state by one frame
///
/// Order: bricks, paddle, obstacles, then movement, walls and paddle input.
/// The whole frame always runs; the caller decides what the events mean.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    collide_bricks(state, &mut events);
    collide_paddle(state);
    collide_obstacles(state);

    let arena = state.arena;
    let ball = &mut state.ball;
    ball.pos += ball.vel;

    if ball.pos.x + ball.radius > arena.width || ball.pos.x - ball.radius < 0.0 {
        ball.vel.x = -ball.vel.x;
    }
    if ball.pos.y - ball.radius < 0.0 {
        ball.vel.y = -ball.vel.y;
    } else if ball.pos.y + ball.radius > arena.height {
        events.push(GameEvent::BallLost);
    }

    // Right wins when both are held
    if input.right {
        state.paddle.shift(PADDLE_STEP, &arena);
    } else if input.left {
        state.paddle.shift(-PADDLE_STEP, &arena);
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Arena, Obstacle};
    use glam::Vec2;
    use proptest::prelude::*;

    fn open_state() -> GameState {
        let mut state = GameState::new(Arena::default());
        // Park the ball in empty space between bricks and paddle
        state.ball.pos = Vec2::new(400.0, 400.0);
        state
    }

    #[test]
    fn test_ball_moves_by_velocity() {
        let mut state = open_state();
        let events = tick(&mut state, &TickInput::default());
        assert!(events.is_empty());
        assert_eq!(state.ball.pos, Vec2::new(405.0, 395.0));
    }

    #[test]
    fn test_side_wall_bounce() {
        let mut state = open_state();
        state.ball.pos = Vec2::new(787.0, 300.0);
        state.ball.vel = Vec2::new(5.0, 5.0);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.vel.x, -5.0);

        state.ball.pos = Vec2::new(13.0, 300.0);
        state.ball.vel = Vec2::new(-5.0, 5.0);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.vel.x, 5.0);
    }

    #[test]
    fn test_top_wall_bounce() {
        let mut state = open_state();
        // Left of the brick grid so only the wall matters
        state.ball.pos = Vec2::new(30.0, 13.0);
        state.ball.vel = Vec2::new(0.0, -5.0);
        let events = tick(&mut state, &TickInput::default());
        assert!(events.is_empty());
        assert_eq!(state.ball.vel.y, 5.0);
    }

    #[test]
    fn test_bottom_breach_reports_ball_lost() {
        let mut state = open_state();
        state.ball.pos = Vec2::new(30.0, 588.0);
        state.ball.vel = Vec2::new(0.0, 5.0);
        let events = tick(&mut state, &TickInput::default());
        assert_eq!(events, vec![GameEvent::BallLost]);
    }

    #[test]
    fn test_paddle_input() {
        let mut state = open_state();
        let start = state.paddle.x;

        tick(&mut state, &TickInput { left: false, right: true });
        assert_eq!(state.paddle.x, start + PADDLE_STEP);

        tick(&mut state, &TickInput { left: true, right: false });
        assert_eq!(state.paddle.x, start);

        tick(&mut state, &TickInput { left: true, right: true });
        assert_eq!(state.paddle.x, start + PADDLE_STEP);
    }

    #[test]
    fn test_paddle_stops_at_right_edge() {
        let mut state = open_state();
        let right = TickInput { left: false, right: true };
        for _ in 0..200 {
            state.ball.pos = Vec2::new(400.0, 400.0);
            tick(&mut state, &right);
        }
        assert_eq!(state.paddle.x, 700.0);
    }

    #[test]
    fn test_obstacle_overlap_resolved_within_frame() {
        let mut state = open_state();
        state.obstacles = vec![Obstacle::new(325.0, 350.0, 150.0, 25.0)];

        // Coming down onto the top face
        state.ball.pos = Vec2::new(400.0, 343.0);
        state.ball.vel = Vec2::new(5.0, 5.0);
        tick(&mut state, &TickInput::default());
        assert!(!crate::sim::ball_overlaps(&state.ball, &state.obstacles[0].rect));

        // Coming up into the bottom face
        state.ball.pos = Vec2::new(400.0, 382.0);
        state.ball.vel = Vec2::new(-5.0, -5.0);
        tick(&mut state, &TickInput::default());
        assert!(!crate::sim::ball_overlaps(&state.ball, &state.obstacles[0].rect));
    }

    proptest! {
        #[test]
        fn prop_paddle_stays_in_arena(
            keys in prop::collection::vec((any::<bool>(), any::<bool>()), 1..400)
        ) {
            let mut state = open_state();
            let max_x = state.arena.paddle_max_x();
            for (left, right) in keys {
                state.ball.pos = Vec2::new(400.0, 400.0);
                tick(&mut state, &TickInput { left, right });
                prop_assert!(state.paddle.x >= 0.0);
                prop_assert!(state.paddle.x <= max_x);
            }
        }
    }
}
