//! Collision detection and response
//!
//! The ball is treated as its radius-expanded bounding square for every
//! test. Resolvers mutate the ball velocity (and position, for obstacles)
//! in place; the caller fixes the order brick -> paddle -> obstacle.

use super::state::{Ball, BrickStatus, GameState, Rect};
use super::tick::GameEvent;
use crate::consts::PADDLE_ENGLISH;

/// Strict overlap between the ball bound and `rect`
pub fn ball_overlaps(ball: &Ball, rect: &Rect) -> bool {
    ball.pos.x + ball.radius > rect.x
        && ball.pos.x - ball.radius < rect.right()
        && ball.pos.y + ball.radius > rect.y
        && ball.pos.y - ball.radius < rect.bottom()
}

/// Destroy every active brick the ball overlaps
///
/// Each hit flips the vertical velocity, so two simultaneous hits cancel.
/// `BoardCleared` is pushed right after the hit that removed the last brick.
pub fn collide_bricks(state: &mut GameState, events: &mut Vec<GameEvent>) {
    for column in 0..state.bricks.columns() {
        for row in 0..state.bricks.rows() {
            let Some(brick) = state.bricks.get_mut(column, row) else {
                continue;
            };
            if !brick.is_active() || !ball_overlaps(&state.ball, &brick.rect()) {
                continue;
            }

            brick.status = BrickStatus::Destroyed;
            state.ball.vel.y = -state.ball.vel.y;
            state.score += 1;
            events.push(GameEvent::BrickDestroyed { column, row });

            if state.bricks.all_destroyed() {
                events.push(GameEvent::BoardCleared);
            }
        }
    }
}

/// Bounce off the paddle, steering by where the ball landed on it
pub fn collide_paddle(state: &mut GameState) -> bool {
    let paddle = state.paddle;
    if !ball_overlaps(&state.ball, &paddle.rect()) {
        return false;
    }

    state.ball.vel.y = -state.ball.vel.y;
    let hit_point = state.ball.pos.x - paddle.center_x();
    state.ball.vel.x = hit_point * PADDLE_ENGLISH;
    true
}

/// Bounce off static obstacles
///
/// The side of impact is read from the previous position: a bound that was
/// fully left/right of the obstacle flips dx, fully above/below flips dy
/// (corners flip both). The ball is then pushed vertically out of the
/// obstacle on the side it came from.
pub fn collide_obstacles(state: &mut GameState) -> bool {
    let mut hit = false;
    let ball = &mut state.ball;

    for obstacle in &state.obstacles {
        let rect = obstacle.rect;
        if !ball_overlaps(ball, &rect) {
            continue;
        }
        hit = true;

        let moving_down = ball.vel.y > 0.0;
        let prev = ball.previous_pos();
        let r = ball.radius;

        if prev.x - r >= rect.right() || prev.x + r <= rect.x {
            ball.vel.x = -ball.vel.x;
        }
        if prev.y - r >= rect.bottom() || prev.y + r <= rect.y {
            ball.vel.y = -ball.vel.y;
        }

        ball.pos.y = if moving_down {
            rect.y - r
        } else {
            rect.bottom() + r
        };
    }

    hit
}
