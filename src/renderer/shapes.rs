//! Palette and per-entity drawing

use super::Surface;
use crate::sim::GameState;

/// CSS color string, handed straight to the canvas fill style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub &'static str);

pub const BALL_COLOR: Color = Color("#e74c3c");
pub const PADDLE_COLOR: Color = Color("#3498db");
pub const OBSTACLE_COLOR: Color = Color("#7f8c8d");

/// Brick color by row (top row first)
fn brick_color(row: usize) -> Color {
    match row {
        0 => Color("#f1c40f"),
        1 => Color("#9b59b6"),
        2 => Color("#3498db"),
        3 => Color("#e67e22"),
        4 => Color("#c0392b"),
        _ => Color("#2ecc71"),
    }
}

/// Paint one full frame: clear, bricks, ball, paddle, obstacles
pub fn draw_frame<S: Surface + ?Sized>(surface: &mut S, state: &GameState) {
    surface.clear(state.arena.width, state.arena.height);

    for brick in state.bricks.iter().filter(|b| b.is_active()) {
        surface.fill_rect(brick.rect(), brick_color(brick.row));
    }

    surface.fill_circle(state.ball.pos, state.ball.radius, BALL_COLOR);
    surface.fill_rect(state.paddle.rect(), PADDLE_COLOR);

    for obstacle in &state.obstacles {
        surface.fill_rect(obstacle.rect, OBSTACLE_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, DrawList};
    use crate::sim::{Arena, BrickStatus, StageTable};

    #[test]
    fn test_draw_order() {
        let state = GameState::new(Arena::default());
        let mut list = DrawList::new();
        draw_frame(&mut list, &state);

        // clear + 40 bricks + ball + paddle
        assert_eq!(list.commands.len(), 43);
        assert!(matches!(list.commands[0], DrawCommand::Clear { .. }));
        assert!(matches!(list.commands[41], DrawCommand::Circle { .. }));
        assert_eq!(
            list.commands[42],
            DrawCommand::Rect {
                rect: state.paddle.rect(),
                color: PADDLE_COLOR
            }
        );
    }

    #[test]
    fn test_destroyed_bricks_not_drawn() {
        let mut state = GameState::new(Arena::default());
        for brick in state.bricks.iter_mut().filter(|b| b.row == 0) {
            brick.status = BrickStatus::Destroyed;
        }
        let mut list = DrawList::new();
        draw_frame(&mut list, &state);
        assert_eq!(list.rects_of(brick_color(0)), 0);
        assert_eq!(list.rects_of(brick_color(1)), 8);
    }

    #[test]
    fn test_obstacles_drawn_last() {
        let mut state = GameState::new(Arena::default());
        let stage = *StageTable::default().get(2).unwrap();
        state.load_stage(&stage, 6.0);

        let mut list = DrawList::new();
        draw_frame(&mut list, &state);
        assert_eq!(list.rects_of(OBSTACLE_COLOR), 3);
        assert!(matches!(
            list.commands.last(),
            Some(DrawCommand::Rect { color, .. }) if *color == OBSTACLE_COLOR
        ));
    }
}
