//! Drawing the simulation into a frame
//!
//! One full redraw per tick: clear, both paddles with their score digits,
//! then the ball.

use glam::Vec2;

use crate::lerp;
use crate::playfield_center;
use crate::sim::{Ball, GameState, Paddle};

use super::font::draw_digit;
use super::frame::Frame;

/// Vertical position of both score digits
const SCORE_Y: f32 = 35.0;
/// Glyph cell size for the score digits
const SCORE_CELL: i32 = 10;
/// Score digits sit 20% of the way from the paddle toward the center line
const SCORE_LERP: f32 = 0.2;

/// Redraw the whole game into `frame`
pub fn draw(state: &GameState, frame: &mut Frame) {
    frame.clear();
    draw_paddle(&state.left_paddle, frame);
    draw_paddle(&state.right_paddle, frame);
    draw_ball(&state.ball, frame);
}

fn draw_paddle(paddle: &Paddle, frame: &mut Frame) {
    frame.fill_rect(paddle.pos, paddle.width, paddle.height, paddle.color);

    let digit_x = lerp(paddle.pos.x, playfield_center().x, SCORE_LERP);
    draw_digit(
        frame,
        Vec2::new(digit_x, SCORE_Y),
        paddle.color,
        SCORE_CELL,
        paddle.score,
    );
}

fn draw_ball(ball: &Ball, frame: &mut Frame) {
    frame.fill_disc(ball.pos, ball.radius, ball.color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_draw_renders_paddles_and_ball() {
        let state = GameState::new(5);
        let mut frame = Frame::new();
        draw(&state, &mut frame);

        // Paddle columns are lit at their fixed x positions
        let left_y = state.left_paddle.pos.y as i32;
        assert_ne!(frame.pixel_at(LEFT_PADDLE_X as i32, left_y), Some((0, 0, 0)));
        let right_y = state.right_paddle.pos.y as i32;
        assert_ne!(
            frame.pixel_at(RIGHT_PADDLE_X as i32, right_y),
            Some((0, 0, 0))
        );

        // Ball disc at its kickoff position
        assert_ne!(frame.pixel_at(300, 300), Some((0, 0, 0)));
    }

    #[test]
    fn test_score_digits_anchored_between_paddle_and_center() {
        let state = GameState::new(5);
        let mut frame = Frame::new();
        draw(&state, &mut frame);

        // Left score zero: glyph border spans the anchor row at x=160
        let anchor_x = lerp(LEFT_PADDLE_X, 400.0, SCORE_LERP) as i32;
        assert_ne!(
            frame.pixel_at(anchor_x, SCORE_Y as i32 - 20), // top row of glyph
            Some((0, 0, 0))
        );
    }

    #[test]
    fn test_redraw_starts_from_black() {
        let mut state = GameState::new(5);
        let mut frame = Frame::new();
        draw(&state, &mut frame);

        // Move the ball; the old disc must not linger after a redraw
        state.ball.pos.x += 100.0;
        draw(&state, &mut frame);
        assert_eq!(frame.pixel_at(281, 300), Some((0, 0, 0)));
    }
}
