//! Ball physics and collision resolution
//!
//! `step_ball` is a pure physics step: it moves the ball and reports what
//! happened as a [`BallOutcome`]. Scoring, resets, and AI mode changes are
//! policy and stay in `tick` - this keeps the collision math testable on its
//! own.

use crate::consts::*;
use crate::sim::state::{Ball, Paddle};

/// What a single ball step produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallOutcome {
    /// Ball still in flight, nothing hit
    None,
    /// Ball escaped past the right paddle
    LeftScored,
    /// Ball escaped past the left paddle
    RightScored,
    HitLeftPaddle,
    HitRightPaddle,
}

/// Advance the ball by `dt` seconds and resolve collisions.
///
/// Order matters and matches the rules: integrate, reflect off the top and
/// bottom walls, check for a goal (ball center past either side), then test
/// the left paddle and the right paddle. The checks are plain overlap tests
/// against the ball's post-move position; there is no sub-stepping, so a
/// fast enough ball can tunnel straight through a paddle. That is a known
/// limitation, left as-is.
pub fn step_ball(ball: &mut Ball, left: &Paddle, right: &Paddle, dt: f32) -> BallOutcome {
    ball.pos += ball.vel * dt;

    let radius = ball.radius as f32;
    if ball.pos.y - radius < 0.0 || ball.pos.y + radius > WIN_HEIGHT as f32 {
        ball.vel.y = -ball.vel.y;
    }

    if ball.pos.x < 0.0 {
        return BallOutcome::RightScored;
    }
    if ball.pos.x > WIN_WIDTH as f32 {
        return BallOutcome::LeftScored;
    }

    // Leading edge of the ball against each paddle's face. Left first; the
    // paddles are far enough apart that both can never hit in one tick.
    if overlaps_paddle(ball.pos.x - radius, ball.pos.y, left) {
        rally_speedup(ball);
        return BallOutcome::HitLeftPaddle;
    }
    if overlaps_paddle(ball.pos.x + radius, ball.pos.y, right) {
        rally_speedup(ball);
        return BallOutcome::HitRightPaddle;
    }

    BallOutcome::None
}

/// Leading-edge-in-band test: the ball's facing edge must sit within the
/// paddle's horizontal half-width band and the ball center within its
/// vertical half-height band.
fn overlaps_paddle(edge_x: f32, ball_y: f32, paddle: &Paddle) -> bool {
    edge_x > paddle.pos.x - paddle.width / 2.0
        && edge_x < paddle.pos.x + paddle.width / 2.0
        && ball_y > paddle.pos.y - paddle.height / 2.0
        && ball_y < paddle.pos.y + paddle.height / 2.0
}

/// Return bounce: flip the horizontal direction, then push both axes by the
/// rally increment so every exchange gets a little faster. The vertical
/// bump is always positive, even on an upward-moving ball.
fn rally_speedup(ball: &mut Ball) {
    ball.vel.x = -ball.vel.x;
    if ball.vel.x < 0.0 {
        ball.vel.x -= RALLY_SPEEDUP;
    } else {
        ball.vel.x += RALLY_SPEEDUP;
    }
    ball.vel.y += RALLY_SPEEDUP;
}
