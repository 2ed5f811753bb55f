//! Classic Pong - one human paddle versus an AI paddle
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `render`: Software rasterizer producing a raw RGBX pixel buffer
//! - `platform`: SDL2 window/input/presentation glue

pub mod platform;
pub mod render;
pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Fixed playfield size. The window, the pixel buffer, and every
    /// boundary test share these - they are not configurable.
    pub const WIN_WIDTH: i32 = 800;
    pub const WIN_HEIGHT: i32 = 600;

    /// Paddle dimensions (constant for both sides)
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Player paddle speed, and the AI's speed while tracking the ball
    pub const PADDLE_SPEED: f32 = 300.0;
    /// Horizontal positions of the left and right paddles
    pub const LEFT_PADDLE_X: f32 = 100.0;
    pub const RIGHT_PADDLE_X: f32 = 700.0;

    /// Ball defaults
    pub const BALL_RADIUS: i32 = 20;
    /// Kickoff position; after a score the ball resets to the playfield
    /// center instead
    pub const BALL_SPAWN_X: f32 = 300.0;
    pub const BALL_SPAWN_Y: f32 = 300.0;
    /// Serve speed on both axes; also the reset speed after a score
    pub const BALL_SERVE_SPEED: f32 = 300.0;
    /// Speed added on every paddle hit (both axes)
    pub const RALLY_SPEEDUP: f32 = 25.0;

    /// AI recovery ("wait") speed range, sampled every tick
    pub const AI_WAIT_SPEED_MIN: f32 = 100.0;
    pub const AI_WAIT_SPEED_MAX: f32 = 300.0;

    /// Vertical band paddles are re-placed into after a score
    pub const PADDLE_SPAWN_Y_MIN: f32 = 300.0;
    pub const PADDLE_SPAWN_Y_MAX: f32 = 500.0;

    /// First side to reach this score ends the round; scores reset on the
    /// following serve
    pub const WINNING_SCORE: u32 = 3;

    /// Minimum tick duration enforced by the outer loop
    pub const MIN_TICK_SECONDS: f32 = 0.005;
}

use glam::Vec2;

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// Center of the playfield
#[inline]
pub fn playfield_center() -> Vec2 {
    Vec2::new(
        consts::WIN_WIDTH as f32 / 2.0,
        consts::WIN_HEIGHT as f32 / 2.0,
    )
}
