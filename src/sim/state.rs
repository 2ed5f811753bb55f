//! Game state and core simulation types
//!
//! Everything mutable lives on `GameState`, including the RNG - there is no
//! ambient global state, and a fixed seed reproduces a whole match.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the serve key; nothing moves
    Start,
    /// Active rally
    Play,
}

/// Movement style of the AI paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiMode {
    /// Track the ball vertically at full speed
    Move,
    /// Erratic recovery right after returning the ball: speed and direction
    /// are re-rolled every tick
    Wait,
}

/// Which side of the playfield a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleSide {
    Left,
    Right,
}

/// RGB color; the fourth buffer byte is unused padding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };
}

/// The ball entity
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Constant after construction
    pub radius: i32,
    pub color: Color,
}

impl Ball {
    /// Ball at its kickoff position, served toward the right side. Only
    /// post-score resets place it at the playfield center.
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(BALL_SPAWN_X, BALL_SPAWN_Y),
            vel: Vec2::new(BALL_SERVE_SPEED, BALL_SERVE_SPEED),
            radius: BALL_RADIUS,
            color: Color::WHITE,
        }
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

/// A paddle entity, either the player's or the AI's
#[derive(Debug, Clone)]
pub struct Paddle {
    pub pos: Vec2,
    /// Constant after construction (20x100)
    pub width: f32,
    pub height: f32,
    /// Mutated every tick while the AI is in `Wait`
    pub speed: f32,
    pub score: u32,
    pub color: Color,
    pub side: PaddleSide,
}

impl Paddle {
    pub fn new(side: PaddleSide, y: f32) -> Self {
        let x = match side {
            PaddleSide::Left => LEFT_PADDLE_X,
            PaddleSide::Right => RIGHT_PADDLE_X,
        };
        Self {
            pos: Vec2::new(x, y),
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed: PADDLE_SPEED,
            score: 0,
            color: Color::WHITE,
            side,
        }
    }

    /// Move from held up/down keys. Both keys held cancel out. There is no
    /// vertical clamp; the paddle may leave the playfield.
    pub fn update_from_input(&mut self, up: bool, down: bool, dt: f32) {
        if up {
            self.pos.y -= self.speed * dt;
        }
        if down {
            self.pos.y += self.speed * dt;
        }
    }

    /// AI movement. `Move` tracks the ball at full speed; `Wait` re-rolls
    /// speed and direction from `rng` every single tick, which is what makes
    /// the recovering opponent look rattled.
    pub fn update_as_ai(&mut self, ball_y: f32, mode: AiMode, rng: &mut Pcg32, dt: f32) {
        match mode {
            AiMode::Move => {
                self.speed = PADDLE_SPEED;
                if ball_y > self.pos.y {
                    self.pos.y += self.speed * dt;
                } else {
                    self.pos.y -= self.speed * dt;
                }
            }
            AiMode::Wait => {
                self.speed = rng.random_range(AI_WAIT_SPEED_MIN..AI_WAIT_SPEED_MAX);
                if rng.random_bool(0.5) {
                    self.pos.y += self.speed * dt;
                } else {
                    self.pos.y -= self.speed * dt;
                }
            }
        }
    }
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Match seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    pub ai_mode: AiMode,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub ball: Ball,
    /// Single RNG stream for paddle placement and AI jitter
    pub rng: Pcg32,
}

impl GameState {
    /// Create a new match with randomized initial paddle offsets
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let left_y = rng.random_range(PADDLE_SPAWN_Y_MIN..PADDLE_SPAWN_Y_MAX);
        let right_y = rng.random_range(PADDLE_SPAWN_Y_MIN..PADDLE_SPAWN_Y_MAX);
        Self {
            seed,
            phase: GamePhase::Start,
            ai_mode: AiMode::Move,
            left_paddle: Paddle::new(PaddleSide::Left, left_y),
            right_paddle: Paddle::new(PaddleSide::Right, right_y),
            ball: Ball::new(),
            rng,
        }
    }
}
