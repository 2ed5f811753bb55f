//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Seeded RNG only, owned by `GameState`
//! - No rendering or platform dependencies
//! - One `tick` call per frame, parameterized by measured elapsed time

pub mod physics;
pub mod state;
pub mod tick;

pub use physics::{BallOutcome, step_ball};
pub use state::{AiMode, Ball, Color, GamePhase, GameState, Paddle, PaddleSide};
pub use tick::{TickInput, tick};
