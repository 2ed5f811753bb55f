//! Per-tick simulation step
//!
//! `tick` owns all game policy: serve handling, scoring, round resets, and
//! AI mode transitions. The physics step only reports what happened; every
//! state change is applied here.

use glam::Vec2;
use log::{debug, info};
use rand::Rng;

use super::physics::{BallOutcome, step_ball};
use super::state::{AiMode, GamePhase, GameState, PaddleSide};
use crate::consts::*;
use crate::playfield_center;

/// Key snapshot for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Up key held
    pub up: bool,
    /// Down key held
    pub down: bool,
    /// Serve key held (space)
    pub serve: bool,
}

/// Advance the whole game by one tick of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    match state.phase {
        GamePhase::Start => {
            // Nothing moves until the serve. If the previous round ended the
            // match, the serve also starts a fresh one.
            if input.serve {
                if state.left_paddle.score >= WINNING_SCORE
                    || state.right_paddle.score >= WINNING_SCORE
                {
                    info!(
                        "new match (was {}-{})",
                        state.left_paddle.score, state.right_paddle.score
                    );
                    state.left_paddle.score = 0;
                    state.right_paddle.score = 0;
                }
                state.phase = GamePhase::Play;
            }
        }
        GamePhase::Play => {
            state.left_paddle.update_from_input(input.up, input.down, dt);
            state
                .right_paddle
                .update_as_ai(state.ball.pos.y, state.ai_mode, &mut state.rng, dt);

            let outcome = step_ball(
                &mut state.ball,
                &state.left_paddle,
                &state.right_paddle,
                dt,
            );
            apply_outcome(state, outcome);
        }
    }
}

/// Apply the result of a ball step to the rest of the game
fn apply_outcome(state: &mut GameState, outcome: BallOutcome) {
    match outcome {
        BallOutcome::None => {}
        BallOutcome::LeftScored => {
            state.left_paddle.score += 1;
            reset_round(state, PaddleSide::Left);
        }
        BallOutcome::RightScored => {
            state.right_paddle.score += 1;
            reset_round(state, PaddleSide::Right);
        }
        BallOutcome::HitLeftPaddle => {
            // Player returned the ball; the AI goes back to tracking it
            state.ai_mode = AiMode::Move;
        }
        BallOutcome::HitRightPaddle => {
            // AI just hit the ball and "recovers" erratically
            state.ai_mode = AiMode::Wait;
        }
    }
}

/// Re-center the ball, re-place the paddles, and wait for the next serve.
/// The serve always travels toward whoever just scored.
fn reset_round(state: &mut GameState, scorer: PaddleSide) {
    debug!(
        "{:?} scored, now {}-{}",
        scorer, state.left_paddle.score, state.right_paddle.score
    );

    state.ball.pos = playfield_center();
    let vx = match scorer {
        PaddleSide::Right => BALL_SERVE_SPEED,
        PaddleSide::Left => -BALL_SERVE_SPEED,
    };
    state.ball.vel = Vec2::new(vx, BALL_SERVE_SPEED);

    state.left_paddle.pos.y = state
        .rng
        .random_range(PADDLE_SPAWN_Y_MIN..PADDLE_SPAWN_Y_MAX);
    state.right_paddle.pos.y = state
        .rng
        .random_range(PADDLE_SPAWN_Y_MIN..PADDLE_SPAWN_Y_MAX);

    state.phase = GamePhase::Start;
    state.ai_mode = AiMode::Move;
}
