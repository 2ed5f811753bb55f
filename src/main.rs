//! Pong entry point
//!
//! Window setup and the outer tick loop. Everything interesting happens in
//! `sim::tick` and `render::draw`; this file only wires them to SDL and
//! paces the loop.

use std::time::Instant;

use log::info;

use pong_classic::consts::MIN_TICK_SECONDS;
use pong_classic::platform::{Display, RenderTarget};
use pong_classic::render::{self, Frame};
use pong_classic::sim::{GameState, tick};

fn main() -> Result<(), String> {
    env_logger::init();

    let seed: u64 = rand::random();
    info!("starting match, seed {seed}");

    let (mut display, texture_creator) = Display::new("Pong")?;
    let mut target = RenderTarget::new(&texture_creator)?;

    let mut state = GameState::new(seed);
    let mut frame = Frame::new();

    // Elapsed time of the previous tick, fed to the next one
    let mut elapsed = 0.0f32;

    loop {
        let tick_start = Instant::now();

        if display.poll_quit() {
            info!("quit requested");
            return Ok(());
        }

        let input = display.key_snapshot();
        tick(&mut state, &input, elapsed);

        render::draw(&state, &mut frame);
        display.present(&mut target, &frame)?;

        // Keep ticks at or above the minimum duration so dt never collapses
        // to zero on fast machines
        elapsed = tick_start.elapsed().as_secs_f32();
        if elapsed < MIN_TICK_SECONDS {
            std::thread::sleep(std::time::Duration::from_secs_f32(
                MIN_TICK_SECONDS - elapsed,
            ));
            elapsed = tick_start.elapsed().as_secs_f32();
        }
    }
}
