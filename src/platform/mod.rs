//! SDL2 platform glue
//!
//! Window, streaming texture, keyboard snapshot, and presentation. The
//! simulation and rasterizer never see SDL types; this layer consumes a
//! finished [`Frame`] and produces a [`TickInput`] per tick.

use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Scancode};
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};

use crate::consts::{WIN_HEIGHT, WIN_WIDTH};
use crate::render::Frame;
use crate::sim::TickInput;

/// The open window and its event queue
pub struct Display {
    canvas: Canvas<Window>,
    event_pump: EventPump,
}

/// Streaming texture the frame bytes are uploaded into
pub struct RenderTarget<'a> {
    texture: Texture<'a>,
}

impl Display {
    /// Open the fixed-size game window. Any SDL failure here aborts
    /// startup; there is nothing to recover.
    pub fn new(title: &str) -> Result<(Self, TextureCreator<WindowContext>), String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let window = video_subsystem
            .window(title, WIN_WIDTH as u32, WIN_HEIGHT as u32)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| e.to_string())?;

        let texture_creator = canvas.texture_creator();
        let event_pump = sdl_context.event_pump()?;

        Ok((Self { canvas, event_pump }, texture_creator))
    }

    /// Drain pending events; returns true if the loop should stop
    pub fn poll_quit(&mut self) -> bool {
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => return true,
                _ => {}
            }
        }
        false
    }

    /// Snapshot of the held keys the simulation reads
    pub fn key_snapshot(&self) -> TickInput {
        let keys = self.event_pump.keyboard_state();
        TickInput {
            up: keys.is_scancode_pressed(Scancode::Up),
            down: keys.is_scancode_pressed(Scancode::Down),
            serve: keys.is_scancode_pressed(Scancode::Space),
        }
    }

    /// Upload the finished frame and present it
    pub fn present(&mut self, target: &mut RenderTarget, frame: &Frame) -> Result<(), String> {
        target
            .texture
            .update(None, frame.as_bytes(), frame.pitch())
            .map_err(|e| e.to_string())?;
        self.canvas.copy(&target.texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}

impl<'a> RenderTarget<'a> {
    /// ABGR8888 streaming texture: little-endian byte order R, G, B, X,
    /// matching the frame's layout
    pub fn new(texture_creator: &'a TextureCreator<WindowContext>) -> Result<Self, String> {
        let texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::ABGR8888,
                WIN_WIDTH as u32,
                WIN_HEIGHT as u32,
            )
            .map_err(|e| e.to_string())?;
        Ok(Self { texture })
    }
}
