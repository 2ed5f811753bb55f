//! Software rasterizer
//!
//! Turns a `GameState` into a raw 800x600 RGBX pixel buffer. No GPU, no
//! platform types - the platform layer only sees the finished bytes.

pub mod font;
pub mod frame;
pub mod scene;

pub use font::draw_digit;
pub use frame::{BYTES_PER_PIXEL, Frame};
pub use scene::draw;
