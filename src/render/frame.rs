//! The software frame buffer
//!
//! A fixed 800x600 RGBX byte buffer (4 bytes per pixel, row-major, fourth
//! byte unused) plus the fill primitives the scene is drawn with. This is
//! the whole rendering backend; the platform layer only uploads the bytes.

use glam::Vec2;

use crate::consts::{WIN_HEIGHT, WIN_WIDTH};
use crate::sim::Color;

/// Bytes per pixel (R, G, B, unused)
pub const BYTES_PER_PIXEL: usize = 4;

/// One frame's worth of pixels
pub struct Frame {
    pixels: Vec<u8>,
}

impl Frame {
    /// A black 800x600 frame
    pub fn new() -> Self {
        Self {
            pixels: vec![0; (WIN_WIDTH * WIN_HEIGHT) as usize * BYTES_PER_PIXEL],
        }
    }

    /// Raw bytes for texture upload
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Byte stride of one row
    #[inline]
    pub fn pitch(&self) -> usize {
        WIN_WIDTH as usize * BYTES_PER_PIXEL
    }

    /// Zero every byte
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Write one pixel. The only bounds test is on the computed byte
    /// offset: writes that land outside the buffer are silently dropped,
    /// and an x past the row edge wraps into the neighboring row instead
    /// of faulting.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        let offset = ((y * WIN_WIDTH + x) * BYTES_PER_PIXEL as i32) as isize;
        if offset >= 0 && (offset as usize) < self.pixels.len() {
            let offset = offset as usize;
            self.pixels[offset] = color.r;
            self.pixels[offset + 1] = color.g;
            self.pixels[offset + 2] = color.b;
        }
    }

    /// Filled axis-aligned rectangle centered on `center`
    pub fn fill_rect(&mut self, center: Vec2, width: f32, height: f32, color: Color) {
        let start_x = (center.x - width / 2.0) as i32;
        let start_y = (center.y - height / 2.0) as i32;
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                self.set_pixel(start_x + x, start_y + y, color);
            }
        }
    }

    /// Filled disc centered on `center`, squared-distance test against the
    /// radius
    pub fn fill_disc(&mut self, center: Vec2, radius: i32, color: Color) {
        let cx = center.x as i32;
        let cy = center.y as i32;
        for y in -radius..radius {
            for x in -radius..radius {
                if x * x + y * y < radius * radius {
                    self.set_pixel(cx + x, cy + y, color);
                }
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn pixel_at(&self, x: i32, y: i32) -> Option<(u8, u8, u8)> {
        let offset = ((y * WIN_WIDTH + x) * BYTES_PER_PIXEL as i32) as usize;
        self.pixels
            .get(offset..offset + 3)
            .map(|p| (p[0], p[1], p[2]))
    }

    #[cfg(test)]
    pub(crate) fn lit_pixel_count(&self) -> usize {
        self.pixels
            .chunks_exact(BYTES_PER_PIXEL)
            .filter(|p| p[0] != 0 || p[1] != 0 || p[2] != 0)
            .count()
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_pixel_writes_rgb() {
        let mut frame = Frame::new();
        let teal = Color { r: 0, g: 128, b: 96 };
        frame.set_pixel(10, 20, teal);
        assert_eq!(frame.pixel_at(10, 20), Some((0, 128, 96)));
    }

    #[test]
    fn test_set_pixel_out_of_bounds_is_noop() {
        let mut frame = Frame::new();
        // Negative offset and past-the-end offset both drop silently
        frame.set_pixel(-1, -1, Color::WHITE);
        frame.set_pixel(0, WIN_HEIGHT, Color::WHITE);
        frame.set_pixel(0, -1, Color::WHITE);
        assert_eq!(frame.lit_pixel_count(), 0);
    }

    #[test]
    fn test_clear_zeroes_everything() {
        let mut frame = Frame::new();
        frame.fill_rect(Vec2::new(100.0, 100.0), 20.0, 100.0, Color::WHITE);
        assert!(frame.lit_pixel_count() > 0);
        frame.clear();
        assert_eq!(frame.lit_pixel_count(), 0);
    }

    #[test]
    fn test_fill_rect_covers_exact_area() {
        let mut frame = Frame::new();
        frame.fill_rect(Vec2::new(100.0, 300.0), 20.0, 100.0, Color::WHITE);
        assert_eq!(frame.lit_pixel_count(), 20 * 100);
        // Corners of the covered area
        assert_eq!(frame.pixel_at(90, 250), Some((255, 255, 255)));
        assert_eq!(frame.pixel_at(109, 349), Some((255, 255, 255)));
        // Just outside
        assert_eq!(frame.pixel_at(110, 250), Some((0, 0, 0)));
    }

    #[test]
    fn test_fill_disc_uses_squared_distance() {
        let mut frame = Frame::new();
        frame.fill_disc(Vec2::new(400.0, 300.0), 20, Color::WHITE);
        // Center lit, axis extremes inside, corner of bounding box not
        assert_eq!(frame.pixel_at(400, 300), Some((255, 255, 255)));
        assert_eq!(frame.pixel_at(381, 300), Some((255, 255, 255)));
        assert_eq!(frame.pixel_at(381, 281), Some((0, 0, 0)));
    }
}
