//! Bitmap digit font
//!
//! Scores only ever read 0 through 3, so that is the whole glyph set. Each
//! glyph is a 3-column by 5-row bit grid, stamped as filled squares scaled
//! by a cell size.

use glam::Vec2;

use crate::sim::Color;

use super::frame::Frame;

/// Glyph grid dimensions
pub const GLYPH_COLS: i32 = 3;
pub const GLYPH_ROWS: i32 = 5;

/// 3x5 glyphs for the digits 0-3, row-major, one byte per cell
#[rustfmt::skip]
const GLYPHS: [[u8; (GLYPH_COLS * GLYPH_ROWS) as usize]; 4] = [
    [
        1, 1, 1,
        1, 0, 1,
        1, 0, 1,
        1, 0, 1,
        1, 1, 1,
    ],
    [
        1, 1, 0,
        0, 1, 0,
        0, 1, 0,
        0, 1, 0,
        0, 1, 0,
    ],
    [
        1, 1, 1,
        0, 0, 1,
        1, 1, 1,
        1, 0, 0,
        1, 1, 1,
    ],
    [
        1, 1, 1,
        0, 0, 1,
        1, 1, 1,
        0, 0, 1,
        1, 1, 1,
    ],
];

/// Stamp `digit` centered on `anchor`, each glyph cell scaled to a
/// `cell` x `cell` square. Digits outside 0-3 are a caller contract
/// violation - the font has no other glyphs.
pub fn draw_digit(frame: &mut Frame, anchor: Vec2, color: Color, cell: i32, digit: u32) {
    debug_assert!((digit as usize) < GLYPHS.len(), "no glyph for {digit}");

    let start_x = anchor.x as i32 - (cell * GLYPH_COLS) / 2;
    let start_y = anchor.y as i32 - (cell * GLYPH_ROWS) / 2;

    for (i, bit) in GLYPHS[digit as usize].iter().enumerate() {
        if *bit == 1 {
            let col = i as i32 % GLYPH_COLS;
            let row = i as i32 / GLYPH_COLS;
            let x0 = start_x + col * cell;
            let y0 = start_y + row * cell;
            for y in y0..y0 + cell {
                for x in x0..x0 + cell {
                    frame.set_pixel(x, y, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_zero_footprint() {
        // At cell size 1 the glyph is its raw bit grid: a bordered square
        // with the two middle side cells empty (12 lit cells).
        let mut frame = Frame::new();
        frame.clear();
        draw_digit(&mut frame, Vec2::new(100.0, 100.0), Color::WHITE, 1, 0);

        assert_eq!(frame.lit_pixel_count(), 12);

        // Grid is anchored at (100 - 1, 100 - 2)
        let (x0, y0) = (99, 98);
        for row in 0..GLYPH_ROWS {
            for col in 0..GLYPH_COLS {
                let expected = GLYPHS[0][(row * GLYPH_COLS + col) as usize] == 1;
                let lit = frame.pixel_at(x0 + col, y0 + row) != Some((0, 0, 0));
                assert_eq!(lit, expected, "cell ({col},{row})");
            }
        }
    }

    #[test]
    fn test_digit_scales_by_cell_size() {
        let mut frame = Frame::new();
        draw_digit(&mut frame, Vec2::new(400.0, 300.0), Color::WHITE, 10, 1);
        // Digit 1 has 6 lit cells, each 10x10
        assert_eq!(frame.lit_pixel_count(), 6 * 100);
    }

    #[test]
    fn test_digit_clipped_at_buffer_edge() {
        // Anchored near the top-left corner part of the glyph falls outside;
        // the bounded pixel writes drop it without panicking.
        let mut frame = Frame::new();
        draw_digit(&mut frame, Vec2::new(0.0, 0.0), Color::WHITE, 10, 2);
        assert!(frame.lit_pixel_count() > 0);
    }
}
