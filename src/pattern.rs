//! Diagnostic test pattern.
//!
//! Draws a border, corner-to-corner diagonals, and the panel resolution in
//! 3x5 digits onto a framebuffer. Shown on hardware to verify panel wiring,
//! chaining and orientation before running a real scene.

use crate::render::Framebuffer;

/// 3x5 digit glyphs, one row per byte, most significant of the low three
/// bits on the left.
const DIGITS: [[u8; 5]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111], // 0
    [0b010, 0b110, 0b010, 0b010, 0b111], // 1
    [0b111, 0b001, 0b111, 0b100, 0b111], // 2
    [0b111, 0b001, 0b111, 0b001, 0b111], // 3
    [0b101, 0b101, 0b111, 0b001, 0b001], // 4
    [0b111, 0b100, 0b111, 0b001, 0b111], // 5
    [0b111, 0b100, 0b111, 0b101, 0b111], // 6
    [0b111, 0b001, 0b010, 0b100, 0b100], // 7
    [0b111, 0b101, 0b111, 0b101, 0b111], // 8
    [0b111, 0b101, 0b111, 0b001, 0b111], // 9
];

const GLYPH_HEIGHT: i32 = 5;
// 3 pixel glyph plus 1 column of spacing.
const GLYPH_ADVANCE: i32 = 4;

/// Draw both corner-to-corner diagonals.
pub fn draw_diagonals(fb: &mut Framebuffer, color: u32) {
    let w = fb.width() as i32;
    let h = fb.height() as i32;
    let steps = w.min(h);
    for i in 0..steps {
        let x = i * w / steps;
        let y = i * h / steps;
        fb.set_pixel(x, y, color);
        fb.set_pixel(w - 1 - x, y, color);
    }
}

/// Draw a one-pixel border around the framebuffer edge.
pub fn draw_border(fb: &mut Framebuffer, color: u32) {
    let w = fb.width() as i32;
    let h = fb.height() as i32;
    for x in 0..w {
        fb.set_pixel(x, 0, color);
        fb.set_pixel(x, h - 1, color);
    }
    for y in 0..h {
        fb.set_pixel(0, y, color);
        fb.set_pixel(w - 1, y, color);
    }
}

/// Draw a single decimal digit with its top-left corner at (x, y).
pub fn draw_digit(fb: &mut Framebuffer, digit: u8, x: i32, y: i32, color: u32) {
    if digit > 9 {
        return;
    }
    let glyph = &DIGITS[digit as usize];
    for (row, bits) in glyph.iter().enumerate() {
        for col in 0..3 {
            if bits & (1 << (2 - col)) != 0 {
                fb.set_pixel(x + col, y + row as i32, color);
            }
        }
    }
}

/// Draw a string of digits left to right. Non-digit characters leave a
/// glyph-wide gap so mixed text like `32x32` stays aligned.
pub fn draw_text(fb: &mut Framebuffer, text: &str, x: i32, y: i32, color: u32) {
    let mut cursor = x;
    for c in text.chars() {
        if let Some(d) = c.to_digit(10) {
            draw_digit(fb, d as u8, cursor, y, color);
        }
        cursor += GLYPH_ADVANCE;
    }
}

/// Draw the framebuffer's own resolution, centered, as `WxH`.
pub fn draw_resolution(fb: &mut Framebuffer, color: u32) {
    let text = format!("{}x{}", fb.width(), fb.height());
    let text_width = text.len() as i32 * GLYPH_ADVANCE;
    let x = (fb.width() as i32 - text_width) / 2;
    let y = (fb.height() as i32 - GLYPH_HEIGHT) / 2;
    draw_text(fb, &text, x, y, color);
}

/// Draw the full diagnostic pattern: diagonals under a border, with the
/// resolution readout centered on top.
pub fn draw_test_pattern(fb: &mut Framebuffer, light: u32, shadow: u32) {
    draw_diagonals(fb, light);
    draw_border(fb, shadow);
    draw_resolution(fb, light);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{pack_color, BLACK};

    #[test]
    fn test_border_covers_edges_only() {
        let mut fb = Framebuffer::new(8, 6);
        let c = pack_color(100, 100, 100);
        draw_border(&mut fb, c);
        assert_eq!(fb.get_pixel(0, 0), Some(c));
        assert_eq!(fb.get_pixel(7, 0), Some(c));
        assert_eq!(fb.get_pixel(0, 5), Some(c));
        assert_eq!(fb.get_pixel(3, 5), Some(c));
        assert_eq!(fb.get_pixel(3, 3), Some(BLACK));
    }

    #[test]
    fn test_diagonals_hit_corners() {
        let mut fb = Framebuffer::new(8, 8);
        let c = pack_color(255, 255, 200);
        draw_diagonals(&mut fb, c);
        assert_eq!(fb.get_pixel(0, 0), Some(c));
        assert_eq!(fb.get_pixel(7, 0), Some(c));
        assert_eq!(fb.get_pixel(3, 3), Some(c));
        assert_eq!(fb.get_pixel(4, 3), Some(c));
    }

    #[test]
    fn test_digit_one_glyph() {
        let mut fb = Framebuffer::new(8, 8);
        let c = 0xFFFFFF;
        draw_digit(&mut fb, 1, 2, 1, c);
        // Row 0 of "1" is 010: only the middle column.
        assert_eq!(fb.get_pixel(2, 1), Some(BLACK));
        assert_eq!(fb.get_pixel(3, 1), Some(c));
        assert_eq!(fb.get_pixel(4, 1), Some(BLACK));
        // Row 4 is 111.
        assert_eq!(fb.get_pixel(2, 5), Some(c));
        assert_eq!(fb.get_pixel(3, 5), Some(c));
        assert_eq!(fb.get_pixel(4, 5), Some(c));
    }

    #[test]
    fn test_resolution_readout_centered() {
        let mut fb = Framebuffer::new(32, 32);
        let c = 0xFFFFFF;
        draw_resolution(&mut fb, c);
        // "32x32" is 5 glyph cells = 20 px wide: starts at x=6, y=13.
        // '3' opens with a full top row.
        assert_eq!(fb.get_pixel(6, 13), Some(c));
        assert_eq!(fb.get_pixel(7, 13), Some(c));
        assert_eq!(fb.get_pixel(8, 13), Some(c));
        // The 'x' cell (columns 14..18) stays empty.
        for x in 14..18 {
            for y in 13..18 {
                assert_eq!(fb.get_pixel(x, y), Some(BLACK));
            }
        }
        // Second '3' starts after the gap.
        assert_eq!(fb.get_pixel(18, 13), Some(c));
    }
}
