//! Packed color helpers.
//!
//! The framebuffer stores one `u32` per pixel in `0x00RRGGBB` layout, the
//! format the LED panel driver consumes. The high byte is unused.

/// All channels off.
pub const BLACK: u32 = 0x000000;

/// The default warm-white light color (255, 255, 200).
pub const DEFAULT_LIGHT: u32 = 0xFFFFC8;

/// The default gray shadow color (100, 100, 100).
pub const DEFAULT_SHADOW: u32 = 0x646464;

/// Pack RGB channels into a `0x00RRGGBB` color.
#[inline]
pub fn pack_color(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Unpack a `0x00RRGGBB` color into its RGB channels.
#[inline]
pub fn unpack_color(color: u32) -> (u8, u8, u8) {
    (
        ((color >> 16) & 0xFF) as u8,
        ((color >> 8) & 0xFF) as u8,
        (color & 0xFF) as u8,
    )
}

/// Linearly interpolate between two packed colors, per channel.
///
/// `t` is clamped to `[0, 1]`; `t = 0` returns exactly `from` and `t = 1`
/// returns exactly `to`. Channels are rounded to the nearest integer and
/// clamped to `[0, 255]`.
pub fn lerp_color(from: u32, to: u32, t: f32) -> u32 {
    let t = t.clamp(0.0, 1.0);
    let (r0, g0, b0) = unpack_color(from);
    let (r1, g1, b1) = unpack_color(to);
    let channel = |a: u8, b: u8| -> u8 {
        (a as f32 + (b as f32 - a as f32) * t)
            .round()
            .clamp(0.0, 255.0) as u8
    };
    pack_color(channel(r0, r1), channel(g0, g1), channel(b0, b1))
}
