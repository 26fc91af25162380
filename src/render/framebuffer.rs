//! Framebuffer: the pixel grid the renderer draws into.
//!
//! One packed `0x00RRGGBB` value per pixel, row-major from the top-left,
//! exactly the layout an LED matrix driver walks when refreshing the panel.

use std::path::Path;

use crate::colors::{self, unpack_color};

/// An owned `width x height` grid of packed RGB pixels.
///
/// All access is bounds-checked: out-of-range writes are silently dropped
/// and out-of-range reads return `None`, so callers can draw partially
/// offscreen geometry without pre-clipping.
pub struct Framebuffer {
    pixels: Vec<u32>,
    width: u32,
    height: u32,
}

impl Framebuffer {
    /// Create a framebuffer with every pixel black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![colors::BLACK; (width * height) as usize],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Reset every pixel to black.
    pub fn clear(&mut self) {
        self.pixels.fill(colors::BLACK);
    }

    /// Set a pixel. Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            self.pixels[(y as u32 * self.width + x as u32) as usize] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.pixels[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }

    /// The raw pixel grid, row-major from the top-left.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// The pixel grid as raw bytes (4 per pixel, native endianness), for
    /// blitting into a streaming texture.
    pub fn as_bytes(&self) -> &[u8] {
        unsafe {
            std::slice::from_raw_parts(self.pixels.as_ptr() as *const u8, self.pixels.len() * 4)
        }
    }

    /// Write the framebuffer to a PNG file.
    pub fn write_png<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        let img = image::RgbImage::from_fn(self.width, self.height, |x, y| {
            let (r, g, b) = unpack_color(self.pixels[(y * self.width + x) as usize]);
            image::Rgb([r, g, b])
        });
        img.save_with_format(path, image::ImageFormat::Png)
    }
}
