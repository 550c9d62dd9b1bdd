//! RGB canvas painting: background fill, grid lines, and pixel blending.
//!
//! The canvas only knows about pixels. Glyph rasterization lives in
//! [`crate::typeset`]; it paints through [`Canvas::blend_pixel`] so the
//! anti-aliased coverage blends against whatever is already underneath.

use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};

use crate::error::TableroError;
use crate::layout::LINE_WIDTH;

/// Canvas background color.
pub const BG_COLOR: Rgb<u8> = Rgb([30, 30, 100]);
/// Grid line color.
pub const LINE_COLOR: Rgb<u8> = Rgb([100, 80, 20]);
/// Text color.
pub const TEXT_COLOR: Rgb<u8> = Rgb([255, 238, 173]);

/// Drawing surface for the score table.
pub struct Canvas {
    img: RgbImage,
}

impl Canvas {
    /// Create a canvas filled with the background color.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            img: RgbImage::from_pixel(width, height, BG_COLOR),
        }
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.img.width()
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.img.height()
    }

    /// Vertical grid line at `x`, `LINE_WIDTH` thick, spanning the full
    /// canvas height. The line extends rightward from `x`.
    pub fn draw_vline(&mut self, x: u32) {
        for dx in 0..LINE_WIDTH {
            let px = x + dx;
            if px >= self.img.width() {
                break;
            }
            for y in 0..self.img.height() {
                self.img.put_pixel(px, y, LINE_COLOR);
            }
        }
    }

    /// Horizontal grid line at `y`, `LINE_WIDTH` thick, spanning the full
    /// canvas width. The line extends downward from `y`.
    pub fn draw_hline(&mut self, y: u32) {
        for dy in 0..LINE_WIDTH {
            let py = y + dy;
            if py >= self.img.height() {
                break;
            }
            for x in 0..self.img.width() {
                self.img.put_pixel(x, py, LINE_COLOR);
            }
        }
    }

    /// Blend `color` over the pixel at `(x, y)` with the given coverage.
    /// Out-of-bounds coordinates are ignored.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Rgb<u8>, coverage: f32) {
        if x < 0 || y < 0 || x as u32 >= self.img.width() || y as u32 >= self.img.height() {
            return;
        }
        let under = self.img.get_pixel_mut(x as u32, y as u32);
        *under = blend(*under, color, coverage);
    }

    /// Read a pixel. Panics out of bounds (only used by tests and callers
    /// that already clamped).
    pub fn pixel(&self, x: u32, y: u32) -> Rgb<u8> {
        *self.img.get_pixel(x, y)
    }

    /// Borrow the underlying image buffer.
    pub fn image(&self) -> &RgbImage {
        &self.img
    }

    /// Encode the canvas as PNG at `path`, regardless of extension.
    pub fn save_png(&self, path: &Path) -> Result<(), TableroError> {
        self.img
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| TableroError::Image(format!("failed to save PNG: {e}")))
    }
}

/// Linear blend of `over` onto `under` with alpha in 0..=1.
fn blend(under: Rgb<u8>, over: Rgb<u8>, alpha: f32) -> Rgb<u8> {
    let a = alpha.clamp(0.0, 1.0);
    let mix = |u: u8, o: u8| (u as f32 + (o as f32 - u as f32) * a).round() as u8;
    Rgb([
        mix(under[0], over[0]),
        mix(under[1], over[1]),
        mix(under[2], over[2]),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_canvas_is_background() {
        let canvas = Canvas::new(10, 10);
        assert_eq!(canvas.pixel(0, 0), BG_COLOR);
        assert_eq!(canvas.pixel(9, 9), BG_COLOR);
    }

    #[test]
    fn vline_paints_full_height() {
        let mut canvas = Canvas::new(20, 10);
        canvas.draw_vline(5);
        for y in 0..10 {
            assert_eq!(canvas.pixel(5, y), LINE_COLOR);
            assert_eq!(canvas.pixel(5 + LINE_WIDTH - 1, y), LINE_COLOR);
        }
        assert_eq!(canvas.pixel(5 + LINE_WIDTH, 0), BG_COLOR);
        assert_eq!(canvas.pixel(4, 0), BG_COLOR);
    }

    #[test]
    fn hline_paints_full_width() {
        let mut canvas = Canvas::new(10, 20);
        canvas.draw_hline(8);
        for x in 0..10 {
            assert_eq!(canvas.pixel(x, 8), LINE_COLOR);
        }
        assert_eq!(canvas.pixel(0, 8 + LINE_WIDTH), BG_COLOR);
    }

    #[test]
    fn lines_at_canvas_edge_are_clipped() {
        // A line at width - 1 has only one of its three columns on-canvas.
        let mut canvas = Canvas::new(10, 4);
        canvas.draw_vline(9);
        assert_eq!(canvas.pixel(9, 0), LINE_COLOR);
    }

    #[test]
    fn blend_full_coverage_replaces_pixel() {
        let mut canvas = Canvas::new(4, 4);
        canvas.blend_pixel(1, 1, TEXT_COLOR, 1.0);
        assert_eq!(canvas.pixel(1, 1), TEXT_COLOR);
    }

    #[test]
    fn blend_zero_coverage_keeps_pixel() {
        let mut canvas = Canvas::new(4, 4);
        canvas.blend_pixel(1, 1, TEXT_COLOR, 0.0);
        assert_eq!(canvas.pixel(1, 1), BG_COLOR);
    }

    #[test]
    fn blend_out_of_bounds_is_ignored() {
        let mut canvas = Canvas::new(4, 4);
        canvas.blend_pixel(-1, 0, TEXT_COLOR, 1.0);
        canvas.blend_pixel(0, 17, TEXT_COLOR, 1.0);
        assert_eq!(canvas.pixel(0, 0), BG_COLOR);
    }

    #[test]
    fn partial_coverage_blends_between_colors() {
        let mut canvas = Canvas::new(2, 2);
        canvas.blend_pixel(0, 0, Rgb([255, 255, 255]), 0.5);
        let Rgb([r, g, b]) = canvas.pixel(0, 0);
        assert!(r > BG_COLOR[0] && r < 255);
        assert!(g > BG_COLOR[1] && g < 255);
        assert!(b > BG_COLOR[2] && b < 255);
    }
}
