//! Pixel map: the render output buffer.
//!
//! Row-major color buffer with a raster-order write cursor for the render
//! loop, random-access reads/writes, and the box-filter downsample used by
//! the antialiasing pass.

use crate::scan::ScanCursor;
use crate::tracer::{Color, BACKGROUND};

/// Named color buffer with a raster write cursor.
#[derive(Debug)]
pub struct PixelMap {
    name: String,
    width: u32,
    height: u32,
    pixels: Vec<Color>,
    cursor: ScanCursor,
}

impl PixelMap {
    /// Create a buffer of the given dimensions, filled with the background
    /// color, cursor at the origin.
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        debug_assert!(width >= 1 && height >= 1);
        Self {
            name: name.into(),
            width,
            height,
            pixels: vec![BACKGROUND; (width * height) as usize],
            cursor: ScanCursor::new(width, height),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y), independent of the write cursor.
    ///
    /// Random-access writes are the seam a parallel renderer would use to
    /// fill disjoint regions.
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Current write cursor position.
    pub fn cursor(&self) -> (u32, u32) {
        self.cursor.current()
    }

    /// Move the write cursor back to the origin.
    pub fn reset_cursor(&mut self) {
        self.cursor.reset();
    }

    /// Write a color at the cursor position, advancing the cursor in raster
    /// order when `advance` is true.
    pub fn write(&mut self, color: Color, advance: bool) {
        let (x, y) = self.cursor.current();
        self.set(x, y, color);
        if advance {
            self.cursor.advance();
        }
    }

    /// Box-filter downsample: each output pixel is the mean of a
    /// factor x factor block. Dimensions must be multiples of `factor`,
    /// which holds by construction for supersampled render buffers.
    pub fn downsample(&self, factor: u32) -> PixelMap {
        debug_assert!(factor >= 1);
        debug_assert!(self.width % factor == 0 && self.height % factor == 0);

        let width = self.width / factor;
        let height = self.height / factor;
        let mut out = PixelMap::new(self.name.clone(), width, height);

        let scale = 1.0 / (factor * factor) as f64;
        for y in 0..height {
            for x in 0..width {
                let mut sum = Color::ZERO;
                for sy in 0..factor {
                    for sx in 0..factor {
                        sum += self.get(x * factor + sx, y * factor + sy);
                    }
                }
                out.set(x, y, sum * scale);
            }
        }

        out
    }

    /// Convert to clamped 8-bit RGBA bytes (for display or saving).
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 4) as usize);
        for color in &self.pixels {
            bytes.extend_from_slice(&[
                (255.0 * color.x.clamp(0.0, 1.0)) as u8,
                (255.0 * color.y.clamp(0.0, 1.0)) as u8,
                (255.0 * color.z.clamp(0.0, 1.0)) as u8,
                255,
            ]);
        }
        bytes
    }
}
