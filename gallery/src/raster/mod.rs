//! CPU rasterizer for the procedural textures and the baked wall images.
//!
//! Everything here is greyscale drawn into RGBA8 buffers so the result can
//! be handed to the GPU unchanged.

mod fill;
mod project;
mod textures;

use bevy::math::Vec2;

pub use fill::{fill_disc, fill_polygon, fill_rect};
pub use project::{bake, BakeView};
pub use textures::TextureSet;

/// An RGBA8 pixel buffer, row-major from the top-left.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    /// Opaque canvas cleared to grey level `shade`.
    pub fn new(width: u32, height: u32, shade: u8) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
        for _ in 0..width as usize * height as usize {
            pixels.extend_from_slice(&grey(shade));
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| (y as usize * self.width as usize + x as usize) * 4)
    }

    pub fn get(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let i = self.offset(x, y)?;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.pixels[i..i + 4]);
        Some(rgba)
    }

    /// Red channel, which is the grey level for everything drawn here.
    pub fn shade(&self, x: u32, y: u32) -> Option<u8> {
        self.get(x, y).map(|rgba| rgba[0])
    }

    pub fn set(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if let Some(i) = self.offset(x, y) {
            self.pixels[i..i + 4].copy_from_slice(&rgba);
        }
    }

    /// Nearest-neighbour lookup with repeat wrapping in both axes.
    pub fn sample(&self, uv: Vec2) -> [u8; 4] {
        if self.width == 0 || self.height == 0 {
            return grey(0);
        }
        let wrap = |t: f32, extent: u32| {
            let t = if t.is_finite() { t.rem_euclid(1.0) } else { 0.0 };
            ((t * extent as f32) as u32).min(extent - 1)
        };
        let (x, y) = (wrap(uv.x, self.width), wrap(uv.y, self.height));
        self.get(x, y).unwrap_or_else(|| grey(0))
    }

    /// Fraction of pixels whose grey level is below mid-grey.
    pub fn dark_fraction(&self) -> f32 {
        let total = self.width as usize * self.height as usize;
        if total == 0 {
            return 0.0;
        }
        let dark = self.pixels.chunks_exact(4).filter(|px| px[0] < 128).count();
        dark as f32 / total as f32
    }
}

pub(crate) fn grey(shade: u8) -> [u8; 4] {
    [shade, shade, shade, 255]
}
