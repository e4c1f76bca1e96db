use bevy::math::Vec2;

use super::{fill_disc, fill_polygon, fill_rect, Canvas};
use crate::geometry::{wave_band, wave_band_offsets, TextureId};

const STRIPE_COUNT: u32 = 16;
const WAVE_THICKNESS: f32 = 0.125;
const WAVE_STEPS: u32 = 32;

/// The procedural textures, generated once at a fixed resolution.
#[derive(Clone, Debug)]
pub struct TextureSet {
    stripes: Canvas,
    waves: Canvas,
    circles: [Canvas; TextureSet::CIRCLE_FRAMES],
}

impl TextureSet {
    pub const CIRCLE_FRAMES: usize = 4;

    pub fn generate(size: u32) -> Self {
        Self {
            stripes: stripes(size),
            waves: waves(size),
            circles: std::array::from_fn(|frame| circles(size, frame as u32)),
        }
    }

    pub fn get(&self, id: TextureId) -> &Canvas {
        match id {
            TextureId::Stripes => &self.stripes,
            TextureId::Waves => &self.waves,
            TextureId::Circles(frame) => &self.circles[frame as usize % Self::CIRCLE_FRAMES],
        }
    }

    pub fn ids() -> impl Iterator<Item = TextureId> {
        [TextureId::Stripes, TextureId::Waves]
            .into_iter()
            .chain((0..Self::CIRCLE_FRAMES as u8).map(TextureId::Circles))
    }
}

/// Black vertical bars on white, each a 32nd wide, sixteen per side.
fn stripes(size: u32) -> Canvas {
    let mut canvas = Canvas::new(size, size, 255);
    let side = size as f32;
    for n in 0..STRIPE_COUNT {
        let x = n as f32 * side / STRIPE_COUNT as f32;
        fill_rect(
            &mut canvas,
            Vec2::new(x, 0.0),
            Vec2::new(side / (2 * STRIPE_COUNT) as f32, side),
            0,
        );
    }
    canvas
}

/// Black bezier ribbons on white, repeating every quarter.
fn waves(size: u32) -> Canvas {
    let mut canvas = Canvas::new(size, size, 255);
    let side = size as f32;
    for x in wave_band_offsets() {
        let outline: Vec<Vec2> = wave_band(x, WAVE_THICKNESS, WAVE_STEPS)
            .into_iter()
            .map(|p| p * side)
            .collect();
        fill_polygon(&mut canvas, &outline, 0);
    }
    canvas
}

/// A white ring on black whose radius grows with `frame`.
fn circles(size: u32, frame: u32) -> Canvas {
    let mut canvas = Canvas::new(size, size, 0);
    let side = size as f32;
    let centre = Vec2::splat(side / 2.0);
    fill_disc(&mut canvas, centre, side / 20.0 * (frame + 1) as f32, 255);
    fill_disc(&mut canvas, centre, side / 20.0 * frame as f32, 0);
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stripes_are_half_dark() {
        let canvas = stripes(64);
        assert!((canvas.dark_fraction() - 0.5).abs() < 1e-6);
        assert_eq!(canvas.shade(0, 10), Some(0));
        assert_eq!(canvas.shade(2, 10), Some(255));
    }

    #[test]
    fn waves_tile_horizontally() {
        let canvas = waves(64);
        let fraction = canvas.dark_fraction();
        assert!(fraction > 0.3 && fraction < 0.7, "{fraction}");
        // Bands repeat each quarter, so shifting a row by a quarter matches.
        for y in [5, 20, 40] {
            for x in 0..48 {
                assert_eq!(canvas.shade(x, y), canvas.shade(x + 16, y), "({x}, {y})");
            }
        }
    }

    #[test]
    fn circle_frames_grow_outward() {
        let first = circles(100, 0);
        assert_eq!(first.shade(50, 50), Some(255));
        let last = circles(100, 3);
        assert_eq!(last.shade(50, 50), Some(0));
        assert_eq!(last.shade(50, 32), Some(255));
        assert_eq!(last.shade(2, 2), Some(0));
    }

    #[test]
    fn set_exposes_every_id() {
        let set = TextureSet::generate(8);
        assert_eq!(TextureSet::ids().count(), 6);
        for id in TextureSet::ids() {
            assert_eq!(set.get(id).width(), 8);
        }
        assert_eq!(set.get(TextureId::Circles(5)), set.get(TextureId::Circles(1)));
    }
}
