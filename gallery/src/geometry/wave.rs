//! Bezier wave bands and the strip-stretched "fall" panel.

use std::f32::consts::TAU;

use bevy::math::{Vec2, Vec3};

use super::{Geometry, Polygon, Surface, TextureId, Vertex, HALF};

/// Number of horizontal strips in a fall panel.
pub const FALL_STRIPS: u32 = 16;
/// Times the wave texture repeats across one strip.
pub const FALL_TILES: f32 = 16.0;
/// Strips never collapse below this vertical scale.
pub const MIN_STRIP_SCALE: f32 = 0.1;

pub fn cubic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    let tt = t * t;
    let uu = u * u;
    let uuu = uu * u;
    let ttt = tt * t;
    uuu * p0 + 3.0 * uu * t * p1 + 3.0 * u * tt * p2 + ttt * p3
}

/// Outline of one wave band in texture space (x right, y down, 0..1).
///
/// The left edge bends from `(x, 0)` to `(x, 1)` through controls half a
/// texture to either side; the right edge is the same curve shifted by
/// `thickness` and walked back up. The outline is not convex.
pub fn wave_band(x: f32, thickness: f32, steps: u32) -> Vec<Vec2> {
    let steps = steps.max(1);
    let mut outline = Vec::with_capacity(2 * steps as usize + 2);

    let (a0, a1, a2, a3) = (
        Vec2::new(x, 0.0),
        Vec2::new(x - HALF, HALF),
        Vec2::new(x + HALF, HALF),
        Vec2::new(x, 1.0),
    );
    for i in 0..=steps {
        outline.push(cubic_bezier(a0, a1, a2, a3, i as f32 / steps as f32));
    }

    let x = x + thickness;
    let (b0, b1, b2, b3) = (
        Vec2::new(x, 1.0),
        Vec2::new(x + HALF, HALF),
        Vec2::new(x - HALF, HALF),
        Vec2::new(x, 0.0),
    );
    for i in 0..=steps {
        outline.push(cubic_bezier(b0, b1, b2, b3, i as f32 / steps as f32));
    }
    outline
}

/// Left-edge offsets of the bands tiled across the waves texture:
/// every quarter from -1/8 through 1 + 1/8.
pub fn wave_band_offsets() -> impl Iterator<Item = f32> {
    (0..6).map(|n| -0.125 + n as f32 * 0.25)
}

/// Vertical scale of strip `index` at animation `phase` (radians).
pub fn strip_scale(index: u32, phase: f32) -> f32 {
    let h = (index as f32 / FALL_STRIPS as f32 * TAU + phase).sin() + 1.0;
    h.max(MIN_STRIP_SCALE)
}

/// One fall panel: a unit square in the plane z = -0.5 made of 16 strips of
/// the waves texture, each stretched by [`strip_scale`]. Strips stack from
/// the top edge downward.
pub fn fall_strips(phase: f32) -> Geometry {
    let mut geometry = Geometry::new();
    let strip_height = 1.0 / FALL_STRIPS as f32;
    let mut top = HALF;

    for index in 0..FALL_STRIPS {
        let height = strip_height * strip_scale(index, phase);
        let bottom = top - height;
        geometry.push(Polygon::new(
            vec![
                Vertex::new(Vec3::new(-HALF, top, -HALF), Vec2::new(0.0, 0.0)),
                Vertex::new(Vec3::new(HALF, top, -HALF), Vec2::new(FALL_TILES, 0.0)),
                Vertex::new(Vec3::new(HALF, bottom, -HALF), Vec2::new(FALL_TILES, 1.0)),
                Vertex::new(Vec3::new(-HALF, bottom, -HALF), Vec2::new(0.0, 1.0)),
            ],
            Surface::Texture(TextureId::Waves),
        ));
        top = bottom;
    }
    geometry
}
