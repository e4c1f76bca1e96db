use bevy::math::Vec3;

use super::{Geometry, Polygon, HALF};

/// Floor and ceiling triangles receding from the viewer, laid out so that
/// under a perspective view their bases land at the given screen
/// proportions (`0 < p <= 1`, from the horizon outward).
///
/// A proportion `p` maps to depth `0.5 / p - 0.5` ahead of the near edge; the
/// base half-width shrinks with depth by `stretch`, which undoes a viewport
/// aspect of `1 / stretch`. Triangles are emitted back to front.
pub fn perspective_fan(bottom: &[f32], top: &[f32], stretch: f32) -> Geometry {
    let mut geometry = Geometry::new();
    let pairs = bottom.len().min(top.len());
    if pairs < 2 {
        return geometry;
    }

    for n in (0..pairs - 1).rev() {
        geometry.push(fan_triangle(bottom[n], bottom[n + 1], -HALF, stretch));
        geometry.push(fan_triangle(top[n], top[n + 1], HALF, stretch));
    }
    geometry
}

fn fan_triangle(apex_proportion: f32, base_proportion: f32, y: f32, stretch: f32) -> Polygon {
    let base_depth = HALF / base_proportion - HALF;
    let apex_depth = HALF / apex_proportion - HALF;
    let inset = HALF - (base_depth + HALF) / stretch;
    Polygon::filled(
        &[
            Vec3::new(inset - HALF, y, -HALF - base_depth),
            Vec3::new(0.0, y, -HALF - apex_depth),
            Vec3::new(HALF - inset, y, -HALF - base_depth),
        ],
        0,
    )
}
