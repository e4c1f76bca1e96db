use std::f32::consts::TAU;

use bevy::math::Vec3;

use super::{Geometry, Polygon};

/// Open cylinder around the Y axis, centred on the origin, built from
/// `segments` × `rings` rectangular panels. Panels alternate black and white
/// keyed by `(ring + segment) % 2`; ring 0 is the top.
pub fn segmented_cylinder(radius: f32, height: f32, segments: u32, rings: u32) -> Geometry {
    let mut geometry = Geometry::new();
    if segments == 0 || rings == 0 {
        return geometry;
    }

    let seg_angle = TAU / segments as f32;
    let ring_height = height / rings as f32;
    let top = height / 2.0;

    for n in 0..segments {
        let (s1, c1) = (n as f32 * seg_angle).sin_cos();
        let (s2, c2) = ((n + 1) as f32 * seg_angle).sin_cos();
        let (x1, z1) = (c1 * radius, s1 * radius);
        let (x2, z2) = (c2 * radius, s2 * radius);

        for ring in 0..rings {
            let y_from = top - ring as f32 * ring_height;
            let y_to = y_from - ring_height;
            let shade = if (ring + n) % 2 == 1 { 255 } else { 0 };
            geometry.push(Polygon::filled(
                &[
                    Vec3::new(x1, y_from, z1),
                    Vec3::new(x2, y_from, z2),
                    Vec3::new(x2, y_to, z2),
                    Vec3::new(x1, y_to, z1),
                ],
                shade,
            ));
        }
    }
    geometry
}
