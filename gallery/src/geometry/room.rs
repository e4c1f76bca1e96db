use super::{horizontal_quad, Geometry, Surface, HALF};

use bevy::math::{Affine3A, Vec3};

/// Floor tiles of a room stretching `right` cells along +x and `ahead`
/// cells along -z from the origin cell.
pub fn tile_room(right: u32, ahead: u32, surface: Surface) -> Geometry {
    let mut geometry = Geometry::new();
    for m in 0..right {
        for n in 0..ahead {
            let mut tile = Geometry::new();
            tile.push(horizontal_quad(-HALF, surface));
            geometry.append_transformed(
                tile,
                Affine3A::from_translation(Vec3::new(m as f32, 0.0, -(n as f32))),
            );
        }
    }
    geometry
}
