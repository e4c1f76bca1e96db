use bevy::math::{Vec2, Vec3};

use super::{image_quad, Geometry, Polygon, Surface, TextureId, Vertex, HALF};

/// Side of the striped backdrop behind the opening, in panels.
const BACKDROP_PANELS: i32 = 3;

/// A striped frame with a diamond cut out of a unit square at z = -0.5,
/// plus a 3×3 striped backdrop one cell further back, seen through the
/// diamond.
pub fn diamond_opening() -> Geometry {
    let mut geometry = Geometry::new();
    let stripes = Surface::Texture(TextureId::Stripes);

    // Corner triangles in (x right, y down) unit-square coordinates.
    let corners: [[(Vec2, Vec2); 3]; 4] = [
        [
            (Vec2::new(0.0, 0.0), Vec2::new(0.0, 0.0)),
            (Vec2::new(0.5, 0.0), Vec2::new(1.0, 0.0)),
            (Vec2::new(0.0, 0.5), Vec2::new(0.0, 1.0)),
        ],
        [
            (Vec2::new(0.5, 0.0), Vec2::new(0.0, 0.0)),
            (Vec2::new(1.0, 0.0), Vec2::new(1.0, 0.0)),
            (Vec2::new(1.0, 0.5), Vec2::new(1.0, 1.0)),
        ],
        [
            (Vec2::new(0.0, 0.5), Vec2::new(0.0, 0.0)),
            (Vec2::new(0.0, 1.0), Vec2::new(0.0, 1.0)),
            (Vec2::new(0.5, 1.0), Vec2::new(1.0, 1.0)),
        ],
        [
            (Vec2::new(1.0, 0.5), Vec2::new(1.0, 0.0)),
            (Vec2::new(0.5, 1.0), Vec2::new(0.0, 1.0)),
            (Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0)),
        ],
    ];
    for triangle in corners {
        geometry.push(Polygon::new(
            triangle
                .iter()
                .map(|&(p, uv)| Vertex::new(Vec3::new(p.x - HALF, HALF - p.y, -HALF), uv))
                .collect(),
            stripes,
        ));
    }

    let z = -HALF - 1.0;
    for row in 0..BACKDROP_PANELS {
        for col in 0..BACKDROP_PANELS {
            let top_left = Vec2::new(-1.5 + col as f32, 1.5 - row as f32);
            geometry.push(image_quad(top_left, 1.0, z, stripes));
        }
    }
    geometry
}
