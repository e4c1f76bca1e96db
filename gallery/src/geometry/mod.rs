//! Procedural geometry: polygons in cell units, y up, one cell = 1.0.
//!
//! Emitters are pure functions of their parameters. Every polygon is convex
//! so it can be drawn as a triangle fan, both by the mesh builder and by the
//! flat-image rasterizer.

mod curve_panel;
mod cylinder;
mod fan;
mod opening;
mod room;
mod wave;

use bevy::math::{Affine3A, Vec2, Vec3};

pub use curve_panel::{curved_panels, CurveTable};
pub use cylinder::segmented_cylinder;
pub use fan::perspective_fan;
pub use opening::diamond_opening;
pub use room::tile_room;
pub use wave::{cubic_bezier, fall_strips, strip_scale, wave_band, wave_band_offsets};
#[cfg(test)]
pub(crate) use wave::FALL_STRIPS;

/// Half the side of a cell.
pub const HALF: f32 = 0.5;

/// Procedural textures available to textured surfaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextureId {
    Stripes,
    Waves,
    /// One of the four ring frames used on marker floors.
    Circles(u8),
}

/// How a polygon is painted: a flat grey level or a texture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Surface {
    Fill(u8),
    Texture(TextureId),
}

impl Surface {
    pub const BLACK: Surface = Surface::Fill(0);
    pub const WHITE: Surface = Surface::Fill(255);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub uv: Vec2,
}

impl Vertex {
    pub fn new(position: Vec3, uv: Vec2) -> Self {
        Self { position, uv }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Vertex>,
    pub surface: Surface,
}

impl Polygon {
    pub fn new(vertices: Vec<Vertex>, surface: Surface) -> Self {
        Self { vertices, surface }
    }

    /// Flat-shaded polygon; UVs are zero.
    pub fn filled(points: &[Vec3], shade: u8) -> Self {
        Self {
            vertices: points.iter().map(|&p| Vertex::new(p, Vec2::ZERO)).collect(),
            surface: Surface::Fill(shade),
        }
    }

    pub fn normal(&self) -> Vec3 {
        if self.vertices.len() < 3 {
            return Vec3::Z;
        }
        let a = self.vertices[0].position;
        let b = self.vertices[1].position;
        let c = self.vertices[2].position;
        (b - a).cross(c - a).try_normalize().unwrap_or(Vec3::Z)
    }
}

/// A bag of polygons sharing one coordinate frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Geometry {
    pub polygons: Vec<Polygon>,
}

impl Geometry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, polygon: Polygon) {
        self.polygons.push(polygon);
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    /// Appends `other` after mapping its vertices through `transform`.
    pub fn append_transformed(&mut self, other: Geometry, transform: Affine3A) {
        self.polygons
            .extend(other.polygons.into_iter().map(|mut polygon| {
                for vertex in &mut polygon.vertices {
                    vertex.position = transform.transform_point3(vertex.position);
                }
                polygon
            }));
    }

    pub fn transformed(self, transform: Affine3A) -> Geometry {
        let mut out = Geometry::new();
        out.append_transformed(self, transform);
        out
    }

    /// Axis-aligned bounds of all vertices, or `None` when empty.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut vertices = self.polygons.iter().flat_map(|p| p.vertices.iter());
        let first = vertices.next()?.position;
        Some(vertices.fold((first, first), |(lo, hi), v| {
            (lo.min(v.position), hi.max(v.position))
        }))
    }
}

/// Unit square wall on the -Z side of a cell, seen from the cell centre.
/// UV (0, 0) is the top-left corner as seen by the viewer.
pub fn wall_quad(surface: Surface) -> Polygon {
    image_quad(Vec2::new(-HALF, HALF), 1.0, -HALF, surface)
}

/// Square in the plane `z`, `top_left` in (x, y), extending right and down.
pub fn image_quad(top_left: Vec2, side: f32, z: f32, surface: Surface) -> Polygon {
    let (x0, y0) = (top_left.x, top_left.y);
    let (x1, y1) = (x0 + side, y0 - side);
    Polygon::new(
        vec![
            Vertex::new(Vec3::new(x0, y0, z), Vec2::new(0.0, 0.0)),
            Vertex::new(Vec3::new(x1, y0, z), Vec2::new(1.0, 0.0)),
            Vertex::new(Vec3::new(x1, y1, z), Vec2::new(1.0, 1.0)),
            Vertex::new(Vec3::new(x0, y1, z), Vec2::new(0.0, 1.0)),
        ],
        surface,
    )
}

/// Horizontal unit square centred on the cell at height `y`.
pub fn horizontal_quad(y: f32, surface: Surface) -> Polygon {
    Polygon::new(
        vec![
            Vertex::new(Vec3::new(-HALF, y, -HALF), Vec2::new(0.0, 0.0)),
            Vertex::new(Vec3::new(HALF, y, -HALF), Vec2::new(1.0, 0.0)),
            Vertex::new(Vec3::new(HALF, y, HALF), Vec2::new(1.0, 1.0)),
            Vertex::new(Vec3::new(-HALF, y, HALF), Vec2::new(0.0, 1.0)),
        ],
        surface,
    )
}
