//! Perspective rasterization of [`Geometry`] into a square [`Canvas`].

use std::f32::consts::FRAC_PI_2;

use bevy::math::{Affine3A, Vec2, Vec3};

use super::{grey, Canvas, TextureSet};
use crate::geometry::{Geometry, Polygon, Surface, Vertex};

/// A fixed virtual camera. The camera sits at the origin of view space
/// looking down -Z with +Y up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BakeView {
    /// Vertical field of view in radians.
    pub fov: f32,
    /// Width over height of the frustum; the output stays square.
    pub aspect: f32,
    /// World to view space.
    pub view: Affine3A,
    /// Grey level behind the geometry.
    pub background: u8,
}

impl BakeView {
    /// Nearest visible depth, a tenth of the distance to a wall.
    pub const NEAR: f32 = 0.05;

    /// Ninety degrees, square, identity view, white background.
    pub fn standard() -> Self {
        Self {
            fov: FRAC_PI_2,
            aspect: 1.0,
            view: Affine3A::IDENTITY,
            background: 255,
        }
    }

    pub fn with_fov(mut self, fov: f32) -> Self {
        self.fov = fov;
        self
    }

    pub fn with_aspect(mut self, aspect: f32) -> Self {
        self.aspect = aspect;
        self
    }

    pub fn with_view(mut self, view: Affine3A) -> Self {
        self.view = view;
        self
    }

    pub fn with_background(mut self, background: u8) -> Self {
        self.background = background;
        self
    }

    fn focal(&self) -> f32 {
        1.0 / (self.fov / 2.0).tan()
    }
}

/// A vertex after projection: pixel position plus the perspective-divided
/// attributes that interpolate linearly in screen space.
#[derive(Clone, Copy, Debug)]
struct ScreenVertex {
    pixel: Vec2,
    inv_w: f32,
    uv_over_w: Vec2,
}

/// Draws `geometry` as seen from `view` into a `size` × `size` canvas.
pub fn bake(view: &BakeView, geometry: &Geometry, textures: &TextureSet, size: u32) -> Canvas {
    let mut canvas = Canvas::new(size, size, view.background);
    let mut depth = vec![0.0_f32; size as usize * size as usize];
    let focal = view.focal();
    let aspect = if view.aspect > 0.0 { view.aspect } else { 1.0 };

    for polygon in &geometry.polygons {
        let camera_space: Vec<Vertex> = polygon
            .vertices
            .iter()
            .map(|v| Vertex::new(view.view.transform_point3(v.position), v.uv))
            .collect();
        let clipped = clip_near(&camera_space);
        if clipped.len() < 3 {
            continue;
        }

        let screen: Vec<ScreenVertex> = clipped
            .iter()
            .map(|v| {
                let w = -v.position.z;
                let ndc = Vec2::new(
                    focal * v.position.x / (aspect * w),
                    focal * v.position.y / w,
                );
                ScreenVertex {
                    pixel: Vec2::new((ndc.x + 1.0) * 0.5, (1.0 - ndc.y) * 0.5) * size as f32,
                    inv_w: 1.0 / w,
                    uv_over_w: v.uv / w,
                }
            })
            .collect();

        for i in 1..screen.len() - 1 {
            raster_triangle(
                &mut canvas,
                &mut depth,
                [screen[0], screen[i], screen[i + 1]],
                polygon,
                textures,
            );
        }
    }
    canvas
}

/// Sutherland–Hodgman against the plane `z = -NEAR`.
fn clip_near(vertices: &[Vertex]) -> Vec<Vertex> {
    let inside = |v: &Vertex| -v.position.z >= BakeView::NEAR;
    let mut out = Vec::with_capacity(vertices.len() + 2);
    for (i, current) in vertices.iter().enumerate() {
        let next = &vertices[(i + 1) % vertices.len()];
        match (inside(current), inside(next)) {
            (true, true) => out.push(*next),
            (true, false) => out.push(intersect(current, next)),
            (false, true) => {
                out.push(intersect(current, next));
                out.push(*next);
            }
            (false, false) => {}
        }
    }
    out
}

fn intersect(a: &Vertex, b: &Vertex) -> Vertex {
    let da = -a.position.z - BakeView::NEAR;
    let db = -b.position.z - BakeView::NEAR;
    let t = da / (da - db);
    Vertex::new(
        a.position.lerp(b.position, t),
        a.uv.lerp(b.uv, t),
    )
}

fn edge(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

fn raster_triangle(
    canvas: &mut Canvas,
    depth: &mut [f32],
    tri: [ScreenVertex; 3],
    polygon: &Polygon,
    textures: &TextureSet,
) {
    let [a, b, c] = tri;
    let area = edge(a.pixel, b.pixel, c.pixel);
    if area.abs() < f32::EPSILON {
        return;
    }

    let size = canvas.width();
    let lo = a.pixel.min(b.pixel).min(c.pixel).floor().max(Vec2::ZERO);
    let hi = a.pixel.max(b.pixel).max(c.pixel).ceil().min(Vec2::splat(size as f32));

    for y in lo.y as u32..hi.y as u32 {
        for x in lo.x as u32..hi.x as u32 {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let wa = edge(b.pixel, c.pixel, p) / area;
            let wb = edge(c.pixel, a.pixel, p) / area;
            let wc = edge(a.pixel, b.pixel, p) / area;
            if wa < 0.0 || wb < 0.0 || wc < 0.0 {
                continue;
            }

            let inv_w = wa * a.inv_w + wb * b.inv_w + wc * c.inv_w;
            let index = y as usize * size as usize + x as usize;
            if inv_w <= depth[index] {
                continue;
            }
            depth[index] = inv_w;

            let color = match polygon.surface {
                Surface::Fill(shade) => grey(shade),
                Surface::Texture(id) => {
                    let uv = (wa * a.uv_over_w + wb * b.uv_over_w + wc * c.uv_over_w) / inv_w;
                    textures.get(id).sample(uv)
                }
            };
            canvas.set(x, y, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{wall_quad, HALF};

    fn textures() -> TextureSet {
        TextureSet::generate(16)
    }

    fn square_at(z: f32, shade: u8, half: f32) -> Geometry {
        let mut g = Geometry::new();
        g.push(Polygon::filled(
            &[
                Vec3::new(-half, half, z),
                Vec3::new(half, half, z),
                Vec3::new(half, -half, z),
                Vec3::new(-half, -half, z),
            ],
            shade,
        ));
        g
    }

    #[test]
    fn wall_half_a_cell_away_fills_a_ninety_degree_view() {
        let mut g = Geometry::new();
        g.push(wall_quad(Surface::BLACK));
        let canvas = bake(&BakeView::standard(), &g, &textures(), 32);
        assert_eq!(canvas.dark_fraction(), 1.0);
    }

    #[test]
    fn nearer_polygon_wins_regardless_of_order() {
        let mut g = square_at(-2.0, 0, 1.0);
        g.append_transformed(square_at(-1.0, 200, 0.1), Affine3A::IDENTITY);
        let mut reversed = square_at(-1.0, 200, 0.1);
        reversed.append_transformed(square_at(-2.0, 0, 1.0), Affine3A::IDENTITY);

        for geometry in [g, reversed] {
            let canvas = bake(&BakeView::standard(), &geometry, &textures(), 32);
            assert_eq!(canvas.shade(16, 16), Some(200));
            assert_eq!(canvas.shade(10, 10), Some(0));
        }
    }

    #[test]
    fn geometry_behind_the_camera_is_clipped() {
        let g = square_at(1.0, 0, 1.0);
        let canvas = bake(&BakeView::standard(), &g, &textures(), 16);
        assert_eq!(canvas.dark_fraction(), 0.0);
    }

    #[test]
    fn straddling_polygon_is_clipped_not_dropped() {
        let mut g = Geometry::new();
        g.push(Polygon::filled(
            &[
                Vec3::new(-1.0, -HALF, 1.0),
                Vec3::new(1.0, -HALF, 1.0),
                Vec3::new(1.0, -HALF, -4.0),
                Vec3::new(-1.0, -HALF, -4.0),
            ],
            0,
        ));
        let canvas = bake(&BakeView::standard(), &g, &textures(), 32);
        // The floor fills the bottom of the frame and nothing above the horizon.
        assert_eq!(canvas.shade(16, 31), Some(0));
        assert_eq!(canvas.shade(16, 2), Some(255));
    }

    #[test]
    fn narrow_aspect_stretches_horizontally() {
        let g = square_at(-1.0, 0, 0.1);
        let wide = bake(&BakeView::standard(), &g, &textures(), 64);
        let narrow = bake(&BakeView::standard().with_aspect(0.5), &g, &textures(), 64);
        assert!(narrow.dark_fraction() > 1.9 * wide.dark_fraction());
    }

    #[test]
    fn view_transform_moves_the_scene() {
        let g = square_at(-1.0, 0, 0.2);
        let shifted = BakeView::standard().with_view(Affine3A::from_translation(Vec3::new(0.6, 0.0, 0.0)));
        let canvas = bake(&shifted, &g, &textures(), 32);
        assert_eq!(canvas.shade(16, 16), Some(255));
        assert!(canvas.dark_fraction() > 0.0);
    }

    #[test]
    fn textured_surface_samples_its_texture() {
        let mut g = Geometry::new();
        g.push(wall_quad(Surface::Texture(crate::geometry::TextureId::Stripes)));
        let canvas = bake(&BakeView::standard(), &g, &TextureSet::generate(64), 64);
        let fraction = canvas.dark_fraction();
        assert!(fraction > 0.4 && fraction < 0.6, "{fraction}");
    }
}
