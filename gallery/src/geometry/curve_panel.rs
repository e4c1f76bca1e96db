use std::f32::consts::PI;

use bevy::math::{Vec2, Vec3};

use super::{Geometry, Polygon, Surface, TextureId, Vertex};

/// Columns of the table consumed per panel.
const PANEL_STRIDE: usize = 4;

/// Precomputed half-cylinder cross-section at two radii.
///
/// Entry `n` of `segments + 4` holds the (x, z) position at an eased angle
/// that sweeps from 0 to π and overshoots slightly past the end, so a panel
/// starting near the last column can still read four columns ahead.
#[derive(Clone, Debug, PartialEq)]
pub struct CurveTable {
    segments: usize,
    outer: Vec<Vec2>,
    inner: Vec<Vec2>,
}

impl CurveTable {
    pub fn new(segments: usize, outer_radius: f32, inner_radius: f32) -> Self {
        let len = segments + PANEL_STRIDE;
        let mut outer = Vec::with_capacity(len);
        let mut inner = Vec::with_capacity(len);
        for n in 0..len {
            let eased = ((n as f32 / segments as f32 * PI + PI).cos() + 1.0) / 2.0 * PI;
            let (sin, cos) = eased.sin_cos();
            outer.push(Vec2::new(cos * outer_radius, -sin * outer_radius));
            inner.push(Vec2::new(cos * inner_radius, -sin * inner_radius));
        }
        Self {
            segments,
            outer,
            inner,
        }
    }

    pub fn segments(&self) -> usize {
        self.segments
    }

    pub fn len(&self) -> usize {
        self.outer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outer.is_empty()
    }

    pub fn outer(&self, n: usize) -> Vec2 {
        self.outer[n]
    }

    pub fn inner(&self, n: usize) -> Vec2 {
        self.inner[n]
    }
}

/// Striped panels around the half cylinder. Each panel spans four table
/// columns and one of `rows` vertical bands over `height`; even rows lean
/// from the outer radius at the top to the inner one at the bottom, odd
/// rows the other way, so the wall ripples in and out.
pub fn curved_panels(table: &CurveTable, rows: u32, height: f32) -> Geometry {
    let mut geometry = Geometry::new();
    if rows == 0 || table.segments() < 2 {
        return geometry;
    }
    let row_height = height / rows as f32;
    let top = height / 2.0;
    let at = |p: Vec2, y: f32| Vec3::new(p.x, y, p.y);

    for n in (0..table.segments() - 1).step_by(PANEL_STRIDE) {
        for row in 0..rows {
            let y_from = top - row as f32 * row_height;
            let y_to = y_from - row_height;
            let corners = if row % 2 == 0 {
                [
                    at(table.outer(n), y_from),
                    at(table.outer(n + 4), y_from),
                    at(table.inner(n + 5), y_to),
                    at(table.inner(n + 1), y_to),
                ]
            } else {
                [
                    at(table.inner(n + 1), y_from),
                    at(table.inner(n + 5), y_from),
                    at(table.outer(n + 4), y_to),
                    at(table.outer(n), y_to),
                ]
            };
            let uvs = [
                Vec2::new(0.0, 0.0),
                Vec2::new(1.0, 0.0),
                Vec2::new(1.0, 1.0),
                Vec2::new(0.0, 1.0),
            ];
            geometry.push(Polygon::new(
                corners
                    .into_iter()
                    .zip(uvs)
                    .map(|(p, uv)| Vertex::new(p, uv))
                    .collect(),
                Surface::Texture(TextureId::Stripes),
            ));
        }
    }
    geometry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sweeps_a_half_circle() {
        let table = CurveTable::new(64, 1.5, 1.45);
        assert_eq!(table.len(), 68);
        let first = table.outer(0);
        assert!((first.x - 1.5).abs() < 1e-5);
        assert!(first.y.abs() < 1e-5);
        let last = table.outer(64);
        assert!((last.x + 1.5).abs() < 1e-4);
        // Every point is on the far (-z) side.
        assert!((0..table.len()).all(|n| table.inner(n).y <= 1e-5));
    }

    #[test]
    fn panels_cover_sixteen_columns_of_ten_rows() {
        let table = CurveTable::new(64, 1.5, 1.45);
        let panels = curved_panels(&table, 10, 1.0);
        assert_eq!(panels.len(), 16 * 10);
        assert!(panels
            .polygons
            .iter()
            .all(|p| p.surface == Surface::Texture(TextureId::Stripes)));
    }
}
