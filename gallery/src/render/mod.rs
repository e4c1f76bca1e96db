//! Turns procedural [`Geometry`] and rasterized canvases into Bevy assets.

mod materials;

use std::collections::BTreeMap;

use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;

use crate::geometry::{Geometry, Surface, TextureId};

pub use materials::{canvas_image, GalleryMaterials};

/// Vertex streams for one mesh, kept separate so they can be inspected
/// before upload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshBuffers {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub colors: Vec<[f32; 4]>,
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Appends every polygon of `geometry` as a triangle fan.
    pub fn extend(&mut self, geometry: &Geometry) {
        for polygon in &geometry.polygons {
            if polygon.vertices.len() < 3 {
                continue;
            }
            let normal = polygon.normal().to_array();
            let color = match polygon.surface {
                Surface::Fill(shade) => {
                    let level = shade as f32 / 255.0;
                    let c = Color::srgb(level, level, level).to_linear();
                    [c.red, c.green, c.blue, c.alpha]
                }
                Surface::Texture(_) => [1.0; 4],
            };
            let base = self.positions.len() as u32;
            for vertex in &polygon.vertices {
                self.positions.push(vertex.position.to_array());
                self.normals.push(normal);
                self.uvs.push(vertex.uv.to_array());
                self.colors.push(color);
            }
            for i in 1..polygon.vertices.len() as u32 - 1 {
                self.indices.extend_from_slice(&[base, base + i, base + i + 1]);
            }
        }
    }

    pub fn into_mesh(self) -> Mesh {
        Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
            .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, self.positions)
            .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, self.normals)
            .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, self.uvs)
            .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, self.colors)
            .with_inserted_indices(Indices::U32(self.indices))
    }
}

/// Which material a batch is drawn with. All flat fills share one material
/// and carry their grey level in vertex colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BatchKey {
    Fill,
    Stripes,
    Waves,
    Circles(u8),
}

impl BatchKey {
    pub fn of(surface: Surface) -> Self {
        match surface {
            Surface::Fill(_) => BatchKey::Fill,
            Surface::Texture(TextureId::Stripes) => BatchKey::Stripes,
            Surface::Texture(TextureId::Waves) => BatchKey::Waves,
            Surface::Texture(TextureId::Circles(frame)) => BatchKey::Circles(frame),
        }
    }
}

/// Splits `geometry` into one buffer set per material.
pub fn batch_geometry(geometry: &Geometry) -> BTreeMap<BatchKey, MeshBuffers> {
    let mut by_key: BTreeMap<BatchKey, Geometry> = BTreeMap::new();
    for polygon in &geometry.polygons {
        by_key
            .entry(BatchKey::of(polygon.surface))
            .or_default()
            .push(polygon.clone());
    }
    by_key
        .into_iter()
        .map(|(key, geometry)| {
            let mut buffers = MeshBuffers::default();
            buffers.extend(&geometry);
            (key, buffers)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{segmented_cylinder, wall_quad, Polygon};

    #[test]
    fn quads_become_two_triangles() {
        let mut geometry = Geometry::new();
        geometry.push(wall_quad(Surface::WHITE));
        let mut buffers = MeshBuffers::default();
        buffers.extend(&geometry);
        assert_eq!(buffers.positions.len(), 4);
        assert_eq!(buffers.indices, vec![0, 1, 2, 0, 2, 3]);
        assert_eq!(buffers.colors[0], [1.0; 4]);
    }

    #[test]
    fn shades_map_to_vertex_colours() {
        let mut geometry = Geometry::new();
        geometry.push(wall_quad(Surface::BLACK));
        let mut buffers = MeshBuffers::default();
        buffers.extend(&geometry);
        assert_eq!(buffers.colors[0], [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn degenerate_polygons_are_skipped() {
        let mut geometry = Geometry::new();
        geometry.push(Polygon::filled(&[Vec3::ZERO, Vec3::X], 0));
        let mut buffers = MeshBuffers::default();
        buffers.extend(&geometry);
        assert!(buffers.is_empty());
    }

    #[test]
    fn batches_split_by_material() {
        let mut geometry = segmented_cylinder(0.5, 1.0, 8, 2);
        geometry.push(wall_quad(Surface::Texture(TextureId::Stripes)));
        let batches = batch_geometry(&geometry);
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[&BatchKey::Fill].triangle_count(), 32);
        assert_eq!(batches[&BatchKey::Stripes].triangle_count(), 2);
    }
}
