//! Static gallery: floors, ceilings, walls, wall images, markers, camera.

use std::f32::consts::FRAC_PI_2;
use std::time::Instant;

use bevy::math::Affine3A;
use bevy::prelude::*;

use crate::art::{Artwork, Placement};
use crate::camera::{camera_transform, perspective, GalleryCamera};
use crate::config::GalleryConfig;
use crate::geometry::{
    horizontal_quad, image_quad, wall_quad, Geometry, Polygon, Surface, TextureId, Vertex, HALF,
};
use crate::map::{FloorType, MapLayout};
use crate::nav::Perturbation;
use crate::raster::TextureSet;
use crate::render::{batch_geometry, GalleryMaterials, MeshBuffers};
use crate::scene::live::spawn_live_geometry;
use crate::scene::Gallery;

/// Wall images stand this far proud of the wall they hang on.
const IMAGE_INSET: f32 = 0.002;

/// Everything hidden while an artwork draws exclusively.
#[derive(Component, Debug, Default)]
pub struct GalleryStatic;

/// Floor tiles that cycle through the circle frames.
#[derive(Component, Debug, Default, Clone)]
pub struct MarkerFloor;

fn cell_transform(cell: IVec2) -> Affine3A {
    Affine3A::from_translation(Vec3::new(cell.x as f32, 0.0, cell.y as f32))
}

/// Floor quad whose texture runs across the cell the way the circle and
/// wave tiles expect.
fn floor_quad(surface: Surface) -> Polygon {
    let corner =
        |x: f32, z: f32, u: f32, v: f32| Vertex::new(Vec3::new(x, -HALF, z), Vec2::new(u, v));
    Polygon::new(
        vec![
            corner(-HALF, -HALF, 0.0, 1.0),
            corner(HALF, -HALF, 0.0, 0.0),
            corner(HALF, HALF, 1.0, 0.0),
            corner(-HALF, HALF, 1.0, 1.0),
        ],
        surface,
    )
}

/// Floors, ceilings and walls of every cell except marker floors.
pub fn shell_geometry(layout: &MapLayout) -> Geometry {
    let mut geometry = Geometry::new();
    for (cell, tile) in layout.cells() {
        let mut local = Geometry::new();
        let floor = match tile.floor {
            FloorType::None | FloorType::Marker => None,
            FloorType::Plain => Some(Surface::BLACK),
            FloorType::Wave => Some(Surface::Texture(TextureId::Waves)),
        };
        if let Some(surface) = floor {
            local.push(floor_quad(surface));
        }
        if tile.floor != FloorType::None {
            local.push(horizontal_quad(HALF, Surface::BLACK));
        }
        geometry.append_transformed(local, cell_transform(cell));

        for side in tile.walls.sides() {
            let mut wall = Geometry::new();
            wall.push(wall_quad(Surface::WHITE));
            geometry.append_transformed(wall, Placement::new(cell, side).transform());
        }
    }
    geometry
}

pub fn marker_geometry(layout: &MapLayout) -> Geometry {
    let mut geometry = Geometry::new();
    for (cell, tile) in layout.cells() {
        if tile.floor == FloorType::Marker {
            let mut local = Geometry::new();
            local.push(floor_quad(Surface::Texture(TextureId::Circles(0))));
            geometry.append_transformed(local, cell_transform(cell));
        }
    }
    geometry
}

/// The quad an artwork's baked image is drawn on.
pub fn flat_image_geometry(artwork: &Artwork) -> Geometry {
    let mut geometry = Geometry::new();
    geometry.push(image_quad(
        Vec2::new(-HALF, HALF),
        1.0,
        -HALF + IMAGE_INSET,
        Surface::WHITE,
    ));
    geometry.transformed(artwork.placement().transform())
}

fn spawn_batches(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    palette: &GalleryMaterials,
    geometry: &Geometry,
    marker: impl Bundle + Clone,
) {
    for (key, buffers) in batch_geometry(geometry) {
        commands.spawn((
            Mesh3d(meshes.add(buffers.into_mesh())),
            MeshMaterial3d(palette.for_batch(key)),
            Transform::IDENTITY,
            GalleryStatic,
            marker.clone(),
        ));
    }
}

pub fn setup_scene(
    mut commands: Commands,
    config: Res<GalleryConfig>,
    gallery: Res<Gallery>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
) {
    let layout = &gallery.layout;

    let started = Instant::now();
    let textures = TextureSet::generate(config.texture_px);
    let mut palette = GalleryMaterials::new(&textures, &mut images, &mut materials);
    for artwork in layout.artworks() {
        let canvas = artwork.bake_flat_image(&textures, config.bake_px);
        palette.add_flat_image(&canvas, &mut images, &mut materials);
    }
    info!(
        "gallery: baked {} flat images at {}px in {:.2?}",
        layout.artworks().len(),
        config.bake_px,
        started.elapsed()
    );

    spawn_batches(&mut commands, &mut meshes, &palette, &shell_geometry(layout), ());
    spawn_batches(&mut commands, &mut meshes, &palette, &marker_geometry(layout), MarkerFloor);

    for (id, artwork) in layout.artworks().iter().enumerate() {
        let mut buffers = MeshBuffers::default();
        buffers.extend(&flat_image_geometry(artwork));
        if let Some(material) = palette.flat_images.get(id) {
            commands.spawn((
                Mesh3d(meshes.add(buffers.into_mesh())),
                MeshMaterial3d(material.clone()),
                Transform::IDENTITY,
                GalleryStatic,
            ));
        }
        spawn_live_geometry(&mut commands, &mut meshes, &palette, id, artwork);
    }

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(perspective(FRAC_PI_2)),
        camera_transform(layout.start(), layout.start_facing(), 0.0, &Perturbation::NEUTRAL),
        GalleryCamera,
    ));
    commands.insert_resource(palette);
}
