//! GalleryCamera component and the system that poses it every frame.

use bevy::prelude::*;

use crate::direction::Direction;
use crate::nav::Perturbation;
use crate::scene::Navigation;

/// Far enough for the near-orthographic squares view.
const FAR_PLANE: f32 = 2_000.0;
const NEAR_PLANE: f32 = 0.05;

#[derive(Component, Debug, Default)]
pub struct GalleryCamera;

pub fn camera_plugin(app: &mut App) {
    app.add_systems(Update, apply_camera_system);
}

pub fn perspective(fov: f32) -> PerspectiveProjection {
    PerspectiveProjection {
        fov,
        near: NEAR_PLANE,
        far: FAR_PLANE,
        ..default()
    }
}

/// World transform for a visitor on `cell` facing `facing`, turned an extra
/// `angle_offset` radians clockwise, with `camera` applied on top.
///
/// The x scale squeezes the view so a square window behaves like a
/// viewport of the requested aspect.
pub fn camera_transform(
    cell: IVec2,
    facing: Direction,
    angle_offset: f32,
    camera: &Perturbation,
) -> Transform {
    let yaw = Quat::from_rotation_y(-(facing.heading() + angle_offset));
    let eye = Vec3::new(cell.x as f32, 0.0, cell.y as f32);
    let translation = eye + yaw * Vec3::new(0.0, 0.0, camera.forward_offset);
    let rotation = yaw
        * Quat::from_rotation_y(-camera.pan)
        * Quat::from_rotation_z(camera.roll)
        * Quat::from_rotation_x(camera.tilt);

    Transform {
        translation,
        rotation,
        scale: Vec3::new(camera.aspect, 1.0, 1.0),
    }
}

pub fn apply_camera_system(
    navigation: Res<Navigation>,
    mut cameras: Query<(&mut Transform, &mut Projection), With<GalleryCamera>>,
) {
    let state = navigation.controller.state();
    let target = camera_transform(state.cell, state.facing, state.angle_offset, &state.camera);
    for (mut transform, mut projection) in &mut cameras {
        *transform = target;
        if let Projection::Perspective(p) = projection.as_mut() {
            p.fov = state.camera.fov;
        }
    }
}
