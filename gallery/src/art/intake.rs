//! Intake: a wave-tiled floor seen from a skewed viewpoint. The room itself
//! is the gallery floor around the landing cell, so nothing extra is drawn.

use bevy::math::{Affine3A, IVec2, Quat, Vec3};

use super::{CurveFrame, Placement, Progress};
use crate::direction::Direction;
use crate::geometry::{tile_room, Geometry, Surface, TextureId};
use crate::nav::Perturbation;
use crate::raster::BakeView;

pub(super) const TELEPORT: Placement = Placement::new(IVec2::new(2, 4), Direction::East);

const TILT: f32 = -1.1;
const ROLL: f32 = -0.2;
const PAN: f32 = 0.49;

pub(super) fn camera_curve(progress: Progress) -> CurveFrame {
    let r = progress.remaining();
    CurveFrame::camera(Perturbation {
        tilt: r * TILT,
        roll: r * ROLL,
        pan: r * PAN,
        ..Perturbation::NEUTRAL
    })
}

pub(super) fn bake_scene() -> (BakeView, Geometry) {
    let rotation = Quat::from_rotation_x(-TILT) * Quat::from_rotation_z(-ROLL) * Quat::from_rotation_y(PAN);
    let view = Affine3A::from_quat(rotation) * Affine3A::from_translation(Vec3::new(-1.0, 0.0, 0.0));
    let room = tile_room(3, 4, Surface::Texture(TextureId::Waves));
    (BakeView::standard().with_view(view), room)
}
