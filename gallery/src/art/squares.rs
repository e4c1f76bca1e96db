//! Movement in Squares: two checkered cylinders seen nearly orthographically,
//! then revealed in perspective as the field of view opens up.

use std::f32::consts::FRAC_PI_2;

use bevy::math::{Affine3A, IVec2, Vec3};

use super::{Artwork, CurveFrame, LiveContext, Placement, Progress};
use crate::direction::Direction;
use crate::geometry::{segmented_cylinder, Geometry, HALF};
use crate::nav::Perturbation;
use crate::raster::BakeView;

pub(super) const TELEPORT: Placement = Placement::new(IVec2::new(3, 2), Direction::North);

const CYLINDER_SEGMENTS: u32 = 32;
const CYLINDER_RINGS: u32 = 12;
/// Field of view used for the flat image; effectively orthographic.
const BAKE_FOV: f32 = 0.001 * FRAC_PI_2;

/// Distance to pull back so the wall plane half a cell ahead still fills
/// the view at `fov`.
fn pull_back(fov: f32) -> f32 {
    HALF / (fov / 2.0).tan() - HALF
}

/// Spin applied to each cylinder at animation phase `phase`.
fn spin(phase: u32) -> f32 {
    phase as f32 / 100.0
}

fn two_cylinders(phase: u32) -> Geometry {
    let cylinder = segmented_cylinder(HALF, 1.0, CYLINDER_SEGMENTS, CYLINDER_RINGS);
    let angle = spin(phase);
    let mut geometry = Geometry::new();
    geometry.append_transformed(
        cylinder.clone(),
        Affine3A::from_translation(Vec3::new(-HALF, 0.0, -1.0)) * Affine3A::from_rotation_y(angle),
    );
    geometry.append_transformed(
        cylinder,
        Affine3A::from_translation(Vec3::new(HALF, 0.0, -1.0)) * Affine3A::from_rotation_y(-angle),
    );
    geometry
}

pub(super) fn camera_curve(progress: Progress) -> CurveFrame {
    let fov = progress.elapsed() * FRAC_PI_2;
    CurveFrame::camera(Perturbation {
        fov,
        forward_offset: pull_back(fov),
        ..Perturbation::NEUTRAL
    })
}

pub(super) fn live_geometry(art: &Artwork, ctx: LiveContext) -> Geometry {
    two_cylinders(ctx.phase).transformed(art.teleport.transform())
}

pub(super) fn bake_scene() -> (BakeView, Geometry) {
    let view = BakeView::standard()
        .with_fov(BAKE_FOV)
        .with_view(Affine3A::from_translation(Vec3::new(0.0, 0.0, -pull_back(BAKE_FOV))));
    (view, two_cylinders(0))
}
