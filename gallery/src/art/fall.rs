//! Fall: rows of the wave texture whose heights ripple with a travelling sine.

use bevy::math::{Affine3A, IVec2, Vec3};

use super::{Artwork, CurveFrame, LiveContext, Placement, Progress};
use crate::direction::Direction;
use crate::geometry::{fall_strips, Geometry};
use crate::nav::Perturbation;
use crate::raster::BakeView;

pub(super) const TELEPORT: Placement = Placement::new(IVec2::new(2, 3), Direction::West);

/// Animation frames per radian of wave phase.
const PHASE_DIVISOR: f32 = 25.0;
const PANELS: i32 = 3;

pub(super) fn camera_curve(progress: Progress) -> CurveFrame {
    CurveFrame::camera(Perturbation {
        forward_offset: -progress.remaining(),
        ..Perturbation::NEUTRAL
    })
}

pub(super) fn live_geometry(art: &Artwork, ctx: LiveContext) -> Geometry {
    let strips = fall_strips(ctx.phase as f32 / PHASE_DIVISOR);
    let mut geometry = Geometry::new();
    for n in 0..PANELS {
        let offset = Vec3::new((n - 1) as f32, 0.0, -1.0);
        geometry.append_transformed(strips.clone(), Affine3A::from_translation(offset));
    }
    geometry.transformed(art.teleport.transform())
}

pub(super) fn bake_scene() -> (BakeView, Geometry) {
    (BakeView::standard(), fall_strips(0.0))
}
