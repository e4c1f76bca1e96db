//! Hero: black triangles fanning along floor and ceiling, compressed so the
//! narrowed viewport reads as a flat composition of tall wedges.

use bevy::math::IVec2;

use super::{Artwork, CurveFrame, Placement, Progress};
use crate::direction::Direction;
use crate::geometry::{perspective_fan, Geometry};
use crate::nav::Perturbation;
use crate::raster::BakeView;

pub(super) const TELEPORT: Placement = Placement::new(IVec2::new(10, 13), Direction::West);

/// Wedge count across the composition.
const SEGMENTS: u32 = 26;
/// Horizontal stretch the viewport squeeze has to undo.
const STRETCH: u32 = 800 / SEGMENTS;

const BOTTOM: [f32; 14] = [
    0.001, 0.054, 0.106, 0.168, 0.230, 0.296, 0.366, 0.442, 0.520, 0.606, 0.692, 0.788, 0.888, 1.0,
];
const TOP: [f32; 14] = [
    0.001, 0.043, 0.121, 0.235, 0.388, 0.632, 0.694, 0.749, 0.799, 0.848, 0.895, 0.935, 0.973, 1.0,
];

fn hero() -> Geometry {
    perspective_fan(&BOTTOM, &TOP, 800.0 / SEGMENTS as f32)
}

pub(super) fn camera_curve(progress: Progress) -> CurveFrame {
    let squeeze = progress.remaining() * (STRETCH - 1) as f32 + 1.0;
    CurveFrame::camera(Perturbation {
        aspect: 1.0 / squeeze,
        ..Perturbation::NEUTRAL
    })
}

pub(super) fn live_geometry(art: &Artwork) -> Geometry {
    hero().transformed(art.teleport.transform())
}

pub(super) fn bake_scene() -> (BakeView, Geometry) {
    (BakeView::standard().with_aspect(1.0 / STRETCH as f32), hero())
}
