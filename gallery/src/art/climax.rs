//! Climax: a half-cylinder of striped panels stepping in and out row by row,
//! viewed rolled onto its side through a narrow viewport.

use std::f32::consts::FRAC_PI_2;
use std::sync::LazyLock;

use bevy::math::{Affine3A, IVec2, Quat, Vec3};

use super::{Artwork, CurveFrame, Placement, Progress};
use crate::direction::Direction;
use crate::geometry::{curved_panels, CurveTable, Geometry, HALF};
use crate::nav::Perturbation;
use crate::raster::BakeView;

pub(super) const TELEPORT: Placement = Placement::new(IVec2::new(8, 11), Direction::North);

const SEGMENTS: usize = 64;
const ROWS: u32 = 10;
const OUTER_RADIUS: f32 = 3.0 * HALF;
const INNER_RADIUS: f32 = 2.9 * HALF;
/// Aspect lost at the start of the effect.
const SQUEEZE: f32 = 0.6;

static CURVE: LazyLock<CurveTable> =
    LazyLock::new(|| CurveTable::new(SEGMENTS, OUTER_RADIUS, INNER_RADIUS));

fn climax() -> Geometry {
    curved_panels(&CURVE, ROWS, 1.0)
}

fn recess() -> Affine3A {
    Affine3A::from_translation(Vec3::new(0.0, 0.0, -HALF))
}

pub(super) fn camera_curve(progress: Progress) -> CurveFrame {
    let r = progress.remaining();
    CurveFrame::camera(Perturbation {
        aspect: 1.0 - r * SQUEEZE,
        roll: r * FRAC_PI_2,
        ..Perturbation::NEUTRAL
    })
}

pub(super) fn live_geometry(art: &Artwork) -> Geometry {
    climax().transformed(art.teleport.transform() * recess())
}

pub(super) fn bake_scene() -> (BakeView, Geometry) {
    let view = Affine3A::from_quat(Quat::from_rotation_z(-FRAC_PI_2)) * recess();
    let bake = BakeView::standard()
        .with_aspect(1.0 - SQUEEZE)
        .with_view(view)
        .with_background(0);
    (bake, climax())
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use super::*;

    #[test]
    fn roll_and_squeeze_unwind() {
        let start = camera_curve(Progress::new(0, 50)).camera;
        assert!((start.roll - FRAC_PI_2).abs() < 1e-6);
        assert!((start.aspect - 0.4).abs() < 1e-6);
        let mid = camera_curve(Progress::new(25, 50)).camera;
        assert!((mid.roll - PI / 4.0).abs() < 1e-6);
    }

    #[test]
    fn curve_table_is_built_once_with_margin() {
        assert_eq!(CURVE.len(), SEGMENTS + 4);
        assert_eq!(climax().len(), 16 * ROWS as usize);
    }
}
