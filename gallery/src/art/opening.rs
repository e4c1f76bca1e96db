//! Opening: the visitor is moved outside the gallery, flies through a
//! striped diamond aperture, and is dropped back beside a striped wall.

use bevy::math::{Affine3A, IVec2, Vec3};

use super::{Artwork, CurveFrame, LiveContext, Placement, Progress};
use crate::direction::Direction;
use crate::geometry::{diamond_opening, wall_quad, Geometry, Surface, TextureId};
use crate::nav::Perturbation;
use crate::raster::BakeView;

pub(super) const TELEPORT: Placement = Placement::new(IVec2::new(-10, -10), Direction::North);

/// Where the visitor lands once the flight ends.
pub(super) const LANDING: Placement = Placement::new(IVec2::new(10, 10), Direction::East);

/// The striped wall the visitor sees after landing.
const STRIPE_WALL: Placement = Placement::new(IVec2::new(10, 11), Direction::East);
const STRIPE_WALL_PANELS: i32 = 3;

pub(super) fn camera_curve(progress: Progress) -> CurveFrame {
    CurveFrame {
        camera: Perturbation {
            forward_offset: progress.remaining(),
            ..Perturbation::NEUTRAL
        },
        relocate: progress.is_last().then_some(LANDING),
    }
}

fn stripe_wall() -> Geometry {
    let mut geometry = Geometry::new();
    for n in 0..STRIPE_WALL_PANELS {
        let mut panel = Geometry::new();
        panel.push(wall_quad(Surface::Texture(TextureId::Stripes)));
        geometry.append_transformed(
            panel,
            Affine3A::from_translation(Vec3::new(-n as f32, 0.0, 0.0)),
        );
    }
    geometry.transformed(STRIPE_WALL.transform())
}

pub(super) fn live_geometry(art: &Artwork, ctx: LiveContext) -> Geometry {
    let mut geometry = stripe_wall();
    if ctx.active {
        // One cell behind the landing point, facing north.
        let aperture = art.teleport.origin() + Vec3::Z;
        geometry.append_transformed(diamond_opening(), Affine3A::from_translation(aperture));
    }
    geometry
}

pub(super) fn bake_scene() -> (BakeView, Geometry) {
    (BakeView::standard(), diamond_opening())
}
