//! Artwork catalog: six op-art pieces, each a tag bound to a live-geometry
//! emitter, a camera curve, and a fixed view used to bake its wall image.

mod climax;
mod fall;
mod hero;
mod intake;
mod opening;
mod squares;

use bevy::math::{Affine3A, IVec2, Vec3};

use crate::direction::Direction;
use crate::geometry::Geometry;
use crate::nav::Perturbation;
use crate::raster::{bake, BakeView, Canvas, TextureSet};

/// Index into the catalog owned by the map.
pub type ArtworkId = usize;

/// A cell plus the direction faced from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    pub cell: IVec2,
    pub facing: Direction,
}

impl Placement {
    pub const fn new(cell: IVec2, facing: Direction) -> Self {
        Self { cell, facing }
    }

    pub fn origin(&self) -> Vec3 {
        Vec3::new(self.cell.x as f32, 0.0, self.cell.y as f32)
    }

    /// Maps the local frame (viewer at origin looking down -Z) into the world.
    pub fn transform(&self) -> Affine3A {
        Affine3A::from_rotation_translation(self.facing.rotation(), self.origin())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArtworkKind {
    MovementInSquares,
    Intake,
    Opening,
    Fall,
    Hero,
    Climax,
}

impl ArtworkKind {
    pub const ALL: [ArtworkKind; 6] = [
        ArtworkKind::MovementInSquares,
        ArtworkKind::Intake,
        ArtworkKind::Opening,
        ArtworkKind::Fall,
        ArtworkKind::Hero,
        ArtworkKind::Climax,
    ];

    /// Anchor code in layout strings.
    pub fn code(self) -> char {
        match self {
            ArtworkKind::MovementInSquares => 'A',
            ArtworkKind::Intake => 'B',
            ArtworkKind::Opening => 'C',
            ArtworkKind::Fall => 'D',
            ArtworkKind::Hero => 'E',
            ArtworkKind::Climax => 'F',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    pub fn title(self) -> &'static str {
        match self {
            ArtworkKind::MovementInSquares => "Movement in Squares",
            ArtworkKind::Intake => "Intake",
            ArtworkKind::Opening => "Opening",
            ArtworkKind::Fall => "Fall",
            ArtworkKind::Hero => "Hero",
            ArtworkKind::Climax => "Climax",
        }
    }

    /// Direction the visitor must face on the anchor cell.
    pub fn facing(self) -> Direction {
        match self {
            ArtworkKind::MovementInSquares => Direction::North,
            ArtworkKind::Intake => Direction::South,
            ArtworkKind::Opening => Direction::West,
            ArtworkKind::Fall => Direction::East,
            ArtworkKind::Hero => Direction::North,
            ArtworkKind::Climax => Direction::West,
        }
    }

    /// Where the visitor lands when the pause before the effect ends.
    pub fn teleport(self) -> Placement {
        match self {
            ArtworkKind::MovementInSquares => squares::TELEPORT,
            ArtworkKind::Intake => intake::TELEPORT,
            ArtworkKind::Opening => opening::TELEPORT,
            ArtworkKind::Fall => fall::TELEPORT,
            ArtworkKind::Hero => hero::TELEPORT,
            ArtworkKind::Climax => climax::TELEPORT,
        }
    }

    /// Whether the rest of the gallery is hidden while the effect plays.
    pub fn draws_exclusively(self) -> bool {
        matches!(self, ArtworkKind::MovementInSquares)
    }

    /// Keeps only the parts of `ctx` this kind's live geometry reads, so
    /// equal results mean equal geometry.
    pub fn live_inputs(self, ctx: LiveContext) -> LiveContext {
        match self {
            ArtworkKind::MovementInSquares | ArtworkKind::Fall => LiveContext {
                phase: ctx.phase,
                active: false,
            },
            ArtworkKind::Opening => LiveContext {
                phase: 0,
                active: ctx.active,
            },
            ArtworkKind::Intake | ArtworkKind::Hero | ArtworkKind::Climax => {
                LiveContext::default()
            }
        }
    }
}

/// Per-frame input to live geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LiveContext {
    /// Animation phase accumulator from the navigation state.
    pub phase: u32,
    /// This artwork's effect is the one running.
    pub active: bool,
}

/// One frame of an effect's camera curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveFrame {
    pub camera: Perturbation,
    /// Absolute placement override applied on this frame.
    pub relocate: Option<Placement>,
}

impl CurveFrame {
    fn camera(camera: Perturbation) -> Self {
        Self {
            camera,
            relocate: None,
        }
    }
}

/// Position within an effect, `1..=total` frames elapsed.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Progress {
    elapsed: u32,
    total: u32,
}

impl Progress {
    fn new(elapsed: u32, total: u32) -> Self {
        let total = total.max(1);
        Self {
            elapsed: elapsed.min(total),
            total,
        }
    }

    /// Fraction elapsed, 0 → 1.
    fn elapsed(self) -> f32 {
        self.elapsed as f32 / self.total as f32
    }

    /// Fraction still to run, 1 → 0.
    fn remaining(self) -> f32 {
        (self.total - self.elapsed) as f32 / self.total as f32
    }

    fn is_last(self) -> bool {
        self.elapsed == self.total
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Artwork {
    pub kind: ArtworkKind,
    pub cell: IVec2,
    pub facing: Direction,
    pub teleport: Placement,
}

impl Artwork {
    pub fn new(kind: ArtworkKind, cell: IVec2) -> Self {
        Self {
            kind,
            cell,
            facing: kind.facing(),
            teleport: kind.teleport(),
        }
    }

    pub fn with_facing(mut self, facing: Direction) -> Self {
        self.facing = facing;
        self
    }

    pub fn with_teleport(mut self, teleport: Placement) -> Self {
        self.teleport = teleport;
        self
    }

    /// The wall the flat image hangs on: the anchor cell's `facing` side.
    pub fn placement(&self) -> Placement {
        Placement::new(self.cell, self.facing)
    }

    /// Camera perturbation for frame `elapsed` of `total` (1-based).
    pub fn camera_curve(&self, elapsed: u32, total: u32) -> CurveFrame {
        let progress = Progress::new(elapsed, total);
        match self.kind {
            ArtworkKind::MovementInSquares => squares::camera_curve(progress),
            ArtworkKind::Intake => intake::camera_curve(progress),
            ArtworkKind::Opening => opening::camera_curve(progress),
            ArtworkKind::Fall => fall::camera_curve(progress),
            ArtworkKind::Hero => hero::camera_curve(progress),
            ArtworkKind::Climax => climax::camera_curve(progress),
        }
    }

    /// World-space geometry this artwork adds to the gallery this frame.
    pub fn live_geometry(&self, ctx: LiveContext) -> Geometry {
        match self.kind {
            ArtworkKind::MovementInSquares => squares::live_geometry(self, ctx),
            ArtworkKind::Intake => Geometry::new(),
            ArtworkKind::Opening => opening::live_geometry(self, ctx),
            ArtworkKind::Fall => fall::live_geometry(self, ctx),
            ArtworkKind::Hero => hero::live_geometry(self),
            ArtworkKind::Climax => climax::live_geometry(self),
        }
    }

    /// Fixed virtual camera and local-frame geometry for the flat image.
    pub fn bake_scene(&self) -> (BakeView, Geometry) {
        match self.kind {
            ArtworkKind::MovementInSquares => squares::bake_scene(),
            ArtworkKind::Intake => intake::bake_scene(),
            ArtworkKind::Opening => opening::bake_scene(),
            ArtworkKind::Fall => fall::bake_scene(),
            ArtworkKind::Hero => hero::bake_scene(),
            ArtworkKind::Climax => climax::bake_scene(),
        }
    }

    /// Renders the wall image once. `size` is the side in pixels.
    pub fn bake_flat_image(&self, textures: &TextureSet, size: u32) -> Canvas {
        let (view, geometry) = self.bake_scene();
        bake(&view, &geometry, textures, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_kinds() {
        for kind in ArtworkKind::ALL {
            assert_eq!(ArtworkKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(ArtworkKind::from_code('Z'), None);
    }

    #[test]
    fn placement_transform_faces_the_heading() {
        let placement = Placement::new(IVec2::new(2, 3), Direction::West);
        let ahead = placement.transform().transform_point3(Vec3::NEG_Z);
        assert!((ahead - Vec3::new(1.0, 0.0, 3.0)).length() < 1e-5);
    }

    #[test]
    fn every_curve_starts_away_from_neutral_and_stays_finite() {
        for kind in ArtworkKind::ALL {
            let art = Artwork::new(kind, IVec2::ZERO);
            for elapsed in 1..=50 {
                let frame = art.camera_curve(elapsed, 50);
                let c = frame.camera;
                for value in [c.tilt, c.roll, c.pan, c.fov, c.aspect, c.forward_offset] {
                    assert!(value.is_finite(), "{kind:?} frame {elapsed}");
                }
                assert!(c.fov > 0.0 && c.aspect > 0.0);
            }
        }
    }

    #[test]
    fn only_the_opening_relocates_and_only_on_its_last_frame() {
        for kind in ArtworkKind::ALL {
            let art = Artwork::new(kind, IVec2::ZERO);
            for elapsed in 1..50 {
                assert!(art.camera_curve(elapsed, 50).relocate.is_none());
            }
            let last = art.camera_curve(50, 50).relocate;
            assert_eq!(last.is_some(), kind == ArtworkKind::Opening);
        }
    }

    #[test]
    fn curves_converge_on_a_neutral_view() {
        // Every effect ends with the live view restored, except the forward
        // travel of the opening and fall, which the controller resets.
        for kind in ArtworkKind::ALL {
            let c = Artwork::new(kind, IVec2::ZERO).camera_curve(50, 50).camera;
            assert!(c.tilt.abs() < 1e-6 && c.roll.abs() < 1e-6 && c.pan.abs() < 1e-6);
            assert!((c.fov - Perturbation::NEUTRAL.fov).abs() < 1e-6);
            assert!((c.aspect - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn only_squares_draw_exclusively() {
        let exclusive: Vec<ArtworkKind> = ArtworkKind::ALL
            .into_iter()
            .filter(|k| k.draws_exclusively())
            .collect();
        assert_eq!(exclusive, vec![ArtworkKind::MovementInSquares]);
    }

    #[test]
    fn live_inputs_drop_what_geometry_ignores() {
        let cell = IVec2::new(4, 4);
        let a = LiveContext { phase: 3, active: true };
        let b = LiveContext { phase: 40, active: false };
        for kind in ArtworkKind::ALL {
            let art = Artwork::new(kind, cell);
            for ctx in [a, b, LiveContext::default()] {
                assert_eq!(
                    art.live_geometry(ctx),
                    art.live_geometry(kind.live_inputs(ctx)),
                    "{kind:?}"
                );
            }
        }
        assert_eq!(ArtworkKind::Hero.live_inputs(a), ArtworkKind::Hero.live_inputs(b));
        assert_eq!(ArtworkKind::Opening.live_inputs(a).phase, 0);
        assert_ne!(ArtworkKind::Fall.live_inputs(a), ArtworkKind::Fall.live_inputs(b));
    }
}
