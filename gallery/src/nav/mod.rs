//! Frame-stepped navigation state machine.
//!
//! The controller owns all navigation state. Intents are accepted only while
//! idle; everything else happens inside [`NavigationController::advance_frame`],
//! called once per fixed tick. Actions always run to completion.

mod perturbation;
mod timing;

use std::f32::consts::FRAC_PI_2;

use bevy::log::debug;
use bevy::math::IVec2;

use crate::art::{Artwork, ArtworkId, Placement};
use crate::direction::Direction;

pub use perturbation::Perturbation;
pub use timing::{
    FrameTiming, DEFAULT_EFFECT_SECS, DEFAULT_FRAME_RATE, DEFAULT_PAUSE_SECS, DEFAULT_STEP_SECS,
    DEFAULT_TURN_SECS, MAX_ACTION_FRAMES,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Intent {
    TurnLeft,
    TurnRight,
    StepForward,
    StepBackward,
}

/// Mutually exclusive phases, listed in the order they are tested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavPhase {
    Pausing,
    TurningRight,
    TurningLeft,
    SteppingForward,
    SteppingBackward,
    PlayingEffect,
    Idle,
}

/// Something noteworthy that happened during a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEvent {
    ActionCompleted,
    ArtworkTriggered(ArtworkId),
    EffectStarted(ArtworkId),
    EffectFinished(ArtworkId),
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavigationState {
    pub cell: IVec2,
    pub facing: Direction,
    /// ±90° while turning, otherwise 0.
    pub turn_target: f32,
    /// Yaw added to `facing` during a turn.
    pub angle_offset: f32,
    turn_frames_elapsed: u32,
    /// Positive stepping forward, negative stepping backward.
    pub step_frames_remaining: i32,
    pub pause_frames_remaining: u32,
    pub effect_frames_remaining: u32,
    pub active_artwork: Option<ArtworkId>,
    pub action_in_progress: bool,
    /// Frames elapsed in the running effect; frozen otherwise.
    pub animation_phase: u32,
    pub camera: Perturbation,
}

impl NavigationState {
    pub fn new(cell: IVec2, facing: Direction) -> Self {
        Self {
            cell,
            facing,
            turn_target: 0.0,
            angle_offset: 0.0,
            turn_frames_elapsed: 0,
            step_frames_remaining: 0,
            pause_frames_remaining: 0,
            effect_frames_remaining: 0,
            active_artwork: None,
            action_in_progress: false,
            animation_phase: 0,
            camera: Perturbation::NEUTRAL,
        }
    }

    pub fn phase(&self) -> NavPhase {
        if self.pause_frames_remaining > 0 {
            NavPhase::Pausing
        } else if self.turn_target > 0.0 {
            NavPhase::TurningRight
        } else if self.turn_target < 0.0 {
            NavPhase::TurningLeft
        } else if self.step_frames_remaining > 0 {
            NavPhase::SteppingForward
        } else if self.step_frames_remaining < 0 {
            NavPhase::SteppingBackward
        } else if self.effect_frames_remaining > 0 && self.active_artwork.is_some() {
            NavPhase::PlayingEffect
        } else {
            NavPhase::Idle
        }
    }

    pub fn placement(&self) -> Placement {
        Placement::new(self.cell, self.facing)
    }
}

/// What the renderer needs after a tick.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameReport {
    pub phase: NavPhase,
    pub cell: IVec2,
    pub facing: Direction,
    pub angle_offset: f32,
    pub camera: Perturbation,
    pub active_artwork: Option<ArtworkId>,
    /// Draw only the active artwork's geometry this frame.
    pub exclusive: bool,
    pub events: Vec<NavEvent>,
}

#[derive(Clone, Debug)]
pub struct NavigationController {
    timing: FrameTiming,
    state: NavigationState,
}

impl NavigationController {
    pub fn new(timing: FrameTiming, cell: IVec2, facing: Direction) -> Self {
        Self {
            timing,
            state: NavigationState::new(cell, facing),
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn timing(&self) -> FrameTiming {
        self.timing
    }

    pub fn is_idle(&self) -> bool {
        !self.state.action_in_progress && self.state.pause_frames_remaining == 0
    }

    /// Starts the action for `intent` if idle. Returns whether it was taken.
    pub fn submit(&mut self, intent: Intent) -> bool {
        if !self.is_idle() {
            debug!("gallery: ignoring {intent:?} during {:?}", self.state.phase());
            return false;
        }
        let state = &mut self.state;
        match intent {
            Intent::TurnRight => state.turn_target = FRAC_PI_2,
            Intent::TurnLeft => state.turn_target = -FRAC_PI_2,
            Intent::StepForward => state.step_frames_remaining = self.timing.step_frames(),
            Intent::StepBackward => state.step_frames_remaining = -self.timing.step_frames(),
        }
        state.turn_frames_elapsed = 0;
        state.action_in_progress = true;
        debug!("gallery: accepted {intent:?} at {} facing {}", state.cell, state.facing);
        true
    }

    /// Advances every counter by one frame.
    pub fn advance_frame(&mut self, catalog: &[Artwork]) -> FrameReport {
        let mut events = Vec::new();

        if self.state.pause_frames_remaining > 0 {
            self.state.pause_frames_remaining -= 1;
            if self.state.pause_frames_remaining > 0 {
                return self.report(catalog, events);
            }
            self.begin_effect(catalog, &mut events);
        }

        if self.state.action_in_progress {
            match self.state.phase() {
                NavPhase::TurningRight | NavPhase::TurningLeft => self.advance_turn(),
                NavPhase::SteppingForward | NavPhase::SteppingBackward => self.advance_step(),
                NavPhase::PlayingEffect => self.advance_effect(catalog, &mut events),
                NavPhase::Pausing | NavPhase::Idle => self.state.action_in_progress = false,
            }

            if !self.state.action_in_progress {
                events.push(NavEvent::ActionCompleted);
                self.check_trigger(catalog, &mut events);
            }
        }

        self.report(catalog, events)
    }

    fn begin_effect(&mut self, catalog: &[Artwork], events: &mut Vec<NavEvent>) {
        let state = &mut self.state;
        let Some(id) = state.active_artwork else {
            return;
        };
        if let Some(artwork) = catalog.get(id) {
            state.cell = artwork.teleport.cell;
            state.facing = artwork.teleport.facing;
        }
        state.effect_frames_remaining = self.timing.effect;
        state.action_in_progress = true;
        state.animation_phase = 0;
        events.push(NavEvent::EffectStarted(id));
        debug!("gallery: effect {id} started at {}", state.cell);
    }

    fn advance_turn(&mut self) {
        let state = &mut self.state;
        state.turn_frames_elapsed += 1;
        let progress = state.turn_frames_elapsed as f32 / self.timing.turn as f32;
        state.angle_offset = state.turn_target * progress;

        if state.turn_frames_elapsed >= self.timing.turn {
            state.facing = if state.turn_target > 0.0 {
                state.facing.clockwise()
            } else {
                state.facing.counter_clockwise()
            };
            state.angle_offset = 0.0;
            state.turn_target = 0.0;
            state.turn_frames_elapsed = 0;
            state.action_in_progress = false;
        }
    }

    fn advance_step(&mut self) {
        let state = &mut self.state;
        let total = self.timing.step_frames();
        let direction = state.step_frames_remaining.signum();
        state.step_frames_remaining -= direction;

        let elapsed = total - state.step_frames_remaining.abs();
        state.camera.forward_offset = -(direction * elapsed) as f32 / total as f32;

        if state.step_frames_remaining == 0 {
            state.cell += state.facing.offset() * direction;
            state.camera.forward_offset = 0.0;
            state.action_in_progress = false;
        }
    }

    fn advance_effect(&mut self, catalog: &[Artwork], events: &mut Vec<NavEvent>) {
        let state = &mut self.state;
        let Some(id) = state.active_artwork else {
            state.action_in_progress = false;
            return;
        };

        state.effect_frames_remaining -= 1;
        state.animation_phase += 1;
        let total = self.timing.effect;
        let elapsed = total - state.effect_frames_remaining;

        if let Some(artwork) = catalog.get(id) {
            let frame = artwork.camera_curve(elapsed, total);
            state.camera = frame.camera;
            if let Some(target) = frame.relocate {
                debug!("gallery: effect {id} relocates to {} facing {}", target.cell, target.facing);
                state.cell = target.cell;
                state.facing = target.facing;
            }
        }

        if state.effect_frames_remaining == 0 {
            state.camera = Perturbation::NEUTRAL;
            state.active_artwork = None;
            state.action_in_progress = false;
            events.push(NavEvent::EffectFinished(id));
        }
    }

    fn check_trigger(&mut self, catalog: &[Artwork], events: &mut Vec<NavEvent>) {
        let state = &mut self.state;
        let hit = catalog
            .iter()
            .position(|art| art.cell == state.cell && art.facing == state.facing);
        if let Some(id) = hit {
            state.pause_frames_remaining = self.timing.pause;
            state.active_artwork = Some(id);
            events.push(NavEvent::ArtworkTriggered(id));
        }
    }

    fn report(&self, catalog: &[Artwork], events: Vec<NavEvent>) -> FrameReport {
        let state = &self.state;
        FrameReport {
            phase: state.phase(),
            cell: state.cell,
            facing: state.facing,
            angle_offset: state.angle_offset,
            camera: state.camera,
            active_artwork: state.active_artwork,
            exclusive: self.exclusive(catalog),
            events,
        }
    }

    /// True while an artwork that hides the rest of the gallery is playing.
    pub fn exclusive(&self, catalog: &[Artwork]) -> bool {
        self.state.pause_frames_remaining == 0
            && self
                .state
                .active_artwork
                .and_then(|id| catalog.get(id))
                .is_some_and(|art| art.kind.draws_exclusively())
    }
}
