//! Marker floors cycle through the circle frames on a wall-clock pulse.

use std::time::Duration;

use bevy::prelude::*;

use crate::raster::TextureSet;
use crate::render::{BatchKey, GalleryMaterials};
use crate::scene::gallery::MarkerFloor;

pub const MARKER_PERIOD: Duration = Duration::from_millis(300);

#[derive(Resource, Debug)]
pub struct MarkerPulse {
    timer: Timer,
    frame: u8,
}

impl Default for MarkerPulse {
    fn default() -> Self {
        Self::new(MARKER_PERIOD)
    }
}

impl MarkerPulse {
    pub fn new(period: Duration) -> Self {
        Self {
            timer: Timer::new(period, TimerMode::Repeating),
            frame: 0,
        }
    }

    pub fn frame(&self) -> u8 {
        self.frame
    }

    /// Returns whether the frame changed.
    pub fn tick(&mut self, delta: Duration) -> bool {
        self.timer.tick(delta);
        let steps = self.timer.times_finished_this_tick();
        if steps == 0 {
            return false;
        }
        let frames = TextureSet::CIRCLE_FRAMES as u32;
        self.frame = ((self.frame as u32 + steps) % frames) as u8;
        true
    }
}

pub fn marker_plugin(app: &mut App) {
    app.init_resource::<MarkerPulse>()
        .add_systems(Update, animate_markers);
}

fn animate_markers(
    time: Res<Time>,
    palette: Option<Res<GalleryMaterials>>,
    mut pulse: ResMut<MarkerPulse>,
    mut markers: Query<&mut MeshMaterial3d<StandardMaterial>, With<MarkerFloor>>,
) {
    let Some(palette) = palette else {
        return;
    };
    if !pulse.tick(time.delta()) {
        return;
    }
    let material = palette.for_batch(BatchKey::Circles(pulse.frame()));
    for mut handle in &mut markers {
        handle.0 = material.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulse_advances_every_period() {
        let mut pulse = MarkerPulse::default();
        assert!(!pulse.tick(Duration::from_millis(200)));
        assert!(pulse.tick(Duration::from_millis(150)));
        assert_eq!(pulse.frame(), 1);
    }

    #[test]
    fn pulse_wraps_after_four_frames() {
        let mut pulse = MarkerPulse::default();
        for _ in 0..4 {
            pulse.tick(MARKER_PERIOD);
        }
        assert_eq!(pulse.frame(), 0);
        pulse.tick(MARKER_PERIOD * 2);
        assert_eq!(pulse.frame(), 2);
    }
}
