/// Longest count any action may take; steps are tracked as signed frames.
pub const MAX_ACTION_FRAMES: u32 = i32::MAX as u32;

/// Frame counts for each timed action. Every count is at least one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameTiming {
    pub step: u32,
    pub turn: u32,
    pub pause: u32,
    pub effect: u32,
}

pub const DEFAULT_FRAME_RATE: f32 = 25.0;
pub const DEFAULT_STEP_SECS: f32 = 0.5;
pub const DEFAULT_TURN_SECS: f32 = 0.5;
pub const DEFAULT_PAUSE_SECS: f32 = 0.5;
pub const DEFAULT_EFFECT_SECS: f32 = 2.0;

impl FrameTiming {
    pub fn from_secs(frame_rate: f32, step: f32, turn: f32, pause: f32, effect: f32) -> Self {
        let frames = |secs: f32| ((secs * frame_rate) as u32).clamp(1, MAX_ACTION_FRAMES);
        Self {
            step: frames(step),
            turn: frames(turn),
            pause: frames(pause),
            effect: frames(effect),
        }
    }
}

impl FrameTiming {
    /// Step length as a signed count, saturating at `i32::MAX`.
    pub fn step_frames(&self) -> i32 {
        i32::try_from(self.step).unwrap_or(i32::MAX)
    }
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::from_secs(
            DEFAULT_FRAME_RATE,
            DEFAULT_STEP_SECS,
            DEFAULT_TURN_SECS,
            DEFAULT_PAUSE_SECS,
            DEFAULT_EFFECT_SECS,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_counts_at_25_fps() {
        let timing = FrameTiming::default();
        assert_eq!(timing.step, 12);
        assert_eq!(timing.turn, 12);
        assert_eq!(timing.pause, 12);
        assert_eq!(timing.effect, 50);
    }

    #[test]
    fn counts_never_reach_zero() {
        let timing = FrameTiming::from_secs(25.0, 0.0, 0.01, -1.0, 0.0);
        assert_eq!(timing, FrameTiming { step: 1, turn: 1, pause: 1, effect: 1 });
    }

    #[test]
    fn huge_durations_saturate() {
        let timing = FrameTiming::from_secs(25.0, 1e8, f32::INFINITY, 1.0, 1.0);
        assert_eq!(timing.step, MAX_ACTION_FRAMES);
        assert_eq!(timing.turn, MAX_ACTION_FRAMES);
        assert_eq!(timing.step_frames(), i32::MAX);

        let hand_built = FrameTiming { step: u32::MAX, ..timing };
        assert_eq!(hand_built.step_frames(), i32::MAX);
    }
}
