use std::f32::consts::FRAC_PI_2;

/// Camera degrees of freedom an effect may drive. Angles in radians,
/// `forward_offset` in cells along the view axis (negative is forward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Perturbation {
    pub tilt: f32,
    pub roll: f32,
    pub pan: f32,
    /// Vertical field of view.
    pub fov: f32,
    /// Viewport aspect ratio; below 1 squeezes the scene horizontally.
    pub aspect: f32,
    pub forward_offset: f32,
}

impl Perturbation {
    pub const NEUTRAL: Perturbation = Perturbation {
        tilt: 0.0,
        roll: 0.0,
        pan: 0.0,
        fov: FRAC_PI_2,
        aspect: 1.0,
        forward_offset: 0.0,
    };

    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }
}

impl Default for Perturbation {
    fn default() -> Self {
        Self::NEUTRAL
    }
}
