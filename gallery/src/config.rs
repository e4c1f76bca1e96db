//! Env parsing and defaults.

use std::path::PathBuf;
use std::str::FromStr;

use bevy::prelude::Resource;

use crate::nav::{
    FrameTiming, DEFAULT_EFFECT_SECS, DEFAULT_FRAME_RATE, DEFAULT_PAUSE_SECS, DEFAULT_STEP_SECS,
    DEFAULT_TURN_SECS,
};

pub const DEFAULT_UNIT_PX: u32 = 800;
pub const DEFAULT_BAKE_PX: u32 = 512;
pub const DEFAULT_TEXTURE_PX: u32 = 512;
pub const DEFAULT_SCREENSHOT_DELAY: u32 = 30;
/// Fastest fixed tick accepted from the environment.
pub const MAX_FRAME_RATE: f32 = 1_000.0;

/// Runtime settings, normally read from `GALLERY_*` environment variables.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct GalleryConfig {
    pub frame_rate: f32,
    /// Window side in pixels; the viewport is square.
    pub unit_px: u32,
    pub bake_px: u32,
    pub texture_px: u32,
    pub step_secs: f32,
    pub turn_secs: f32,
    pub pause_secs: f32,
    pub effect_secs: f32,
    /// Custom layout file, one row per line.
    pub layout: Option<PathBuf>,
    pub screenshot: Option<PathBuf>,
    pub screenshot_delay: u32,
    /// Values that failed to parse, reported once logging is up.
    pub warnings: Vec<String>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
            unit_px: DEFAULT_UNIT_PX,
            bake_px: DEFAULT_BAKE_PX,
            texture_px: DEFAULT_TEXTURE_PX,
            step_secs: DEFAULT_STEP_SECS,
            turn_secs: DEFAULT_TURN_SECS,
            pause_secs: DEFAULT_PAUSE_SECS,
            effect_secs: DEFAULT_EFFECT_SECS,
            layout: None,
            screenshot: None,
            screenshot_delay: DEFAULT_SCREENSHOT_DELAY,
            warnings: Vec::new(),
        }
    }
}

impl GalleryConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        let mut warnings = Vec::new();

        config.frame_rate = positive(&mut warnings, "GALLERY_FRAME_RATE", config.frame_rate);
        if config.frame_rate > MAX_FRAME_RATE {
            warnings.push(format!(
                "GALLERY_FRAME_RATE above {MAX_FRAME_RATE}, using {MAX_FRAME_RATE}"
            ));
            config.frame_rate = MAX_FRAME_RATE;
        }
        config.unit_px = positive(&mut warnings, "GALLERY_UNIT_PX", config.unit_px);
        config.bake_px = positive(&mut warnings, "GALLERY_BAKE_PX", config.bake_px);
        config.texture_px = positive(&mut warnings, "GALLERY_TEXTURE_PX", config.texture_px);
        config.step_secs = positive(&mut warnings, "GALLERY_STEP_SECS", config.step_secs);
        config.turn_secs = positive(&mut warnings, "GALLERY_TURN_SECS", config.turn_secs);
        config.pause_secs = positive(&mut warnings, "GALLERY_PAUSE_SECS", config.pause_secs);
        config.effect_secs = positive(&mut warnings, "GALLERY_EFFECT_SECS", config.effect_secs);
        config.screenshot_delay =
            parsed(&mut warnings, "GALLERY_SCREENSHOT_DELAY", config.screenshot_delay);
        config.layout = path("GALLERY_LAYOUT");
        config.screenshot = path("GALLERY_SCREENSHOT");

        config.warnings = warnings;
        config
    }

    /// Fixed tick rate, kept within what `Time<Fixed>` accepts even when
    /// the config was built by hand.
    pub fn fixed_hz(&self) -> f64 {
        if self.frame_rate.is_finite() && self.frame_rate > 0.0 {
            self.frame_rate.min(MAX_FRAME_RATE) as f64
        } else {
            DEFAULT_FRAME_RATE as f64
        }
    }

    pub fn timing(&self) -> FrameTiming {
        FrameTiming::from_secs(
            self.frame_rate,
            self.step_secs,
            self.turn_secs,
            self.pause_secs,
            self.effect_secs,
        )
    }
}

fn path(key: &str) -> Option<PathBuf> {
    std::env::var(key)
        .ok()
        .filter(|raw| !raw.trim().is_empty())
        .map(PathBuf::from)
}

fn parsed<T>(warnings: &mut Vec<String>, key: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    let Ok(raw) = std::env::var(key) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            warnings.push(format!("invalid {key} {raw:?}, using {default}"));
            default
        }
    }
}

fn positive<T>(warnings: &mut Vec<String>, key: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display + PartialOrd + Default + Into<f64>,
{
    let value = parsed(warnings, key, default);
    if value > T::default() && value.into().is_finite() {
        value
    } else {
        warnings.push(format!("{key} must be positive and finite, using {default}"));
        default
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn lock_env() -> std::sync::MutexGuard<'static, ()> {
        ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    struct EnvGuard {
        snapshot: Vec<(&'static str, Option<String>)>,
    }

    impl EnvGuard {
        fn capture(keys: &[&'static str]) -> Self {
            let snapshot = keys
                .iter()
                .map(|&key| (key, std::env::var(key).ok()))
                .collect();
            for key in keys {
                std::env::remove_var(key);
            }
            Self { snapshot }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, value) in &self.snapshot {
                match value {
                    Some(val) => std::env::set_var(key, val),
                    None => std::env::remove_var(key),
                }
            }
        }
    }

    const ENV_KEYS: [&str; 11] = [
        "GALLERY_FRAME_RATE",
        "GALLERY_UNIT_PX",
        "GALLERY_BAKE_PX",
        "GALLERY_TEXTURE_PX",
        "GALLERY_STEP_SECS",
        "GALLERY_TURN_SECS",
        "GALLERY_PAUSE_SECS",
        "GALLERY_EFFECT_SECS",
        "GALLERY_LAYOUT",
        "GALLERY_SCREENSHOT",
        "GALLERY_SCREENSHOT_DELAY",
    ];

    #[test]
    fn defaults_when_nothing_is_set() {
        let _lock = lock_env();
        let _guard = EnvGuard::capture(&ENV_KEYS);

        let config = GalleryConfig::from_env();

        assert_eq!(config, GalleryConfig::default());
        assert_eq!(config.timing(), FrameTiming::default());
    }

    #[test]
    fn env_values_override_defaults() {
        let _lock = lock_env();
        let _guard = EnvGuard::capture(&ENV_KEYS);

        std::env::set_var("GALLERY_FRAME_RATE", "50");
        std::env::set_var("GALLERY_EFFECT_SECS", " 1.0 ");
        std::env::set_var("GALLERY_LAYOUT", "rooms/small.txt");
        std::env::set_var("GALLERY_SCREENSHOT_DELAY", "5");

        let config = GalleryConfig::from_env();

        assert_eq!(config.frame_rate, 50.0);
        assert_eq!(config.timing().effect, 50);
        assert_eq!(config.timing().step, 25);
        assert_eq!(config.layout, Some(PathBuf::from("rooms/small.txt")));
        assert_eq!(config.screenshot_delay, 5);
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn invalid_values_fall_back_with_a_warning() {
        let _lock = lock_env();
        let _guard = EnvGuard::capture(&ENV_KEYS);

        std::env::set_var("GALLERY_UNIT_PX", "huge");
        std::env::set_var("GALLERY_STEP_SECS", "-1");
        std::env::set_var("GALLERY_SCREENSHOT", "  ");

        let config = GalleryConfig::from_env();

        assert_eq!(config.unit_px, DEFAULT_UNIT_PX);
        assert_eq!(config.step_secs, DEFAULT_STEP_SECS);
        assert_eq!(config.screenshot, None);
        assert_eq!(config.warnings.len(), 2);
        assert!(config.warnings[0].contains("GALLERY_UNIT_PX"));
    }

    #[test]
    fn infinite_and_oversized_values_are_rejected() {
        let _lock = lock_env();
        let _guard = EnvGuard::capture(&ENV_KEYS);

        std::env::set_var("GALLERY_FRAME_RATE", "inf");
        std::env::set_var("GALLERY_TURN_SECS", "NaN");
        std::env::set_var("GALLERY_STEP_SECS", "1e8");

        let config = GalleryConfig::from_env();

        assert_eq!(config.frame_rate, DEFAULT_FRAME_RATE);
        assert_eq!(config.turn_secs, DEFAULT_TURN_SECS);
        assert_eq!(config.warnings.len(), 2);
        assert_eq!(config.timing().step_frames(), i32::MAX);

        std::env::set_var("GALLERY_FRAME_RATE", "1e30");
        let config = GalleryConfig::from_env();
        assert_eq!(config.frame_rate, MAX_FRAME_RATE);
        assert_eq!(config.fixed_hz(), MAX_FRAME_RATE as f64);
    }

    #[test]
    fn fixed_hz_guards_hand_built_configs() {
        let config = GalleryConfig {
            frame_rate: f32::INFINITY,
            ..GalleryConfig::default()
        };
        assert_eq!(config.fixed_hz(), DEFAULT_FRAME_RATE as f64);
    }
}
