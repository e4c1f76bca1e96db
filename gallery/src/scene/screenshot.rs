//! Capture the primary window once the scene has settled, then exit.

use std::path::PathBuf;

use bevy::prelude::*;
use bevy::render::view::screenshot::{save_to_disk, Screenshot};

use crate::config::GalleryConfig;

#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub enum ScreenshotMode {
    /// Frames left before capturing.
    Waiting { path: PathBuf, frames: u32 },
    /// Capture requested; exit on the next frame.
    Captured,
}

impl ScreenshotMode {
    pub fn new(path: PathBuf, delay_frames: u32) -> Self {
        Self::Waiting {
            path,
            frames: delay_frames,
        }
    }

    pub fn from_config(config: &GalleryConfig) -> Option<Self> {
        config
            .screenshot
            .clone()
            .map(|path| Self::new(path, config.screenshot_delay))
    }

    /// Advances one frame, returning the path when it is time to capture.
    pub fn step(&mut self) -> Option<PathBuf> {
        match self {
            Self::Waiting { frames, .. } if *frames > 0 => {
                *frames -= 1;
                None
            }
            Self::Waiting { path, .. } => {
                let path = std::mem::take(path);
                *self = Self::Captured;
                Some(path)
            }
            Self::Captured => None,
        }
    }
}

pub fn screenshot_plugin(app: &mut App) {
    app.add_systems(Update, capture_screenshot);
}

fn capture_screenshot(
    mut commands: Commands,
    mode: Option<ResMut<ScreenshotMode>>,
    mut exit: EventWriter<AppExit>,
) {
    let Some(mut mode) = mode else {
        return;
    };
    if *mode == ScreenshotMode::Captured {
        exit.send(AppExit::Success);
        return;
    }
    if let Some(path) = mode.step() {
        info!("gallery: saving screenshot to {}", path.display());
        commands
            .spawn(Screenshot::primary_window())
            .observe(save_to_disk(path));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_after_delay() {
        let mut mode = ScreenshotMode::new(PathBuf::from("shot.png"), 2);
        assert_eq!(mode.step(), None);
        assert_eq!(mode.step(), None);
        assert_eq!(mode.step(), Some(PathBuf::from("shot.png")));
        assert_eq!(mode, ScreenshotMode::Captured);
        assert_eq!(mode.step(), None);
    }

    #[test]
    fn disabled_without_path() {
        let config = GalleryConfig::default();
        assert!(config.screenshot.is_none());
        assert!(ScreenshotMode::from_config(&config).is_none());
    }
}
