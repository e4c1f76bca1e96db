//! ECS side of the gallery: world resources, spawned geometry and the
//! systems that keep them in step with navigation.

pub(crate) mod gallery;
mod live;
mod markers;
mod navigation;
mod screenshot;

use bevy::prelude::*;

use crate::map::MapLayout;

pub use gallery::{
    flat_image_geometry, marker_geometry, setup_scene, shell_geometry, GalleryStatic,
    MarkerFloor,
};
pub use live::{live_plugin, update_live_geometry, LiveGeometry};
pub use markers::{marker_plugin, MarkerPulse, MARKER_PERIOD};
pub use navigation::{
    advance_navigation, apply_intents, navigation_plugin, GalleryCue, IntentRequested,
    Navigation,
};
pub use screenshot::{screenshot_plugin, ScreenshotMode};

/// The decoded layout the running app walks through.
#[derive(Resource, Debug, Clone)]
pub struct Gallery {
    pub layout: MapLayout,
}

impl Gallery {
    pub fn new(layout: MapLayout) -> Self {
        Self { layout }
    }
}
