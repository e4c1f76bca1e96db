//! Op-art gallery walk-through: a grid of rooms explored one cell and one
//! quarter turn at a time, where standing before an artwork plays a
//! scripted camera effect over procedurally built geometry.
//!
//! Library root: the pure core (map, navigation, artworks, geometry,
//! rasterizer) and the Bevy wiring around it.

pub mod art;
pub mod direction;
pub mod error;
pub mod geometry;
pub mod map;
pub mod nav;
pub mod raster;

pub mod camera;
pub mod config;
pub mod input;
pub mod render;
mod scene;
mod ui;

pub mod prelude;
pub mod sdk;

pub use error::{GalleryError, Result};
pub use scene::{
    Gallery, GalleryCue, GalleryStatic, IntentRequested, LiveGeometry, MarkerFloor, MarkerPulse,
    Navigation, ScreenshotMode,
};
pub use ui::{DiagnosticsState, WelcomePlaque};
