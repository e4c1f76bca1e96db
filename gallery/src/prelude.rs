//! Minimal prelude for embedding the gallery.

pub use crate::art::{Artwork, ArtworkId, ArtworkKind, Placement};
pub use crate::config::GalleryConfig;
pub use crate::direction::Direction;
pub use crate::error::{GalleryError, Result};
pub use crate::map::{FloorType, MapLayout, DEFAULT_LAYOUT};
pub use crate::nav::{FrameTiming, Intent, NavEvent, NavPhase, NavigationController, Perturbation};
pub use crate::scene::{GalleryCue, IntentRequested};
pub use crate::sdk::GalleryBuilder;
