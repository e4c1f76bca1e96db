//! The visitor's eye: one perspective camera placed from navigation state.

mod rig;

pub use rig::{apply_camera_system, camera_plugin, camera_transform, perspective, GalleryCamera};
