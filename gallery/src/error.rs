//! Load-time errors. The per-frame path never fails.

use std::path::PathBuf;

use bevy::math::IVec2;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("layout has no start tile 'S'")]
    MissingStart,

    #[error("layout has more than one start tile: {first} and {second}")]
    MultipleStarts { first: IVec2, second: IVec2 },

    #[error("layout is {actual} cells but {expected} were expected")]
    LayoutSize { expected: usize, actual: usize },

    #[error("unknown tile code {code:?} at ({x}, {y})")]
    UnknownTile { code: char, x: i32, y: i32 },

    #[error("artwork {code:?} at ({x}, {y}) has no walkable neighbour")]
    UnreachableArtwork { code: char, x: i32, y: i32 },

    #[error("failed to read layout file {}: {source}", path.display())]
    LayoutFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, GalleryError>;
