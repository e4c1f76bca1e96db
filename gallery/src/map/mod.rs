//! Gallery map: decodes a grid of tile codes into floors, walls, the start
//! cell and the artwork catalog.

mod layouts;
mod tiles;

use std::path::Path;

use bevy::log::info;
use bevy::math::IVec2;

use crate::art::{Artwork, ArtworkId};
use crate::direction::Direction;
use crate::error::{GalleryError, Result};

pub use layouts::{DEFAULT_HEIGHT, DEFAULT_LAYOUT, DEFAULT_WIDTH};
pub use tiles::{tile_spec, FloorType, TileSpec, WallRule};

/// Set of wall sides on a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct WallMask(u8);

impl WallMask {
    pub const NONE: WallMask = WallMask(0);

    pub fn contains(self, side: Direction) -> bool {
        self.0 & side.wall_bit() != 0
    }

    pub fn insert(&mut self, side: Direction) {
        self.0 |= side.wall_bit();
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn sides(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MapCell {
    pub floor: FloorType,
    pub walls: WallMask,
    pub walkable: bool,
}

impl MapCell {
    /// What every query outside the grid sees.
    pub const VOID: MapCell = MapCell {
        floor: FloorType::None,
        walls: WallMask::NONE,
        walkable: false,
    };
}

/// Decoded gallery. Immutable once built; owns the artwork catalog.
#[derive(Clone, Debug)]
pub struct MapLayout {
    width: usize,
    height: usize,
    cells: Vec<MapCell>,
    start: IVec2,
    start_facing: Direction,
    artworks: Vec<Artwork>,
}

impl MapLayout {
    /// Decodes `width × height` tile codes laid out row by row.
    pub fn decode(width: usize, height: usize, layout: &str) -> Result<Self> {
        let codes: Vec<char> = layout.chars().collect();
        let expected = width * height;
        if codes.len() != expected {
            return Err(GalleryError::LayoutSize {
                expected,
                actual: codes.len(),
            });
        }

        let mut specs = Vec::with_capacity(expected);
        for (i, &code) in codes.iter().enumerate() {
            let spec = tile_spec(code).ok_or(GalleryError::UnknownTile {
                code,
                x: (i % width) as i32,
                y: (i / width) as i32,
            })?;
            specs.push(spec);
        }

        let spec_at = |cell: IVec2| -> &'static TileSpec {
            if cell.x < 0 || cell.y < 0 || cell.x as usize >= width || cell.y as usize >= height {
                &TileSpec::OUTSIDE
            } else {
                specs[cell.y as usize * width + cell.x as usize]
            }
        };

        let mut cells = Vec::with_capacity(expected);
        let mut start: Option<IVec2> = None;
        let mut artworks = Vec::new();

        for (i, spec) in specs.iter().enumerate() {
            let cell = IVec2::new((i % width) as i32, (i / width) as i32);

            let mut walls = WallMask::NONE;
            match spec.walls {
                WallRule::None => {}
                WallRule::Forced(sides) => sides.iter().for_each(|&side| walls.insert(side)),
                WallRule::Infer => {
                    for side in Direction::ALL {
                        if spec_at(cell + side.offset()).casts_walls {
                            walls.insert(side);
                        }
                    }
                }
            }

            if spec.start {
                if let Some(first) = start {
                    return Err(GalleryError::MultipleStarts {
                        first,
                        second: cell,
                    });
                }
                start = Some(cell);
            }

            if let Some(kind) = spec.artwork {
                let reachable = Direction::ALL
                    .iter()
                    .any(|side| spec_at(cell + side.offset()).walkable);
                if !reachable {
                    return Err(GalleryError::UnreachableArtwork {
                        code: spec.code,
                        x: cell.x,
                        y: cell.y,
                    });
                }
                artworks.push(Artwork::new(kind, cell));
            }

            cells.push(MapCell {
                floor: spec.floor,
                walls,
                walkable: spec.walkable,
            });
        }

        let start = start.ok_or(GalleryError::MissingStart)?;
        info!(
            "gallery: decoded {width}x{height} layout, {} artworks, start {start}",
            artworks.len()
        );

        Ok(Self {
            width,
            height,
            cells,
            start,
            start_facing: Direction::North,
            artworks,
        })
    }

    /// Parses one row per line. Short rows are padded with void.
    pub fn from_rows(text: &str) -> Result<Self> {
        let rows: Vec<&str> = text.lines().collect();
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        let mut layout = String::with_capacity(width * rows.len());
        for row in &rows {
            layout.push_str(row);
            layout.extend(std::iter::repeat(' ').take(width - row.chars().count()));
        }
        Self::decode(width, rows.len(), &layout)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| GalleryError::LayoutFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_rows(&text)
    }

    /// The gallery as shipped.
    pub fn default_gallery() -> Result<Self> {
        Self::decode(DEFAULT_WIDTH, DEFAULT_HEIGHT, DEFAULT_LAYOUT)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> IVec2 {
        self.start
    }

    pub fn start_facing(&self) -> Direction {
        self.start_facing
    }

    pub fn contains(&self, cell: IVec2) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as usize) < self.width && (cell.y as usize) < self.height
    }

    /// Cell at `cell`; [`MapCell::VOID`] off the grid.
    pub fn cell(&self, cell: IVec2) -> MapCell {
        if !self.contains(cell) {
            return MapCell::VOID;
        }
        self.cells[cell.y as usize * self.width + cell.x as usize]
    }

    pub fn floor_at(&self, cell: IVec2) -> FloorType {
        self.cell(cell).floor
    }

    pub fn wall_at(&self, cell: IVec2, side: Direction) -> bool {
        self.cell(cell).walls.contains(side)
    }

    pub fn is_walkable(&self, cell: IVec2) -> bool {
        self.cell(cell).walkable
    }

    /// All cells with their coordinates, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (IVec2, MapCell)> + '_ {
        self.cells.iter().enumerate().map(|(i, cell)| {
            (
                IVec2::new((i % self.width) as i32, (i / self.width) as i32),
                *cell,
            )
        })
    }

    pub fn artworks(&self) -> &[Artwork] {
        &self.artworks
    }

    pub fn artwork(&self, id: ArtworkId) -> Option<&Artwork> {
        self.artworks.get(id)
    }
}
