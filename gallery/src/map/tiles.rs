//! Tile code table for layout strings.

use crate::art::ArtworkKind;
use crate::direction::Direction;

/// Floor drawn in a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FloorType {
    #[default]
    None,
    Plain,
    Wave,
    Marker,
}

/// How a tile gets its walls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WallRule {
    /// No walls of its own.
    None,
    /// A wall on every side whose neighbour is void or off the grid.
    Infer,
    /// Exactly these sides, regardless of neighbours.
    Forced(&'static [Direction]),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileSpec {
    pub code: char,
    pub floor: FloorType,
    pub walls: WallRule,
    pub walkable: bool,
    /// Void tiles that make walkable neighbours grow a wall toward them.
    pub casts_walls: bool,
    pub start: bool,
    pub artwork: Option<ArtworkKind>,
}

impl TileSpec {
    const fn void(code: char, casts_walls: bool) -> Self {
        Self {
            code,
            floor: FloorType::None,
            walls: WallRule::None,
            walkable: false,
            casts_walls,
            start: false,
            artwork: None,
        }
    }

    const fn walkable(code: char, floor: FloorType, walls: WallRule) -> Self {
        Self {
            code,
            floor,
            walls,
            walkable: true,
            casts_walls: false,
            start: false,
            artwork: None,
        }
    }

    const fn anchor(code: char, kind: ArtworkKind) -> Self {
        Self {
            code,
            floor: FloorType::Marker,
            walls: WallRule::None,
            walkable: false,
            casts_walls: false,
            start: false,
            artwork: Some(kind),
        }
    }

    /// Tile used for cells outside the grid.
    pub const OUTSIDE: TileSpec = TileSpec::void(' ', true);
}

const START_WALLS: &[Direction] = &[Direction::North, Direction::East, Direction::South];
const WEST_WALL: &[Direction] = &[Direction::West];

const TILES: &[TileSpec] = &[
    TileSpec::void(' ', true),
    TileSpec::void('-', true),
    TileSpec::void('.', false),
    TileSpec::walkable('#', FloorType::Plain, WallRule::Infer),
    TileSpec::walkable('m', FloorType::Wave, WallRule::Infer),
    TileSpec::walkable('w', FloorType::Plain, WallRule::Forced(WEST_WALL)),
    TileSpec {
        start: true,
        ..TileSpec::walkable('S', FloorType::Plain, WallRule::Forced(START_WALLS))
    },
    TileSpec::anchor('A', ArtworkKind::MovementInSquares),
    TileSpec::anchor('B', ArtworkKind::Intake),
    TileSpec::anchor('C', ArtworkKind::Opening),
    TileSpec::anchor('D', ArtworkKind::Fall),
    TileSpec::anchor('E', ArtworkKind::Hero),
    TileSpec::anchor('F', ArtworkKind::Climax),
];

pub fn tile_spec(code: char) -> Option<&'static TileSpec> {
    TILES.iter().find(|spec| spec.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_artwork_kind_has_an_anchor_code() {
        for kind in ArtworkKind::ALL {
            let spec = tile_spec(kind.code()).expect("anchor code");
            assert_eq!(spec.artwork, Some(kind));
            assert_eq!(spec.floor, FloorType::Marker);
        }
    }

    #[test]
    fn dash_and_space_both_cast_walls() {
        assert!(tile_spec(' ').unwrap().casts_walls);
        assert!(tile_spec('-').unwrap().casts_walls);
        assert!(!tile_spec('.').unwrap().casts_walls);
        assert!(tile_spec('?').is_none());
    }
}
