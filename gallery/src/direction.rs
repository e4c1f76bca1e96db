//! Cardinal facing of the visitor and of wall sides.

use std::f32::consts::{FRAC_PI_2, PI};
use std::fmt;

use bevy::math::{IVec2, Quat};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn clockwise(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    pub fn counter_clockwise(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::East => Direction::North,
            Direction::South => Direction::East,
            Direction::West => Direction::South,
        }
    }

    /// Heading in radians, clockwise from north.
    pub fn heading(self) -> f32 {
        match self {
            Direction::North => 0.0,
            Direction::East => FRAC_PI_2,
            Direction::South => PI,
            Direction::West => 3.0 * FRAC_PI_2,
        }
    }

    /// Unit cell offset. North is -z, east is +x.
    pub fn offset(self) -> IVec2 {
        match self {
            Direction::North => IVec2::new(0, -1),
            Direction::East => IVec2::new(1, 0),
            Direction::South => IVec2::new(0, 1),
            Direction::West => IVec2::new(-1, 0),
        }
    }

    /// Rotation taking the local -Z axis onto this heading.
    pub fn rotation(self) -> Quat {
        Quat::from_rotation_y(-self.heading())
    }

    /// Bit used in a cell's wall mask.
    pub(crate) fn wall_bit(self) -> u8 {
        match self {
            Direction::North => 0b0001,
            Direction::East => 0b0010,
            Direction::South => 0b0100,
            Direction::West => 0b1000,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::East => "East",
            Direction::South => "South",
            Direction::West => "West",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
