//! Core type definitions for the simulation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 2D position on the board. The origin is the top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Step by `(dx, dy)`, returning `None` if the result leaves a
    /// `width` x `height` board.
    pub fn offset(&self, dx: i32, dy: i32, width: usize, height: usize) -> Option<Self> {
        let x = self.x.checked_add_signed(dx as isize)?;
        let y = self.y.checked_add_signed(dy as isize)?;
        if x < width && y < height {
            Some(Self { x, y })
        } else {
            None
        }
    }

    /// Manhattan distance to another position
    pub fn manhattan_distance(&self, other: &Position) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Orthogonal direction. Neighbor scans always use the order of [`Direction::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    East,
    West,
    South,
    North,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::West,
        Direction::South,
        Direction::North,
    ];

    pub fn to_delta(&self) -> (i32, i32) {
        match self {
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::South => (0, 1),
            Direction::North => (0, -1),
        }
    }
}

/// The closed set of things a cell can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OccupantKind {
    /// Bare seabed
    Substrate,
    /// Algae; spreads onto neighboring substrate
    Producer,
    /// Herbivorous fish; feeds on producers
    Grazer,
    /// Predatory fish; hunts grazers
    Predator,
}

impl OccupantKind {
    pub const ALL: [OccupantKind; 4] = [
        OccupantKind::Substrate,
        OccupantKind::Producer,
        OccupantKind::Grazer,
        OccupantKind::Predator,
    ];

    pub fn glyph(&self) -> &'static str {
        match self {
            OccupantKind::Substrate => " ",
            OccupantKind::Producer => "~",
            OccupantKind::Grazer => "𓆡",
            OccupantKind::Predator => "𓆜",
        }
    }
}

impl fmt::Display for OccupantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OccupantKind::Substrate => "substrate",
            OccupantKind::Producer => "producer",
            OccupantKind::Grazer => "grazer",
            OccupantKind::Predator => "predator",
        };
        f.write_str(name)
    }
}

/// A cell occupant. Carries no identity or state beyond its kind, so two
/// occupants of the same kind are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Occupant {
    kind: OccupantKind,
}

impl Occupant {
    pub fn new(kind: OccupantKind) -> Self {
        Self { kind }
    }

    pub fn substrate() -> Self {
        Self::new(OccupantKind::Substrate)
    }

    pub fn producer() -> Self {
        Self::new(OccupantKind::Producer)
    }

    pub fn grazer() -> Self {
        Self::new(OccupantKind::Grazer)
    }

    pub fn predator() -> Self {
        Self::new(OccupantKind::Predator)
    }

    pub fn kind(&self) -> OccupantKind {
        self.kind
    }

    pub fn glyph(&self) -> &'static str {
        self.kind.glyph()
    }

    pub fn is(&self, kind: OccupantKind) -> bool {
        self.kind == kind
    }
}

impl From<OccupantKind> for Occupant {
    fn from(kind: OccupantKind) -> Self {
        Self::new(kind)
    }
}
