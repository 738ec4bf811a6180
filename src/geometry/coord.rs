// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::ops::Sub;

use serde::{Deserialize, Serialize};

/// A position on the character grid.
///
/// Components may go negative while geometry is dragged past the grid edge;
/// the compositor clips when stamping.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this coordinate translated by `delta`.
    pub fn moved(self, delta: Vector) -> Self {
        Self {
            x: self.x + delta.dx,
            y: self.y + delta.dy,
        }
    }
}

impl Sub for Coord {
    type Output = Vector;

    fn sub(self, rhs: Self) -> Vector {
        Vector {
            dx: self.x - rhs.x,
            dy: self.y - rhs.y,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// A displacement between two grid coordinates.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct Vector {
    pub dx: i32,
    pub dy: i32,
}

impl Vector {
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    pub fn is_zero(self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

/// One of the four cardinal directions on the grid. North is decreasing y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// The unit displacement for one step in this direction.
    pub fn delta(self) -> Vector {
        match self {
            Self::North => Vector::new(0, -1),
            Self::South => Vector::new(0, 1),
            Self::East => Vector::new(1, 0),
            Self::West => Vector::new(-1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::East | Self::West)
    }

    /// Derives the direction from `from` to `to`.
    ///
    /// Returns `None` when the pair is coincident or diagonal; segments are
    /// never diagonal except transiently during drag classification, and a
    /// coincident pair carries no direction of its own.
    pub fn between(from: Coord, to: Coord) -> Option<Self> {
        match (to.x - from.x, to.y - from.y) {
            (0, 0) => None,
            (dx, 0) if dx > 0 => Some(Self::East),
            (_, 0) => Some(Self::West),
            (0, dy) if dy > 0 => Some(Self::South),
            (0, _) => Some(Self::North),
            _ => None,
        }
    }
}

/// The direction a new stub continues in after a bend is carved out of a
/// segment running in `prior`, given the diagonal drag displacement.
///
/// The stub always takes the axis perpendicular to the segment it left.
pub fn direction_after_bend(prior: Direction, delta: Vector) -> Direction {
    if prior.is_horizontal() {
        if delta.dy > 0 {
            Direction::South
        } else {
            Direction::North
        }
    } else if delta.dx > 0 {
        Direction::East
    } else {
        Direction::West
    }
}
