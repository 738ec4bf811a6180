// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use crate::geometry::{Coord, RoutedLine};

use super::ids::EntityId;

/// Frame glyph style for boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoxStyle {
    Lines,
    Stars,
    Dots,
    Eqls,
}

/// Which part of a box frame a cell belongs to; drives glyph choice for the
/// `Lines` style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxFramePart {
    NwCorner,
    NeCorner,
    SwCorner,
    SeCorner,
    Horizontal,
    Vertical,
}

/// A rectangular box with optional multi-line text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxEntity {
    pub id: EntityId,
    pub origin: Coord,
    pub width: i32,
    pub height: i32,
    pub text: String,
    pub style: BoxStyle,
}

impl BoxEntity {
    /// The frame cells with their part classification, row by row.
    pub fn frame_parts(&self) -> Vec<(Coord, BoxFramePart)> {
        let mut parts = Vec::new();
        let (x0, y0) = (self.origin.x, self.origin.y);
        let (x1, y1) = (x0 + self.width - 1, y0 + self.height - 1);

        for y in y0..=y1 {
            for x in x0..=x1 {
                let part = match (x, y) {
                    (x, y) if x == x0 && y == y0 => BoxFramePart::NwCorner,
                    (x, y) if x == x1 && y == y0 => BoxFramePart::NeCorner,
                    (x, y) if x == x0 && y == y1 => BoxFramePart::SwCorner,
                    (x, y) if x == x1 && y == y1 => BoxFramePart::SeCorner,
                    (_, y) if y == y0 || y == y1 => BoxFramePart::Horizontal,
                    (x, _) if x == x0 || x == x1 => BoxFramePart::Vertical,
                    _ => continue,
                };
                parts.push((Coord::new(x, y), part));
            }
        }

        parts
    }

    /// The frame cells alone, used as candidate connection points.
    pub fn frame_coords(&self) -> Vec<Coord> {
        self.frame_parts().into_iter().map(|(pos, _)| pos).collect()
    }
}

/// The stick-figure actor glyph, stamped row by row; the actor's name
/// follows on the next row.
pub const ACTOR_GLYPH: [&str; 5] = [",-.", "`-'", "/|\\", " |", "/ \\"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: EntityId,
    pub origin: Coord,
    pub name: String,
}

impl Actor {
    /// Frame of the glyph's bounding rectangle, used as connection points.
    pub fn frame_coords(&self) -> Vec<Coord> {
        let proxy = BoxEntity {
            id: self.id,
            origin: self.origin,
            width: 3,
            height: ACTOR_GLYPH.len() as i32,
            text: String::new(),
            style: BoxStyle::Lines,
        };
        proxy.frame_coords()
    }
}

/// A note: a dog-eared rectangle whose free text overlays connector lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: EntityId,
    pub origin: Coord,
    pub width: i32,
    pub height: i32,
    pub text: String,
}

impl Note {
    pub fn frame_coords(&self) -> Vec<Coord> {
        let proxy = BoxEntity {
            id: self.id,
            origin: self.origin,
            width: self.width,
            height: self.height,
            text: String::new(),
            style: BoxStyle::Lines,
        };
        proxy.frame_coords()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelDirection {
    LeftToRight,
    TopDown,
}

/// Free-floating text, stamped verbatim over whatever is underneath.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub id: EntityId,
    pub origin: Coord,
    pub text: String,
    pub direction: LabelDirection,
}

/// A simple connector between two shapes, drawn by the external router.
///
/// Endpoints are weak id references resolved through the scene at paint
/// time; referential integrity is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connector {
    pub id: EntityId,
    pub from: EntityId,
    pub to: EntityId,
}

/// Every diagram entity kind the compositor knows about.
///
/// A closed enum keeps "which painter am I missing" a compile-time question:
/// the compositor matches exhaustively over this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Entity {
    Box(BoxEntity),
    Actor(Actor),
    Note(Note),
    Label(Label),
    Connector(Connector),
    Routed(RoutedLine),
}

impl Entity {
    pub fn id(&self) -> EntityId {
        match self {
            Self::Box(entity) => entity.id,
            Self::Actor(entity) => entity.id,
            Self::Note(entity) => entity.id,
            Self::Label(entity) => entity.id,
            Self::Connector(entity) => entity.id,
            Self::Routed(line) => line.id(),
        }
    }

    /// Outline cells for connectable shapes; `None` for entities connectors
    /// cannot anchor to.
    pub fn frame_coords(&self) -> Option<Vec<Coord>> {
        match self {
            Self::Box(entity) => Some(entity.frame_coords()),
            Self::Actor(entity) => Some(entity.frame_coords()),
            Self::Note(entity) => Some(entity.frame_coords()),
            Self::Label(_) | Self::Connector(_) | Self::Routed(_) => None,
        }
    }

    /// Line-kind entities participate in crossing resolution.
    pub fn is_line(&self) -> bool {
        matches!(self, Self::Connector(_) | Self::Routed(_))
    }
}
