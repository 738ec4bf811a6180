// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Turns a scene into a painted canvas.
//!
//! Painting runs in fixed passes: shapes first, then router-drawn
//! connectors, then the text-like entities that may overlay them, then
//! routed lines, and last the cursor highlight. Lines resolve crossings
//! against the occupancy buffer as they are stamped.

use std::fmt;

use crate::geometry::{Coord, Direction, SegmentKind};
use crate::model::{Entity, EntityId, Scene};
use crate::route::{nearest_frame_pair, Router};

use super::painters::{paint_actor, paint_box, paint_label, paint_note};
use super::{Canvas, CanvasError, CellColor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintOptions {
    pub width: usize,
    pub height: usize,
    pub show_ids: bool,
}

impl Default for PaintOptions {
    fn default() -> Self {
        Self {
            width: 80,
            height: 25,
            show_ids: false,
        }
    }
}

/// Paints the whole scene onto a fresh canvas.
pub fn paint(
    scene: &Scene,
    cursor: Coord,
    options: &PaintOptions,
    router: &dyn Router,
) -> Result<Canvas, RenderError> {
    let mut canvas = Canvas::new(options.width, options.height)?;

    for entity in scene.entities() {
        match entity {
            Entity::Box(shape) => paint_box(&mut canvas, shape, options.show_ids),
            Entity::Actor(actor) => paint_actor(&mut canvas, actor, options.show_ids),
            Entity::Note(_) | Entity::Label(_) | Entity::Connector(_) | Entity::Routed(_) => {}
        }
    }

    for entity in scene.entities() {
        if let Entity::Connector(connector) = entity {
            paint_connector(&mut canvas, connector, scene, router)?;
        }
    }

    // Notes and labels overlay connector lines, so they come after them.
    for entity in scene.entities() {
        match entity {
            Entity::Label(label) => paint_label(&mut canvas, label, options.show_ids),
            Entity::Note(note) => paint_note(&mut canvas, note, options.show_ids),
            Entity::Box(_) | Entity::Actor(_) | Entity::Connector(_) | Entity::Routed(_) => {}
        }
    }

    for entity in scene.entities() {
        if let Entity::Routed(line) = entity {
            paint_routed_line(&mut canvas, line, scene);
        }
    }

    canvas.recolor(cursor, CellColor::Yellow, CellColor::DarkYellow);

    Ok(canvas)
}

fn paint_connector(
    canvas: &mut Canvas,
    connector: &crate::model::Connector,
    scene: &Scene,
    router: &dyn Router,
) -> Result<(), RenderError> {
    let froms = connectable_frame(scene, connector.from)?;
    let tos = connectable_frame(scene, connector.to)?;
    let (start, end) = nearest_frame_pair(&froms, &tos).ok_or(RenderError::NoNearestPair)?;

    let path = router.route(start, end, canvas, scene);
    if path.len() < 2 {
        return Ok(());
    }

    // First and last cells sit on the shape frames and stay untouched; the
    // cell before the last carries the arrowhead.
    let arrow_at = if path.len() >= 3 { path.len() - 2 } else { 1 };
    for i in 1..arrow_at {
        let glyph = direction_glyph(path[i - 1], path[i], path[i + 1])?;
        paint_line_or_cross(canvas, path[i], glyph, connector.id, scene);
    }
    canvas.paint(
        path[arrow_at],
        arrow_glyph(path[arrow_at - 1], path[arrow_at]),
        connector.id,
    );

    Ok(())
}

fn connectable_frame(scene: &Scene, id: EntityId) -> Result<Vec<Coord>, RenderError> {
    let entity = scene.get(id).ok_or(RenderError::MissingEntity { id })?;
    entity
        .frame_coords()
        .ok_or(RenderError::NotConnectable { id })
}

fn paint_routed_line(canvas: &mut Canvas, line: &crate::geometry::RoutedLine, scene: &Scene) {
    for segment in line.segments() {
        let glyph = line_glyph(segment.direction(), segment.kind());
        let (from, to) = (segment.from(), segment.to());

        let step = if from.x < to.x { 1 } else { -1 };
        for i in 0..=(from.x - to.x).abs() {
            let pos = Coord::new(from.x + i * step, from.y);
            paint_line_or_cross(canvas, pos, glyph, line.id(), scene);
        }

        let step = if from.y < to.y { 1 } else { -1 };
        for i in 0..=(from.y - to.y).abs() {
            let pos = Coord::new(from.x, from.y + i * step);
            paint_line_or_cross(canvas, pos, glyph, line.id(), scene);
        }
    }
}

fn line_glyph(direction: Direction, kind: SegmentKind) -> char {
    match kind {
        SegmentKind::Slope => '+',
        SegmentKind::Line => {
            if direction.is_horizontal() {
                '-'
            } else {
                '|'
            }
        }
    }
}

/// Glyph for a connector body cell, decided by the cells before and after
/// it: straight runs keep their bar, bends become a junction.
fn direction_glyph(previous: Coord, point: Coord, next: Coord) -> Result<char, RenderError> {
    if previous.x == point.x {
        return Ok(if point.x == next.x { '|' } else { '+' });
    }
    if previous.y == point.y {
        return Ok(if point.y == next.y { '-' } else { '+' });
    }

    if previous.x < point.x && previous.y < point.y {
        return Ok('\\');
    }
    if previous.x < point.x && previous.y > point.y {
        return Ok('/');
    }
    if previous.x > point.x && previous.y < point.y {
        return Ok('/');
    }
    if previous.x > point.x && previous.y > point.y {
        return Ok('\\');
    }

    Err(RenderError::NoDirection {
        previous,
        point,
        next,
    })
}

fn arrow_glyph(previous: Coord, point: Coord) -> char {
    if previous.x == point.x {
        return if previous.y > point.y { '^' } else { 'v' };
    }
    if previous.y == point.y {
        return if previous.x > point.x { '<' } else { '>' };
    }

    if previous.x < point.x {
        '>'
    } else {
        '<'
    }
}

/// Stamps a line glyph, promoting to `'+'` when it crosses a perpendicular
/// bar painted by another line entity.
fn paint_line_or_cross(canvas: &mut Canvas, pos: Coord, mut ch: char, owner: EntityId, scene: &Scene) {
    if let Some(occupant) = canvas.occupant(pos) {
        let crosses_other_line = occupant != owner
            && scene.get(occupant).is_some_and(Entity::is_line);
        if crosses_other_line {
            if let Some(under) = canvas.glyph(pos) {
                if (under == '-' && ch == '|') || (under == '|' && ch == '-') {
                    ch = '+';
                }
            }
        }
    }

    canvas.paint(pos, ch, owner);
}

#[derive(Debug)]
pub enum RenderError {
    Canvas(CanvasError),
    MissingEntity { id: EntityId },
    NotConnectable { id: EntityId },
    NoNearestPair,
    NoDirection { previous: Coord, point: Coord, next: Coord },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Canvas(err) => write!(f, "canvas error: {err}"),
            Self::MissingEntity { id } => write!(f, "connector endpoint {id} is not in the scene"),
            Self::NotConnectable { id } => write!(f, "entity {id} cannot anchor a connector"),
            Self::NoNearestPair => write!(f, "no frame cells to connect"),
            Self::NoDirection { previous, point, next } => {
                write!(f, "no direction through {previous}, {point}, {next}")
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Canvas(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CanvasError> for RenderError {
    fn from(err: CanvasError) -> Self {
        Self::Canvas(err)
    }
}
