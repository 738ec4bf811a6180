// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The glyph grid and the compositor that fills it.
//!
//! Rendering is a pure function per frame: entities in, a grid of glyph
//! cells (plus a parallel occupancy buffer for hit-testing) out.

use std::fmt;

use crate::geometry::Coord;
use crate::model::EntityId;

pub mod compositor;
pub mod painters;
mod text;

pub use compositor::{paint, PaintOptions, RenderError};
pub use text::canvas_to_string_trimmed;

/// The small console palette the painters use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellColor {
    Black,
    #[default]
    Gray,
    White,
    Green,
    DarkGreen,
    Yellow,
    DarkYellow,
}

/// One grid cell: a glyph plus foreground/background colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: CellColor,
    pub bg: CellColor,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: CellColor::Gray,
            bg: CellColor::Black,
        }
    }
}

/// A fixed-size glyph grid with a parallel occupancy buffer mapping each
/// cell to the entity that painted it.
///
/// Stamping clips silently: an editor may drag geometry past the grid edge,
/// and the off-grid cells are simply not drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    occupants: Vec<Option<EntityId>>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Result<Self, CanvasError> {
        let len = width
            .checked_mul(height)
            .ok_or(CanvasError::AreaOverflow { width, height })?;

        Ok(Self {
            width,
            height,
            cells: vec![Cell::default(); len],
            occupants: vec![None; len],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Coord) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    fn index(&self, pos: Coord) -> Option<usize> {
        self.in_bounds(pos)
            .then(|| (pos.y as usize) * self.width + pos.x as usize)
    }

    pub fn cell(&self, pos: Coord) -> Option<&Cell> {
        self.index(pos).map(|idx| &self.cells[idx])
    }

    pub fn glyph(&self, pos: Coord) -> Option<char> {
        self.cell(pos).map(|cell| cell.ch)
    }

    /// The entity that painted this cell, used for hit-testing and crossing
    /// resolution.
    pub fn occupant(&self, pos: Coord) -> Option<EntityId> {
        self.index(pos).and_then(|idx| self.occupants[idx])
    }

    /// Stamps a glyph and records the owning entity. Colors are untouched.
    pub fn paint(&mut self, pos: Coord, ch: char, owner: EntityId) {
        if let Some(idx) = self.index(pos) {
            self.cells[idx].ch = ch;
            self.occupants[idx] = Some(owner);
        }
    }

    pub fn paint_colored(
        &mut self,
        pos: Coord,
        ch: char,
        owner: EntityId,
        fg: CellColor,
        bg: CellColor,
    ) {
        if let Some(idx) = self.index(pos) {
            self.cells[idx] = Cell { ch, fg, bg };
            self.occupants[idx] = Some(owner);
        }
    }

    /// Stamps `text` left-to-right starting at `pos`, clipping at the edges.
    pub fn paint_str(
        &mut self,
        pos: Coord,
        text: &str,
        owner: EntityId,
        fg: CellColor,
        bg: CellColor,
    ) {
        for (offset, ch) in text.chars().enumerate() {
            let cell_pos = Coord::new(pos.x + offset as i32, pos.y);
            self.paint_colored(cell_pos, ch, owner, fg, bg);
        }
    }

    /// Stamps `text` without claiming occupancy; used for the selectable-id
    /// overlay, which must not steal cells from the entity underneath.
    pub fn overlay_str(&mut self, pos: Coord, text: &str, fg: CellColor, bg: CellColor) {
        for (offset, ch) in text.chars().enumerate() {
            if let Some(idx) = self.index(Coord::new(pos.x + offset as i32, pos.y)) {
                self.cells[idx] = Cell { ch, fg, bg };
            }
        }
    }

    /// Recolors a single cell, leaving glyph and occupancy alone.
    pub fn recolor(&mut self, pos: Coord, fg: CellColor, bg: CellColor) {
        if let Some(idx) = self.index(pos) {
            self.cells[idx].fg = fg;
            self.cells[idx].bg = bg;
        }
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::fmt::Write as _;

        for y in 0..self.height {
            for x in 0..self.width {
                f.write_char(self.cells[y * self.width + x].ch)?;
            }
            if y + 1 < self.height {
                f.write_char('\n')?;
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    AreaOverflow { width: usize, height: usize },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AreaOverflow { width, height } => {
                write!(f, "canvas area overflow: {width}*{height}")
            }
        }
    }
}

impl std::error::Error for CanvasError {}
